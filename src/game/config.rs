//! Game Configuration
//!
//! Centralized tuning for the whole game, loadable from a JSON file so
//! the feel can be adjusted without recompiling. `Default` returns the
//! classic values; a missing config file is not an error.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::physics::{LaunchParams, PhysicsParams};
use crate::world::Playfield;

// ============================================================================
// CONFIG
// ============================================================================

/// Central configuration for physics, launch feel, field dimensions,
/// and round pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub physics: PhysicsParams,
    pub launch: LaunchParams,
    pub field: Playfield,
    /// Where the slingshot sits, also the projectile spawn point.
    pub slingshot: Vec2,
    /// Left edge of the target structure and the y of its base row.
    pub structure_origin: Vec2,
    /// Speed below which a grounded projectile counts as settled.
    pub settle_speed: f32,
    /// Ticks to wait after the projectile settles before resolving the
    /// round (one second at 60 ticks per second).
    pub settle_delay_ticks: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            launch: LaunchParams::default(),
            field: Playfield::default(),
            slingshot: Vec2::new(100.0, 300.0),
            structure_origin: Vec2::new(600.0, 350.0),
            settle_speed: 0.5,
            settle_delay_ticks: 60,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file, falling back to defaults when the
    /// file does not exist. A file that exists but fails to parse is a
    /// hard error so a typo never silently reverts the tuning.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors that can occur when loading or saving a config file.
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON serialization/deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "config io error: {}", e),
            ConfigError::JsonError(e) => write!(f, "config json error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
