//! Playfield: the fixed logical surface the simulation runs on.
//!
//! All physics happens in playfield coordinates (800×400 by default,
//! y growing downward, a solid ground band along the bottom). The window
//! may be displayed at any size; input is translated back through the
//! displayed-vs-logical ratio.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Logical playfield dimensions and ground line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Playfield {
    /// Logical width in playfield units.
    pub width: f32,
    /// Logical height in playfield units.
    pub height: f32,
    /// Thickness of the solid ground band along the bottom edge.
    pub ground_height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            ground_height: 20.0,
        }
    }
}

impl Playfield {
    /// Y coordinate of the walkable ground surface. Entities rest with
    /// their bottom edge on this line.
    #[inline]
    pub fn floor_y(&self) -> f32 {
        self.height - self.ground_height
    }

    /// Translate a window-space point to playfield coordinates using the
    /// displayed-vs-logical size ratio.
    pub fn from_window(&self, window_pos: Vec2, window_size: Vec2) -> Vec2 {
        Vec2::new(
            window_pos.x * (self.width / window_size.x.max(1.0)),
            window_pos.y * (self.height / window_size.y.max(1.0)),
        )
    }

    /// Convert a playfield point to normalized device coordinates
    /// (x right, y up, both in -1..1).
    #[inline]
    pub fn to_ndc(&self, p: Vec2) -> [f32; 2] {
        [
            (p.x / self.width) * 2.0 - 1.0,
            1.0 - (p.y / self.height) * 2.0,
        ]
    }
}
