//! Game Module
//!
//! Contains game-specific systems that build on top of the engine:
//! configuration, level layout, the round state machine, and the 2D
//! scene/HUD geometry builders consumed by the renderer.

pub mod config;
pub mod level;
pub mod scene;
pub mod session;
pub mod types;
pub mod ui;

pub use config::{ConfigError, GameConfig};
pub use level::build_level;
pub use scene::build_scene;
pub use session::{GamePhase, GameSession};
pub use types::{Mesh2, Vertex2};
pub use ui::{draw_text, get_char_bitmap, Hud};
