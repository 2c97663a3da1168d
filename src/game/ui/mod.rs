//! UI Module
//!
//! On-screen text and the heads-up display.

pub mod hud;
pub mod text;

pub use hud::Hud;
pub use text::{draw_text, get_char_bitmap, text_width};
