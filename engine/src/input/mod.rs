//! Input Module
//!
//! Platform-agnostic pointer tracking for drag-to-launch aiming. The
//! module is decoupled from any specific windowing system (like winit)
//! so the session logic can be driven from tests as easily as from a
//! real event loop.

pub mod pointer;

pub use pointer::PointerState;
