//! Pointer State Tracker
//!
//! Tracks the pointer position in playfield coordinates and whether a
//! press-drag-release gesture is in flight. Mouse and touch input both
//! collapse to this one shape, so the session layer never needs to care
//! which device produced the gesture.

use glam::Vec2;

/// Pointer state with drag tracking.
///
/// The caller feeds in positions already converted to playfield
/// coordinates and signals press/release transitions.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Last known pointer position in playfield coordinates.
    position: Vec2,
    /// Whether a press is currently held.
    dragging: bool,
}

impl PointerState {
    /// Create a pointer state with no position history and no drag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the pointer position.
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Begin a drag at the current pointer position, returning it.
    ///
    /// Calling this while a drag is already active restarts the drag.
    pub fn press(&mut self) -> Vec2 {
        self.dragging = true;
        self.position
    }

    /// End the drag. Returns whether one was active, so a release that
    /// arrives without a matching press (cursor re-entering the window,
    /// stray touch end) can be dropped.
    pub fn release(&mut self) -> bool {
        std::mem::take(&mut self.dragging)
    }

    /// Current pointer position in playfield coordinates.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether a press is currently held.
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Reset all state to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
