//! Physics core: integration, boundary resolution, collision response,
//! and slingshot launch math.
//!
//! All quantities are in playfield units with velocities per simulation
//! tick; the simulation is a fixed-step explicit-Euler loop with arcade
//! (deliberately non-physical) collision response.

pub mod boundary;
pub mod collision;
pub mod entity;
pub mod integrator;
pub mod launch;

pub use boundary::resolve_bounds;
pub use collision::{resolve_collisions, DestroyEvent};
pub use entity::{Entity, EntityKind};
pub use integrator::integrate;
pub use launch::{aim_from_drag, launch_velocity, trajectory_preview, Aim, LaunchParams};

use serde::{Deserialize, Serialize};

/// Tuning constants for the per-tick physics update.
///
/// `Default` matches the reference gameplay feel; all values are
/// serializable so a config file can override them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Downward acceleration added to `vy` each tick (units/tick²).
    pub gravity: f32,
    /// Uniform velocity damping applied every tick (< 1).
    pub friction: f32,
    /// Fraction of vertical speed kept (sign-flipped) on ground contact.
    pub ground_bounce: f32,
    /// Horizontal damping applied on ground contact.
    pub ground_friction: f32,
    /// Fraction of horizontal speed kept (sign-flipped) on wall contact.
    pub wall_bounce: f32,
    /// Impacts faster than this destroy obstacles and targets.
    pub destroy_speed: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.98,
            ground_bounce: 0.3,
            ground_friction: 0.8,
            wall_bounce: 0.5,
            destroy_speed: 5.0,
        }
    }
}
