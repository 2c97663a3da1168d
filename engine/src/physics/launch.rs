//! Drag-to-launch aiming and trajectory preview.
//!
//! Dragging away from the anchor charges the shot: the launch direction
//! points from the drag position back toward where the drag started, and
//! the drag length (clamped) sets the power. All functions here are pure
//! so the session layer and the preview renderer share one source of
//! truth for the launch math.

use glam::Vec2;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tunables
// ============================================================================

/// Launch tuning. Loaded from config, defaults match the classic feel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LaunchParams {
    /// Drag length giving full power, longer drags clamp to this.
    pub max_drag: f32,
    /// Launch speed at full power, in field units per tick.
    pub launch_speed: f32,
    /// A press must land within this distance of the projectile's
    /// top-left corner to start an aim.
    pub capture_radius: f32,
}

impl Default for LaunchParams {
    fn default() -> Self {
        Self {
            max_drag: 100.0,
            launch_speed: 15.0,
            capture_radius: 50.0,
        }
    }
}

// ============================================================================
// Aim
// ============================================================================

/// A charged shot: normalized power in [0, 1] and launch angle in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aim {
    pub power: f32,
    pub angle: f32,
}

/// Derive the aim from the drag start point and the current pointer
/// position. The shot fires back along the drag, so pulling down-left
/// launches up-right.
pub fn aim_from_drag(aim_start: Vec2, current: Vec2, params: &LaunchParams) -> Aim {
    let d = aim_start - current;
    let power = d.length().min(params.max_drag) / params.max_drag;
    let angle = d.y.atan2(d.x);
    Aim { power, angle }
}

/// Initial velocity for a charged shot.
pub fn launch_velocity(aim: Aim, params: &LaunchParams) -> Vec2 {
    Vec2::new(aim.angle.cos(), aim.angle.sin()) * (aim.power * params.launch_speed)
}

/// Sample the ballistic arc a shot would follow from `anchor`, for the
/// aiming overlay. Points are taken at t = 0, 2, .., 58 ticks under
/// constant gravity (drag is ignored, the preview is a hint rather than
/// an exact prediction) and the arc is truncated at the first sample
/// below the bottom of the field.
pub fn trajectory_preview(
    anchor: Vec2,
    aim: Aim,
    params: &LaunchParams,
    gravity: f32,
    field_height: f32,
) -> Vec<Vec2> {
    let v0 = launch_velocity(aim, params);
    let mut points = Vec::new();
    let mut t = 0.0f32;
    while t < 60.0 {
        let p = anchor + v0 * t + Vec2::new(0.0, 0.5 * gravity * t * t);
        if p.y > field_height {
            break;
        }
        points.push(p);
        t += 2.0;
    }
    points
}
