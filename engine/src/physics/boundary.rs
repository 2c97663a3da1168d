//! Boundary resolution: keep entities inside the playfield.
//!
//! Ground and wall contacts are independent per-axis corrections; an
//! entity hitting a corner gets both applied in the same tick, nothing
//! fancier.

use crate::world::Playfield;

use super::entity::Entity;
use super::PhysicsParams;

/// Clamp every live entity to the playfield, reflecting velocity with
/// energy loss at the ground and side walls.
///
/// Ground: bottom edge is clamped to the floor line, `vy` flips and keeps
/// only `ground_bounce` of its magnitude, `vx` is damped by
/// `ground_friction`. Walls: the offending edge is clamped and `vx` flips
/// keeping `wall_bounce` of its magnitude.
pub fn resolve_bounds(entities: &mut [Entity], field: &Playfield, params: &PhysicsParams) {
    let floor_y = field.floor_y();

    for e in entities.iter_mut() {
        if e.destroyed {
            continue;
        }

        if e.pos.y + e.size.y > floor_y {
            e.pos.y = floor_y - e.size.y;
            e.vel.y = -e.vel.y * params.ground_bounce;
            e.vel.x *= params.ground_friction;
        }

        if e.pos.x < 0.0 {
            e.pos.x = 0.0;
            e.vel.x = -e.vel.x * params.wall_bounce;
        }
        if e.pos.x + e.size.x > field.width {
            e.pos.x = field.width - e.size.x;
            e.vel.x = -e.vel.x * params.wall_bounce;
        }
    }
}
