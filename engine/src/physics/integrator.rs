//! Per-tick integration: gravity, explicit-Euler position update, and
//! uniform velocity damping.
//!
//! Deliberately simple: the arcade feel depends on these exact update
//! rules and their order, so no higher-order integration scheme is used.

use super::entity::{Entity, EntityKind};
use super::PhysicsParams;

/// Advance every live entity by one tick.
///
/// For each non-destroyed entity, in order:
/// 1. gravity is added to `vy`, except for a projectile still sitting in
///    the sling (`launched == false`);
/// 2. position moves by the (new) velocity;
/// 3. both velocity components are damped by `friction`.
///
/// The damping runs unconditionally, including for resting objects, so
/// idle velocities decay asymptotically toward zero without ever reaching
/// it. Destroyed entities are left untouched, bit for bit.
pub fn integrate(entities: &mut [Entity], params: &PhysicsParams) {
    for e in entities.iter_mut() {
        if e.destroyed {
            continue;
        }

        if e.kind != EntityKind::Projectile || e.launched {
            e.vel.y += params.gravity;
        }

        e.pos += e.vel;

        e.vel *= params.friction;
    }
}
