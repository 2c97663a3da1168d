//! Pairwise collision resolution with arcade impulse response.
//!
//! The response is intentionally asymmetric: each entity resolves its own
//! penetration and impulse against the others while their state stays
//! put, and only destruction flags propagate immediately within a pass.
//! Symmetric Newtonian separation would change the observed gameplay, so
//! this exact shape is load-bearing and pinned by tests.

use super::entity::{Entity, EntityKind};
use super::PhysicsParams;

/// Emitted when a high-speed impact destroys an obstacle or target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestroyEvent {
    /// Id of the destroyed entity.
    pub id: String,
    pub kind: EntityKind,
    /// Score awarded for the destruction.
    pub points: u32,
}

/// Run one collision pass over all live entities.
///
/// For every entity, against every other live entity it overlaps:
/// - compute the center-to-center delta; a zero distance (fully
///   coincident centers) skips the impulse math entirely;
/// - push the entity (self only) along the contact normal by half the
///   width-based overlap;
/// - if the relative velocity along the normal is positive (the normal
///   points from the other toward self), subtract half of it as an
///   impulse from the entity (self only);
/// - if the entity's pre-pass speed exceeds the destruction threshold and
///   the other side is destructible, mark the other destroyed and emit a
///   scoring event.
///
/// All positions and velocities are read from a snapshot taken at the
/// start of the pass, so an entity's corrections never change what a
/// later entity resolves against. Destroyed flags are the one exception
/// and are read and written live.
pub fn resolve_collisions(entities: &mut [Entity], params: &PhysicsParams) -> Vec<DestroyEvent> {
    let mut events = Vec::new();
    let snapshot: Vec<Entity> = entities.to_vec();

    for i in 0..entities.len() {
        if entities[i].destroyed {
            continue;
        }

        let snap = &snapshot[i];
        let mut pos = snap.pos;
        let mut vel = snap.vel;

        for j in 0..entities.len() {
            if j == i || entities[j].destroyed {
                continue;
            }
            let other = &snapshot[j];
            if !snap.overlaps(other) {
                continue;
            }
            let other_center = other.center();
            let other_width = other.size.x;
            let other_vel = other.vel;
            let other_kind = other.kind;

            let delta = snap.center() - other_center;
            let distance = delta.length();
            if distance <= 0.0 {
                // Coincident centers: no usable normal, skip the pair.
                continue;
            }
            let normal = delta / distance;

            let overlap = (snap.size.x + other_width) * 0.5 - delta.x.abs();
            if overlap > 0.0 {
                pos += normal * (overlap * 0.5);
            }

            let rel_normal_vel = (snap.vel - other_vel).dot(normal);
            if rel_normal_vel > 0.0 {
                vel -= normal * (rel_normal_vel * 0.5);
            }

            if snap.speed() > params.destroy_speed && other_kind.destructible() {
                entities[j].destroyed = true;
                events.push(DestroyEvent {
                    id: entities[j].id.clone(),
                    kind: other_kind,
                    points: other_kind.score_value(),
                });
            }
        }

        entities[i].pos = pos;
        entities[i].vel = vel;
    }

    events
}
