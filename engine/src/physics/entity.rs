//! Physical entities simulated on the playfield.
//!
//! Every object in a round (the launchable projectile, the fort's blocks,
//! and the targets hiding inside) is one `Entity`: an axis-aligned
//! rectangle with a velocity, mutated in place each simulation tick.

use glam::Vec2;

/// Category of a simulated entity. Determines gravity gating, destruction
/// eligibility, and score value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// The single launchable entity ("bird"). Gravity applies only after
    /// launch.
    Projectile,
    /// Structural block; awards partial score when destroyed.
    Obstacle,
    /// Destruction of every target wins the round.
    Target,
}

impl EntityKind {
    /// Score awarded when an entity of this kind is destroyed.
    pub fn score_value(self) -> u32 {
        match self {
            EntityKind::Target => 100,
            EntityKind::Obstacle => 50,
            EntityKind::Projectile => 0,
        }
    }

    /// Whether a high-speed impact can destroy this kind.
    pub fn destructible(self) -> bool {
        matches!(self, EntityKind::Obstacle | EntityKind::Target)
    }
}

/// A physical entity: axis-aligned rectangle with position (top-left
/// corner), size, and velocity, all in playfield units. Velocities are per
/// simulation tick.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Stable identifier, unique within a round.
    pub id: String,
    /// Top-left corner in playfield coordinates (y grows downward).
    pub pos: Vec2,
    /// Width and height of the bounding rectangle.
    pub size: Vec2,
    /// Velocity in playfield units per tick.
    pub vel: Vec2,
    pub kind: EntityKind,
    /// Fill color used by the scene pass (sRGB, 0..1).
    pub color: [f32; 4],
    /// Set once by the collision resolver; never cleared. Destroyed
    /// entities stay in storage but are skipped everywhere.
    pub destroyed: bool,
    /// Projectile only: gates gravity until the slingshot releases it.
    pub launched: bool,
}

impl Entity {
    /// Create a resting entity at `pos` with the given footprint.
    pub fn new(
        id: impl Into<String>,
        pos: Vec2,
        size: Vec2,
        kind: EntityKind,
        color: [f32; 4],
    ) -> Self {
        Self {
            id: id.into(),
            pos,
            size,
            vel: Vec2::ZERO,
            kind,
            color,
            destroyed: false,
            launched: false,
        }
    }

    /// Center of the bounding rectangle.
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Current speed (Euclidean norm of the velocity).
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// AABB overlap test against another entity.
    #[inline]
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && self.pos.x + self.size.x > other.pos.x
            && self.pos.y < other.pos.y + other.size.y
            && self.pos.y + self.size.y > other.pos.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_values() {
        assert_eq!(EntityKind::Target.score_value(), 100);
        assert_eq!(EntityKind::Obstacle.score_value(), 50);
        assert_eq!(EntityKind::Projectile.score_value(), 0);
    }

    #[test]
    fn test_destructible() {
        assert!(EntityKind::Target.destructible());
        assert!(EntityKind::Obstacle.destructible());
        assert!(!EntityKind::Projectile.destructible());
    }

    #[test]
    fn test_center() {
        let e = Entity::new(
            "b",
            Vec2::new(10.0, 20.0),
            Vec2::new(20.0, 40.0),
            EntityKind::Obstacle,
            [1.0; 4],
        );
        assert_eq!(e.center(), Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_overlap_detection() {
        let a = Entity::new(
            "a",
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            EntityKind::Obstacle,
            [1.0; 4],
        );
        let mut b = a.clone();
        b.id = "b".to_string();
        b.pos = Vec2::new(5.0, 5.0);
        assert!(a.overlaps(&b));

        b.pos = Vec2::new(10.0, 0.0);
        // Touching edges do not count as overlap.
        assert!(!a.overlaps(&b));

        b.pos = Vec2::new(30.0, 30.0);
        assert!(!a.overlaps(&b));
    }
}
