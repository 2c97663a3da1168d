//! Level Layout
//!
//! Builds the initial entity set for a round: the projectile resting on
//! the slingshot and a small block-and-pig structure near the right edge
//! of the field.

use glam::Vec2;

use crate::physics::{Entity, EntityKind};

use super::config::GameConfig;

// Entity colors, RGBA.
const PROJECTILE_COLOR: [f32; 4] = [1.0, 0.267, 0.267, 1.0]; // #ff4444
const BLOCK_COLOR: [f32; 4] = [0.545, 0.271, 0.075, 1.0]; // #8B4513
const TARGET_COLOR: [f32; 4] = [0.565, 0.933, 0.565, 1.0]; // #90EE90

/// Spawn the full entity set for a fresh round.
///
/// The projectile sits at the slingshot, unlaunched so gravity leaves it
/// in place. The structure is two rows of blocks with one target perched
/// on top and one tucked inside the base row.
pub fn build_level(config: &GameConfig) -> Vec<Entity> {
    let mut entities = Vec::new();
    let sx = config.structure_origin.x;
    let sy = config.structure_origin.y;

    let mut bird = Entity::new(
        "bird",
        config.slingshot,
        Vec2::new(20.0, 20.0),
        EntityKind::Projectile,
        PROJECTILE_COLOR,
    );
    bird.launched = false;
    entities.push(bird);

    // Base row: four blocks shoulder to shoulder.
    for i in 0..4 {
        entities.push(Entity::new(
            format!("ground-{}", i),
            Vec2::new(sx + i as f32 * 30.0, sy),
            Vec2::new(25.0, 40.0),
            EntityKind::Obstacle,
            BLOCK_COLOR,
        ));
    }

    // Top row: three blocks, offset half a step inward.
    for i in 0..3 {
        entities.push(Entity::new(
            format!("top-{}", i),
            Vec2::new(sx + 10.0 + i as f32 * 30.0, sy - 40.0),
            Vec2::new(25.0, 40.0),
            EntityKind::Obstacle,
            BLOCK_COLOR,
        ));
    }

    entities.push(Entity::new(
        "pig1",
        Vec2::new(sx + 50.0, sy - 60.0),
        Vec2::new(25.0, 25.0),
        EntityKind::Target,
        TARGET_COLOR,
    ));
    entities.push(Entity::new(
        "pig2",
        Vec2::new(sx + 20.0, sy - 20.0),
        Vec2::new(25.0, 25.0),
        EntityKind::Target,
        TARGET_COLOR,
    ));

    entities
}
