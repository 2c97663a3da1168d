//! Scene Generation
//!
//! Rebuilds the full scene mesh from the session every frame: backdrop,
//! slingshot, aiming preview, then every live entity. Pure function of
//! the session, all output already in normalized device coordinates.

use glam::Vec2;

use crate::physics::EntityKind;

use super::session::{GamePhase, GameSession};
use super::types::Mesh2;

// Scene palette, RGBA.
const SKY_COLOR: [f32; 4] = [0.529, 0.808, 0.922, 1.0]; // #87CEEB
const GROUND_COLOR: [f32; 4] = [0.565, 0.933, 0.565, 1.0]; // #90EE90
const SLINGSHOT_COLOR: [f32; 4] = [0.545, 0.271, 0.075, 1.0]; // #8B4513
const TRAJECTORY_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0]; // #ffff00
const PLANK_COLOR: [f32; 4] = [0.396, 0.263, 0.129, 1.0]; // #654321
const FACE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

const CIRCLE_SEGMENTS: u32 = 24;

/// Build the scene mesh for one frame.
pub fn build_scene(session: &GameSession) -> Mesh2 {
    let mut mesh = Mesh2::new();
    let field = &session.config().field;
    let nd = |p: Vec2| -> Vec2 {
        let [x, y] = field.to_ndc(p);
        Vec2::new(x, y)
    };
    // Pixel extents expressed in NDC, per axis.
    let px = Vec2::new(2.0 / field.width, 2.0 / field.height);

    // Backdrop.
    mesh.push_rect(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), SKY_COLOR);
    mesh.push_rect(
        nd(Vec2::new(0.0, field.floor_y())),
        nd(Vec2::new(field.width, field.height)),
        GROUND_COLOR,
    );

    // Slingshot: two posts flanking the anchor.
    let anchor = session.config().slingshot;
    for dx in [-10.0, 10.0] {
        mesh.push_line(
            nd(anchor + Vec2::new(dx, 20.0)),
            nd(anchor + Vec2::new(dx, -40.0)),
            px * 4.0,
            SLINGSHOT_COLOR,
        );
    }

    // Aiming preview, dashed.
    if session.phase() == GamePhase::Aiming && !session.trajectory().is_empty() {
        let points: Vec<Vec2> = session.trajectory().iter().map(|&p| nd(p)).collect();
        mesh.push_dashed(&points, 5.0 * px.x, px, TRAJECTORY_COLOR);
    }

    // Entities.
    for entity in session.entities() {
        if entity.destroyed {
            continue;
        }
        match entity.kind {
            EntityKind::Obstacle => {
                mesh.push_rect(nd(entity.pos), nd(entity.pos + entity.size), entity.color);
                draw_planks(&mut mesh, entity.pos, entity.size, px, &nd);
            }
            EntityKind::Projectile => {
                let radius = entity.size.x / 2.0;
                mesh.push_circle(
                    nd(entity.center()),
                    Vec2::new(radius, radius) * px,
                    CIRCLE_SEGMENTS,
                    entity.color,
                );
                // Angry face: two eyes and a frown.
                face_rect(&mut mesh, entity.pos, 5.0, 5.0, 3.0, 3.0, &nd);
                face_rect(&mut mesh, entity.pos, 12.0, 5.0, 3.0, 3.0, &nd);
                face_rect(&mut mesh, entity.pos, 7.0, 12.0, 6.0, 2.0, &nd);
            }
            EntityKind::Target => {
                let radius = entity.size.x / 2.0;
                mesh.push_circle(
                    nd(entity.center()),
                    Vec2::new(radius, radius) * px,
                    CIRCLE_SEGMENTS,
                    entity.color,
                );
                face_rect(&mut mesh, entity.pos, 8.0, 8.0, 2.0, 2.0, &nd);
                face_rect(&mut mesh, entity.pos, 15.0, 8.0, 2.0, 2.0, &nd);
                face_rect(&mut mesh, entity.pos, 10.0, 15.0, 5.0, 2.0, &nd);
            }
        }
    }

    mesh
}

/// Wood texture on a block: outline plus two horizontal plank seams.
fn draw_planks(
    mesh: &mut Mesh2,
    pos: Vec2,
    size: Vec2,
    px: Vec2,
    nd: &impl Fn(Vec2) -> Vec2,
) {
    let half = px * 0.5;
    let corners = [
        pos,
        pos + Vec2::new(size.x, 0.0),
        pos + size,
        pos + Vec2::new(0.0, size.y),
    ];
    for i in 0..4 {
        mesh.push_line(nd(corners[i]), nd(corners[(i + 1) % 4]), half, PLANK_COLOR);
    }
    for frac in [1.0 / 3.0, 2.0 / 3.0] {
        let y = pos.y + size.y * frac;
        mesh.push_line(
            nd(Vec2::new(pos.x, y)),
            nd(Vec2::new(pos.x + size.x, y)),
            half,
            PLANK_COLOR,
        );
    }
}

fn face_rect(
    mesh: &mut Mesh2,
    pos: Vec2,
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    nd: &impl Fn(Vec2) -> Vec2,
) {
    let min = pos + Vec2::new(x, y);
    mesh.push_rect(nd(min), nd(min + Vec2::new(w, h)), FACE_COLOR);
}
