//! Heads-Up Display
//!
//! Score readout, per-phase hint line, and the end-of-game overlay,
//! all assembled from pixel-font quads.

use glam::Vec2;

use crate::game::session::{GamePhase, GameSession};
use crate::game::types::Mesh2;

use super::text::{draw_text, text_width};

const TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const HINT_COLOR: [f32; 4] = [1.0, 1.0, 0.6, 1.0];
const OVERLAY_DIM: [f32; 4] = [0.0, 0.0, 0.0, 0.6];

/// HUD geometry builder. Stateless, rebuilt every frame like the scene.
pub struct Hud;

impl Hud {
    /// Build the HUD mesh for the current session state.
    ///
    /// `width`/`height` are the logical screen dimensions the text is
    /// laid out in, matching the playfield so positions stay stable
    /// under window resizing.
    pub fn build(session: &GameSession, width: f32, height: f32) -> Mesh2 {
        let mut mesh = Mesh2::new();

        let score_line = format!("SCORE: {}", session.score());
        draw_text(&mut mesh, &score_line, 10.0, 10.0, 2.0, TEXT_COLOR, width, height);

        let hint = match session.phase() {
            GamePhase::Ready => "DRAG THE BIRD TO AIM AND LAUNCH",
            GamePhase::Aiming => "RELEASE TO LAUNCH",
            GamePhase::Flying => "DESTROY ALL THE PIGS",
            GamePhase::GameOver => "",
        };
        if !hint.is_empty() {
            let x = (width - text_width(hint, 2.0)) / 2.0;
            draw_text(&mut mesh, hint, x, height - 24.0, 2.0, HINT_COLOR, width, height);
        }

        if session.phase() == GamePhase::GameOver {
            mesh.push_rect(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0), OVERLAY_DIM);

            let title = "YOU WON!";
            let x = (width - text_width(title, 4.0)) / 2.0;
            draw_text(&mut mesh, title, x, height / 2.0 - 40.0, 4.0, TEXT_COLOR, width, height);

            let final_line = format!("FINAL SCORE: {}", session.score());
            let x = (width - text_width(&final_line, 2.0)) / 2.0;
            draw_text(&mut mesh, &final_line, x, height / 2.0 + 4.0, 2.0, TEXT_COLOR, width, height);

            let restart = "PRESS R TO RESTART";
            let x = (width - text_width(restart, 2.0)) / 2.0;
            draw_text(&mut mesh, restart, x, height / 2.0 + 28.0, 2.0, HINT_COLOR, width, height);
        }

        mesh
    }
}
