//! Game Session
//!
//! Owns one play session: the entity set, the score, the phase machine,
//! and the drag-to-launch state. The session is advanced purely by
//! `tick()` at a fixed 60 ticks per second; it never reads a wall clock,
//! so the whole game runs headless in tests and the binary just maps
//! real time onto ticks.

use glam::Vec2;

use crate::physics::{
    Aim, Entity, EntityKind, aim_from_drag, integrate, launch_velocity, resolve_bounds,
    resolve_collisions, trajectory_preview,
};

use super::config::GameConfig;
use super::level::build_level;

// ============================================================================
// PHASE
// ============================================================================

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Projectile racked, waiting for a press near it.
    Ready,
    /// Drag in progress, preview trajectory live.
    Aiming,
    /// Projectile released, physics running.
    Flying,
    /// Every target destroyed. Terminal until a manual restart.
    GameOver,
}

/// A pending round resolution, latched when the projectile settles.
///
/// Stamped with the round it belongs to so a countdown that survives a
/// reset can never resolve the wrong round.
#[derive(Debug, Clone, Copy)]
struct SettleDelay {
    round: u64,
    remaining: u32,
}

// ============================================================================
// SESSION
// ============================================================================

/// One play session.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,
    entities: Vec<Entity>,
    score: u32,
    phase: GamePhase,
    /// Where the active drag started, in playfield coordinates.
    aim_start: Vec2,
    aim: Aim,
    /// Preview arc shown while aiming, empty otherwise.
    trajectory: Vec<Vec2>,
    /// Round generation token, bumped on every respawn.
    round: u64,
    settle: Option<SettleDelay>,
}

impl GameSession {
    /// Start a fresh session with a full level and zero score.
    pub fn new(config: GameConfig) -> Self {
        let entities = build_level(&config);
        Self {
            config,
            entities,
            score: 0,
            phase: GamePhase::Ready,
            aim_start: Vec2::ZERO,
            aim: Aim {
                power: 0.0,
                angle: 0.0,
            },
            trajectory: Vec::new(),
            round: 0,
            settle: None,
        }
    }

    // ------------------------------------------------------------------
    // Pointer handling (playfield coordinates)
    // ------------------------------------------------------------------

    /// Press at `pos`. Starts an aim if the session is ready and the
    /// press lands within the capture radius of the projectile. Returns
    /// whether the aim started.
    pub fn pointer_down(&mut self, pos: Vec2) -> bool {
        if self.phase != GamePhase::Ready {
            return false;
        }
        let Some(bird) = self.projectile() else {
            return false;
        };
        // Radius is measured from the stored position (top-left corner).
        if pos.distance(bird.pos) >= self.config.launch.capture_radius {
            return false;
        }
        self.aim_start = pos;
        self.aim = Aim {
            power: 0.0,
            angle: 0.0,
        };
        self.trajectory.clear();
        self.phase = GamePhase::Aiming;
        true
    }

    /// Drag to `pos`. Recomputes the aim and the preview arc.
    pub fn pointer_move(&mut self, pos: Vec2) {
        if self.phase != GamePhase::Aiming {
            return;
        }
        self.aim = aim_from_drag(self.aim_start, pos, &self.config.launch);
        self.trajectory = trajectory_preview(
            self.config.slingshot,
            self.aim,
            &self.config.launch,
            self.config.physics.gravity,
            self.config.field.height,
        );
    }

    /// Release. Fires the projectile with the charged aim.
    pub fn pointer_up(&mut self) {
        if self.phase != GamePhase::Aiming {
            return;
        }
        self.trajectory.clear();
        let vel = launch_velocity(self.aim, &self.config.launch);
        if let Some(bird) = self.projectile_mut() {
            bird.vel = vel;
            bird.launched = true;
        }
        self.phase = GamePhase::Flying;
    }

    // ------------------------------------------------------------------
    // Simulation
    // ------------------------------------------------------------------

    /// Advance the session by one simulation tick. Physics only runs
    /// while the projectile is in flight; every other phase is inert.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Flying {
            return;
        }

        integrate(&mut self.entities, &self.config.physics);
        resolve_bounds(&mut self.entities, &self.config.field, &self.config.physics);
        let events = resolve_collisions(&mut self.entities, &self.config.physics);
        for event in events {
            self.score += event.points;
        }

        self.check_settle();
        self.run_settle_countdown();
    }

    /// Latch the settle countdown once per round, when the launched
    /// projectile has come to rest on the ground.
    fn check_settle(&mut self) {
        if self.settle.is_some() {
            return;
        }
        let floor_y = self.config.field.floor_y();
        let settled = self.projectile().is_some_and(|bird| {
            bird.launched
                && bird.speed() < self.config.settle_speed
                && bird.pos.y + bird.size.y >= floor_y
        });
        if settled {
            self.settle = Some(SettleDelay {
                round: self.round,
                remaining: self.config.settle_delay_ticks,
            });
        }
    }

    fn run_settle_countdown(&mut self) {
        let Some(delay) = &mut self.settle else {
            return;
        };
        // A countdown stamped with a stale round token is discarded.
        if delay.round != self.round {
            self.settle = None;
            return;
        }
        delay.remaining = delay.remaining.saturating_sub(1);
        if delay.remaining == 0 {
            self.settle = None;
            self.resolve_round();
        }
    }

    /// Round is over: win the game if no targets survive, otherwise
    /// respawn everything for another shot. Score carries over.
    fn resolve_round(&mut self) {
        if self.live_targets() == 0 {
            self.phase = GamePhase::GameOver;
        } else {
            self.respawn();
        }
    }

    /// Wholesale respawn into a new round. Leaves the score alone.
    fn respawn(&mut self) {
        self.round += 1;
        self.entities = build_level(&self.config);
        self.trajectory.clear();
        self.settle = None;
        self.phase = GamePhase::Ready;
    }

    /// Manual restart from any phase. Resets the score too.
    pub fn restart(&mut self) {
        self.respawn();
        self.score = 0;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Preview arc points, empty unless aiming.
    pub fn trajectory(&self) -> &[Vec2] {
        &self.trajectory
    }

    pub fn aim(&self) -> Aim {
        self.aim
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Live (non-destroyed) target count.
    pub fn live_targets(&self) -> usize {
        self.entities
            .iter()
            .filter(|e| e.kind == EntityKind::Target && !e.destroyed)
            .count()
    }

    fn projectile(&self) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.kind == EntityKind::Projectile)
    }

    fn projectile_mut(&mut self) -> Option<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.kind == EntityKind::Projectile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default())
    }

    #[test]
    fn test_starts_ready_with_zero_score() {
        let s = session();
        assert_eq!(s.phase(), GamePhase::Ready);
        assert_eq!(s.score(), 0);
        assert_eq!(s.live_targets(), 2);
    }

    #[test]
    fn test_press_near_projectile_starts_aim() {
        let mut s = session();
        assert!(s.pointer_down(Vec2::new(110.0, 310.0)));
        assert_eq!(s.phase(), GamePhase::Aiming);
    }

    #[test]
    fn test_press_far_from_projectile_is_ignored() {
        let mut s = session();
        assert!(!s.pointer_down(Vec2::new(400.0, 200.0)));
        assert_eq!(s.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_press_at_radius_edge_is_ignored() {
        let mut s = session();
        // Exactly 50 away: strictly-inside rule rejects it.
        assert!(!s.pointer_down(Vec2::new(150.0, 300.0)));
    }

    #[test]
    fn test_drag_builds_preview() {
        let mut s = session();
        s.pointer_down(Vec2::new(100.0, 300.0));
        assert!(s.trajectory().is_empty());
        s.pointer_move(Vec2::new(60.0, 330.0));
        assert!(!s.trajectory().is_empty());
        assert!(s.aim().power > 0.0);
    }

    #[test]
    fn test_release_launches() {
        let mut s = session();
        s.pointer_down(Vec2::new(100.0, 300.0));
        s.pointer_move(Vec2::new(60.0, 330.0));
        let expected = launch_velocity(s.aim(), &s.config().launch);
        s.pointer_up();

        assert_eq!(s.phase(), GamePhase::Flying);
        assert!(s.trajectory().is_empty());
        let bird = s
            .entities()
            .iter()
            .find(|e| e.kind == EntityKind::Projectile)
            .unwrap();
        assert!(bird.launched);
        assert_eq!(bird.vel, expected);
    }

    #[test]
    fn test_tick_is_inert_outside_flight() {
        let mut s = session();
        let before: Vec<Vec2> = s.entities().iter().map(|e| e.pos).collect();
        s.tick();
        let after: Vec<Vec2> = s.entities().iter().map(|e| e.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_pointer_up_without_aim_does_nothing() {
        let mut s = session();
        s.pointer_up();
        assert_eq!(s.phase(), GamePhase::Ready);
    }

    #[test]
    fn test_restart_zeroes_score_and_respawns() {
        let mut s = session();
        s.pointer_down(Vec2::new(100.0, 300.0));
        s.pointer_move(Vec2::new(40.0, 340.0));
        s.pointer_up();
        for _ in 0..200 {
            s.tick();
        }
        s.restart();

        assert_eq!(s.phase(), GamePhase::Ready);
        assert_eq!(s.score(), 0);
        assert_eq!(s.entities().len(), 10);
        assert!(s.entities().iter().all(|e| !e.destroyed));
    }
}
