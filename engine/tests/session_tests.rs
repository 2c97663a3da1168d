//! Session Tests - Full Rounds Through the Public Input API
//!
//! Drives complete launches through pointer events and the fixed-step
//! tick, checking round resolution, scoring, and reset behavior.

use glam::Vec2;
use slingbird_engine::PointerState;
use slingbird_engine::game::{GameConfig, GamePhase, GameSession};

const TICK_CAP: u32 = 600;

fn drag_and_launch(session: &mut GameSession, to: Vec2) {
    let sling = session.config().slingshot;
    assert!(session.pointer_down(sling), "grab at the slingshot anchor");
    session.pointer_move(to);
    session.pointer_up();
    assert_eq!(session.phase(), GamePhase::Flying);
}

/// Ticks until the session leaves `Flying`, panicking if it never does.
fn run_to_resolution(session: &mut GameSession) {
    for _ in 0..TICK_CAP {
        session.tick();
        if session.phase() != GamePhase::Flying {
            return;
        }
    }
    panic!("round did not resolve within {TICK_CAP} ticks");
}

// ============================================================================
// Round resolution
// ============================================================================

#[test]
fn test_winning_shot_ends_in_game_over() {
    let mut session = GameSession::new(GameConfig::default());

    // A low shot toward the structure collapses it entirely; every
    // destructible entity goes down, so the round ends the game.
    drag_and_launch(&mut session, Vec2::new(40.0, 260.0));
    run_to_resolution(&mut session);

    assert_eq!(session.phase(), GamePhase::GameOver);
    assert_eq!(session.live_targets(), 0);
    assert_eq!(session.score(), 400);
}

#[test]
fn test_partial_shot_respawns_and_keeps_score() {
    // Bring the structure closer to the ground so the collapse leaves
    // one target standing.
    let config = GameConfig {
        structure_origin: Vec2::new(500.0, 380.0),
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config);

    drag_and_launch(&mut session, Vec2::new(50.0, 250.0));
    run_to_resolution(&mut session);

    // A target survived, so the field respawned for another shot with
    // the score carried over.
    assert_eq!(session.phase(), GamePhase::Ready);
    assert_eq!(session.score(), 300);
    assert_eq!(session.live_targets(), 2, "respawn rebuilds the full level");
    assert!(session.entities().iter().all(|e| !e.destroyed));
    let bird = session
        .entities()
        .iter()
        .find(|e| !e.launched && e.pos == session.config().slingshot);
    assert!(bird.is_some(), "fresh projectile waiting at the slingshot");
}

// ============================================================================
// Restart
// ============================================================================

#[test]
fn test_restart_zeroes_score() {
    let config = GameConfig {
        structure_origin: Vec2::new(500.0, 380.0),
        ..GameConfig::default()
    };
    let mut session = GameSession::new(config);

    drag_and_launch(&mut session, Vec2::new(50.0, 250.0));
    run_to_resolution(&mut session);
    assert!(session.score() > 0);

    session.restart();
    assert_eq!(session.score(), 0);
    assert_eq!(session.phase(), GamePhase::Ready);
    assert_eq!(session.live_targets(), 2);
}

#[test]
fn test_restart_discards_pending_resolution() {
    let mut session = GameSession::new(GameConfig::default());

    // Launch and wait until the projectile is down and the settle
    // countdown is running, then restart before it expires.
    drag_and_launch(&mut session, Vec2::new(40.0, 260.0));
    for _ in 0..40 {
        session.tick();
    }
    assert_eq!(session.phase(), GamePhase::Flying);
    session.restart();
    assert_eq!(session.phase(), GamePhase::Ready);

    // The next round must not inherit the old countdown.
    drag_and_launch(&mut session, Vec2::new(40.0, 260.0));
    for _ in 0..30 {
        session.tick();
        assert_ne!(
            session.phase(),
            GamePhase::GameOver,
            "stale countdown resolved the new round early"
        );
    }
}

// ============================================================================
// Input edge cases
// ============================================================================

#[test]
fn test_grab_outside_capture_radius_is_ignored() {
    let mut session = GameSession::new(GameConfig::default());
    let sling = session.config().slingshot;

    assert!(!session.pointer_down(sling + Vec2::new(60.0, 0.0)));
    assert_eq!(session.phase(), GamePhase::Ready);

    // Release without a grab is a no-op too.
    session.pointer_up();
    assert_eq!(session.phase(), GamePhase::Ready);
}

#[test]
fn test_touch_sequence_drives_a_full_launch() {
    // A touch gesture goes through the same tracker and session calls
    // as the mouse: position update + press, moves, then a release
    // that only commits when a drag was active.
    let mut session = GameSession::new(GameConfig::default());
    let mut pointer = PointerState::new();
    let sling = session.config().slingshot;

    // A stray touch end before any press commits nothing.
    assert!(!pointer.release());
    assert_eq!(session.phase(), GamePhase::Ready);

    pointer.set_position(sling);
    let grab = pointer.press();
    assert!(session.pointer_down(grab));

    let drag_to = sling + Vec2::new(-60.0, -40.0);
    pointer.set_position(drag_to);
    session.pointer_move(drag_to);

    if pointer.release() {
        session.pointer_up();
    }
    assert_eq!(session.phase(), GamePhase::Flying);
    let bird = session.entities().iter().find(|e| e.launched);
    assert!(bird.is_some_and(|b| b.vel != Vec2::ZERO));
}

#[test]
fn test_aiming_publishes_trajectory_preview() {
    let mut session = GameSession::new(GameConfig::default());
    let sling = session.config().slingshot;

    session.pointer_down(sling);
    assert_eq!(session.phase(), GamePhase::Aiming);
    session.pointer_move(sling + Vec2::new(-50.0, 50.0));

    let preview = session.trajectory();
    assert!(!preview.is_empty());
    assert_eq!(preview[0], sling);
    // A down-left drag previews an up-right arc.
    assert!(preview[1].x > sling.x);
    assert!(preview[1].y < sling.y);
}
