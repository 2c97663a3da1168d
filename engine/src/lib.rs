//! Slingbird Engine Library
//!
//! Deterministic 2D arcade physics for a slingshot destruction game.
//! The engine owns everything a simulation tick needs and nothing a
//! window does: integration, collision, boundaries, launch math, and
//! pointer tracking are all pure and clock-free, so the whole game can
//! run headless in tests.
//!
//! # Modules
//!
//! - [`physics`] - Integration, collision resolution, boundaries, and launch math
//! - [`input`] - Platform-agnostic pointer tracking for drag gestures
//! - [`world`] - Playfield dimensions and coordinate mapping
//!
//! # Example
//!
//! ```ignore
//! use slingbird_engine::physics::{integrate, resolve_bounds, resolve_collisions, PhysicsParams};
//! use slingbird_engine::world::Playfield;
//!
//! let params = PhysicsParams::default();
//! let field = Playfield::default();
//!
//! // One simulation tick:
//! integrate(&mut entities, &params);
//! resolve_bounds(&mut entities, &field, &params);
//! let destroyed = resolve_collisions(&mut entities, &params);
//! ```

pub mod input;
pub mod physics;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export the core simulation types for convenience
pub use physics::{
    Entity, EntityKind, PhysicsParams, integrate, resolve_bounds, resolve_collisions,
};
pub use world::Playfield;
pub use input::PointerState;
