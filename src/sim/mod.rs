//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one snapshot out
//! - Seeded layout only (drawn once per game)
//! - Stable iteration order (construction order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod rules;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Contacts;
pub use motion::{Drift, advance, drift_x};
pub use state::{
    Collectible, EntityId, Frog, GameState, Hazard, Layout, Platform, ScoreZone, Sprite,
    Teleporter,
};
pub use tick::{GameEvent, apply, reduce, tick};
