//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per eligible tick, no fractional movement
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod state;
pub mod step;

pub use state::{Direction, GamePhase, GameState, Position};
pub use step::{StepEvent, reset, spawn_food, step};
