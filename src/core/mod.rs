//! Core types: moves, sides, match state, RNG, configuration.
//!
//! This module holds the data the rules operate on. It never decides
//! round outcomes itself; see `rules` for that.

pub mod moves;
pub mod state;
pub mod rng;
pub mod config;

pub use moves::{Move, Side, UnknownMove};
pub use state::GameState;
pub use rng::{GameRng, GameRngState};
pub use config::{MatchConfig, DEFAULT_BOT_BOMB_PROBABILITY, DEFAULT_TOTAL_ROUNDS, MAX_TOTAL_ROUNDS};
