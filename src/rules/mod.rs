//! Rules of rock-paper-scissors-bomb.
//!
//! - Validating raw user input into a `Move`
//! - Resolving a round and updating `GameState`
//! - Deciding the match once every round is played
//!
//! Bot move selection lives in `bot`; sequencing lives in `referee`.

pub mod engine;

pub use engine::{
    resolve_round, validate_move, MatchResult, Rejection, RoundEngine, RoundOutcome, RoundResult,
};
