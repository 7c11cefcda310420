//! # rps-bomb
//!
//! Referee for rock-paper-scissors-bomb: a best-of-N match between a human
//! and a bot, where each side may play the bomb once.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A match owns its `GameState`; nothing is global,
//!    so any number of independent matches can run side by side.
//!
//! 2. **Injected Randomness**: The only nondeterminism is the bot's move,
//!    drawn from a `GameRng` the caller supplies. Same seed, same match.
//!
//! 3. **Rejections Are Values**: Bad input produces a `Rejection` shown to
//!    the user, never an error or a panic.
//!
//! ## Usage
//!
//! ```
//! use rps_bomb::{GameRng, Match, MatchConfig};
//!
//! let mut game = Match::standard(MatchConfig::default(), GameRng::new(42)).unwrap();
//!
//! // First call always returns the rules introduction.
//! println!("{}", game.submit_move(None));
//!
//! for input in ["rock", "paper", "scissors", "done?"] {
//!     let response = game.submit_move(Some(input));
//!     println!("{}", response);
//!     if response.is_game_over() {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - `core`: Moves, sides, match state, RNG, configuration
//! - `rules`: Move validation, round resolution, match result
//! - `bot`: Bot move policies
//! - `referee`: The `submit_move` state machine and checkpoints
//! - `error`: Crate error type

pub mod core;
pub mod rules;
pub mod bot;
pub mod referee;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, GameState, MatchConfig, Move, Side};

pub use crate::rules::{
    resolve_round, validate_move, MatchResult, Rejection, RoundEngine, RoundOutcome, RoundResult,
};

pub use crate::bot::{BotPolicy, RandomBot, ScriptedBot};

pub use crate::referee::{Match, MatchSnapshot, Phase, Response};

pub use crate::error::{Result, RpsError};
