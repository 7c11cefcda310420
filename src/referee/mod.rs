//! Match driver: welcome, rounds, and the final summary.
//!
//! Transports (console, chat, RPC) call `Match::submit_move` until the
//! returned `Response` reports the game is over.

pub mod session;

pub use session::{Match, MatchSnapshot, Phase, Response};
