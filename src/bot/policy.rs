//! Bot move selection.
//!
//! Policies are trait-based so matches can swap strategies:
//! - `RandomBot`: the standard bot (bomb with a fixed probability while it
//!   has one, otherwise a uniform throw)
//! - `ScriptedBot`: replays a fixed sequence, for tests and replays
//!
//! Randomness always comes from the `GameRng` passed in.

use std::collections::VecDeque;

use tracing::debug;

use crate::core::{GameRng, MatchConfig, Move, DEFAULT_BOT_BOMB_PROBABILITY};

/// Policy for choosing the bot's move each round.
///
/// Implementations must never return `Move::Bomb` when `bomb_used` is true.
pub trait BotPolicy {
    /// Choose the bot's move for the current round.
    fn choose_move(&mut self, bomb_used: bool, rng: &mut GameRng) -> Move;
}

impl<B: BotPolicy + ?Sized> BotPolicy for Box<B> {
    fn choose_move(&mut self, bomb_used: bool, rng: &mut GameRng) -> Move {
        (**self).choose_move(bomb_used, rng)
    }
}

/// Uniform choice among rock, paper and scissors.
pub fn random_throw(rng: &mut GameRng) -> Move {
    rng.choose(&Move::THROWS).copied().unwrap_or(Move::Rock)
}

/// Standard bot.
///
/// While its bomb is unspent, plays bomb with `bomb_probability`; otherwise
/// (or when that draw fails) throws uniformly.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBot {
    bomb_probability: f64,
}

impl RandomBot {
    /// Create a bot with the given bomb probability.
    ///
    /// The probability is clamped to `[0, 1]`; NaN is treated as 0.
    #[must_use]
    pub fn new(bomb_probability: f64) -> Self {
        let bomb_probability = if bomb_probability.is_nan() {
            0.0
        } else {
            bomb_probability.clamp(0.0, 1.0)
        };
        Self { bomb_probability }
    }

    /// Create the bot a match configuration asks for.
    #[must_use]
    pub fn from_config(config: &MatchConfig) -> Self {
        Self::new(config.bot_bomb_probability)
    }

    /// Probability of playing bomb while it is available.
    #[must_use]
    pub fn bomb_probability(&self) -> f64 {
        self.bomb_probability
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new(DEFAULT_BOT_BOMB_PROBABILITY)
    }
}

impl BotPolicy for RandomBot {
    fn choose_move(&mut self, bomb_used: bool, rng: &mut GameRng) -> Move {
        let bot_move = if !bomb_used && rng.gen_bool(self.bomb_probability) {
            Move::Bomb
        } else {
            random_throw(rng)
        };
        debug!(%bot_move, bomb_used, "bot chose move");
        bot_move
    }
}

/// Bot that plays a fixed sequence of moves.
///
/// A scripted bomb after the bot's bomb is spent, and any round past the end
/// of the script, falls back to `random_throw`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedBot {
    script: VecDeque<Move>,
}

impl ScriptedBot {
    /// Create a bot that plays `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            script: moves.into_iter().collect(),
        }
    }

    /// Moves left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl BotPolicy for ScriptedBot {
    fn choose_move(&mut self, bomb_used: bool, rng: &mut GameRng) -> Move {
        let bot_move = match self.script.pop_front() {
            Some(Move::Bomb) if bomb_used => random_throw(rng),
            Some(scripted) => scripted,
            None => random_throw(rng),
        };
        debug!(%bot_move, bomb_used, "bot played scripted move");
        bot_move
    }
}
