//! Match state: round counter, scores and bomb flags.
//!
//! ## GameState
//!
//! One instance per match, mutated only by round resolution:
//! - `round_count` starts at 1 and grows by exactly 1 per resolved round
//! - `user_score` / `bot_score` count rounds won
//! - `user_bomb_used` / `bot_bomb_used` latch true on first bomb
//!
//! ## Mapping form
//!
//! For checkpointing between calls the state converts to and from a plain
//! `FxHashMap<String, i64>`. Booleans are stored as 0/1.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::moves::Side;
use crate::error::{Result, RpsError};

/// Mapping key for the round counter.
pub const KEY_ROUND_COUNT: &str = "round_count";
/// Mapping key for the user's score.
pub const KEY_USER_SCORE: &str = "user_score";
/// Mapping key for the bot's score.
pub const KEY_BOT_SCORE: &str = "bot_score";
/// Mapping key for the user's bomb flag.
pub const KEY_USER_BOMB_USED: &str = "user_bomb_used";
/// Mapping key for the bot's bomb flag.
pub const KEY_BOT_BOMB_USED: &str = "bot_bomb_used";

/// Counters and flags for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Current round number (starts at 1).
    pub round_count: u32,

    /// Rounds won by the user.
    pub user_score: u32,

    /// Rounds won by the bot.
    pub bot_score: u32,

    /// Has the user spent their bomb?
    pub user_bomb_used: bool,

    /// Has the bot spent its bomb?
    pub bot_bomb_used: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            round_count: 1,
            user_score: 0,
            bot_score: 0,
            user_bomb_used: false,
            bot_bomb_used: false,
        }
    }
}

impl GameState {
    /// Create the state of a fresh match.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds resolved so far.
    ///
    /// Saturates at 0 for a `round_count` of 0, which `validate` rejects.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.round_count.saturating_sub(1)
    }

    /// Rounds that ended in a draw.
    ///
    /// Saturates at 0 when the scores exceed the rounds played.
    #[must_use]
    pub fn draws(&self) -> u32 {
        self.rounds_played()
            .saturating_sub(self.user_score)
            .saturating_sub(self.bot_score)
    }

    /// Is the match over after `total_rounds` rounds?
    #[must_use]
    pub fn is_finished(&self, total_rounds: u32) -> bool {
        self.round_count > total_rounds
    }

    /// Score for one side.
    #[must_use]
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::User => self.user_score,
            Side::Bot => self.bot_score,
        }
    }

    /// Has `side` already played its bomb?
    #[must_use]
    pub fn bomb_used(&self, side: Side) -> bool {
        match side {
            Side::User => self.user_bomb_used,
            Side::Bot => self.bot_bomb_used,
        }
    }

    pub(crate) fn award_round(&mut self, side: Side) {
        match side {
            Side::User => self.user_score += 1,
            Side::Bot => self.bot_score += 1,
        }
    }

    pub(crate) fn spend_bomb(&mut self, side: Side) {
        match side {
            Side::User => self.user_bomb_used = true,
            Side::Bot => self.bot_bomb_used = true,
        }
    }

    // === Mapping Form ===

    /// Convert to a plain field-name to value mapping.
    #[must_use]
    pub fn to_map(&self) -> FxHashMap<String, i64> {
        let mut map = FxHashMap::default();
        map.insert(KEY_ROUND_COUNT.to_string(), i64::from(self.round_count));
        map.insert(KEY_USER_SCORE.to_string(), i64::from(self.user_score));
        map.insert(KEY_BOT_SCORE.to_string(), i64::from(self.bot_score));
        map.insert(KEY_USER_BOMB_USED.to_string(), i64::from(self.user_bomb_used));
        map.insert(KEY_BOT_BOMB_USED.to_string(), i64::from(self.bot_bomb_used));
        map
    }

    /// Rebuild a state from its mapping form.
    ///
    /// Missing keys take their fresh-match values and unknown keys are
    /// ignored. Out-of-range values and scores that exceed the rounds
    /// played are rejected.
    pub fn from_map(map: &FxHashMap<String, i64>) -> Result<Self> {
        let state = Self::decode_map(map);
        if let Err(err) = &state {
            warn!(error = %err, "rejected state mapping");
        }
        state
    }

    /// Check the counters describe a reachable match.
    ///
    /// `round_count` must be at least 1, and the scores together cannot
    /// exceed the rounds played.
    pub fn validate(&self) -> Result<()> {
        if self.round_count < 1 {
            return Err(RpsError::InvalidStateValue {
                field: KEY_ROUND_COUNT,
                value: i64::from(self.round_count),
            });
        }

        let wins = u64::from(self.user_score) + u64::from(self.bot_score);
        if wins > u64::from(self.rounds_played()) {
            return Err(RpsError::InconsistentScore {
                user_score: self.user_score,
                bot_score: self.bot_score,
                rounds_played: self.rounds_played(),
            });
        }

        Ok(())
    }

    fn decode_map(map: &FxHashMap<String, i64>) -> Result<Self> {
        let state = Self {
            round_count: read_count(map, KEY_ROUND_COUNT, 1)?,
            user_score: read_count(map, KEY_USER_SCORE, 0)?,
            bot_score: read_count(map, KEY_BOT_SCORE, 0)?,
            user_bomb_used: read_flag(map, KEY_USER_BOMB_USED)?,
            bot_bomb_used: read_flag(map, KEY_BOT_BOMB_USED)?,
        };
        state.validate()?;
        Ok(state)
    }
}

fn read_count(map: &FxHashMap<String, i64>, key: &'static str, default: u32) -> Result<u32> {
    match map.get(key) {
        None => Ok(default),
        Some(&value) => u32::try_from(value)
            .map_err(|_| RpsError::InvalidStateValue { field: key, value }),
    }
}

fn read_flag(map: &FxHashMap<String, i64>, key: &'static str) -> Result<bool> {
    match map.get(key).copied() {
        None | Some(0) => Ok(false),
        Some(1) => Ok(true),
        Some(value) => Err(RpsError::InvalidStateValue { field: key, value }),
    }
}
