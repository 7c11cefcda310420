//! Round rules: move validation, round resolution, match result.
//!
//! Validation and resolution are free functions over `GameState`; the
//! `RoundEngine` adds what depends on `MatchConfig` (match length and the
//! texts that mention it).

use tracing::{debug, info};

use crate::core::state::KEY_ROUND_COUNT;
use crate::core::{GameState, MatchConfig, Move, Side};
use crate::error::{Result, RpsError};

// =============================================================================
// Validation
// =============================================================================

/// Why a submitted move was refused.
///
/// A rejection is an ordinary outcome, shown back to the user. It never
/// consumes a round or touches the state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Input names no move in the fixed set.
    InvalidMove,
    /// The user asked for bomb a second time.
    BombAlreadyUsed,
}

impl Rejection {
    /// Fixed message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Rejection::InvalidMove => "Invalid move. Valid moves are: rock, paper, scissors, bomb.",
            Rejection::BombAlreadyUsed => "You have already used your bomb. Choose another move.",
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Validate raw user input.
///
/// Checks run in order and stop at the first failure: the input must name
/// a move (case-insensitively), then a bomb must still be available.
/// Missing input is an invalid move.
pub fn validate_move(raw: Option<&str>, user_bomb_used: bool) -> std::result::Result<Move, Rejection> {
    let Some(user_move) = raw.and_then(|text| text.parse::<Move>().ok()) else {
        debug!(input = ?raw, "rejected move: not in the valid set");
        return Err(Rejection::InvalidMove);
    };

    if user_move.is_bomb() && user_bomb_used {
        debug!("rejected move: bomb already used");
        return Err(Rejection::BombAlreadyUsed);
    }

    debug!(%user_move, "accepted move");
    Ok(user_move)
}

// =============================================================================
// Round Resolution
// =============================================================================

/// Outcome of a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    Draw,
    UserWin,
    BotWin,
}

impl RoundOutcome {
    /// Decide a round. Identical moves draw before "beats" is consulted.
    #[must_use]
    pub fn decide(user_move: Move, bot_move: Move) -> Self {
        if user_move == bot_move {
            RoundOutcome::Draw
        } else if user_move.beats(bot_move) {
            RoundOutcome::UserWin
        } else {
            RoundOutcome::BotWin
        }
    }

    /// The side that scored, if any.
    #[must_use]
    pub fn winner(self) -> Option<Side> {
        match self {
            RoundOutcome::Draw => None,
            RoundOutcome::UserWin => Some(Side::User),
            RoundOutcome::BotWin => Some(Side::Bot),
        }
    }
}

/// A resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundResult {
    /// Round number the moves were played in.
    pub round: u32,
    pub user_move: Move,
    pub bot_move: Move,
    pub outcome: RoundOutcome,
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            RoundOutcome::Draw => write!(
                f,
                "Round {}: It's a DRAW! Both played {}.",
                self.round, self.user_move
            ),
            RoundOutcome::UserWin => write!(
                f,
                "Round {}: You WIN! {} beats {}.",
                self.round, self.user_move, self.bot_move
            ),
            RoundOutcome::BotWin => write!(
                f,
                "Round {}: You LOSE! {} beats {}.",
                self.round, self.bot_move, self.user_move
            ),
        }
    }
}

/// Resolve a round between two already-validated moves.
///
/// Awards the round, latches bomb flags and advances `round_count`.
/// `state` must not be past the last round; `RoundEngine::check_state`
/// bounds `round_count` for checkpointed states.
pub fn resolve_round(state: &mut GameState, user_move: Move, bot_move: Move) -> RoundResult {
    debug_assert!(
        !(bot_move.is_bomb() && state.bot_bomb_used),
        "bot played a spent bomb"
    );

    let result = RoundResult {
        round: state.round_count,
        user_move,
        bot_move,
        outcome: RoundOutcome::decide(user_move, bot_move),
    };

    if let Some(side) = result.outcome.winner() {
        state.award_round(side);
    }
    if user_move.is_bomb() {
        state.spend_bomb(Side::User);
    }
    if bot_move.is_bomb() {
        state.spend_bomb(Side::Bot);
    }
    state.round_count += 1;

    info!(
        round = result.round,
        %user_move,
        %bot_move,
        outcome = ?result.outcome,
        user_score = state.user_score,
        bot_score = state.bot_score,
        "round resolved"
    );
    result
}

// =============================================================================
// Match Result
// =============================================================================

/// Final result of a finished match, from the user's perspective.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchResult {
    UserWins { user_score: u32, bot_score: u32 },
    BotWins { user_score: u32, bot_score: u32 },
    Draw { user_score: u32, bot_score: u32 },
}

impl MatchResult {
    /// Compare the scores in `state`.
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        let (user_score, bot_score) = (state.user_score, state.bot_score);
        match user_score.cmp(&bot_score) {
            std::cmp::Ordering::Greater => MatchResult::UserWins { user_score, bot_score },
            std::cmp::Ordering::Less => MatchResult::BotWins { user_score, bot_score },
            std::cmp::Ordering::Equal => MatchResult::Draw { user_score, bot_score },
        }
    }

    /// Winning side, or `None` on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self {
            MatchResult::UserWins { .. } => Some(Side::User),
            MatchResult::BotWins { .. } => Some(Side::Bot),
            MatchResult::Draw { .. } => None,
        }
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            MatchResult::UserWins { user_score, bot_score } => write!(
                f,
                "Game over! You WIN the game with a score of {}-{}.",
                user_score, bot_score
            ),
            MatchResult::BotWins { user_score, bot_score } => write!(
                f,
                "Game over! The BOT wins the game with a score of {}-{}.",
                bot_score, user_score
            ),
            MatchResult::Draw { user_score, bot_score } => write!(
                f,
                "Game over! It's a DRAW with a score of {}-{}.",
                user_score, bot_score
            ),
        }
    }
}

// =============================================================================
// Round Engine
// =============================================================================

/// Rules bound to a match configuration.
#[derive(Clone, Debug, Default)]
pub struct RoundEngine {
    config: MatchConfig,
}

impl RoundEngine {
    /// Create an engine, validating the configuration.
    pub fn new(config: MatchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rules introduction shown before the first round.
    #[must_use]
    pub fn welcome_message(&self) -> String {
        format!(
            "Welcome to Rock-Paper-Scissors-Bomb! Best of {} rounds. \
             Valid moves: rock, paper, scissors, bomb. \
             Bomb can be used only once per game. Let's begin!",
            self.config.total_rounds
        )
    }

    /// Have all rounds been played?
    #[must_use]
    pub fn is_finished(&self, state: &GameState) -> bool {
        state.is_finished(self.config.total_rounds)
    }

    /// Check that `state` can belong to a match under this configuration.
    ///
    /// On top of `GameState::validate`, `round_count` may not pass the
    /// round after the last one.
    pub fn check_state(&self, state: &GameState) -> Result<()> {
        state.validate()?;

        if state.round_count > self.config.total_rounds + 1 {
            return Err(RpsError::InvalidStateValue {
                field: KEY_ROUND_COUNT,
                value: i64::from(state.round_count),
            });
        }

        Ok(())
    }

    /// Validate user input against `state`.
    pub fn validate(&self, raw: Option<&str>, state: &GameState) -> std::result::Result<Move, Rejection> {
        validate_move(raw, state.user_bomb_used)
    }

    /// Resolve a round against `state`.
    pub fn resolve(&self, state: &mut GameState, user_move: Move, bot_move: Move) -> RoundResult {
        resolve_round(state, user_move, bot_move)
    }

    /// Check if the match is over.
    ///
    /// Returns `Some(result)` once every round has been played.
    #[must_use]
    pub fn final_result(&self, state: &GameState) -> Option<MatchResult> {
        self.is_finished(state).then(|| MatchResult::from_state(state))
    }
}
