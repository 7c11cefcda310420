//! Match orchestration: one `submit_move` call per interaction.
//!
//! The phase is derived from the state rather than stored:
//! - `Intro` until the welcome message has been sent
//! - `Playing` while `round_count <= total_rounds`
//! - `Finished` afterwards; every further call repeats the summary

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::bot::{BotPolicy, RandomBot};
use crate::core::{GameRng, GameRngState, GameState, MatchConfig, Side};
use crate::error::Result;
use crate::rules::{MatchResult, Rejection, RoundEngine, RoundResult};

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Intro,
    Playing,
    Finished,
}

/// Reply to a single `submit_move` call.
///
/// `Display` yields the exact text shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Response {
    /// Rules introduction; no move consumed.
    Welcome(String),
    /// Input refused; no round consumed.
    Rejected(Rejection),
    /// A round was played.
    Round {
        result: RoundResult,
        user_score: u32,
        bot_score: u32,
    },
    /// The match is over.
    GameOver(MatchResult),
}

impl Response {
    /// Should the driver stop calling `submit_move`?
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, Response::GameOver(_))
    }

    /// Rendered message text.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Welcome(text) => f.write_str(text),
            Response::Rejected(rejection) => write!(f, "{}", rejection),
            Response::Round {
                result,
                user_score,
                bot_score,
            } => write!(
                f,
                "{}\nCurrent Score: {} {} - {} {}",
                result,
                Side::User,
                user_score,
                bot_score,
                Side::Bot
            ),
            Response::GameOver(result) => write!(f, "{}", result),
        }
    }
}

/// Everything needed to continue a match later.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub state: GameState,
    pub introduced: bool,
    pub rng: GameRngState,
}

impl MatchSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

/// A single human-vs-bot match.
///
/// Owns its state exclusively; independent matches share nothing.
#[derive(Clone, Debug)]
pub struct Match<B: BotPolicy> {
    engine: RoundEngine,
    state: GameState,
    rng: GameRng,
    bot: B,
    introduced: bool,
}

impl Match<RandomBot> {
    /// Start a fresh match against the standard bot described by `config`.
    pub fn standard(config: MatchConfig, rng: GameRng) -> Result<Self> {
        let bot = RandomBot::from_config(&config);
        Self::new(config, bot, rng)
    }
}

impl<B: BotPolicy> Match<B> {
    /// Start a fresh match.
    pub fn new(config: MatchConfig, bot: B, rng: GameRng) -> Result<Self> {
        Ok(Self {
            engine: RoundEngine::new(config)?,
            state: GameState::new(),
            rng,
            bot,
            introduced: false,
        })
    }

    /// Continue from a checkpointed state.
    ///
    /// A state with resolved rounds is past its introduction; a fresh one
    /// still opens with the welcome message.
    ///
    /// Fails if `state` could not have been reached under `config`.
    pub fn resume(config: MatchConfig, state: GameState, bot: B, rng: GameRng) -> Result<Self> {
        let engine = RoundEngine::new(config)?;
        engine.check_state(&state)?;

        let introduced = state.rounds_played() > 0;
        Ok(Self {
            engine,
            state,
            rng,
            bot,
            introduced,
        })
    }

    /// Rebuild a match from a snapshot.
    pub fn restore(config: MatchConfig, snapshot: MatchSnapshot, bot: B) -> Result<Self> {
        let engine = RoundEngine::new(config)?;
        engine.check_state(&snapshot.state)?;

        Ok(Self {
            engine,
            state: snapshot.state,
            rng: GameRng::from_state(&snapshot.rng),
            bot,
            introduced: snapshot.introduced,
        })
    }

    /// Capture state, introduction flag and RNG position.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            state: self.state.clone(),
            introduced: self.introduced,
            rng: self.rng.state(),
        }
    }

    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the match configuration.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        self.engine.config()
    }

    /// Get the bot policy.
    #[must_use]
    pub fn bot(&self) -> &B {
        &self.bot
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if !self.introduced {
            Phase::Intro
        } else if self.engine.is_finished(&self.state) {
            Phase::Finished
        } else {
            Phase::Playing
        }
    }

    /// Final result, once every round has been played.
    #[must_use]
    pub fn result(&self) -> Option<MatchResult> {
        self.engine.final_result(&self.state)
    }

    /// Handle one interaction.
    ///
    /// `None` and empty input are accepted; outside the intro they are
    /// rejected as invalid moves.
    pub fn submit_move(&mut self, raw: Option<&str>) -> Response {
        match self.phase() {
            Phase::Intro => {
                self.introduced = true;
                debug!("sent welcome message");
                Response::Welcome(self.engine.welcome_message())
            }
            Phase::Finished => {
                let result = MatchResult::from_state(&self.state);
                info!(winner = ?result.winner(), "match over");
                Response::GameOver(result)
            }
            Phase::Playing => self.play_round(raw),
        }
    }

    fn play_round(&mut self, raw: Option<&str>) -> Response {
        let user_move = match self.engine.validate(raw, &self.state) {
            Ok(user_move) => user_move,
            Err(rejection) => return Response::Rejected(rejection),
        };

        let bot_move = self
            .bot
            .choose_move(self.state.bomb_used(Side::Bot), &mut self.rng);
        let result = self.engine.resolve(&mut self.state, user_move, bot_move);

        Response::Round {
            result,
            user_score: self.state.user_score,
            bot_score: self.state.bot_score,
        }
    }
}
