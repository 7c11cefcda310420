//! Match configuration.
//!
//! The defaults describe the standard game: best of 3 rounds, and a bot
//! that reaches for its bomb half the time while it still has one.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, RpsError};

/// Number of rounds in a standard match.
pub const DEFAULT_TOTAL_ROUNDS: u32 = 3;

/// Longest match supported; leaves room for the round after the last.
pub const MAX_TOTAL_ROUNDS: u32 = u32::MAX - 1;

/// Chance that a bot holding its bomb plays it.
pub const DEFAULT_BOT_BOMB_PROBABILITY: f64 = 0.5;

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Rounds played before the match is decided.
    pub total_rounds: u32,

    /// Probability that the bot plays bomb while it is still available.
    pub bot_bomb_probability: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            bot_bomb_probability: DEFAULT_BOT_BOMB_PROBABILITY,
        }
    }
}

impl MatchConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of rounds.
    #[must_use]
    pub fn with_total_rounds(mut self, rounds: u32) -> Self {
        self.total_rounds = rounds;
        self
    }

    /// Set the bot's bomb probability.
    #[must_use]
    pub fn with_bot_bomb_probability(mut self, probability: f64) -> Self {
        self.bot_bomb_probability = probability;
        self
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.total_rounds == 0 {
            return Err(RpsError::Configuration {
                message: "Total rounds must be greater than 0".to_string(),
                field: "total_rounds".to_string(),
            });
        }

        if self.total_rounds > MAX_TOTAL_ROUNDS {
            return Err(RpsError::Configuration {
                message: format!("Total rounds must be at most {}", MAX_TOTAL_ROUNDS),
                field: "total_rounds".to_string(),
            });
        }

        if !(0.0..=1.0).contains(&self.bot_bomb_probability) {
            return Err(RpsError::Configuration {
                message: format!(
                    "Bot bomb probability must be within [0, 1], got {}",
                    self.bot_bomb_probability
                ),
                field: "bot_bomb_probability".to_string(),
            });
        }

        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: MatchConfig = toml::from_str(content).map_err(|e| RpsError::Configuration {
            message: format!("Failed to parse config: {}", e),
            field: "config_format".to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| RpsError::Configuration {
            message: format!("Failed to read config file: {}", e),
            field: "config_file".to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    /// Save configuration to a file.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| RpsError::Configuration {
            message: format!("Failed to serialize config: {}", e),
            field: "config_serialization".to_string(),
        })?;

        fs::write(path, content).map_err(|e| RpsError::Configuration {
            message: format!("Failed to write config file: {}", e),
            field: "config_write".to_string(),
        })?;

        Ok(())
    }
}
