//! Error types for rock-paper-scissors-bomb.
//!
//! Rejected moves are not errors; see [`crate::rules::Rejection`].

use thiserror::Error;

/// Main error type for the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RpsError {
    #[error("Invalid value {value} for state field `{field}`")]
    InvalidStateValue { field: &'static str, value: i64 },

    #[error(
        "Inconsistent state: {user_score} + {bot_score} wins exceed {rounds_played} rounds played"
    )]
    InconsistentScore {
        user_score: u32,
        bot_score: u32,
        rounds_played: u32,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String, field: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RpsError>;

impl From<bincode::Error> for RpsError {
    fn from(err: bincode::Error) -> Self {
        RpsError::Serialization {
            message: err.to_string(),
        }
    }
}
