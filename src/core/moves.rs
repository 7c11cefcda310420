//! Moves and sides.
//!
//! ## Move
//!
//! The fixed move set: rock, paper, scissors and the single-use bomb.
//! "Beats" is an asymmetric relation, not a total order:
//!
//! - rock beats scissors, paper beats rock, scissors beats paper
//! - bomb beats every move, including another bomb
//!
//! Identical moves are resolved as a draw before `beats` is consulted,
//! so bomb against bomb is a draw.
//!
//! ## Side
//!
//! The two participants of a match: the human user and the bot.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A move in rock-paper-scissors-bomb.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// Every valid move, in display order.
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// The ordinary throws (everything except bomb).
    pub const THROWS: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Lowercase name, as shown to players.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Does this move beat `other`?
    ///
    /// ```
    /// use rps_bomb::core::Move;
    ///
    /// assert!(Move::Rock.beats(Move::Scissors));
    /// assert!(!Move::Scissors.beats(Move::Rock));
    /// assert!(Move::Bomb.beats(Move::Bomb));
    /// ```
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Bomb, _)
                | (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }

    /// Is this the single-use move?
    #[must_use]
    pub const fn is_bomb(self) -> bool {
        matches!(self, Move::Bomb)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input that names no move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMove(pub String);

impl std::fmt::Display for UnknownMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown move {:?}", self.0)
    }
}

impl std::error::Error for UnknownMove {}

impl FromStr for Move {
    type Err = UnknownMove;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownMove(s.to_string()))
    }
}

/// One of the two participants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    User,
    Bot,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::User => f.write_str("You"),
            Side::Bot => f.write_str("Bot"),
        }
    }
}
