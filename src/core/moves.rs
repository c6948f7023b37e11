//! Moves, target outcomes, and the cyclic-dominance table.
//!
//! Every round pairs a machine [`Move`] with a target [`Outcome`]. The player
//! is correct when their move achieves the target against the machine:
//!
//! | Target | Machine  | Correct answer |
//! |--------|----------|----------------|
//! | Win    | Rock     | Paper          |
//! | Win    | Paper    | Scissors       |
//! | Win    | Scissors | Rock           |
//! | Lose   | Rock     | Scissors       |
//! | Lose   | Paper    | Rock           |
//! | Lose   | Scissors | Paper          |
//!
//! A tie never achieves either target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the three hand shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in draw order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Check if this move beats the other.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors) | (Move::Scissors, Move::Paper) | (Move::Paper, Move::Rock)
        )
    }

    /// The move that beats this one.
    #[must_use]
    pub fn beaten_by(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Rock,
        }
    }

    /// The move this one beats.
    #[must_use]
    pub fn defeats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Index into [`Move::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Move::Rock => "Rock",
            Move::Paper => "Paper",
            Move::Scissors => "Scissors",
        };
        f.write_str(label)
    }
}

/// Error returned when text does not name a move.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown move {input:?}: expected rock, paper or scissors")]
pub struct ParseMoveError {
    /// The rejected input, trimmed.
    pub input: String,
}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissors" | "s" => Ok(Move::Scissors),
            _ => Err(ParseMoveError {
                input: trimmed.to_string(),
            }),
        }
    }
}

/// The result the player has to achieve against the machine this round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
}

impl Outcome {
    /// The other outcome.
    #[must_use]
    pub fn toggled(self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
        }
    }

    /// Check whether `player` achieves this outcome against `machine`.
    ///
    /// Ties are always incorrect.
    pub fn is_achieved(self, player: Move, machine: Move) -> bool {
        match self {
            Outcome::Win => player.beats(machine),
            Outcome::Lose => machine.beats(player),
        }
    }

    /// The unique move achieving this outcome against `machine`.
    #[must_use]
    pub fn required_move(self, machine: Move) -> Move {
        match self {
            Outcome::Win => machine.beaten_by(),
            Outcome::Lose => machine.defeats(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => f.write_str("WIN"),
            Outcome::Lose => f.write_str("LOSE"),
        }
    }
}

/// Error returned when text does not name an outcome.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown outcome {input:?}: expected win or lose")]
pub struct ParseOutcomeError {
    pub input: String,
}

impl FromStr for Outcome {
    type Err = ParseOutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "win" => Ok(Outcome::Win),
            "lose" => Ok(Outcome::Lose),
            _ => Err(ParseOutcomeError {
                input: trimmed.to_string(),
            }),
        }
    }
}
