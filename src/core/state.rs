//! Round state: the snapshot handed to presentation layers, plus the
//! per-round history of a game.

use serde::{Deserialize, Serialize};

use super::moves::{Move, Outcome};

/// Engine lifecycle phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been started yet.
    #[default]
    NotStarted,
    /// A round is waiting for the player's move.
    InProgress,
    /// The last round has been played. Only a new game leaves this phase.
    GameOver,
}

/// Immutable snapshot of the current round, for rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Current round (1-based). Stays at the last round once the game is over.
    pub round: u32,

    /// The machine's move for this round.
    pub machine_move: Move,

    /// What the player must achieve against `machine_move`.
    pub target_outcome: Outcome,

    /// Player score, never negative.
    pub score: u32,

    pub game_over: bool,
}

impl RoundState {
    /// The move that scores this round.
    pub fn answer(&self) -> Move {
        self.target_outcome.required_move(self.machine_move)
    }
}

/// One scored submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    pub round: u32,
    pub machine_move: Move,
    pub target_outcome: Outcome,
    pub player_move: Move,
    pub correct: bool,
    /// Score after this round was scored.
    pub score_after: u32,
}
