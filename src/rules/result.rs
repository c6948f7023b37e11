//! Values returned by the round engine.

use serde::{Deserialize, Serialize};

/// Final tally of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub final_score: u32,
    pub max_rounds: u32,
    /// Rounds answered correctly.
    pub correct: u32,
    /// Rounds answered incorrectly.
    pub incorrect: u32,
}

/// Signals for the presentation layer.
///
/// The engine never opens dialogs itself; it returns these and lets the
/// caller decide how to show them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// A new game started; show the instructions once.
    Welcome { max_rounds: u32 },
    /// The last round was scored; show the final score and offer a new game.
    GameOver(GameSummary),
}

/// What happened to a submitted move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveStatus {
    /// The move was scored and the round advanced.
    Scored,
    /// Ignored: the game is already over.
    GameAlreadyOver,
    /// Ignored: no game has been started.
    NotStarted,
}

/// Result of `RoundEngine::submit_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub status: MoveStatus,
    /// Whether the move achieved the target. Always false for ignored moves.
    pub correct: bool,
    /// Score after the submission.
    pub score: u32,
    pub game_over: bool,
    /// Set on the submission that ends the game.
    pub event: Option<EngineEvent>,
}

impl MoveResult {
    pub(crate) fn ignored(status: MoveStatus, score: u32, game_over: bool) -> Self {
        Self {
            status,
            correct: false,
            score,
            game_over,
            event: None,
        }
    }

    /// True if the move changed the engine state.
    pub fn was_scored(&self) -> bool {
        self.status == MoveStatus::Scored
    }
}
