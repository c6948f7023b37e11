//! Player-facing text.

use crate::core::Outcome;
use crate::rules::GameSummary;

pub fn welcome_message(max_rounds: u32) -> String {
    format!(
        "Welcome! Rock-Paper-Scissors brain challenge. Try to win or lose based on what the app \
         chooses. Type the correct move to score a point. The game lasts {max_rounds} rounds."
    )
}

pub fn prompt_line(target: Outcome) -> String {
    format!("Select the correct choice to {target} the game!")
}

pub fn game_over_message(summary: &GameSummary) -> String {
    format!(
        "Game Over! Your final score is {} ({} correct, {} wrong)",
        summary.final_score, summary.correct, summary.incorrect
    )
}
