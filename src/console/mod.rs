//! Line-oriented terminal front end.
//!
//! Drives a [`RoundEngine`] over any `BufRead`/`Write` pair, so the same code
//! serves stdin/stdout and in-memory transcripts in tests.

mod messages;

pub use messages::{game_over_message, prompt_line, welcome_message};

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::core::{Move, MoveSource};
use crate::rules::{EngineEvent, MoveStatus, RoundEngine};

/// Totals across every game played in one console session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionReport {
    /// Games that reached game over.
    pub games_completed: u32,
    /// Final score of each completed game, in order.
    pub final_scores: Vec<u32>,
}

enum Input {
    Move(Move),
    Quit,
    Invalid(String),
    Eof,
}

/// Console session over an engine and an input/output pair.
pub struct Console<S, R, W> {
    engine: RoundEngine<S>,
    input: R,
    output: W,
}

impl<S: MoveSource, R: BufRead, W: Write> Console<S, R, W> {
    pub fn new(engine: RoundEngine<S>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    /// Play games until the player quits, declines a rematch, or input ends.
    pub fn run(&mut self) -> io::Result<SessionReport> {
        let mut report = SessionReport::default();

        loop {
            if let EngineEvent::Welcome { max_rounds } = self.engine.new_game() {
                writeln!(self.output, "{}", welcome_message(max_rounds))?;
            }

            let Some(final_score) = self.play_game()? else {
                break;
            };
            report.games_completed += 1;
            report.final_scores.push(final_score);

            if !self.ask_play_again()? {
                break;
            }
        }

        info!(games = report.games_completed, "console session finished");
        Ok(report)
    }

    /// Play one game. Returns the final score, or `None` if the player left early.
    fn play_game(&mut self) -> io::Result<Option<u32>> {
        loop {
            let Some(state) = self.engine.current_state() else {
                return Ok(None);
            };

            writeln!(self.output)?;
            writeln!(self.output, "Round: {}", state.round)?;
            writeln!(self.output, "{}", prompt_line(state.target_outcome))?;
            writeln!(self.output, "App's Choice: {}", state.machine_move)?;
            writeln!(self.output, "Player's Score: {}", state.score)?;

            let player_move = loop {
                write!(self.output, "Your move [rock/paper/scissors, q to quit]: ")?;
                self.output.flush()?;

                match self.read_input()? {
                    Input::Move(m) => break m,
                    Input::Quit | Input::Eof => return Ok(None),
                    Input::Invalid(reason) => writeln!(self.output, "{reason}")?,
                }
            };

            let result = self.engine.submit_move(player_move);
            if result.status != MoveStatus::Scored {
                continue;
            }

            if result.correct {
                writeln!(self.output, "Correct! +1")?;
            } else {
                writeln!(self.output, "Wrong! Score: {}", result.score)?;
            }

            if let Some(EngineEvent::GameOver(summary)) = result.event {
                writeln!(self.output)?;
                writeln!(self.output, "{}", game_over_message(&summary))?;
                return Ok(Some(summary.final_score));
            }
        }
    }

    fn ask_play_again(&mut self) -> io::Result<bool> {
        write!(self.output, "Play again? [y/N]: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(false);
        }
        Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
    }

    fn read_input(&mut self) -> io::Result<Input> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(Input::Eof);
        }

        let trimmed = line.trim();
        if matches!(trimmed, "q" | "quit") {
            return Ok(Input::Quit);
        }

        Ok(match trimmed.parse::<Move>() {
            Ok(m) => Input::Move(m),
            Err(err) => {
                debug!(%err, "rejected console input");
                Input::Invalid(err.to_string())
            }
        })
    }

    pub fn engine(&self) -> &RoundEngine<S> {
        &self.engine
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}
