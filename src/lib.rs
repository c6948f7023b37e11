//! # rps-brain
//!
//! Rock-paper-scissors brain challenge. Each round the app picks a move and
//! asks the player to either WIN or LOSE against it; the player scores a point
//! for the right answer and loses one (never below zero) for a wrong one.
//! A game lasts ten rounds.
//!
//! ## Design Principles
//!
//! 1. **Owned State**: One `RoundEngine` per session, no statics.
//!
//! 2. **Injected Randomness**: Machine moves come from a `MoveSource`, so
//!    games replay from a seed or from a script.
//!
//! 3. **Events, Not Dialogs**: The engine returns `EngineEvent`s
//!    (welcome, game over); front ends decide how to show them.
//!
//! ## Modules
//!
//! - `core`: Moves, outcomes, move sources, configuration, state snapshots
//! - `rules`: The round engine
//! - `console`: Terminal front end used by the `rps-brain` binary
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod rules;
pub mod console;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Move, Outcome, ParseMoveError, ParseOutcomeError,
    GameRng, GameRngState, MoveSource, ScriptedMoves,
    ConfigError, EngineConfig, MAX_ROUNDS,
    Phase, RoundRecord, RoundState,
};

pub use crate::rules::{EngineEvent, GameSummary, MoveResult, MoveStatus, RoundEngine};

pub use crate::console::{Console, SessionReport};
