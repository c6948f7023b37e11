//! Core game types: moves, outcomes, random move sources, configuration, state.
//!
//! Nothing here knows about rounds advancing; that lives in `rules`.

pub mod moves;
pub mod rng;
pub mod config;
pub mod state;

pub use moves::{Move, Outcome, ParseMoveError, ParseOutcomeError};
pub use rng::{GameRng, GameRngState, MoveSource, ScriptedMoves};
pub use config::{ConfigError, EngineConfig, MAX_ROUNDS};
pub use state::{Phase, RoundRecord, RoundState};
