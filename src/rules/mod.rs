//! Round engine: game lifecycle, scoring and round advance.
//!
//! `RoundEngine` is the only stateful piece of the crate:
//! - `new_game` resets and draws round 1
//! - `submit_move` scores a move against the round's target and advances
//! - `current_state` snapshots what a presentation layer renders
//!
//! Dialogs are not the engine's business; it returns `EngineEvent`s instead.

pub mod engine;
pub mod result;

pub use engine::RoundEngine;
pub use result::{EngineEvent, GameSummary, MoveResult, MoveStatus};
