//! Python bindings for the round engine.
//!
//! # Quick Start
//!
//! ```python
//! import rps_brain
//!
//! engine = rps_brain.RoundEngine(seed=7)
//! engine.new_game()
//!
//! state = engine.current_state()
//! print(state.target_outcome, state.machine_move)
//!
//! result = engine.submit_move("paper")
//! print(result.correct, result.score, result.game_over)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_engine;

pub use py_core::*;
pub use py_engine::*;

/// rps_brain: rock-paper-scissors brain challenge engine.
#[pymodule]
fn rps_brain(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyRoundEngine>()?;
    m.add_class::<PyRoundState>()?;
    m.add_class::<PyMoveResult>()?;
    m.add_class::<PyRoundRecord>()?;
    Ok(())
}
