//! Round engine binding for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{EngineConfig, GameRng};
use crate::rules::{EngineEvent, RoundEngine};

use super::py_core::{parse_move, PyMoveResult, PyRoundRecord, PyRoundState};

/// Python wrapper for RoundEngine.
#[pyclass(name = "RoundEngine")]
pub struct PyRoundEngine {
    engine: RoundEngine<GameRng>,
}

#[pymethods]
impl PyRoundEngine {
    /// Create an engine.
    ///
    /// # Arguments
    /// - seed: RNG seed for the machine's moves
    /// - max_rounds: Rounds per game (at least 1)
    #[new]
    #[pyo3(signature = (seed = 42, max_rounds = 10))]
    fn new(seed: u64, max_rounds: u32) -> PyResult<Self> {
        let config = EngineConfig::default()
            .with_seed(seed)
            .with_max_rounds(max_rounds);
        let engine = RoundEngine::from_config(config)
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?;
        Ok(Self { engine })
    }

    /// Start a new game. Returns the number of rounds to play.
    fn new_game(&mut self) -> u32 {
        match self.engine.new_game() {
            EngineEvent::Welcome { max_rounds } => max_rounds,
            EngineEvent::GameOver(_) => self.engine.config().max_rounds,
        }
    }

    /// Submit a move by name ("rock", "paper", "scissors" or r/p/s).
    fn submit_move(&mut self, name: &str) -> PyResult<PyMoveResult> {
        let player_move = parse_move(name)?;
        Ok(PyMoveResult(self.engine.submit_move(player_move)))
    }

    /// Current round snapshot, or None before the first game.
    fn current_state(&self) -> Option<PyRoundState> {
        self.engine.current_state().map(PyRoundState)
    }

    /// Scored rounds of the current game.
    fn history(&self) -> Vec<PyRoundRecord> {
        self.engine.history().iter().copied().map(PyRoundRecord).collect()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.engine.score()
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.engine.is_game_over()
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundEngine(round={}, score={}, phase={:?})",
            self.engine.round(),
            self.engine.score(),
            self.engine.phase()
        )
    }
}
