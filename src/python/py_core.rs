//! Value type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Move, RoundRecord, RoundState};
use crate::rules::MoveResult;

/// Parse a move name, raising `ValueError` on bad input.
pub(crate) fn parse_move(name: &str) -> PyResult<Move> {
    name.parse::<Move>()
        .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))
}

/// Python view of a round snapshot.
#[pyclass(name = "RoundState", frozen)]
#[derive(Clone, Debug)]
pub struct PyRoundState(pub RoundState);

#[pymethods]
impl PyRoundState {
    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    /// Machine move as a lowercase name.
    #[getter]
    fn machine_move(&self) -> &'static str {
        self.0.machine_move.name()
    }

    /// "WIN" or "LOSE".
    #[getter]
    fn target_outcome(&self) -> String {
        self.0.target_outcome.to_string()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    fn __repr__(&self) -> String {
        format!(
            "RoundState(round={}, machine_move={}, target={}, score={}, game_over={})",
            self.0.round, self.0.machine_move.name(), self.0.target_outcome, self.0.score, self.0.game_over
        )
    }
}

/// Python view of a submission result.
#[pyclass(name = "MoveResult", frozen)]
#[derive(Clone, Debug)]
pub struct PyMoveResult(pub MoveResult);

#[pymethods]
impl PyMoveResult {
    #[getter]
    fn correct(&self) -> bool {
        self.0.correct
    }

    #[getter]
    fn score(&self) -> u32 {
        self.0.score
    }

    #[getter]
    fn game_over(&self) -> bool {
        self.0.game_over
    }

    /// False if the move was ignored (game over or not started).
    #[getter]
    fn scored(&self) -> bool {
        self.0.was_scored()
    }

    fn __repr__(&self) -> String {
        format!(
            "MoveResult(correct={}, score={}, game_over={})",
            self.0.correct, self.0.score, self.0.game_over
        )
    }
}

/// Python view of one history entry.
#[pyclass(name = "RoundRecord", frozen)]
#[derive(Clone, Debug)]
pub struct PyRoundRecord(pub RoundRecord);

#[pymethods]
impl PyRoundRecord {
    #[getter]
    fn round(&self) -> u32 {
        self.0.round
    }

    #[getter]
    fn machine_move(&self) -> &'static str {
        self.0.machine_move.name()
    }

    #[getter]
    fn player_move(&self) -> &'static str {
        self.0.player_move.name()
    }

    #[getter]
    fn target_outcome(&self) -> String {
        self.0.target_outcome.to_string()
    }

    #[getter]
    fn correct(&self) -> bool {
        self.0.correct
    }

    #[getter]
    fn score_after(&self) -> u32 {
        self.0.score_after
    }
}
