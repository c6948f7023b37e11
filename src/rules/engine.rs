//! The round engine.

use tracing::{debug, trace};

use crate::core::{
    ConfigError, EngineConfig, GameRng, Move, MoveSource, Outcome, Phase, RoundRecord, RoundState,
};

use super::result::{EngineEvent, GameSummary, MoveResult, MoveStatus};

/// Finite-state machine for one player's game session.
///
/// Owns the round counter, machine move, target outcome, and score.
/// Presentation layers drive it through [`new_game`](Self::new_game) and
/// [`submit_move`](Self::submit_move) and render [`current_state`](Self::current_state).
///
/// ## Lifecycle
///
/// - `NotStarted` until the first `new_game()`
/// - `InProgress` for rounds `1..=max_rounds`
/// - `GameOver` once the last round's move is scored; only `new_game()` leaves it
///
/// ## Example
///
/// ```
/// use rps_brain::core::{Move, Outcome, ScriptedMoves};
/// use rps_brain::rules::RoundEngine;
///
/// let mut engine = RoundEngine::with_source(Default::default(), ScriptedMoves::repeat(Move::Rock)).unwrap();
/// engine.new_game();
///
/// let state = engine.current_state().unwrap();
/// assert_eq!(state.round, 1);
/// assert_eq!(state.target_outcome, Outcome::Win);
///
/// let result = engine.submit_move(Move::Paper);
/// assert!(result.correct);
/// assert_eq!(result.score, 1);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine<S = GameRng> {
    config: EngineConfig,
    source: S,
    phase: Phase,
    round: u32,
    machine_move: Move,
    target_outcome: Outcome,
    score: u32,
    history: Vec<RoundRecord>,
}

impl RoundEngine<GameRng> {
    /// Create an engine whose machine moves come from `config.seed`.
    pub fn from_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Default ten-round engine with the given seed.
    pub fn seeded(seed: u64) -> Self {
        let config = EngineConfig::default().with_seed(seed);
        let rng = GameRng::new(seed);
        Self::build(config, rng)
    }
}

impl<S: MoveSource> RoundEngine<S> {
    /// Create an engine drawing machine moves from `source`.
    ///
    /// `config.seed` is ignored; the source decides the moves.
    pub fn with_source(config: EngineConfig, source: S) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, source))
    }

    fn build(config: EngineConfig, source: S) -> Self {
        Self {
            target_outcome: config.initial_outcome,
            config,
            source,
            phase: Phase::NotStarted,
            round: 0,
            machine_move: Move::Rock,
            score: 0,
            history: Vec::new(),
        }
    }

    /// Start a fresh game at round 1.
    ///
    /// Resets score, round, history and the game-over flag, then draws the
    /// first round. Returns the welcome signal for the presentation layer.
    pub fn new_game(&mut self) -> EngineEvent {
        self.score = 0;
        self.round = 0;
        self.target_outcome = self.config.initial_outcome;
        self.history.clear();
        self.phase = Phase::InProgress;
        self.advance_round();

        debug!(
            max_rounds = self.config.max_rounds,
            machine_move = %self.machine_move,
            target = %self.target_outcome,
            "new game"
        );

        EngineEvent::Welcome {
            max_rounds: self.config.max_rounds,
        }
    }

    /// Score the player's move for the current round and advance.
    ///
    /// After game over (or before any game) this is a no-op that reports
    /// the unchanged score.
    pub fn submit_move(&mut self, player_move: Move) -> MoveResult {
        match self.phase {
            Phase::NotStarted => {
                trace!(%player_move, "move before new game ignored");
                return MoveResult::ignored(MoveStatus::NotStarted, self.score, false);
            }
            Phase::GameOver => {
                trace!(%player_move, "move after game over ignored");
                return MoveResult::ignored(MoveStatus::GameAlreadyOver, self.score, true);
            }
            Phase::InProgress => {}
        }

        let correct = self.target_outcome.is_achieved(player_move, self.machine_move);
        self.score = if correct {
            self.score + 1
        } else {
            self.score.saturating_sub(1)
        };

        self.history.push(RoundRecord {
            round: self.round,
            machine_move: self.machine_move,
            target_outcome: self.target_outcome,
            player_move,
            correct,
            score_after: self.score,
        });

        debug!(
            round = self.round,
            machine_move = %self.machine_move,
            target = %self.target_outcome,
            %player_move,
            correct,
            score = self.score,
            "move scored"
        );

        let event = if self.round >= self.config.max_rounds {
            self.phase = Phase::GameOver;
            let summary = self.build_summary();
            debug!(final_score = summary.final_score, "game over");
            Some(EngineEvent::GameOver(summary))
        } else {
            self.advance_round();
            None
        };

        MoveResult {
            status: MoveStatus::Scored,
            correct,
            score: self.score,
            game_over: self.is_game_over(),
            event,
        }
    }

    /// Snapshot of the current round, or `None` before the first game.
    pub fn current_state(&self) -> Option<RoundState> {
        if self.phase == Phase::NotStarted {
            return None;
        }
        Some(RoundState {
            round: self.round,
            machine_move: self.machine_move,
            target_outcome: self.target_outcome,
            score: self.score,
            game_over: self.is_game_over(),
        })
    }

    fn advance_round(&mut self) {
        self.round += 1;
        self.machine_move = self.source.next_move();
        self.target_outcome = self.target_outcome.toggled();
    }

    fn build_summary(&self) -> GameSummary {
        let correct = self.history.iter().filter(|r| r.correct).count() as u32;
        GameSummary {
            final_score: self.score,
            max_rounds: self.config.max_rounds,
            correct,
            incorrect: self.history.len() as u32 - correct,
        }
    }

    // === Accessors ===

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Scored rounds of the current game, oldest first.
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Final tally, once the game is over.
    pub fn summary(&self) -> Option<GameSummary> {
        self.is_game_over().then(|| self.build_summary())
    }

    /// The machine-move source.
    pub fn source(&self) -> &S {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedMoves;

    fn scripted(moves: &[Move]) -> RoundEngine<ScriptedMoves> {
        RoundEngine::with_source(EngineConfig::default(), ScriptedMoves::new(moves.iter().copied())).unwrap()
    }

    #[test]
    fn test_not_started() {
        let mut engine = scripted(&[Move::Rock]);
        assert_eq!(engine.phase(), Phase::NotStarted);
        assert!(engine.current_state().is_none());

        let result = engine.submit_move(Move::Paper);
        assert_eq!(result.status, MoveStatus::NotStarted);
        assert!(!result.correct);
        assert!(!result.game_over);
        assert_eq!(engine.source().drawn(), 0);
    }

    #[test]
    fn test_new_game_state() {
        let mut engine = scripted(&[Move::Scissors]);
        let event = engine.new_game();

        assert_eq!(event, EngineEvent::Welcome { max_rounds: 10 });
        let state = engine.current_state().unwrap();
        assert_eq!(state.round, 1);
        assert_eq!(state.score, 0);
        assert_eq!(state.machine_move, Move::Scissors);
        assert_eq!(state.target_outcome, Outcome::Win);
        assert!(!state.game_over);
    }

    #[test]
    fn test_correct_move_scores() {
        let mut engine = scripted(&[Move::Rock, Move::Scissors]);
        engine.new_game();

        let result = engine.submit_move(Move::Paper);
        assert_eq!(result.status, MoveStatus::Scored);
        assert!(result.correct);
        assert_eq!(result.score, 1);
        assert!(!result.game_over);
        assert!(result.event.is_none());

        let state = engine.current_state().unwrap();
        assert_eq!(state.round, 2);
        assert_eq!(state.target_outcome, Outcome::Lose);
        assert_eq!(state.machine_move, Move::Scissors);
    }

    #[test]
    fn test_score_floor() {
        let mut engine = scripted(&[Move::Rock]);
        engine.new_game();

        // Tie on a Win round
        let result = engine.submit_move(Move::Rock);
        assert!(!result.correct);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_game_over_after_max_rounds() {
        let config = EngineConfig::default().with_max_rounds(2);
        let mut engine = RoundEngine::with_source(config, ScriptedMoves::repeat(Move::Paper)).unwrap();
        engine.new_game();

        engine.submit_move(Move::Scissors);
        let result = engine.submit_move(Move::Rock);

        assert!(result.correct);
        assert!(result.game_over);
        assert_eq!(
            result.event,
            Some(EngineEvent::GameOver(GameSummary {
                final_score: 2,
                max_rounds: 2,
                correct: 2,
                incorrect: 0,
            }))
        );
        assert_eq!(engine.round(), 2);
        // No draw for a round that never starts
        assert_eq!(engine.source().drawn(), 2);
    }

    #[test]
    fn test_moves_after_game_over_ignored() {
        let config = EngineConfig::default().with_max_rounds(1);
        let mut engine = RoundEngine::with_source(config, ScriptedMoves::repeat(Move::Rock)).unwrap();
        engine.new_game();
        engine.submit_move(Move::Paper);

        let before = engine.current_state();
        let result = engine.submit_move(Move::Paper);

        assert_eq!(result.status, MoveStatus::GameAlreadyOver);
        assert_eq!(result.score, 1);
        assert!(result.game_over);
        assert!(result.event.is_none());
        assert_eq!(engine.current_state(), before);
        assert_eq!(engine.history().len(), 1);
    }

    #[test]
    fn test_history_records() {
        let mut engine = scripted(&[Move::Rock, Move::Scissors]);
        engine.new_game();
        engine.submit_move(Move::Paper);
        engine.submit_move(Move::Scissors);

        let history = engine.history();
        assert_eq!(history.len(), 2);
        assert_eq!(
            history[1],
            RoundRecord {
                round: 2,
                machine_move: Move::Scissors,
                target_outcome: Outcome::Lose,
                player_move: Move::Scissors,
                correct: false,
                score_after: 0,
            }
        );

        engine.new_game();
        assert!(engine.history().is_empty());
        assert!(engine.summary().is_none());
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = EngineConfig::default().with_max_rounds(0);
        assert_eq!(
            RoundEngine::from_config(config).unwrap_err(),
            ConfigError::ZeroRounds
        );
    }

    #[test]
    fn test_seeded_engines_agree() {
        let mut a = RoundEngine::seeded(99);
        let mut b = RoundEngine::seeded(99);
        a.new_game();
        b.new_game();

        for _ in 0..10 {
            assert_eq!(a.current_state(), b.current_state());
            a.submit_move(Move::Rock);
            b.submit_move(Move::Rock);
        }
        assert_eq!(a.summary(), b.summary());
    }

    #[test]
    fn test_initial_outcome_override() {
        let config = EngineConfig::default().with_initial_outcome(Outcome::Win);
        let mut engine = RoundEngine::with_source(config, ScriptedMoves::repeat(Move::Rock)).unwrap();
        engine.new_game();
        assert_eq!(engine.current_state().unwrap().target_outcome, Outcome::Lose);
    }
}
