//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::moves::Outcome;

/// Number of rounds in a standard game.
pub const MAX_ROUNDS: u32 = 10;

/// Configuration errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("max_rounds must be at least 1")]
    ZeroRounds,
}

/// Round engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rounds per game. The game ends once the last round's move is submitted.
    pub max_rounds: u32,

    /// Target outcome before the first toggle.
    /// The default `Lose` makes round 1 a `Win` round.
    pub initial_outcome: Outcome,

    /// Seed for the machine-move RNG.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
            initial_outcome: Outcome::Lose,
            seed: 42,
        }
    }
}

impl EngineConfig {
    /// Create a new config with a custom round count.
    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = rounds;
        self
    }

    /// Create a new config with a custom pre-toggle outcome.
    pub fn with_initial_outcome(mut self, outcome: Outcome) -> Self {
        self.initial_outcome = outcome;
        self
    }

    /// Create a new config with a custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Target outcome of round 1.
    pub fn first_round_outcome(&self) -> Outcome {
        self.initial_outcome.toggled()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.max_rounds, 10);
        assert_eq!(config.initial_outcome, Outcome::Lose);
        assert_eq!(config.first_round_outcome(), Outcome::Win);
        assert_eq!(config.seed, 42);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EngineConfig::default()
            .with_max_rounds(3)
            .with_initial_outcome(Outcome::Win)
            .with_seed(123);

        assert_eq!(config.max_rounds, 3);
        assert_eq!(config.first_round_outcome(), Outcome::Lose);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let config = EngineConfig::default().with_max_rounds(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRounds));
    }

    #[test]
    fn test_serialization() {
        let config = EngineConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
