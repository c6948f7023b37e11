//! Random move sources.
//!
//! The engine never touches a global RNG. It draws machine moves from a
//! [`MoveSource`], which is either:
//!
//! - [`GameRng`]: seeded ChaCha8, uniform over the three moves
//! - [`ScriptedMoves`]: a fixed, cycling sequence for tests and demos
//!
//! ```
//! use rps_brain::core::{GameRng, Move, MoveSource};
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! // Same seed, same machine moves
//! let seq_a: Vec<Move> = (0..10).map(|_| a.next_move()).collect();
//! let seq_b: Vec<Move> = (0..10).map(|_| b.next_move()).collect();
//! assert_eq!(seq_a, seq_b);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Anything that can pick the machine's move for a round.
pub trait MoveSource {
    /// Draw the next machine move.
    fn next_move(&mut self) -> Move;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Move {
        (**self).next_move()
    }
}

/// Deterministic RNG for machine moves.
///
/// Uses ChaCha8 so a seed reproduces a whole game, and the stream position
/// can be captured with [`GameRng::state`].
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from an OS-random seed.
    ///
    /// The seed is still recorded, so the game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl MoveSource for GameRng {
    fn next_move(&mut self) -> Move {
        Move::ALL[self.gen_range_usize(0..Move::ALL.len())]
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of
/// how many moves have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

/// Replays a fixed sequence of machine moves, wrapping at the end.
///
/// An empty script always yields `Move::Rock`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    cursor: usize,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            cursor: 0,
        }
    }

    /// A script that always plays the same move.
    pub fn repeat(m: Move) -> Self {
        Self::new([m])
    }

    /// Number of moves drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        if self.moves.is_empty() {
            return Move::Rock;
        }
        let m = self.moves[self.cursor % self.moves.len()];
        self.cursor += 1;
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_move(), rng2.next_move());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..32).map(|_| rng1.next_move()).collect();
        let seq2: Vec<_> = (0..32).map(|_| rng2.next_move()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_draws_cover_all_moves() {
        let mut rng = GameRng::new(42);
        let mut counts = [0usize; 3];

        for _ in 0..3000 {
            counts[rng.next_move().index()] += 1;
        }

        // Roughly uniform: each move near 1000 draws
        for count in counts {
            assert!((800..1200).contains(&count), "skewed draw counts: {counts:?}");
        }
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let chosen = rng.choose(&Move::ALL);
        assert!(chosen.is_some());

        let empty: Vec<Move> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.next_move();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_move()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_move()).collect();

        assert_eq!(expected, actual);
        assert_eq!(restored.seed(), 42);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_moves_cycle() {
        let mut script = ScriptedMoves::new([Move::Rock, Move::Scissors]);
        assert_eq!(script.next_move(), Move::Rock);
        assert_eq!(script.next_move(), Move::Scissors);
        assert_eq!(script.next_move(), Move::Rock);
        assert_eq!(script.drawn(), 3);
    }

    #[test]
    fn test_empty_script_defaults_to_rock() {
        let mut script = ScriptedMoves::default();
        assert_eq!(script.next_move(), Move::Rock);
        assert_eq!(script.drawn(), 0);
    }

    #[test]
    fn test_boxed_and_borrowed_sources() {
        fn draw<S: MoveSource>(mut source: S) -> Move {
            source.next_move()
        }

        let mut script = ScriptedMoves::repeat(Move::Paper);
        assert_eq!(draw(&mut script), Move::Paper);
        assert_eq!(script.drawn(), 1);

        let boxed: Box<dyn MoveSource> = Box::new(script);
        assert_eq!(draw(boxed), Move::Paper);
    }
}
