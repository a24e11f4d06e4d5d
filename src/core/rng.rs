//! Deterministic dice generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical dice
//! - **Forkable**: Every game gets an independent branch of the service RNG
//! - **Serializable**: O(1) state capture and restore, so a persisted game
//!   resumes with the exact dice it would have rolled
//!
//! ```
//! use yamb_engine::core::{DiceSource, GameRng};
//!
//! let mut master = GameRng::new(42);
//! let mut game_a = master.fork();
//! let mut game_b = master.fork();
//!
//! let a: Vec<u8> = (0..10).map(|_| game_a.next_value()).collect();
//! let b: Vec<u8> = (0..10).map(|_| game_b.next_value()).collect();
//! assert_ne!(a, b);
//! assert!(a.iter().all(|v| (1..=6).contains(v)));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Number of faces on a die.
pub const DIE_FACES: u8 = 6;

/// Source of die values in `1..=6`.
///
/// The engine never reaches for ambient randomness; every roll draws from a
/// `DiceSource`, which keeps games reproducible and auditable.
pub trait DiceSource {
    /// Produce the next die value.
    fn next_value(&mut self) -> u8;
}

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping high quality randomness.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

impl DiceSource for GameRng {
    fn next_value(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_FACES)
    }
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        Self::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Fixed, cyclic sequence of die values.
///
/// Used to replay a recorded game or to set up exact dice in tests.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    values: Vec<u8>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a script from die values; wraps around when exhausted.
    pub fn new(values: impl IntoIterator<Item = u8>) -> Self {
        let values: Vec<u8> = values.into_iter().collect();
        assert!(!values.is_empty(), "Scripted dice need at least one value");
        assert!(
            values.iter().all(|v| (1..=DIE_FACES).contains(v)),
            "Scripted die values must be in 1..=6"
        );
        Self { values, cursor: 0 }
    }

    /// Number of values drawn so far.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl DiceSource for ScriptedDice {
    fn next_value(&mut self) -> u8 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
