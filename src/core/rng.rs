//! Seeded randomness for the two random decisions in a round: which root
//! word a new game gets, and how much a rejection costs.
//!
//! Each decision draws from its own named stream derived from the game
//! seed, so penalties taken during one round never change the root word of
//! the next. A stream's position can be checkpointed and resumed.
//!
//! ```
//! use word_scramble::core::GameRng;
//!
//! let mut penalties = GameRng::stream(42, "penalty");
//! let checkpoint = penalties.checkpoint();
//! let first = penalties.draw(0..6);
//!
//! let mut replay = GameRng::resume(&checkpoint);
//! assert_eq!(replay.draw(0..6), first);
//! ```

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use std::ops::Range;

/// One named ChaCha8 stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    stream_seed: u64,
}

impl GameRng {
    /// The stream called `name` for a game seeded with `seed`.
    ///
    /// Derivation uses `FxHasher`, which is stable across builds, so a seed
    /// replays the same game on any machine.
    #[must_use]
    pub fn stream(seed: u64, name: &str) -> Self {
        let mut hasher = FxHasher::default();
        seed.hash(&mut hasher);
        name.hash(&mut hasher);
        let stream_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(stream_seed),
            stream_seed,
        }
    }

    /// Uniform draw from a non-empty half-open range.
    pub fn draw(&mut self, range: Range<i64>) -> i64 {
        self.inner.gen_range(range)
    }

    /// Uniform pick from `items`, `None` when it is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    /// Where this stream is now.
    #[must_use]
    pub fn checkpoint(&self) -> RngCheckpoint {
        RngCheckpoint {
            stream_seed: self.stream_seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Continue a stream from a checkpoint.
    #[must_use]
    pub fn resume(checkpoint: &RngCheckpoint) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(checkpoint.stream_seed);
        inner.set_word_pos(checkpoint.word_pos);
        Self {
            inner,
            stream_seed: checkpoint.stream_seed,
        }
    }
}

/// Position of a stream: its derived seed and ChaCha8 word counter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RngCheckpoint {
    pub stream_seed: u64,
    pub word_pos: u128,
}
