//! Deterministic random number generation for target rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical targets
//!
//! ## Usage
//!
//! ```
//! use target_x::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let roll = rng.gen_inclusive(3..=25);
//! assert!((3..=25).contains(&roll));
//!
//! // Same seed, same rolls
//! let mut again = GameRng::new(42);
//! assert_eq!(again.gen_inclusive(3..=25), roll);
//! ```

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing target generation.
///
/// Uses ChaCha8 for speed while keeping rolls reproducible per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Roll a uniformly distributed integer in `range` (both ends included).
    ///
    /// An empty range (start > end) yields its start.
    pub fn gen_inclusive(&mut self, range: RangeInclusive<i64>) -> i64 {
        if range.is_empty() {
            return *range.start();
        }
        self.inner.gen_range(range)
    }
}
