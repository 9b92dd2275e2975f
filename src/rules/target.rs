//! Target generation.
//!
//! Targets are drawn uniformly from a range that widens and climbs with
//! the level. CUSTOM difficulty has no range: the player types each
//! target, and the generator only returns a placeholder.

use std::ops::RangeInclusive;

use crate::core::GameRng;
use crate::session::Difficulty;

/// Placeholder target for CUSTOM difficulty, overwritten by the player.
pub const CUSTOM_PLACEHOLDER: i64 = 0;

/// Inclusive target range for `level`, `None` for CUSTOM.
///
/// | Tier   | Low        | High        |
/// |--------|------------|-------------|
/// | EASY   | 1 + 2·L    | 20 + 5·L    |
/// | MEDIUM | 10 + 5·L   | 50 + 10·L   |
/// | HARD   | 25 + 10·L  | 100 + 20·L  |
#[must_use]
pub fn target_range(level: u32, difficulty: Difficulty) -> Option<RangeInclusive<i64>> {
    let l = i64::from(level);
    let range = match difficulty {
        Difficulty::Easy => (1 + 2 * l)..=(20 + 5 * l),
        Difficulty::Medium => (10 + 5 * l)..=(50 + 10 * l),
        Difficulty::Hard => (25 + 10 * l)..=(100 + 20 * l),
        Difficulty::Custom => return None,
    };
    Some(range)
}

/// Roll a target for `level`.
pub fn generate_target(level: u32, difficulty: Difficulty, rng: &mut GameRng) -> i64 {
    match target_range(level, difficulty) {
        Some(range) => rng.gen_inclusive(range),
        None => CUSTOM_PLACEHOLDER,
    }
}

/// Source of level targets consumed by the session.
///
/// Implemented by [`SeededTargets`] and by any
/// `FnMut(u32, Difficulty) -> i64`, which makes fixed targets easy to
/// inject:
///
/// ```
/// use target_x::rules::TargetGenerator;
/// use target_x::session::Difficulty;
///
/// let mut always_seven = |_level: u32, _d: Difficulty| 7_i64;
/// assert_eq!(always_seven.generate(3, Difficulty::Hard), 7);
/// ```
pub trait TargetGenerator {
    /// Target for `level` at `difficulty`.
    fn generate(&mut self, level: u32, difficulty: Difficulty) -> i64;
}

impl<F> TargetGenerator for F
where
    F: FnMut(u32, Difficulty) -> i64,
{
    fn generate(&mut self, level: u32, difficulty: Difficulty) -> i64 {
        self(level, difficulty)
    }
}

/// Random targets from a seeded RNG.
#[derive(Clone, Debug)]
pub struct SeededTargets {
    rng: GameRng,
}

impl SeededTargets {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl TargetGenerator for SeededTargets {
    fn generate(&mut self, level: u32, difficulty: Difficulty) -> i64 {
        generate_target(level, difficulty, &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_bounds() {
        let mut rng = GameRng::new(42);

        for level in 1..=50 {
            let low = 1 + 2 * i64::from(level);
            let high = 20 + 5 * i64::from(level);
            for _ in 0..20 {
                let target = generate_target(level, Difficulty::Easy, &mut rng);
                assert!((low..=high).contains(&target), "level {level}: {target}");
            }
        }
    }

    #[test]
    fn test_bounds_never_decrease() {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut previous = target_range(1, difficulty).unwrap();
            for level in 2..=100 {
                let range = target_range(level, difficulty).unwrap();
                assert!(range.start() >= previous.start());
                assert!(range.end() >= previous.end());
                assert!(range.start() <= range.end());
                previous = range;
            }
        }
    }

    #[test]
    fn test_tier_ranges_at_level_one() {
        assert_eq!(target_range(1, Difficulty::Easy), Some(3..=25));
        assert_eq!(target_range(1, Difficulty::Medium), Some(15..=60));
        assert_eq!(target_range(1, Difficulty::Hard), Some(35..=120));
    }

    #[test]
    fn test_custom_placeholder() {
        let mut rng = GameRng::new(1);
        assert_eq!(target_range(4, Difficulty::Custom), None);
        assert_eq!(generate_target(4, Difficulty::Custom, &mut rng), CUSTOM_PLACEHOLDER);
    }

    #[test]
    fn test_seeded_targets_are_deterministic() {
        let mut a = SeededTargets::new(9);
        let mut b = SeededTargets::new(9);

        for level in 1..=10 {
            assert_eq!(
                a.generate(level, Difficulty::Medium),
                b.generate(level, Difficulty::Medium)
            );
        }
    }

    #[test]
    fn test_closure_generator() {
        let mut calls = Vec::new();
        let mut generator = |level: u32, difficulty: Difficulty| {
            calls.push((level, difficulty));
            10 * i64::from(level)
        };

        assert_eq!(generator.generate(2, Difficulty::Easy), 20);
        assert_eq!(calls, vec![(2, Difficulty::Easy)]);
    }
}
