//! Session configuration.
//!
//! Games are configured at startup by providing a `GameConfig`:
//! - Deck size (`copies_per_value`)
//! - Pacing (`tick_interval`, `win_settle_delay`, message lifetimes)
//! - RACE clock budgets per difficulty
//! - Target RNG seed
//!
//! The synchronous session only reads the deck, budget and settle-delay
//! fields. The remaining durations drive the runtime's scheduled tasks.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::session::{Difficulty, Severity};

/// Countdown budget, in seconds, for RACE mode per difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceBudgets {
    pub easy: u32,
    pub medium: u32,
    pub hard: u32,
    /// CUSTOM has no tier of its own and falls back to one minute.
    pub custom: u32,
}

impl RaceBudgets {
    /// Budget for the given difficulty.
    #[must_use]
    pub const fn for_difficulty(&self, difficulty: Difficulty) -> u32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
            Difficulty::Custom => self.custom,
        }
    }
}

impl Default for RaceBudgets {
    fn default() -> Self {
        Self {
            easy: 60,
            medium: 120,
            hard: 240,
            custom: 60,
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number cards of each value (0..=10) in a fresh deck.
    pub copies_per_value: u8,

    /// Pause between a matching expression and the level completing.
    ///
    /// `Duration::ZERO` completes the level inside the action that matched.
    pub win_settle_delay: Duration,

    /// Period of the session clock.
    pub tick_interval: Duration,

    /// How long a success message stays visible.
    pub success_message_ttl: Duration,

    /// How long an error message stays visible.
    pub error_message_ttl: Duration,

    /// RACE countdown budgets.
    pub race_budgets: RaceBudgets,

    /// Seed for target generation.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            copies_per_value: 2,
            win_settle_delay: Duration::from_millis(500),
            tick_interval: Duration::from_secs(1),
            success_message_ttl: Duration::from_secs(2),
            error_message_ttl: Duration::from_millis(1500),
            race_budgets: RaceBudgets::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of copies per card value.
    #[must_use]
    pub fn with_copies_per_value(mut self, copies: u8) -> Self {
        self.copies_per_value = copies;
        self
    }

    /// Set the win settle delay.
    #[must_use]
    pub fn with_win_settle_delay(mut self, delay: Duration) -> Self {
        self.win_settle_delay = delay;
        self
    }

    /// Complete levels as soon as the expression matches.
    #[must_use]
    pub fn instant_wins(self) -> Self {
        self.with_win_settle_delay(Duration::ZERO)
    }

    /// Set the clock period.
    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Tick interval must be non-zero");
        self.tick_interval = interval;
        self
    }

    /// Set the RACE budgets.
    #[must_use]
    pub fn with_race_budgets(mut self, budgets: RaceBudgets) -> Self {
        self.race_budgets = budgets;
        self
    }

    /// Set the target RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Countdown budget for RACE mode at `difficulty`.
    #[must_use]
    pub fn race_budget(&self, difficulty: Difficulty) -> u32 {
        self.race_budgets.for_difficulty(difficulty)
    }

    /// How long a message of `severity` stays visible.
    #[must_use]
    pub fn message_ttl(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Error => self.error_message_ttl,
            Severity::Info | Severity::Success => self.success_message_ttl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();

        assert_eq!(config.copies_per_value, 2);
        assert_eq!(config.win_settle_delay, Duration::from_millis(500));
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.success_message_ttl, Duration::from_secs(2));
        assert_eq!(config.error_message_ttl, Duration::from_millis(1500));
    }

    #[test]
    fn test_race_budgets() {
        let config = GameConfig::default();

        assert_eq!(config.race_budget(Difficulty::Easy), 60);
        assert_eq!(config.race_budget(Difficulty::Medium), 120);
        assert_eq!(config.race_budget(Difficulty::Hard), 240);
        assert_eq!(config.race_budget(Difficulty::Custom), 60);
    }

    #[test]
    fn test_message_ttl() {
        let config = GameConfig::default();

        assert_eq!(config.message_ttl(Severity::Error), Duration::from_millis(1500));
        assert_eq!(config.message_ttl(Severity::Success), Duration::from_secs(2));
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new()
            .with_copies_per_value(3)
            .instant_wins()
            .with_seed(7)
            .with_race_budgets(RaceBudgets {
                easy: 5,
                ..RaceBudgets::default()
            });

        assert_eq!(config.copies_per_value, 3);
        assert!(config.win_settle_delay.is_zero());
        assert_eq!(config.seed, 7);
        assert_eq!(config.race_budget(Difficulty::Easy), 5);
        assert_eq!(config.race_budget(Difficulty::Hard), 240);
    }

    #[test]
    #[should_panic(expected = "Tick interval must be non-zero")]
    fn test_zero_tick_interval() {
        let _ = GameConfig::new().with_tick_interval(Duration::ZERO);
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
