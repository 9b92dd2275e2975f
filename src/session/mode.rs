//! Game modes and difficulty tiers.

use serde::{Deserialize, Serialize};

/// Which game is being played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// No game running.
    #[default]
    Menu,
    /// Endless levels on one deck, clock counts up.
    Infinity,
    /// A single scored round.
    Point,
    /// Endless levels against a countdown.
    Race,
}

impl GameMode {
    /// The three playable modes.
    pub const PLAYABLE: [GameMode; 3] = [GameMode::Infinity, GameMode::Point, GameMode::Race];

    /// Whether the clock counts down in this mode.
    #[must_use]
    pub const fn counts_down(self) -> bool {
        matches!(self, GameMode::Race)
    }

    /// Whether the session ends after the first solved level.
    #[must_use]
    pub const fn single_round(self) -> bool {
        matches!(self, GameMode::Point)
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameMode::Menu => "menu",
            GameMode::Infinity => "infinity",
            GameMode::Point => "point",
            GameMode::Race => "race",
        };
        f.write_str(label)
    }
}

/// Difficulty tier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
    /// The player picks every target.
    Custom,
}

impl Difficulty {
    /// All tiers in menu order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Custom,
    ];

    /// Whether targets come from the player instead of the generator.
    #[must_use]
    pub const fn is_custom(self) -> bool {
        matches!(self, Difficulty::Custom)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Custom => "custom",
        };
        f.write_str(label)
    }
}
