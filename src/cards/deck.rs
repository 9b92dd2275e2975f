//! Number card stock.
//!
//! The `Deck` tracks how many cards of each value (0..=10) remain. Cards
//! are checked out when placed on the board and returned when removed.
//! Operator cards are unlimited and never touch the deck.
//!
//! ## Usage
//!
//! ```
//! use target_x::cards::{CardValue, Deck};
//!
//! let mut deck = Deck::standard();
//! let seven = CardValue::new(7).unwrap();
//!
//! assert!(deck.try_draw(seven).is_ok());
//! assert!(deck.try_draw(seven).is_ok());
//! assert!(deck.try_draw(seven).is_err()); // only two copies
//!
//! deck.return_card(seven);
//! assert_eq!(deck.remaining(seven), 1);
//! ```

use serde::{Deserialize, Serialize};

use super::card::CardValue;
use crate::core::PlacementError;

/// Remaining stock per card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Deck {
    counts: [u8; CardValue::COUNT],
    copies: u8,
}

impl Deck {
    /// Copies per value in a standard deck.
    pub const STANDARD_COPIES: u8 = 2;

    /// Create a deck with `copies` cards of every value.
    #[must_use]
    pub const fn new(copies: u8) -> Self {
        Self {
            counts: [copies; CardValue::COUNT],
            copies,
        }
    }

    /// Create a standard deck (two of each value).
    #[must_use]
    pub const fn standard() -> Self {
        Self::new(Self::STANDARD_COPIES)
    }

    /// Copies per value this deck started with.
    #[must_use]
    pub const fn copies_per_value(&self) -> u8 {
        self.copies
    }

    /// Cards of `value` still available.
    #[must_use]
    pub const fn remaining(&self, value: CardValue) -> u8 {
        self.counts[value.index()]
    }

    /// Remaining counts indexed by value.
    #[must_use]
    pub const fn counts(&self) -> &[u8; CardValue::COUNT] {
        &self.counts
    }

    /// Total number cards left across all values.
    #[must_use]
    pub fn total_remaining(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// True when no number card of any value is left.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Check out one card of `value`.
    ///
    /// Leaves the deck unchanged and returns `OutOfStock` when none remain.
    pub fn try_draw(&mut self, value: CardValue) -> Result<(), PlacementError> {
        let count = &mut self.counts[value.index()];
        if *count == 0 {
            return Err(PlacementError::OutOfStock { value });
        }
        *count -= 1;
        Ok(())
    }

    /// Put one card of `value` back.
    pub fn return_card(&mut self, value: CardValue) {
        let count = &mut self.counts[value.index()];
        *count = count.saturating_add(1);
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}
