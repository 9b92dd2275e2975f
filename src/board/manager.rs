//! Board: the deck and the expression moved in lockstep.
//!
//! The `Board` is the only way to change either half, which keeps the
//! checkout bookkeeping honest: every number token in the expression was
//! drawn from the deck, and removing it puts it back.
//!
//! ## Usage
//!
//! ```
//! use target_x::board::Board;
//! use target_x::cards::{Deck, Operator, Token};
//!
//! let mut board = Board::new(Deck::standard());
//! board.append(Token::number(0, 5)).unwrap();
//! board.append(Token::operator(1, Operator::Plus)).unwrap();
//! board.append(Token::number(2, 2)).unwrap();
//!
//! assert_eq!(board.value().and_then(|v| v.as_integer()), Some(7));
//! assert_eq!(board.deck().total_remaining(), 20);
//!
//! board.clear();
//! assert_eq!(board.deck().total_remaining(), 22);
//! ```

use im::Vector;
use tracing::debug;

use super::expression::Expression;
use crate::cards::{CardValue, Deck, Token};
use crate::core::PlacementError;
use crate::expr::Value;

/// Deck plus in-progress expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    deck: Deck,
    expression: Expression,
}

impl Board {
    /// Create a board with an empty expression.
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            expression: Expression::new(),
        }
    }

    /// Remaining stock.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The expression being built.
    #[must_use]
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Current value of the expression.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        self.expression.value()
    }

    /// Number tokens of `value` currently placed.
    #[must_use]
    pub fn checked_out(&self, value: CardValue) -> usize {
        self.expression.numbers().filter(|&v| v == value).count()
    }

    /// Place a token at the end of the expression.
    ///
    /// Number tokens draw from the deck; operators are free. On error
    /// neither the deck nor the expression changes.
    pub fn append(&mut self, token: Token) -> Result<(), PlacementError> {
        if let Err(err) = self.expression.accepts(&token.card) {
            debug!(card = %token.card, "placement rejected: {err}");
            return Err(err);
        }
        if let Some(value) = token.value() {
            if let Err(err) = self.deck.try_draw(value) {
                debug!(card = %token.card, "placement rejected: {err}");
                return Err(err);
            }
        }
        self.expression.push(token);
        Ok(())
    }

    /// Remove the last token, returning a number card to the deck.
    pub fn remove_last(&mut self) -> Option<Token> {
        let token = self.expression.pop()?;
        if let Some(value) = token.value() {
            self.deck.return_card(value);
        }
        Some(token)
    }

    /// Return every placed number to the deck and empty the expression.
    ///
    /// Returns how many tokens were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.expression.take();
        for value in removed.iter().filter_map(Token::value) {
            self.deck.return_card(value);
        }
        removed.len()
    }

    /// Empty the expression without returning its numbers.
    ///
    /// Used when a level is won: the cards in the winning expression are
    /// spent for the rest of the session.
    pub fn spend(&mut self) -> Vector<Token> {
        self.expression.take()
    }
}
