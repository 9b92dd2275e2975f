//! The in-progress expression.
//!
//! Stored as a persistent `im::Vector` so snapshots clone in O(1).
//! The only invariant is structural: two number tokens are never
//! adjacent. Stock bookkeeping lives in [`Board`](super::Board).

use im::Vector;
use serde::Serialize;

use crate::cards::{Card, CardValue, Token};
use crate::core::PlacementError;
use crate::expr::{self, Value};

/// Ordered sequence of placed tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Expression {
    tokens: Vector<Token>,
}

impl Expression {
    /// Create an empty expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether nothing has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Most recently placed token.
    #[must_use]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    /// Placed tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &Vector<Token> {
        &self.tokens
    }

    /// Iterate over placed tokens.
    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    /// Values of the number tokens, in order.
    pub fn numbers(&self) -> impl Iterator<Item = CardValue> + '_ {
        self.tokens.iter().filter_map(Token::value)
    }

    /// Check the adjacency rule for placing `card` next.
    pub fn accepts(&self, card: &Card) -> Result<(), PlacementError> {
        match self.last() {
            Some(last) if last.is_number() && card.is_number() => {
                Err(PlacementError::AdjacentNumbers)
            }
            _ => Ok(()),
        }
    }

    /// Current value, `None` when empty or invalid.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        expr::evaluate(&self.tokens)
    }

    /// Cards joined by spaces, as shown to the player.
    #[must_use]
    pub fn render(&self) -> String {
        self.tokens
            .iter()
            .map(Token::display)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn push(&mut self, token: Token) {
        debug_assert!(self.accepts(&token.card).is_ok());
        self.tokens.push_back(token);
    }

    pub(crate) fn pop(&mut self) -> Option<Token> {
        self.tokens.pop_back()
    }

    pub(crate) fn take(&mut self) -> Vector<Token> {
        std::mem::take(&mut self.tokens)
    }
}

impl<'a> IntoIterator for &'a Expression {
    type Item = &'a Token;
    type IntoIter = im::vector::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
