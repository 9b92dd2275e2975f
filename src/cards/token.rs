//! Tokens: cards placed on the board.
//!
//! A `Token` is an immutable placed card plus a session-unique id. The id
//! only exists so a UI can reconcile its list of rendered cards; the rules
//! never look at it.

use serde::{Deserialize, Serialize};

use super::card::{Card, CardValue, Operator};

/// Unique identifier for a placed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TokenId(pub u32);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Whether a token is a number or an operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Number,
    Operator,
}

/// A card placed in the expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub card: Card,
}

impl Token {
    /// Create a token for `card`.
    #[must_use]
    pub const fn new(id: TokenId, card: Card) -> Self {
        Self { id, card }
    }

    /// Convenience constructor for a number token.
    ///
    /// Panics if `value` is above 10.
    #[must_use]
    pub fn number(id: u32, value: u8) -> Self {
        Self::new(TokenId::new(id), Card::number(value))
    }

    /// Convenience constructor for an operator token.
    #[must_use]
    pub const fn operator(id: u32, op: Operator) -> Self {
        Self::new(TokenId::new(id), Card::Operator(op))
    }

    /// Token kind.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self.card {
            Card::Number(_) => TokenKind::Number,
            Card::Operator(_) => TokenKind::Operator,
        }
    }

    /// Whether this is a number token.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        self.card.is_number()
    }

    /// The number value, if this is a number token.
    #[must_use]
    pub const fn value(&self) -> Option<CardValue> {
        self.card.value()
    }

    /// Text shown on the placed card.
    #[must_use]
    pub fn display(&self) -> String {
        self.card.to_string()
    }
}

/// Build a token sequence from cards, numbering ids from zero.
///
/// Handy for evaluating a hand-written expression:
///
/// ```
/// use target_x::cards::{tokens, Card, Operator};
/// use target_x::expr::evaluate;
///
/// let expr = tokens([Card::number(5), Operator::Plus.into(), Card::number(2)]);
/// assert_eq!(evaluate(&expr).and_then(|v| v.as_integer()), Some(7));
/// ```
pub fn tokens(cards: impl IntoIterator<Item = Card>) -> Vec<Token> {
    cards
        .into_iter()
        .enumerate()
        .map(|(i, card)| Token::new(TokenId::new(i as u32), card))
        .collect()
}
