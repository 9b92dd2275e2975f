//! Card faces: number cards and operator cards.
//!
//! Number cards carry a value in `0..=10` and are drawn from a limited
//! deck. Operator cards come from an unlimited palette.

use serde::{Deserialize, Serialize};

/// Face value of a number card, always within `0..=10`.
///
/// ```
/// use target_x::cards::CardValue;
///
/// assert_eq!(CardValue::new(10).map(CardValue::get), Some(10));
/// assert!(CardValue::new(11).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardValue(u8);

impl CardValue {
    /// Smallest printed value.
    pub const MIN: u8 = 0;
    /// Largest printed value.
    pub const MAX: u8 = 10;
    /// Number of distinct values.
    pub const COUNT: usize = (Self::MAX - Self::MIN + 1) as usize;

    /// Create a card value, `None` when out of range.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Index into per-value tables.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    /// Iterate over every value, smallest first.
    pub fn all() -> impl Iterator<Item = CardValue> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for CardValue {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("card value {value} is outside 0..=10"))
    }
}

impl From<CardValue> for u8 {
    fn from(value: CardValue) -> Self {
        value.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Operator card symbols.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    /// Exponentiation, `2 ^ 3 = 8`.
    Power,
    /// Square root, placed before its operand: `√ 9 = 3`.
    Sqrt,
    /// Factorial, placed after its operand: `3 ! = 6`.
    Factorial,
    LParen,
    RParen,
}

impl Operator {
    /// The operator palette in display order.
    pub const ALL: [Operator; 9] = [
        Operator::Plus,
        Operator::Minus,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
        Operator::Sqrt,
        Operator::Factorial,
        Operator::LParen,
        Operator::RParen,
    ];

    /// Symbol printed on the card.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "−",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
            Operator::Power => "^",
            Operator::Sqrt => "√",
            Operator::Factorial => "!",
            Operator::LParen => "(",
            Operator::RParen => ")",
        }
    }

    /// Parse a card symbol.
    ///
    /// Accepts the printed symbol as well as the ASCII look-alikes
    /// (`-`, `*`, `x`, `/`) a keyboard host would send.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        let op = match symbol.trim() {
            "+" => Operator::Plus,
            "−" | "-" => Operator::Minus,
            "×" | "*" | "x" => Operator::Multiply,
            "÷" | "/" => Operator::Divide,
            "^" => Operator::Power,
            "√" => Operator::Sqrt,
            "!" => Operator::Factorial,
            "(" => Operator::LParen,
            ")" => Operator::RParen,
            _ => return None,
        };
        Some(op)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A card a player can put on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Card {
    Number(CardValue),
    Operator(Operator),
}

impl Card {
    /// Points an operator card is worth.
    pub const OPERATOR_POINTS: u64 = 10;

    /// Create a number card.
    ///
    /// Panics if `value` is above 10.
    #[must_use]
    pub fn number(value: u8) -> Self {
        match CardValue::new(value) {
            Some(value) => Card::Number(value),
            None => panic!("Number cards range from 0 to 10"),
        }
    }

    /// Create an operator card.
    #[must_use]
    pub const fn operator(op: Operator) -> Self {
        Card::Operator(op)
    }

    /// Whether this is a number card.
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Card::Number(_))
    }

    /// The number value, if this is a number card.
    #[must_use]
    pub const fn value(&self) -> Option<CardValue> {
        match self {
            Card::Number(value) => Some(*value),
            Card::Operator(_) => None,
        }
    }

    /// Points badge: face value for numbers, a flat 10 for operators.
    #[must_use]
    pub const fn points(&self) -> u64 {
        match self {
            Card::Number(value) => value.get() as u64,
            Card::Operator(_) => Self::OPERATOR_POINTS,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Card::Number(value) => write!(f, "{value}"),
            Card::Operator(op) => write!(f, "{op}"),
        }
    }
}

impl From<CardValue> for Card {
    fn from(value: CardValue) -> Self {
        Card::Number(value)
    }
}

impl From<Operator> for Card {
    fn from(op: Operator) -> Self {
        Card::Operator(op)
    }
}
