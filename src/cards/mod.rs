//! Card system: card faces, placed tokens, and the number deck.
//!
//! ## Key Types
//!
//! - `CardValue`: Number card value, always within `0..=10`
//! - `Operator`: The closed set of operator cards
//! - `Card`: Either a number or an operator
//! - `Token`: A card placed on the board, with a UI-facing id
//! - `Deck`: Remaining number card stock
//!
//! ## Stock
//!
//! Number cards are limited (two of each value by default). Operator
//! cards are unlimited.

pub mod card;
pub mod deck;
pub mod token;

pub use card::{Card, CardValue, Operator};
pub use deck::Deck;
pub use token::{tokens, Token, TokenId, TokenKind};
