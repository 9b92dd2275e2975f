//! Board state: the deck and the expression being built.
//!
//! ## Key Types
//!
//! - `Expression`: Ordered placed tokens, never two numbers in a row
//! - `Board`: Applies placements so the deck and the expression agree
//!
//! ## Stock flow
//!
//! Number cards leave the deck when placed and come back on backspace or
//! clear. Cards in a winning expression are spent and never come back.

pub mod expression;
pub mod manager;

pub use expression::Expression;
pub use manager::Board;
