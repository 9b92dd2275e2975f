//! Expression evaluation over placed cards.
//!
//! The evaluator only ever sees the closed card grammar the board builds.
//! There is no text input and nothing resembling a general-purpose
//! interpreter: cards are lexed one by one, parsed by recursive descent
//! and folded to a float.
//!
//! ## Key Types
//!
//! - `Value`: Canonical finite result (integer or 3-decimal number)
//! - `EvalError`: Why an expression has no value
//! - `Expr`: Parsed expression tree
//!
//! ## Notation
//!
//! - `√ n` and `√ ( ... )` take a square root
//! - `n !` takes the factorial of the number directly before it

pub mod error;
pub mod eval;
pub mod lexer;
pub mod parser;
pub mod value;

pub use error::EvalError;
pub use eval::{
    evaluate, evaluate_cards, factorial, try_evaluate, try_evaluate_cards, FACTORIAL_LIMIT,
};
pub use lexer::MAX_CARDS;
pub use parser::{BinaryOp, Expr};
pub use value::Value;
