//! Reasons an expression has no value.
//!
//! Positions are indexes into the card sequence, so a host can point at
//! the offending card.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,

    #[error("number card at position {at} directly follows another number")]
    AdjacentNumbers { at: usize },

    #[error("sign at position {at} repeats the sign before it")]
    RepeatedSign { at: usize },

    #[error("factorial at position {at} does not follow a number")]
    DanglingFactorial { at: usize },

    #[error("square root at position {at} is not followed by a number or '('")]
    DanglingSqrt { at: usize },

    #[error("unexpected card at position {at}")]
    UnexpectedToken { at: usize },

    #[error("expression ends where an operand is expected")]
    UnexpectedEnd,

    #[error("unclosed parenthesis")]
    UnclosedParenthesis,

    #[error("signed operand before the power at position {at}")]
    SignedPowerBase { at: usize },

    #[error("expression is longer than {limit} cards")]
    TooLong { limit: usize },

    #[error("expression nests deeper than {limit} levels")]
    TooDeep { limit: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("factorial is only defined for non-negative integers")]
    FactorialDomain,

    #[error("factorial overflows above {limit}")]
    FactorialOverflow { limit: u32 },

    #[error("square root of a negative number")]
    NegativeSqrt,

    #[error("result is not a finite number")]
    NonFinite,
}

impl EvalError {
    /// True for errors in the card arrangement rather than in the arithmetic.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        !matches!(
            self,
            EvalError::DivisionByZero
                | EvalError::FactorialDomain
                | EvalError::FactorialOverflow { .. }
                | EvalError::NegativeSqrt
                | EvalError::NonFinite
        )
    }
}
