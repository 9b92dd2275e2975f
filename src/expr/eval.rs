//! Expression evaluation.
//!
//! Pipeline: cards -> lexemes -> tree -> f64 -> canonical `Value`.
//!
//! Division by zero, a negative square root and factorial overflow fail
//! where they happen. Other non-finite intermediates (a huge power, say)
//! are carried through IEEE arithmetic and only the final result has to
//! be finite.

use smallvec::SmallVec;
use tracing::trace;

use super::error::EvalError;
use super::lexer::lex;
use super::parser::{parse, BinaryOp, Expr};
use super::value::Value;
use crate::cards::{Card, Token};

/// Largest factorial argument with a finite `f64` result.
pub const FACTORIAL_LIMIT: u32 = 170;

/// Factorial over non-negative integers.
///
/// ```
/// use target_x::expr::factorial;
///
/// assert_eq!(factorial(5.0), Ok(120.0));
/// assert!(factorial(2.5).is_err());
/// assert!(factorial(171.0).is_err());
/// ```
pub fn factorial(n: f64) -> Result<f64, EvalError> {
    if !n.is_finite() || n < 0.0 || n.fract() != 0.0 {
        return Err(EvalError::FactorialDomain);
    }
    if n > f64::from(FACTORIAL_LIMIT) {
        return Err(EvalError::FactorialOverflow {
            limit: FACTORIAL_LIMIT,
        });
    }
    Ok((2..=n as u32).map(f64::from).product())
}

impl Expr {
    /// Evaluate the tree to a raw float.
    pub fn eval(&self) -> Result<f64, EvalError> {
        match self {
            Expr::Literal(x) => Ok(*x),
            Expr::Neg(inner) => Ok(-inner.eval()?),
            Expr::Factorial(n) => factorial(f64::from(*n)),
            Expr::Sqrt(inner) => {
                let x = inner.eval()?;
                if x < 0.0 {
                    return Err(EvalError::NegativeSqrt);
                }
                Ok(x.sqrt())
            }
            Expr::Binary { op, lhs, rhs } => {
                let a = lhs.eval()?;
                let b = rhs.eval()?;
                match op {
                    BinaryOp::Add => Ok(a + b),
                    BinaryOp::Sub => Ok(a - b),
                    BinaryOp::Mul => Ok(a * b),
                    BinaryOp::Div if b == 0.0 => Err(EvalError::DivisionByZero),
                    BinaryOp::Div => Ok(a / b),
                    BinaryOp::Pow => Ok(a.powf(b)),
                }
            }
        }
    }
}

/// Evaluate a card sequence, keeping the failure reason.
pub fn try_evaluate_cards(cards: &[Card]) -> Result<Value, EvalError> {
    if cards.is_empty() {
        return Err(EvalError::Empty);
    }
    let lexemes = lex(cards)?;
    let tree = parse(&lexemes)?;
    let raw = tree.eval()?;
    Value::from_f64(raw).ok_or(EvalError::NonFinite)
}

/// Evaluate placed tokens, keeping the failure reason.
pub fn try_evaluate<'a, I>(tokens: I) -> Result<Value, EvalError>
where
    I: IntoIterator<Item = &'a Token>,
{
    let cards: SmallVec<[Card; 32]> = tokens.into_iter().map(|t| t.card).collect();
    try_evaluate_cards(&cards)
}

/// Evaluate a card sequence; `None` means the expression has no value.
pub fn evaluate_cards(cards: &[Card]) -> Option<Value> {
    match try_evaluate_cards(cards) {
        Ok(value) => Some(value),
        Err(err) => {
            trace!(%err, len = cards.len(), "expression has no value");
            None
        }
    }
}

/// Evaluate placed tokens; `None` means empty or invalid.
///
/// ```
/// use target_x::cards::{tokens, Card, Operator};
/// use target_x::expr::evaluate;
///
/// let three_factorial = tokens([Card::number(3), Operator::Factorial.into()]);
/// assert_eq!(evaluate(&three_factorial).and_then(|v| v.as_integer()), Some(6));
///
/// let dangling = tokens([Card::number(5), Operator::Multiply.into()]);
/// assert!(evaluate(&dangling).is_none());
/// ```
pub fn evaluate<'a, I>(tokens: I) -> Option<Value>
where
    I: IntoIterator<Item = &'a Token>,
{
    let cards: SmallVec<[Card; 32]> = tokens.into_iter().map(|t| t.card).collect();
    evaluate_cards(&cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Operator::{self, *};

    fn n(value: u8) -> Card {
        Card::number(value)
    }

    fn op(op: Operator) -> Card {
        Card::Operator(op)
    }

    fn int(cards: &[Card]) -> Option<i64> {
        evaluate_cards(cards).and_then(Value::as_integer)
    }

    #[test]
    fn test_factorial_table() {
        assert_eq!(factorial(0.0), Ok(1.0));
        assert_eq!(factorial(1.0), Ok(1.0));
        assert_eq!(factorial(10.0), Ok(3_628_800.0));
        assert!(factorial(170.0).unwrap().is_finite());
        assert_eq!(
            factorial(171.0),
            Err(EvalError::FactorialOverflow { limit: 170 })
        );
        assert_eq!(factorial(-1.0), Err(EvalError::FactorialDomain));
        assert_eq!(factorial(f64::NAN), Err(EvalError::FactorialDomain));
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(int(&[n(5), op(Plus), n(2)]), Some(7));
        assert_eq!(int(&[n(5), op(Minus), n(7)]), Some(-2));
        assert_eq!(int(&[n(6), op(Multiply), n(7)]), Some(42));
        assert_eq!(int(&[n(9), op(Divide), n(3)]), Some(3));
        assert_eq!(int(&[n(2), op(Power), n(3)]), Some(8));
    }

    #[test]
    fn test_precedence_and_grouping() {
        assert_eq!(int(&[n(2), op(Plus), n(3), op(Multiply), n(4)]), Some(14));
        assert_eq!(
            int(&[op(LParen), n(2), op(Plus), n(3), op(RParen), op(Multiply), n(4)]),
            Some(20)
        );
        assert_eq!(int(&[n(2), op(Power), n(3), op(Power), n(2)]), Some(512));
        assert_eq!(int(&[n(10), op(Minus), n(4), op(Minus), n(3)]), Some(3));
        assert_eq!(int(&[n(8), op(Divide), n(4), op(Divide), n(2)]), Some(1));
        assert_eq!(int(&[n(3), op(Multiply), n(2), op(Power), n(2)]), Some(12));
    }

    #[test]
    fn test_custom_notations() {
        assert_eq!(int(&[op(Sqrt), n(9)]), Some(3));
        assert_eq!(int(&[n(3), op(Factorial)]), Some(6));
        assert_eq!(int(&[n(10), op(Factorial)]), Some(3_628_800));
        assert_eq!(
            int(&[op(Sqrt), op(LParen), n(10), op(Plus), n(6), op(RParen)]),
            Some(4)
        );
        assert_eq!(int(&[op(Sqrt), n(9), op(Power), n(2)]), Some(9));
        assert_eq!(int(&[n(3), op(Factorial), op(Power), n(2)]), Some(36));
        assert_eq!(int(&[op(Minus), n(3), op(Factorial)]), Some(-6));
        assert_eq!(int(&[n(2), op(Power), op(Sqrt), n(9)]), Some(8));
    }

    #[test]
    fn test_unsupported_notations() {
        assert!(evaluate_cards(&[op(LParen), n(2), op(RParen), op(Factorial)]).is_none());
        assert!(evaluate_cards(&[op(Sqrt), n(4), op(Factorial)]).is_none());
        assert!(evaluate_cards(&[op(Sqrt), op(Sqrt), n(4)]).is_none());
        assert!(evaluate_cards(&[n(2), op(Sqrt), n(9)]).is_none());
    }

    #[test]
    fn test_signs() {
        assert_eq!(int(&[op(Minus), n(5), op(Plus), n(2)]), Some(-3));
        assert_eq!(int(&[n(5), op(Plus), op(Minus), n(3)]), Some(2));
        assert_eq!(int(&[n(5), op(Minus), op(Plus), n(3)]), Some(2));
        assert_eq!(
            int(&[op(LParen), op(Minus), n(2), op(RParen), op(Power), n(2)]),
            Some(4)
        );
        assert_eq!(
            evaluate_cards(&[n(2), op(Power), op(Minus), n(1)]).map(Value::as_f64),
            Some(0.5)
        );
        assert!(evaluate_cards(&[op(Minus), n(2), op(Power), n(2)]).is_none());
        assert!(evaluate_cards(&[n(5), op(Minus), op(Minus), n(3)]).is_none());
    }

    #[test]
    fn test_invalid_arithmetic() {
        assert_eq!(
            try_evaluate_cards(&[n(4), op(Divide), n(0)]),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            try_evaluate_cards(&[n(0), op(Divide), n(0)]),
            Err(EvalError::DivisionByZero)
        );
        assert_eq!(
            try_evaluate_cards(&[
                op(Sqrt),
                op(LParen),
                n(1),
                op(Minus),
                n(5),
                op(RParen)
            ]),
            Err(EvalError::NegativeSqrt)
        );
        assert_eq!(
            try_evaluate_cards(&[n(0), op(Power), op(Minus), n(1)]),
            Err(EvalError::NonFinite)
        );
    }

    #[test]
    fn test_factorial_overflow_never_displays() {
        // 10! ! is not expressible, but 10^10^10 overflows to infinity.
        assert_eq!(
            try_evaluate_cards(&[n(10), op(Power), n(10), op(Power), n(10)]),
            Err(EvalError::NonFinite)
        );
    }

    #[test]
    fn test_intermediate_infinity_can_vanish() {
        // 1 / 10^10^10 underflows to zero rather than failing.
        assert_eq!(
            int(&[n(1), op(Divide), op(LParen), n(10), op(Power), n(10), op(Power), n(10), op(RParen)]),
            Some(0)
        );
    }

    #[test]
    fn test_decimal_results() {
        assert_eq!(
            evaluate_cards(&[n(1), op(Divide), n(3)]).map(Value::as_f64),
            Some(0.333)
        );
        assert_eq!(
            evaluate_cards(&[op(Sqrt), n(2)]).map(Value::as_f64),
            Some(1.414)
        );
        assert_eq!(int(&[op(Sqrt), n(2), op(Multiply), op(Sqrt), n(2)]), Some(2));
    }

    #[test]
    fn test_empty_and_incomplete() {
        assert_eq!(try_evaluate_cards(&[]), Err(EvalError::Empty));
        assert_eq!(
            try_evaluate_cards(&[n(5), op(Multiply)]),
            Err(EvalError::UnexpectedEnd)
        );
        assert_eq!(
            try_evaluate_cards(&[op(LParen), n(5)]),
            Err(EvalError::UnclosedParenthesis)
        );
    }

    #[test]
    fn test_adjacent_multiply_is_not_power() {
        assert_eq!(
            try_evaluate_cards(&[n(2), op(Multiply), op(Multiply), n(3)]),
            Err(EvalError::UnexpectedToken { at: 2 })
        );
    }

    #[test]
    fn test_error_classification() {
        assert!(EvalError::UnexpectedEnd.is_syntax());
        assert!(!EvalError::DivisionByZero.is_syntax());
    }
}
