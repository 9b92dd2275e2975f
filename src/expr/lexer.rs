//! Card sequence to lexemes.
//!
//! Each card is lexed on its own; nothing is ever rendered to text and
//! re-read. Two notations are folded here:
//!
//! - `n !` becomes `Factorial(n)`. Only a number directly before the `!`
//!   is captured, so `( 2 + 3 ) !` is rejected.
//! - `√ n` becomes `Sqrt(n)` and `√ (` opens a square-root group that the
//!   matching `)` closes. Factorial capture runs first, so `√ 3 !` is
//!   rejected rather than read as either `√(3!)` or `(√3)!`.

use smallvec::SmallVec;

use super::error::EvalError;
use crate::cards::{Card, Operator};

/// Lexeme kinds understood by the parser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexemeKind {
    Int(u32),
    Factorial(u32),
    Sqrt(u32),
    /// `√(`: a square root over the group that follows.
    SqrtOpen,
    Plus,
    Minus,
    Star,
    Slash,
    Power,
    LParen,
    RParen,
}

/// A lexeme and the index of the card it starts at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lexeme {
    pub kind: LexemeKind,
    pub at: usize,
}

/// Longest card sequence the evaluator accepts. Tree depth is bounded by
/// the card count, so this also bounds evaluation recursion.
pub const MAX_CARDS: usize = 512;

/// Lexeme buffer; expressions rarely exceed a couple dozen cards.
pub type Lexemes = SmallVec<[Lexeme; 32]>;

/// Lex a card sequence.
pub fn lex(cards: &[Card]) -> Result<Lexemes, EvalError> {
    if cards.len() > MAX_CARDS {
        return Err(EvalError::TooLong { limit: MAX_CARDS });
    }

    let mut out = Lexemes::new();
    let mut i = 0;

    while i < cards.len() {
        let at = i;
        let kind = match cards[i] {
            Card::Number(value) => {
                if at > 0 && cards[at - 1].is_number() {
                    return Err(EvalError::AdjacentNumbers { at });
                }
                let n = u32::from(value.get());
                if next_is(cards, at, Operator::Factorial) {
                    i += 1;
                    LexemeKind::Factorial(n)
                } else {
                    LexemeKind::Int(n)
                }
            }
            Card::Operator(Operator::Sqrt) => match cards.get(at + 1) {
                Some(Card::Number(value)) if !next_is(cards, at + 1, Operator::Factorial) => {
                    i += 1;
                    LexemeKind::Sqrt(u32::from(value.get()))
                }
                Some(Card::Operator(Operator::LParen)) => {
                    i += 1;
                    LexemeKind::SqrtOpen
                }
                _ => return Err(EvalError::DanglingSqrt { at }),
            },
            Card::Operator(Operator::Factorial) => {
                return Err(EvalError::DanglingFactorial { at });
            }
            Card::Operator(op @ (Operator::Plus | Operator::Minus)) => {
                // `+ +` and `− −` would read as increment/decrement, not as two signs.
                if at > 0 && cards[at - 1] == Card::Operator(op) {
                    return Err(EvalError::RepeatedSign { at });
                }
                if op == Operator::Plus {
                    LexemeKind::Plus
                } else {
                    LexemeKind::Minus
                }
            }
            Card::Operator(Operator::Multiply) => LexemeKind::Star,
            Card::Operator(Operator::Divide) => LexemeKind::Slash,
            Card::Operator(Operator::Power) => LexemeKind::Power,
            Card::Operator(Operator::LParen) => LexemeKind::LParen,
            Card::Operator(Operator::RParen) => LexemeKind::RParen,
        };
        out.push(Lexeme { kind, at });
        i += 1;
    }

    Ok(out)
}

fn next_is(cards: &[Card], index: usize, op: Operator) -> bool {
    cards.get(index + 1) == Some(&Card::Operator(op))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op(op: Operator) -> Card {
        Card::Operator(op)
    }

    fn kinds(cards: &[Card]) -> Vec<LexemeKind> {
        lex(cards).unwrap().iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_plain_arithmetic() {
        let cards = [Card::number(5), op(Operator::Multiply), Card::number(10)];
        assert_eq!(
            kinds(&cards),
            vec![LexemeKind::Int(5), LexemeKind::Star, LexemeKind::Int(10)]
        );
    }

    #[test]
    fn test_factorial_folds_into_number() {
        let cards = [Card::number(4), op(Operator::Factorial), op(Operator::Minus), Card::number(1)];
        let lexemes = lex(&cards).unwrap();

        assert_eq!(lexemes[0].kind, LexemeKind::Factorial(4));
        assert_eq!(lexemes[1], Lexeme { kind: LexemeKind::Minus, at: 2 });
    }

    #[test]
    fn test_sqrt_forms() {
        assert_eq!(kinds(&[op(Operator::Sqrt), Card::number(9)]), vec![LexemeKind::Sqrt(9)]);
        assert_eq!(
            kinds(&[op(Operator::Sqrt), op(Operator::LParen), Card::number(9), op(Operator::RParen)]),
            vec![LexemeKind::SqrtOpen, LexemeKind::Int(9), LexemeKind::RParen]
        );
    }

    #[test]
    fn test_dangling_notations() {
        assert_eq!(
            lex(&[op(Operator::Factorial)]),
            Err(EvalError::DanglingFactorial { at: 0 })
        );
        assert_eq!(
            lex(&[Card::number(3), op(Operator::Factorial), op(Operator::Factorial)]),
            Err(EvalError::DanglingFactorial { at: 2 })
        );
        assert_eq!(
            lex(&[op(Operator::Sqrt), op(Operator::Sqrt), Card::number(4)]),
            Err(EvalError::DanglingSqrt { at: 0 })
        );
        assert_eq!(
            lex(&[op(Operator::Sqrt), Card::number(3), op(Operator::Factorial)]),
            Err(EvalError::DanglingSqrt { at: 0 })
        );
    }

    #[test]
    fn test_adjacent_numbers_rejected() {
        assert_eq!(
            lex(&[Card::number(1), Card::number(0)]),
            Err(EvalError::AdjacentNumbers { at: 1 })
        );
        assert_eq!(
            lex(&[op(Operator::Sqrt), Card::number(9), Card::number(2)]),
            Err(EvalError::AdjacentNumbers { at: 2 })
        );
    }

    #[test]
    fn test_repeated_sign() {
        assert_eq!(
            lex(&[Card::number(5), op(Operator::Minus), op(Operator::Minus), Card::number(3)]),
            Err(EvalError::RepeatedSign { at: 2 })
        );
        // Mixed signs are fine at this stage.
        assert!(lex(&[Card::number(5), op(Operator::Plus), op(Operator::Minus), Card::number(3)]).is_ok());
    }
}
