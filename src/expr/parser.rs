//! Recursive-descent parser from lexemes to an expression tree.
//!
//! Grammar, loosest binding first:
//!
//! ```text
//! sum      := product (('+' | '-') product)*
//! product  := power (('*' | '/') power)*
//! power    := signed | atom ('^' power)?
//! signed   := ('+' | '-') signed | atom        -- may not be a power base
//! atom     := Int | Factorial | Sqrt | SqrtOpen sum ')' | '(' sum ')'
//! ```
//!
//! Power is right-associative and its exponent may carry a sign
//! (`2 ^ − 1`), but a signed operand cannot be raised (`− 2 ^ 2` is
//! ambiguous and rejected; write `( − 2 ) ^ 2`).

use super::error::EvalError;
use super::lexer::{Lexeme, LexemeKind};

/// Maximum nesting of groups and signs.
pub const MAX_DEPTH: usize = 256;

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Expression tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Literal(f64),
    Neg(Box<Expr>),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Factorial(u32),
    Sqrt(Box<Expr>),
}

impl Expr {
    fn binary(op: BinaryOp, lhs: Expr, rhs: Expr) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }
}

/// Parse a full lexeme sequence.
pub fn parse(lexemes: &[Lexeme]) -> Result<Expr, EvalError> {
    if lexemes.is_empty() {
        return Err(EvalError::Empty);
    }

    let mut parser = Parser {
        lexemes,
        pos: 0,
        depth: 0,
    };
    let expr = parser.sum()?;

    match parser.peek() {
        None => Ok(expr),
        Some(lexeme) => Err(EvalError::UnexpectedToken { at: lexeme.at }),
    }
}

struct Parser<'a> {
    lexemes: &'a [Lexeme],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Lexeme> {
        self.lexemes.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<LexemeKind> {
        self.peek().map(|l| l.kind)
    }

    fn next(&mut self) -> Option<Lexeme> {
        let lexeme = self.peek()?;
        self.pos += 1;
        Some(lexeme)
    }

    fn descend(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep { limit: MAX_DEPTH });
        }
        Ok(())
    }

    fn sum(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.product()?;
        loop {
            let op = match self.peek_kind() {
                Some(LexemeKind::Plus) => BinaryOp::Add,
                Some(LexemeKind::Minus) => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.product()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn product(&mut self) -> Result<Expr, EvalError> {
        let mut lhs = self.power()?;
        loop {
            let op = match self.peek_kind() {
                Some(LexemeKind::Star) => BinaryOp::Mul,
                Some(LexemeKind::Slash) => BinaryOp::Div,
                _ => return Ok(lhs),
            };
            self.pos += 1;
            let rhs = self.power()?;
            lhs = Expr::binary(op, lhs, rhs);
        }
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        if matches!(self.peek_kind(), Some(LexemeKind::Plus | LexemeKind::Minus)) {
            let signed = self.signed()?;
            return match self.peek() {
                Some(Lexeme {
                    kind: LexemeKind::Power,
                    at,
                }) => Err(EvalError::SignedPowerBase { at }),
                _ => Ok(signed),
            };
        }

        let base = self.atom()?;
        if self.peek_kind() == Some(LexemeKind::Power) {
            self.pos += 1;
            self.descend()?;
            let exponent = self.power()?;
            self.depth -= 1;
            return Ok(Expr::binary(BinaryOp::Pow, base, exponent));
        }
        Ok(base)
    }

    fn signed(&mut self) -> Result<Expr, EvalError> {
        match self.peek_kind() {
            Some(LexemeKind::Plus) => {
                self.pos += 1;
                self.descend()?;
                let operand = self.signed()?;
                self.depth -= 1;
                Ok(operand)
            }
            Some(LexemeKind::Minus) => {
                self.pos += 1;
                self.descend()?;
                let operand = self.signed()?;
                self.depth -= 1;
                Ok(Expr::Neg(Box::new(operand)))
            }
            _ => self.atom(),
        }
    }

    fn atom(&mut self) -> Result<Expr, EvalError> {
        let lexeme = self.next().ok_or(EvalError::UnexpectedEnd)?;
        match lexeme.kind {
            LexemeKind::Int(n) => Ok(Expr::Literal(f64::from(n))),
            LexemeKind::Factorial(n) => Ok(Expr::Factorial(n)),
            LexemeKind::Sqrt(n) => Ok(Expr::Sqrt(Box::new(Expr::Literal(f64::from(n))))),
            LexemeKind::SqrtOpen => {
                let inner = self.group()?;
                Ok(Expr::Sqrt(Box::new(inner)))
            }
            LexemeKind::LParen => self.group(),
            _ => Err(EvalError::UnexpectedToken { at: lexeme.at }),
        }
    }

    /// Parse the inside of a group whose `(` was already consumed.
    fn group(&mut self) -> Result<Expr, EvalError> {
        self.descend()?;
        let inner = self.sum()?;
        self.depth -= 1;
        match self.next() {
            Some(Lexeme {
                kind: LexemeKind::RParen,
                ..
            }) => Ok(inner),
            Some(other) => Err(EvalError::UnexpectedToken { at: other.at }),
            None => Err(EvalError::UnclosedParenthesis),
        }
    }
}
