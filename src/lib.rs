//! # target-x
//!
//! Game core for TARGET X, an arithmetic card puzzle: combine number cards
//! (0 to 10, two of each) and operator cards into an expression whose value
//! hits the level's target.
//!
//! ## Design Principles
//!
//! 1. **Closed Grammar**: Expressions are evaluated from cards by a small
//!    recursive-descent parser. No text is ever interpreted.
//!
//! 2. **Explicit Session**: All game state lives in one `GameSession` value.
//!    Every player action is a method that either applies a complete
//!    transition or returns an error and changes nothing.
//!
//! 3. **Time at the Edge**: The session has no clock. Hosts call `tick`;
//!    the `runtime` module does so from a tokio task whose schedules are
//!    dropped the moment the session stops playing.
//!
//! ## Modules
//!
//! - `core`: Configuration, RNG, error types
//! - `cards`: Card values, operators, tokens, the deck
//! - `expr`: Lexer, parser and evaluator for card expressions
//! - `board`: The expression under construction, kept in step with the deck
//! - `rules`: Target generation and scoring
//! - `session`: The game state machine and its snapshot
//! - `runtime`: Async single-writer host for a session
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod cards;
pub mod expr;
pub mod board;
pub mod rules;
pub mod session;
pub mod runtime;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, RaceBudgets,
    GameRng,
    PlacementError, SessionError,
};

pub use crate::cards::{Card, CardValue, Deck, Operator, Token, TokenId, TokenKind};

pub use crate::expr::{evaluate, evaluate_cards, try_evaluate, try_evaluate_cards, EvalError, Value};

pub use crate::board::{Board, Expression};

pub use crate::rules::{generate_target, points_for_win, target_range, SeededTargets, TargetGenerator};

pub use crate::session::{
    Difficulty, GameMode, GameOverReason, GameSession,
    Message, Phase, SessionSnapshot, Severity, SolvedLevel,
};

pub use crate::runtime::{RuntimeError, SessionHandle};
