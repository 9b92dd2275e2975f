//! Game session controller.
//!
//! ## Key Types
//!
//! - `GameSession`: Owns the deck, the expression, the clock and the score,
//!   and applies every player action as one synchronous transition
//! - `SessionSnapshot`: Owned copy of the session for rendering
//! - `GameMode` / `Difficulty`: What is being played and how hard
//! - `Message`: Transient notice with a severity
//!
//! The session has no clock of its own. Whoever hosts it calls
//! [`GameSession::tick`] once per period while [`GameSession::clock_running`]
//! is true; the `runtime` module does exactly that on a tokio task.

pub mod message;
pub mod mode;
pub mod snapshot;
pub mod state;

pub use message::{Message, Severity};
pub use mode::{Difficulty, GameMode};
pub use snapshot::{SessionSnapshot, UNKNOWN};
pub use state::{
    parse_custom_target, GameOverReason, GameSession, Phase, SolvedLevel,
    ADJACENT_NUMBERS_MESSAGE,
};
