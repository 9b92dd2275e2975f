//! Recoverable errors raised by the board and the session.
//!
//! None of these are fatal: every rejected action leaves the session
//! exactly as it was, and the player may simply try something else.

use thiserror::Error;

use crate::cards::CardValue;

/// Why a card could not be placed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("cannot place two numbers together")]
    AdjacentNumbers,

    #[error("no {value} cards left in the deck")]
    OutOfStock { value: CardValue },
}

/// Rejected session transition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("this action is only available from the menu")]
    NotInMenu,

    #[error("the menu is not a playable mode")]
    NotAGameMode,

    #[error("no round is being played")]
    NotPlaying,

    #[error("the session is not waiting for a custom target")]
    NotAwaitingTarget,

    #[error("custom target {input:?} is not a whole number")]
    InvalidCustomTarget { input: String },

    #[error(transparent)]
    Placement(#[from] PlacementError),
}
