//! Core building blocks shared by every other module: configuration, the
//! deterministic RNG, and the recoverable error types.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{GameConfig, RaceBudgets};
pub use error::{PlacementError, SessionError};
pub use rng::{GameRng};
