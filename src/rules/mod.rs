//! Game rules that sit outside the board: targets and scoring.
//!
//! - `target`: Level targets per difficulty, and the `TargetGenerator`
//!   seam the session pulls them through
//! - `scoring`: Points for a solved level per mode

pub mod scoring;
pub mod target;

pub use scoring::{points_for_win, CARD_BONUS, LEVEL_POINTS};
pub use target::{
    generate_target, target_range, SeededTargets, TargetGenerator, CUSTOM_PLACEHOLDER,
};
