//! Points awarded for a solved level.

use crate::board::Expression;
use crate::session::GameMode;

/// Points per level in INFINITY and RACE.
pub const LEVEL_POINTS: u64 = 100;

/// Bonus per placed card in POINT mode.
pub const CARD_BONUS: u64 = 10;

/// Points for solving `level` with `expression`.
///
/// - POINT: sum of the number cards plus 10 for every card placed, so
///   longer and bigger expressions pay more.
/// - INFINITY / RACE: 100 × the level just solved.
#[must_use]
pub fn points_for_win(mode: GameMode, level: u32, expression: &Expression) -> u64 {
    match mode {
        GameMode::Point => {
            let number_sum: u64 = expression.numbers().map(|v| u64::from(v.get())).sum();
            number_sum + CARD_BONUS * expression.len() as u64
        }
        GameMode::Infinity | GameMode::Race => LEVEL_POINTS * u64::from(level),
        GameMode::Menu => 0,
    }
}
