//! Read-only view of a session for rendering.
//!
//! A `SessionSnapshot` owns all of its data, so it can be handed to another
//! task or serialized to a UI without holding on to the session.

use serde::{Deserialize, Serialize};

use super::message::Message;
use super::mode::{Difficulty, GameMode};
use super::state::{GameOverReason, Phase, SolvedLevel};
use crate::cards::{CardValue, Token};
use crate::expr::Value;

/// Shown in place of an unknown target or an invalid expression.
pub const UNKNOWN: &str = "?";

/// Point-in-time copy of everything a renderer shows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub phase: Phase,
    pub level: u32,
    pub score: u64,
    pub timer: u32,
    /// `None` in the menu and while a custom target is being entered.
    pub target: Option<i64>,
    /// Remaining stock indexed by card value.
    pub deck: [u8; CardValue::COUNT],
    pub expression: Vec<Token>,
    pub current_value: Option<Value>,
    pub message: Option<Message>,
    pub pending_win: bool,
    pub history: Vec<SolvedLevel>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.phase == Phase::Playing
    }

    #[must_use]
    pub fn is_awaiting_custom_target(&self) -> bool {
        self.phase == Phase::AwaitingCustomTarget
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    #[must_use]
    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        match self.phase {
            Phase::GameOver(reason) => Some(reason),
            _ => None,
        }
    }

    /// Remaining stock of `value`.
    #[must_use]
    pub fn remaining(&self, value: CardValue) -> u8 {
        self.deck[value.index()]
    }

    /// Target as displayed: the number, or `?` while unknown.
    #[must_use]
    pub fn target_label(&self) -> String {
        self.target
            .map_or_else(|| UNKNOWN.to_string(), |target| target.to_string())
    }

    /// Current value as displayed: the number, or `?` when invalid.
    #[must_use]
    pub fn value_label(&self) -> String {
        self.current_value
            .map_or_else(|| UNKNOWN.to_string(), |value| value.to_string())
    }

    /// The expression as displayed, cards separated by spaces.
    #[must_use]
    pub fn expression_label(&self) -> String {
        self.expression
            .iter()
            .map(Token::display)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use crate::cards::{Card, Operator};
    use crate::core::GameConfig;
    use crate::session::{Difficulty, GameMode, GameSession};

    #[test]
    fn test_snapshot_labels() {
        let mut session = GameSession::new(GameConfig::default());
        session.select_difficulty(Difficulty::Custom).unwrap();
        session.select_mode(GameMode::Infinity).unwrap();

        let awaiting = session.snapshot();
        assert!(awaiting.is_awaiting_custom_target());
        assert_eq!(awaiting.target_label(), "?");

        session.submit_custom_target("50").unwrap();
        session.play_card(Card::number(9)).unwrap();
        session.play_card(Operator::Divide).unwrap();
        session.play_card(Card::number(4)).unwrap();

        let snapshot = session.snapshot();
        assert_eq!(snapshot.target_label(), "50");
        assert_eq!(snapshot.value_label(), "2.25");
        assert_eq!(snapshot.expression_label(), "9 ÷ 4");
        assert_eq!(snapshot.remaining(Card::number(9).value().unwrap()), 1);

        session.play_card(Operator::Multiply).unwrap();
        assert_eq!(session.snapshot().value_label(), "?");
    }

    #[test]
    fn test_snapshot_serde() {
        let mut session = GameSession::new(GameConfig::default());
        session.select_mode(GameMode::Race).unwrap();
        session.play_card(Card::number(3)).unwrap();

        let snapshot = session.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: super::SessionSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(back, snapshot);
        assert_eq!(back.timer, 60);
    }
}
