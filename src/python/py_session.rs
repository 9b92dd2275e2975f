//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Card, CardValue, Operator};
use crate::core::{GameConfig, SessionError};
use crate::expr;
use crate::session::{Difficulty, GameMode, GameSession};

fn value_error(message: impl Into<String>) -> PyErr {
    PyErr::new::<PyValueError, _>(message.into())
}

fn session_error(err: SessionError) -> PyErr {
    value_error(err.to_string())
}

fn parse_mode(name: &str) -> PyResult<GameMode> {
    match name.to_ascii_lowercase().as_str() {
        "infinity" => Ok(GameMode::Infinity),
        "point" => Ok(GameMode::Point),
        "race" => Ok(GameMode::Race),
        _ => Err(value_error(format!("unknown mode {name:?}"))),
    }
}

fn parse_difficulty(name: &str) -> PyResult<Difficulty> {
    Difficulty::ALL
        .into_iter()
        .find(|d| d.to_string().eq_ignore_ascii_case(name))
        .ok_or_else(|| value_error(format!("unknown difficulty {name:?}")))
}

/// Parse one card label: `"0"`..`"10"` or an operator symbol.
fn parse_card(label: &str) -> PyResult<Card> {
    if let Ok(raw) = label.parse::<u8>() {
        return CardValue::new(raw)
            .map(Card::Number)
            .ok_or_else(|| value_error(format!("number card {raw} out of range")));
    }
    Operator::from_symbol(label)
        .map(Card::Operator)
        .ok_or_else(|| value_error(format!("unknown card {label:?}")))
}

/// Evaluate a list of card labels, e.g. `["5", "+", "2"]`.
///
/// Returns `None` for an invalid expression.
#[pyfunction]
pub fn evaluate(cards: Vec<String>) -> PyResult<Option<f64>> {
    let cards = cards
        .iter()
        .map(|label| parse_card(label))
        .collect::<PyResult<Vec<_>>>()?;
    Ok(expr::evaluate_cards(&cards).map(|v| v.as_f64()))
}

/// Points badge shown on a card: its face value for numbers, 10 for operators.
#[pyfunction]
pub fn card_points(card: &str) -> PyResult<u64> {
    parse_card(card).map(|card| card.points())
}

/// Python wrapper for GameSession.
///
/// Python hosts drive the clock themselves by calling `tick()` once per
/// second while `clock_running` is true.
#[pyclass(name = "Session")]
pub struct PySession {
    session: GameSession,
}

#[pymethods]
impl PySession {
    /// Create a session in the menu.
    ///
    /// # Arguments
    /// - seed: RNG seed for targets
    /// - copies_per_value: Number cards of each value in a fresh deck
    /// - instant_wins: Complete a level as soon as it matches; otherwise
    ///   call `settle_win()` after the pause of your choice
    #[new]
    #[pyo3(signature = (seed = 42, copies_per_value = 2, instant_wins = true))]
    fn new(seed: u64, copies_per_value: u8, instant_wins: bool) -> Self {
        let mut config = GameConfig::new()
            .with_seed(seed)
            .with_copies_per_value(copies_per_value);
        if instant_wins {
            config = config.instant_wins();
        }
        Self {
            session: GameSession::new(config),
        }
    }

    fn select_difficulty(&mut self, name: &str) -> PyResult<()> {
        let difficulty = parse_difficulty(name)?;
        self.session
            .select_difficulty(difficulty)
            .map_err(session_error)
    }

    /// Start a game: "infinity", "point" or "race".
    fn select_mode(&mut self, name: &str) -> PyResult<()> {
        let mode = parse_mode(name)?;
        self.session.select_mode(mode).map_err(session_error)
    }

    fn submit_custom_target(&mut self, input: &str) -> PyResult<()> {
        self.session
            .submit_custom_target(input)
            .map_err(session_error)
    }

    /// Place a card by label. Returns the token id.
    fn play(&mut self, card: &str) -> PyResult<u32> {
        let card = parse_card(card)?;
        self.session
            .play_card(card)
            .map(|id| id.raw())
            .map_err(session_error)
    }

    /// Remove the last card. Returns `False` on an empty expression.
    fn backspace(&mut self) -> PyResult<bool> {
        self.session
            .backspace()
            .map(|removed| removed.is_some())
            .map_err(session_error)
    }

    fn clear_expression(&mut self) -> PyResult<usize> {
        self.session.clear_expression().map_err(session_error)
    }

    fn forfeit(&mut self) -> PyResult<()> {
        self.session.forfeit().map_err(session_error)
    }

    fn tick(&mut self) -> bool {
        self.session.tick()
    }

    fn settle_win(&mut self) -> bool {
        self.session.settle_win()
    }

    fn reset_to_menu(&mut self) {
        self.session.reset_to_menu();
    }

    #[getter]
    fn mode(&self) -> String {
        self.session.mode().to_string()
    }

    #[getter]
    fn difficulty(&self) -> String {
        self.session.difficulty().to_string()
    }

    #[getter]
    fn level(&self) -> u32 {
        self.session.level()
    }

    #[getter]
    fn score(&self) -> u64 {
        self.session.score()
    }

    #[getter]
    fn timer(&self) -> u32 {
        self.session.timer()
    }

    #[getter]
    fn target(&self) -> Option<i64> {
        self.session.target()
    }

    #[getter]
    fn current_value(&self) -> Option<f64> {
        self.session.current_value().map(|v| v.as_f64())
    }

    #[getter]
    fn expression(&self) -> String {
        self.session.expression().render()
    }

    /// Remaining stock indexed by card value.
    #[getter]
    fn deck(&self) -> Vec<u8> {
        self.session.deck().counts().to_vec()
    }

    #[getter]
    fn message(&self) -> Option<String> {
        self.session.message().map(|m| m.text.clone())
    }

    #[getter]
    fn clock_running(&self) -> bool {
        self.session.clock_running()
    }

    #[getter]
    fn pending_win(&self) -> bool {
        self.session.pending_win()
    }

    #[getter]
    fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    #[getter]
    fn game_over_reason(&self) -> Option<String> {
        self.session.game_over_reason().map(|r| r.to_string())
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(mode={}, level={}, score={})",
            self.session.mode(),
            self.session.level(),
            self.session.score()
        )
    }
}
