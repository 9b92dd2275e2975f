//! The game session: one explicit object holding everything a game needs.
//!
//! Every player action and every clock tick is a method on `GameSession`.
//! Methods either apply a complete transition or return a `SessionError`
//! and leave the session untouched, so any sequence of calls keeps the deck
//! and the expression consistent.
//!
//! ## Phases
//!
//! ```text
//! Menu ── select_mode ──► Playing ◄─── submit_custom_target ───┐
//!   ▲         │              │  win: next level ──────────────►├─ AwaitingCustomTarget
//!   │         └──(CUSTOM)────┼─────────────────────────────────┘
//!   │                        ▼
//!   └── reset_to_menu ── GameOver(RoundComplete | TimeUp | Forfeit | DeckExhausted)
//! ```
//!
//! ## Wins
//!
//! After every change to the expression the current value is recomputed.
//! A match against the target marks a pending win. With a zero
//! `win_settle_delay` the level completes on the spot; otherwise the host
//! calls [`GameSession::settle_win`] once the delay has passed, and any
//! change that breaks the match in the meantime cancels the win.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::message::{Message, Severity};
use super::mode::{Difficulty, GameMode};
use super::snapshot::SessionSnapshot;
use crate::board::{Board, Expression};
use crate::cards::{Card, Deck, Token, TokenId};
use crate::core::{GameConfig, PlacementError, SessionError};
use crate::expr::Value;
use crate::rules::{points_for_win, SeededTargets, TargetGenerator, CUSTOM_PLACEHOLDER};

/// Shown when a number card is played right after another number.
pub const ADJACENT_NUMBERS_MESSAGE: &str = "Cannot place two numbers together! Use an operator.";

/// Why a game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOverReason {
    /// The single POINT round was solved.
    RoundComplete,
    /// The RACE clock reached zero.
    TimeUp,
    /// The player gave up.
    Forfeit,
    /// A level began with no number cards left.
    DeckExhausted,
}

impl std::fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameOverReason::RoundComplete => "round complete",
            GameOverReason::TimeUp => "time up",
            GameOverReason::Forfeit => "forfeit",
            GameOverReason::DeckExhausted => "deck exhausted",
        };
        f.write_str(label)
    }
}

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Menu,
    /// CUSTOM difficulty: waiting for the player to type a target.
    AwaitingCustomTarget,
    Playing,
    GameOver(GameOverReason),
}

/// A completed level, kept for the result screen.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedLevel {
    pub level: u32,
    pub target: i64,
    /// The winning expression as displayed, e.g. `"5 + 2"`.
    pub expression: String,
    pub points: u64,
}

/// Read a custom target the way a lenient number field would.
///
/// Leading whitespace and a single sign are accepted, then the longest run
/// of digits; anything after the digits is ignored. Returns `None` when no
/// digits follow or the value does not fit in an `i64`.
///
/// ```
/// use target_x::session::parse_custom_target;
///
/// assert_eq!(parse_custom_target(" 42"), Some(42));
/// assert_eq!(parse_custom_target("-17abc"), Some(-17));
/// assert_eq!(parse_custom_target("12.9"), Some(12));
/// assert_eq!(parse_custom_target("abc"), None);
/// ```
#[must_use]
pub fn parse_custom_target(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// A single player's game, from the menu to game over.
///
/// Generic over the target source so tests can pin targets; the default
/// rolls them from the configured seed.
#[derive(Clone, Debug)]
pub struct GameSession<T = SeededTargets> {
    // === Configuration ===
    config: GameConfig,
    targets: T,

    // === Selection ===
    mode: GameMode,
    difficulty: Difficulty,
    phase: Phase,

    // === Progress ===
    level: u32,
    score: u64,
    /// Seconds left in RACE, seconds elapsed otherwise.
    timer: u32,
    target: i64,
    history: Vector<SolvedLevel>,

    // === Board ===
    board: Board,
    current_value: Option<Value>,
    pending_win: bool,

    // === Presentation ===
    message: Option<Message>,
    next_message_id: u64,
    next_token_id: u32,
}

impl GameSession<SeededTargets> {
    /// Create a session in the menu with seeded random targets.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let targets = SeededTargets::new(config.seed);
        Self::with_targets(config, targets)
    }
}

impl Default for GameSession<SeededTargets> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<T: TargetGenerator> GameSession<T> {
    /// Create a session in the menu that draws targets from `targets`.
    #[must_use]
    pub fn with_targets(config: GameConfig, targets: T) -> Self {
        let board = Board::new(Deck::new(config.copies_per_value));
        Self {
            config,
            targets,
            mode: GameMode::Menu,
            difficulty: Difficulty::default(),
            phase: Phase::Menu,
            level: 1,
            score: 0,
            timer: 0,
            target: CUSTOM_PLACEHOLDER,
            history: Vector::new(),
            board,
            current_value: None,
            pending_win: false,
            message: None,
            next_message_id: 0,
            next_token_id: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current level, starting at 1.
    #[must_use]
    pub fn level(&self) -> u32 {
        self.level
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Clock reading in seconds.
    #[must_use]
    pub fn timer(&self) -> u32 {
        self.timer
    }

    /// Target of the current level.
    ///
    /// `None` in the menu and while a custom target is being entered.
    #[must_use]
    pub fn target(&self) -> Option<i64> {
        match self.phase {
            Phase::Playing | Phase::GameOver(_) => Some(self.target),
            Phase::Menu | Phase::AwaitingCustomTarget => None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        self.board.deck()
    }

    #[must_use]
    pub fn expression(&self) -> &Expression {
        self.board.expression()
    }

    /// Value of the expression, `None` when empty or invalid.
    #[must_use]
    pub fn current_value(&self) -> Option<Value> {
        self.current_value
    }

    /// Whether a matching expression is waiting for [`Self::settle_win`].
    #[must_use]
    pub fn pending_win(&self) -> bool {
        self.pending_win
    }

    #[must_use]
    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Levels solved this game, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<SolvedLevel> {
        &self.history
    }

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

    /// Whether the clock should be ticking.
    ///
    /// Only while a level is being played: never in the menu, while a
    /// custom target is pending, or after game over.
    #[must_use]
    pub fn clock_running(&self) -> bool {
        self.is_playing()
    }

    // === Menu ===

    /// Choose the difficulty for the next game.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> Result<(), SessionError> {
        if self.phase != Phase::Menu {
            return Err(SessionError::NotInMenu);
        }
        self.difficulty = difficulty;
        Ok(())
    }

    /// Start a game of `mode` at the selected difficulty.
    ///
    /// Deals a fresh deck and resets level, score and clock. The first
    /// target is rolled, or requested from the player under CUSTOM.
    pub fn select_mode(&mut self, mode: GameMode) -> Result<(), SessionError> {
        if self.phase != Phase::Menu {
            return Err(SessionError::NotInMenu);
        }
        if mode == GameMode::Menu {
            return Err(SessionError::NotAGameMode);
        }

        self.mode = mode;
        self.level = 1;
        self.score = 0;
        self.timer = if mode.counts_down() {
            self.config.race_budget(self.difficulty)
        } else {
            0
        };
        self.history = Vector::new();
        self.board = Board::new(Deck::new(self.config.copies_per_value));
        self.message = None;

        info!(%mode, difficulty = %self.difficulty, timer = self.timer, "game started");
        self.begin_level();
        Ok(())
    }

    /// Set the target of the current level under CUSTOM difficulty.
    pub fn submit_custom_target(&mut self, input: &str) -> Result<(), SessionError> {
        if self.phase != Phase::AwaitingCustomTarget {
            return Err(SessionError::NotAwaitingTarget);
        }
        let Some(target) = parse_custom_target(input) else {
            debug!(input, "custom target rejected");
            return Err(SessionError::InvalidCustomTarget {
                input: input.to_string(),
            });
        };

        self.target = target;
        self.phase = Phase::Playing;
        debug!(level = self.level, target, "custom target set");
        self.refresh();
        Ok(())
    }

    // === Board ===

    /// Place a card at the end of the expression.
    ///
    /// Returns the id given to the placed token. A number right after a
    /// number is rejected with an error message for the player; a number
    /// with no stock left is rejected silently.
    pub fn play_card(&mut self, card: impl Into<Card>) -> Result<TokenId, SessionError> {
        self.require_playing()?;

        let token = Token::new(TokenId::new(self.next_token_id), card.into());
        if let Err(err) = self.board.append(token) {
            if err == PlacementError::AdjacentNumbers {
                self.post(ADJACENT_NUMBERS_MESSAGE, Severity::Error);
            }
            return Err(err.into());
        }

        self.next_token_id = self.next_token_id.wrapping_add(1);
        self.refresh();
        Ok(token.id)
    }

    /// Remove the last placed card. No-op on an empty expression.
    pub fn backspace(&mut self) -> Result<Option<Token>, SessionError> {
        self.require_playing()?;

        let removed = self.board.remove_last();
        if removed.is_some() {
            self.refresh();
        }
        Ok(removed)
    }

    /// Remove every placed card, returning numbers to the deck.
    ///
    /// Returns how many cards were removed.
    pub fn clear_expression(&mut self) -> Result<usize, SessionError> {
        self.require_playing()?;

        let removed = self.board.clear();
        if removed > 0 {
            self.refresh();
        }
        Ok(removed)
    }

    // === Lifecycle ===

    /// Give up. Score and level reached are kept.
    pub fn forfeit(&mut self) -> Result<(), SessionError> {
        match self.phase {
            Phase::Playing | Phase::AwaitingCustomTarget => {
                self.end_game(GameOverReason::Forfeit);
                Ok(())
            }
            Phase::Menu | Phase::GameOver(_) => Err(SessionError::NotPlaying),
        }
    }

    /// Advance the clock by one period.
    ///
    /// RACE counts down and ends the game on the tick that reaches zero;
    /// the other modes count up. Returns `false` when the clock is not
    /// running and the tick was ignored.
    pub fn tick(&mut self) -> bool {
        if !self.clock_running() {
            trace!(phase = ?self.phase, "tick ignored");
            return false;
        }

        if self.mode.counts_down() {
            self.timer = self.timer.saturating_sub(1);
            trace!(timer = self.timer, "tick");
            if self.timer == 0 {
                self.end_game(GameOverReason::TimeUp);
            }
        } else {
            self.timer = self.timer.saturating_add(1);
            trace!(timer = self.timer, "tick");
        }
        true
    }

    /// Complete a pending win.
    ///
    /// Returns `true` if a level was completed. The match is checked again,
    /// so a stale call after the expression changed does nothing.
    pub fn settle_win(&mut self) -> bool {
        if !self.pending_win {
            return false;
        }
        self.pending_win = false;
        if !self.matches_target() {
            return false;
        }
        self.complete_level();
        true
    }

    /// Clear the message with `id` if it is still the one showing.
    pub fn dismiss_message(&mut self, id: u64) -> bool {
        match &self.message {
            Some(message) if message.id == id => {
                self.message = None;
                true
            }
            _ => false,
        }
    }

    /// Abandon everything and return to the menu.
    ///
    /// Difficulty goes back to EASY. Token and message ids keep counting so
    /// nothing from the previous game can be confused with the next one.
    pub fn reset_to_menu(&mut self) {
        self.mode = GameMode::Menu;
        self.difficulty = Difficulty::default();
        self.phase = Phase::Menu;
        self.level = 1;
        self.score = 0;
        self.timer = 0;
        self.target = CUSTOM_PLACEHOLDER;
        self.history = Vector::new();
        self.board = Board::new(Deck::new(self.config.copies_per_value));
        self.current_value = None;
        self.pending_win = false;
        self.message = None;
        debug!("returned to menu");
    }

    /// Everything a renderer needs, detached from the session.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            mode: self.mode,
            difficulty: self.difficulty,
            phase: self.phase,
            level: self.level,
            score: self.score,
            timer: self.timer,
            target: self.target(),
            deck: *self.board.deck().counts(),
            expression: self.board.expression().iter().copied().collect(),
            current_value: self.current_value,
            message: self.message.clone(),
            pending_win: self.pending_win,
            history: self.history.iter().cloned().collect(),
        }
    }

    // === Internals ===

    fn require_playing(&self) -> Result<(), SessionError> {
        if self.is_playing() {
            Ok(())
        } else {
            Err(SessionError::NotPlaying)
        }
    }

    fn matches_target(&self) -> bool {
        self.is_playing()
            && self
                .current_value
                .is_some_and(|value| value.matches(self.target))
    }

    /// Recompute the current value and update the pending win.
    fn refresh(&mut self) {
        self.current_value = self.board.value();

        if !self.matches_target() {
            if self.pending_win {
                debug!("pending win cancelled");
            }
            self.pending_win = false;
            return;
        }

        if self.config.win_settle_delay.is_zero() {
            self.complete_level();
        } else if !self.pending_win {
            debug!(target = self.target, "win pending");
            self.pending_win = true;
        }
    }

    /// Roll the target for `self.level` and start playing it.
    fn begin_level(&mut self) {
        self.current_value = None;
        self.pending_win = false;

        if self.board.deck().is_exhausted() {
            self.end_game(GameOverReason::DeckExhausted);
            return;
        }

        if self.difficulty.is_custom() {
            self.target = CUSTOM_PLACEHOLDER;
            self.phase = Phase::AwaitingCustomTarget;
            debug!(level = self.level, "awaiting custom target");
        } else {
            self.target = self.targets.generate(self.level, self.difficulty);
            self.phase = Phase::Playing;
            debug!(level = self.level, target = self.target, "level started");
        }
    }

    /// Score the matching expression, spend its cards and move on.
    fn complete_level(&mut self) {
        let expression = self.board.expression();
        let points = points_for_win(self.mode, self.level, expression);
        let solved = SolvedLevel {
            level: self.level,
            target: self.target,
            expression: expression.render(),
            points,
        };

        self.board.spend();
        self.history.push_back(solved);
        self.score += points;
        self.pending_win = false;
        info!(level = self.level, points, score = self.score, "level complete");

        if self.mode.single_round() {
            self.end_game(GameOverReason::RoundComplete);
            return;
        }

        let text = format!("Level {} Complete! +{} pts", self.level, points);
        self.level += 1;
        self.begin_level();
        // Game over clears the board message; don't bring it back.
        if self.is_playing() || self.is_awaiting_custom_target() {
            self.post(text, Severity::Success);
        }
    }

    fn end_game(&mut self, reason: GameOverReason) {
        self.phase = Phase::GameOver(reason);
        self.pending_win = false;
        self.message = None;
        info!(%reason, level = self.level, score = self.score, "game over");
    }

    fn post(&mut self, text: impl Into<String>, severity: Severity) {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.message = Some(Message::new(id, text, severity));
    }
}
