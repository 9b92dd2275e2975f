//! Cloneable façade for driving a session worker.
//!
//! [`SessionHandle`] hides the channel plumbing: each method sends one
//! [`Command`] and awaits the worker's reply.

use tokio::sync::{mpsc, oneshot};

use super::error::{Result, RuntimeError};
use super::worker::Command;
use crate::cards::{Card, Token, TokenId};
use crate::session::{Difficulty, GameMode, SessionSnapshot};

/// Client-facing handle to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
}

impl SessionHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>) -> Self {
        Self { command_tx }
    }

    /// Choose the difficulty for the next game. Menu only.
    pub async fn select_difficulty(&self, difficulty: Difficulty) -> Result<()> {
        self.request(|reply| Command::SelectDifficulty { difficulty, reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Start a game. Menu only.
    pub async fn select_mode(&self, mode: GameMode) -> Result<()> {
        self.request(|reply| Command::SelectMode { mode, reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Set the current target under CUSTOM difficulty.
    pub async fn submit_custom_target(&self, input: impl Into<String>) -> Result<()> {
        let input = input.into();
        self.request(|reply| Command::SubmitCustomTarget { input, reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Place a card at the end of the expression.
    pub async fn play_card(&self, card: impl Into<Card>) -> Result<TokenId> {
        let card = card.into();
        self.request(|reply| Command::PlayCard { card, reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Remove the last placed card.
    pub async fn backspace(&self) -> Result<Option<Token>> {
        self.request(|reply| Command::Backspace { reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Remove every placed card.
    pub async fn clear_expression(&self) -> Result<usize> {
        self.request(|reply| Command::ClearExpression { reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Give up the current game.
    pub async fn forfeit(&self) -> Result<()> {
        self.request(|reply| Command::Forfeit { reply })
            .await?
            .map_err(RuntimeError::from)
    }

    /// Abandon the game and return to the menu.
    pub async fn reset_to_menu(&self) -> Result<()> {
        self.request(|reply| Command::ResetToMenu { reply }).await
    }

    /// Query the current session (read-only copy).
    pub async fn snapshot(&self) -> Result<SessionSnapshot> {
        self.request(|reply| Command::Snapshot { reply }).await
    }

    async fn request<R>(&self, command: impl FnOnce(oneshot::Sender<R>) -> Command) -> Result<R> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }
}
