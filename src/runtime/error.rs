//! Errors surfaced by [`SessionHandle`](super::SessionHandle).

use thiserror::Error;
use tokio::sync::oneshot;

use crate::core::SessionError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl RuntimeError {
    /// The rejected transition, if the session itself refused the command.
    #[must_use]
    pub fn as_session(&self) -> Option<&SessionError> {
        match self {
            RuntimeError::Session(err) => Some(err),
            _ => None,
        }
    }
}
