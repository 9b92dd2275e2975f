//! Transient player-facing messages.

use serde::{Deserialize, Serialize};

/// How a message should be presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A short-lived notice shown over the board.
///
/// Each message carries a session-unique `id` so that an expiry scheduled
/// for an older message never clears a newer one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: u64,
    pub text: String,
    pub severity: Severity,
}

impl Message {
    /// Create a message.
    #[must_use]
    pub fn new(id: u64, text: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            text: text.into(),
            severity,
        }
    }

    /// Whether this is an error notice.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
