//! Async host for a [`GameSession`](crate::session::GameSession).
//!
//! The session is synchronous and has no notion of time. This module runs
//! it on a tokio task that owns the real-time concerns: the one-second
//! clock, the short pause before a matching expression completes the level,
//! and message expiry.
//!
//! ## Usage
//!
//! ```
//! use target_x::core::GameConfig;
//! use target_x::runtime;
//! use target_x::session::{GameMode, GameSession};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> target_x::runtime::Result<()> {
//! let (handle, worker) = runtime::spawn(GameSession::new(GameConfig::default()));
//!
//! handle.select_mode(GameMode::Infinity).await?;
//! let snapshot = handle.snapshot().await?;
//! assert!(snapshot.is_playing());
//!
//! drop(handle);
//! worker.await.unwrap();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handle;
pub mod worker;

pub use error::{Result, RuntimeError};
pub use handle::SessionHandle;
pub use worker::{Command, SessionWorker};

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::rules::TargetGenerator;
use crate::session::GameSession;

/// Capacity of the command channel.
pub const COMMAND_BUFFER: usize = 32;

/// Spawn a worker for `session` on the current tokio runtime.
///
/// The worker stops once every clone of the returned handle is dropped.
pub fn spawn<T>(session: GameSession<T>) -> (SessionHandle, JoinHandle<()>)
where
    T: TargetGenerator + Send + 'static,
{
    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = SessionWorker::new(session, command_rx);
    let join = tokio::spawn(worker.run());
    (SessionHandle::new(command_tx), join)
}
