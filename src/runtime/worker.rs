//! Session worker: owns the [`GameSession`] and its schedules.
//!
//! Commands arrive from [`SessionHandle`](super::SessionHandle) over an mpsc
//! channel and are applied one at a time, so every mutation is serialized
//! through this task. Alongside the commands the worker waits on three
//! optional schedules:
//!
//! - the clock, an `Interval` that exists only while the session is playing
//! - the win settle deadline, armed while a win is pending
//! - the message expiry, armed for the message currently showing
//!
//! After every event `sync_schedules` arms or drops each one to match the
//! session, so leaving PLAYING always stops the clock before the next
//! `select!` and no stale tick can reach a reset session.

use std::future;
use std::pin::Pin;

use tokio::sync::{mpsc, oneshot};
use tokio::time::{self, Instant, Interval, MissedTickBehavior, Sleep};
use tracing::{debug, info};

use crate::cards::{Card, Token, TokenId};
use crate::core::SessionError;
use crate::rules::{SeededTargets, TargetGenerator};
use crate::session::{Difficulty, GameMode, GameSession, SessionSnapshot};

type Reply<T> = oneshot::Sender<Result<T, SessionError>>;

/// Commands accepted by the session worker.
pub enum Command {
    SelectDifficulty {
        difficulty: Difficulty,
        reply: Reply<()>,
    },
    SelectMode {
        mode: GameMode,
        reply: Reply<()>,
    },
    SubmitCustomTarget {
        input: String,
        reply: Reply<()>,
    },
    PlayCard {
        card: Card,
        reply: Reply<TokenId>,
    },
    Backspace {
        reply: Reply<Option<Token>>,
    },
    ClearExpression {
        reply: Reply<usize>,
    },
    Forfeit {
        reply: Reply<()>,
    },
    ResetToMenu {
        reply: oneshot::Sender<()>,
    },
    /// Read-only copy of the session.
    Snapshot {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Background task that drives one session.
pub struct SessionWorker<T = SeededTargets> {
    session: GameSession<T>,
    command_rx: mpsc::Receiver<Command>,
    clock: Option<Interval>,
    settle: Option<Pin<Box<Sleep>>>,
    expiry: Option<(u64, Pin<Box<Sleep>>)>,
}

impl<T: TargetGenerator> SessionWorker<T> {
    /// Creates a worker with no schedules armed.
    pub fn new(session: GameSession<T>, command_rx: mpsc::Receiver<Command>) -> Self {
        Self {
            session,
            command_rx,
            clock: None,
            settle: None,
            expiry: None,
        }
    }

    /// Main worker loop. Returns once every handle has been dropped.
    pub async fn run(mut self) {
        info!(phase = ?self.session.phase(), "session worker started");
        self.sync_schedules();

        loop {
            tokio::select! {
                cmd = self.command_rx.recv() => match cmd {
                    Some(cmd) => self.handle_command(cmd),
                    None => break,
                },
                () = next_tick(&mut self.clock) => {
                    self.session.tick();
                }
                () = expire(&mut self.settle) => {
                    self.settle = None;
                    self.session.settle_win();
                }
                id = expire_message(&mut self.expiry) => {
                    self.expiry = None;
                    self.session.dismiss_message(id);
                }
            }
            self.sync_schedules();
        }

        debug!("session worker stopped");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SelectDifficulty { difficulty, reply } => {
                send(reply, self.session.select_difficulty(difficulty), "SelectDifficulty");
            }
            Command::SelectMode { mode, reply } => {
                send(reply, self.session.select_mode(mode), "SelectMode");
            }
            Command::SubmitCustomTarget { input, reply } => {
                send(reply, self.session.submit_custom_target(&input), "SubmitCustomTarget");
            }
            Command::PlayCard { card, reply } => {
                send(reply, self.session.play_card(card), "PlayCard");
            }
            Command::Backspace { reply } => {
                send(reply, self.session.backspace(), "Backspace");
            }
            Command::ClearExpression { reply } => {
                send(reply, self.session.clear_expression(), "ClearExpression");
            }
            Command::Forfeit { reply } => {
                send(reply, self.session.forfeit(), "Forfeit");
            }
            Command::ResetToMenu { reply } => {
                self.session.reset_to_menu();
                send(reply, (), "ResetToMenu");
            }
            Command::Snapshot { reply } => {
                send(reply, self.session.snapshot(), "Snapshot");
            }
        }
    }

    /// Arm or drop each schedule so it matches the session.
    fn sync_schedules(&mut self) {
        match (self.session.clock_running(), self.clock.is_some()) {
            (true, false) => {
                let period = self.session.config().tick_interval;
                let mut interval = time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                self.clock = Some(interval);
                debug!(?period, "clock started");
            }
            (false, true) => {
                self.clock = None;
                debug!("clock stopped");
            }
            _ => {}
        }

        match (self.session.pending_win(), self.settle.is_some()) {
            (true, false) => {
                let delay = self.session.config().win_settle_delay;
                self.settle = Some(Box::pin(time::sleep(delay)));
                debug!(?delay, "win settle armed");
            }
            (false, true) => {
                self.settle = None;
                debug!("win settle cancelled");
            }
            _ => {}
        }

        let showing = self.session.message().map(|m| (m.id, m.severity));
        let armed = self.expiry.as_ref().map(|(id, _)| *id);
        match (showing, armed) {
            (Some((id, _)), Some(armed)) if armed == id => {}
            (Some((id, severity)), _) => {
                let ttl = self.session.config().message_ttl(severity);
                self.expiry = Some((id, Box::pin(time::sleep(ttl))));
            }
            (None, Some(_)) => self.expiry = None,
            (None, None) => {}
        }
    }
}

fn send<R>(reply: oneshot::Sender<R>, value: R, command: &str) {
    if reply.send(value).is_err() {
        debug!(command, "reply channel closed (caller dropped)");
    }
}

async fn next_tick(clock: &mut Option<Interval>) {
    match clock {
        Some(interval) => {
            interval.tick().await;
        }
        None => future::pending().await,
    }
}

async fn expire(deadline: &mut Option<Pin<Box<Sleep>>>) {
    match deadline {
        Some(sleep) => sleep.as_mut().await,
        None => future::pending().await,
    }
}

async fn expire_message(expiry: &mut Option<(u64, Pin<Box<Sleep>>)>) -> u64 {
    match expiry {
        Some((id, sleep)) => {
            sleep.as_mut().await;
            *id
        }
        None => future::pending().await,
    }
}
