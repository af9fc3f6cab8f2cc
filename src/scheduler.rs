//! Deferred delivery of controller commands.

use crate::controller::Command;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Delivers a command back to the event loop after a delay.
pub trait Scheduler {
    /// Delivers `command` once `delay` has passed.
    fn schedule(&mut self, delay: Duration, command: Command);

    /// Drops every command that has not been delivered yet.
    fn cancel_all(&mut self);
}

/// Timer tasks on the tokio runtime feeding an unbounded channel.
///
/// The tasks hold no game state; they sleep and send. The receiving event
/// loop is the only place commands are applied.
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<Command>,
    pending: Vec<JoinHandle<()>>,
}

impl TokioScheduler {
    /// Sends due commands into `tx`.
    pub fn new(tx: mpsc::UnboundedSender<Command>) -> Self {
        Self {
            tx,
            pending: Vec::new(),
        }
    }

    /// Timer tasks that have not finished.
    pub fn pending(&self) -> usize {
        self.pending.iter().filter(|h| !h.is_finished()).count()
    }
}

impl Scheduler for TokioScheduler {
    #[instrument(skip(self))]
    fn schedule(&mut self, delay: Duration, command: Command) {
        self.pending.retain(|h| !h.is_finished());
        let tx = self.tx.clone();
        self.pending.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(command).is_err() {
                warn!(?command, "Event loop gone before command was due");
            }
        }));
    }

    #[instrument(skip(self))]
    fn cancel_all(&mut self) {
        debug!(pending = self.pending(), "Cancelling scheduled commands");
        for handle in self.pending.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
