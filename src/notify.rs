//! Outcome notification boundary.
//!
//! The desktop client pushed each terminal outcome to a companion
//! microcontroller over a serial line, one message per line, and
//! surfaced inbound lines from the device. The transport is whatever
//! `Write`/`BufRead` the shell opens; this module only owns the line
//! protocol and the best-effort contract: delivery failures are logged
//! and swallowed, never propagated to the session.

use crate::rules::GameStatus;
use std::io::{BufRead, Write};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Renders the human-readable message for a terminal status.
///
/// Returns `None` for a game still in progress.
pub fn outcome_message(status: &GameStatus) -> Option<String> {
    match status {
        GameStatus::Won(mark) => Some(format!("Player {mark} has won the game!")),
        GameStatus::Tie => Some("The game ended in a tie!".to_string()),
        GameStatus::InProgress => None,
    }
}

/// Writes one message per line to the peer device, best-effort.
#[derive(Debug)]
pub struct LineNotifier<W: Write> {
    writer: W,
}

impl<W: Write> LineNotifier<W> {
    /// Wraps a writer in the line protocol.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Sends a message, swallowing any delivery failure.
    pub fn announce(&mut self, message: &str) {
        if let Err(err) = writeln!(self.writer, "{message}").and_then(|()| self.writer.flush()) {
            warn!(%err, "failed to deliver outcome notification");
        }
    }

    /// Announces a status if it is terminal.
    pub fn announce_outcome(&mut self, status: &GameStatus) {
        if let Some(message) = outcome_message(status) {
            self.announce(&message);
        }
    }

    /// Consumes the notifier, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Turns inbound lines from the peer into a channel the owner polls.
///
/// A reader thread forwards each line until EOF, a read error, or the
/// receiver being dropped. This replaces the old re-entrant data
/// callback: the owning thread decides when to drain messages.
pub fn spawn_line_reader<R>(reader: R) -> mpsc::UnboundedReceiver<String>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in reader.lines() {
            match line {
                Ok(line) => {
                    debug!(%line, "inbound message from peer");
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    warn!(%err, "peer read failed, stopping reader");
                    break;
                }
            }
        }
    });
    rx
}
