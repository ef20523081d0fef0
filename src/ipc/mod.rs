//! Command sources that read newline-delimited JSON [`Command`]s.
//!
//! The rendering surface (or a script replaying a recorded session) writes
//! one command per line, either to a Unix socket ([`listener`]) or to
//! standard input ([`stdin`]).

pub mod listener;
pub mod stdin;

use crate::command::Command;
use log::{debug, error};
use std::io::BufRead;
use std::sync::mpsc;

/// Errors produced by the command sources.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whether the consumer is still listening after a batch of lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Forwarded {
    /// The reader hit end of input; the sink is still open.
    Exhausted,
    /// The sink was dropped; the source should shut down.
    SinkClosed,
}

/// Parse every line of `reader` as a [`Command`] and send it to `sink`.
///
/// Blank lines are skipped and malformed lines are logged and skipped.
/// A read error ends the batch.
pub(crate) fn forward_lines<R: BufRead>(reader: R, sink: &mpsc::Sender<Command>) -> Forwarded {
    for line in reader.lines() {
        match line {
            Ok(ref text) if text.trim().is_empty() => continue,
            Ok(text) => match serde_json::from_str::<Command>(&text) {
                Ok(cmd) => {
                    debug!("received {:?}", cmd);
                    if sink.send(cmd).is_err() {
                        return Forwarded::SinkClosed;
                    }
                }
                Err(e) => {
                    error!("bad command: {} ({})", text, e);
                }
            },
            Err(e) => {
                error!("read error: {}", e);
                break;
            }
        }
    }
    Forwarded::Exhausted
}
