//! Standard-input [`CommandSource`] implementation.
//!
//! Useful for replaying a recorded event trace:
//!
//! ```sh
//! cubefolio --stdin < session.jsonl
//! ```

use super::{forward_lines, SourceError};
use crate::command::Command;
use crate::traits::CommandSource;
use log::info;
use std::io::{self, BufRead};
use std::sync::mpsc;

/// A [`CommandSource`] that reads JSON commands from any buffered reader,
/// standard input by default.
pub struct StdinSource<R: BufRead + Send> {
    reader: Option<R>,
}

impl StdinSource<io::BufReader<io::Stdin>> {
    /// Read from the process's standard input.
    pub fn new() -> Self {
        Self::from_reader(io::BufReader::new(io::stdin()))
    }
}

impl Default for StdinSource<io::BufReader<io::Stdin>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead + Send> StdinSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Some(reader),
        }
    }
}

impl<R: BufRead + Send> CommandSource for StdinSource<R> {
    type Error = SourceError;

    /// Forward commands until end of input.  A second call returns
    /// immediately.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error> {
        if let Some(reader) = self.reader.take() {
            forward_lines(reader, &sink);
            info!("input exhausted");
        }
        Ok(())
    }
}
