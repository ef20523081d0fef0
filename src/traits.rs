//! Seams between the navigation core and the outside world.
//!
//! Input arrives through a [`CommandSource`]; state leaves through
//! [`RenderEvent`]s sent over an [`mpsc`](std::sync::mpsc) channel to a
//! passive renderer.  The [`NavigationController`](crate::navigation::NavigationController)
//! depends on neither transport.

use crate::command::Command;
use crate::navigation::NavigationState;
use std::sync::mpsc;

/// Events sent from the [`NavigationController`](crate::navigation::NavigationController)
/// to a renderer.
///
/// The controller holds an `Option<mpsc::Sender<RenderEvent>>`.  The
/// renderer draws what it is told and forwards raw input back as
/// [`Command`]s; it keeps no navigation state of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderEvent {
    /// The navigation state after an operation.  Sent after every
    /// accepted navigation operation, even if it left the state as it was.
    Frame(NavigationState),

    /// A touch gesture started (`true`) or stopped (`false`) suppressing
    /// default page scrolling.
    ScrollLock(bool),
}

/// A source of [`Command`]s.
///
/// Implementations listen on some transport (a Unix socket, standard
/// input, a test harness) and forward parsed commands into the provided
/// [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}
