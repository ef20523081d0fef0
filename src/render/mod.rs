//! Renderers for the navigation state.
//!
//! A renderer is a passive observer: it receives
//! [`RenderEvent`](crate::traits::RenderEvent)s and draws them.  The
//! [`text::TextRenderer`] draws panels as plain text on any
//! [`Write`](std::io::Write) sink.

pub mod text;
