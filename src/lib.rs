//! **cubefolio** — navigation core for a six-faced cube portfolio.
//!
//! A portfolio page shows its sections on the faces of a rotating cube and
//! project details on a second, smaller cube inside a modal.  This crate
//! owns which face each cube shows and turns wheel and touch input into
//! face steps.  Drawing is left to a passive renderer.
//!
//! # Architecture
//!
//! * [`navigation::NavigationController`] holds the state and reacts to
//!   [`command::Command`]s.
//! * [`gesture::GestureInterpreter`] debounces wheel events and classifies
//!   swipes into [`face::Step`]s.
//! * [`input::InputRouter`] keeps exactly one cube subscribed to raw input.
//! * [`traits::CommandSource`] abstracts where commands come from
//!   ([`ipc`] has a Unix socket and a stdin source).
//! * [`traits::RenderEvent`]s flow to a renderer such as
//!   [`render::text::TextRenderer`].

pub mod catalog;
pub mod command;
pub mod config;
pub mod content;
pub mod face;
pub mod gesture;
pub mod input;
pub mod ipc;
pub mod navigation;
pub mod render;
pub mod traits;
