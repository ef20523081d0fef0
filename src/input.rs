//! Scoped input subscriptions.
//!
//! Two cubes can be on screen at once: the main cube and, while a project
//! is open, the project cube.  Only one of them may be driven by wheel and
//! touch input at a time.  The [`InputRouter`] holds at most one
//! [`Subscription`]; acquiring a new one drops the old one, which discards
//! any half-finished gesture along with it.

use crate::gesture::{GestureConfig, GestureInterpreter, SwipeAxes};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which cube the raw input listeners drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputScope {
    MainCube,
    ProjectCube,
}

impl fmt::Display for InputScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputScope::MainCube => write!(f, "main cube"),
            InputScope::ProjectCube => write!(f, "project cube"),
        }
    }
}

/// Per-scope swipe axes.
///
/// The main page only reacts to horizontal swipes so vertical page
/// scrolling on small screens keeps working; the project cube honours both
/// axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScopeAxes {
    pub main: SwipeAxes,
    pub project: SwipeAxes,
}

impl Default for ScopeAxes {
    fn default() -> Self {
        Self {
            main: SwipeAxes::Horizontal,
            project: SwipeAxes::Both,
        }
    }
}

impl ScopeAxes {
    pub fn for_scope(&self, scope: InputScope) -> SwipeAxes {
        match scope {
            InputScope::MainCube => self.main,
            InputScope::ProjectCube => self.project,
        }
    }
}

/// Live listener registration for one scope.
///
/// Owns the scope's [`GestureInterpreter`]; dropping the subscription
/// releases the listeners and forgets any gesture state.
#[derive(Debug)]
pub struct Subscription {
    scope: InputScope,
    interpreter: GestureInterpreter,
}

impl Subscription {
    fn acquire(scope: InputScope, config: GestureConfig, axes: SwipeAxes) -> Self {
        debug!("listeners acquired for {} ({:?} swipes)", scope, axes);
        Self {
            scope,
            interpreter: GestureInterpreter::new(config, axes),
        }
    }

    pub fn scope(&self) -> InputScope {
        self.scope
    }

    pub fn interpreter(&self) -> &GestureInterpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut GestureInterpreter {
        &mut self.interpreter
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        debug!("listeners released for {}", self.scope);
    }
}

/// Hands raw input to whichever scope is currently subscribed.
#[derive(Debug)]
pub struct InputRouter {
    config: GestureConfig,
    axes: ScopeAxes,
    active: Option<Subscription>,
}

impl InputRouter {
    /// Create a router with no active subscription.
    pub fn new(config: GestureConfig, axes: ScopeAxes) -> Self {
        Self {
            config,
            axes,
            active: None,
        }
    }

    /// Subscribe `scope`, releasing whatever was subscribed before.
    ///
    /// Re-activating the current scope keeps its state.
    pub fn activate(&mut self, scope: InputScope) {
        if self.scope() == Some(scope) {
            return;
        }
        // Release before acquire so the two scopes never overlap.
        self.active = None;
        self.active = Some(Subscription::acquire(
            scope,
            self.config.clone(),
            self.axes.for_scope(scope),
        ));
    }

    /// Release the current subscription, if any.
    pub fn deactivate(&mut self) {
        self.active = None;
    }

    /// The currently subscribed scope.
    pub fn scope(&self) -> Option<InputScope> {
        self.active.as_ref().map(Subscription::scope)
    }

    pub fn subscription(&self) -> Option<&Subscription> {
        self.active.as_ref()
    }

    pub fn subscription_mut(&mut self) -> Option<&mut Subscription> {
        self.active.as_mut()
    }
}
