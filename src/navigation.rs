//! The navigation state machine.
//!
//! [`NavigationController`] owns the active face of the main cube, the open
//! project and the active face of the project cube.  It reacts to
//! [`Command`]s by updating that state, routes raw input to the gesture
//! interpreter of the subscribed cube, and reports every change to an
//! attached renderer.

use crate::catalog::{ProjectCatalog, ProjectId, StaticCatalog};
use crate::command::Command;
use crate::face::{Face, Step};
use crate::gesture::{GestureConfig, GestureInterpreter, Point};
use crate::input::{InputRouter, InputScope, ScopeAxes};
use crate::traits::RenderEvent;
use log::{debug, info, warn};
use std::sync::mpsc;

/// Possible errors from the controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The project id is not a key of the catalog.  The state is unchanged.
    #[error("unknown project {0}")]
    UnknownProject(ProjectId),
}

/// Snapshot of everything a renderer needs to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Face shown by the main cube.
    pub active_face: Face,
    /// Project shown in the modal, if it is open.
    pub open_project: Option<ProjectId>,
    /// Face shown by the project cube.
    pub project_face: Face,
}

impl NavigationState {
    /// Whether the project modal is open.
    ///
    /// Derived from [`open_project`](Self::open_project) so the two can
    /// never disagree.
    pub fn is_modal_open(&self) -> bool {
        self.open_project.is_some()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_face: Face::Front,
            open_project: None,
            project_face: Face::Front,
        }
    }
}

/// Orchestrates face navigation for the main cube and the project cube.
///
/// The controller is generic over any [`ProjectCatalog`], so it does not
/// care where project metadata lives.
///
/// # Typical usage
///
/// ```ignore
/// let mut nav = NavigationController::new(StaticCatalog, GestureConfig::default(), ScopeAxes::default());
/// nav.handle(Command::Step(Step::Next))?;
/// assert_eq!(nav.state().active_face, Face::Right);
/// ```
pub struct NavigationController<C: ProjectCatalog = StaticCatalog> {
    catalog: C,
    state: NavigationState,
    router: InputRouter,
    render_tx: Option<mpsc::Sender<RenderEvent>>,
    scroll_locked: bool,
}

impl<C: ProjectCatalog> NavigationController<C> {
    /// Create a controller showing the front face with the modal closed.
    ///
    /// The main cube's input listeners are subscribed immediately.
    pub fn new(catalog: C, gestures: GestureConfig, axes: ScopeAxes) -> Self {
        let mut router = InputRouter::new(gestures, axes);
        router.activate(InputScope::MainCube);
        Self {
            catalog,
            state: NavigationState::default(),
            router,
            render_tx: None,
            scroll_locked: false,
        }
    }

    /// Attach a renderer channel.
    ///
    /// The controller sends [`RenderEvent::Frame`] after every accepted
    /// navigation operation and [`RenderEvent::ScrollLock`] whenever a
    /// touch gesture starts or stops suppressing page scrolling.
    pub fn set_renderer(&mut self, tx: mpsc::Sender<RenderEvent>) {
        self.render_tx = Some(tx);
    }

    /// Current navigation state.
    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Which cube currently owns the raw input listeners.
    pub fn input_scope(&self) -> Option<InputScope> {
        self.router.scope()
    }

    /// Send the current state to the renderer.
    pub fn publish(&self) {
        self.send(RenderEvent::Frame(self.state));
    }

    //  Main cube

    /// Show `face` on the main cube.
    pub fn select_face(&mut self, face: Face) {
        info!("select face {}", face);
        self.state.active_face = face;
        self.publish();
    }

    /// Move the main cube one face along the cycle.
    pub fn step(&mut self, step: Step) {
        let from = self.state.active_face;
        self.state.active_face = from.step(step);
        info!("step {}: {} -> {}", step, from, self.state.active_face);
        self.publish();
    }

    //  Project modal

    /// Open the modal for project `id`.
    ///
    /// Rejects ids that are not in the catalog without touching the state.
    /// Opening moves the input listeners to the project cube.
    pub fn open_project(&mut self, id: ProjectId) -> Result<(), NavigationError> {
        if !self.catalog.contains(id) {
            warn!("rejecting open of unknown project {}", id);
            return Err(NavigationError::UnknownProject(id));
        }
        info!("open project {}", id);
        self.state.open_project = Some(id);
        self.switch_scope(InputScope::ProjectCube);
        self.publish();
        Ok(())
    }

    /// Close the modal.  The main cube keeps its face and gets the input
    /// listeners back.
    pub fn close_project(&mut self) {
        info!("close project");
        self.state.open_project = None;
        self.switch_scope(InputScope::MainCube);
        self.publish();
    }

    /// Show `face` on the project cube.
    pub fn select_project_face(&mut self, face: Face) {
        info!("select project face {}", face);
        self.state.project_face = face;
        self.publish();
    }

    /// Move the project cube one face along the cycle.
    pub fn step_project_face(&mut self, step: Step) {
        let from = self.state.project_face;
        self.state.project_face = from.step(step);
        info!("project step {}: {} -> {}", step, from, self.state.project_face);
        self.publish();
    }

    /// Process a single [`Command`].
    ///
    /// Only [`Command::OpenProject`] can fail; on failure the state is
    /// exactly as it was before the call.
    pub fn handle(&mut self, cmd: Command) -> Result<(), NavigationError> {
        match cmd {
            Command::SelectFace(face) => self.select_face(face),
            Command::Step(step) => self.step(step),
            Command::OpenProject(id) => self.open_project(id)?,
            Command::CloseProject => self.close_project(),
            Command::SelectProjectFace(face) => self.select_project_face(face),
            Command::StepProjectFace(step) => self.step_project_face(step),

            //  Raw input

            Command::Wheel { delta_y, at_ms } => {
                debug!("wheel dy={:.1} at {}", delta_y, at_ms);
                let step = self.interpreter_mut().and_then(|g| g.wheel(delta_y, at_ms));
                if let Some(step) = step {
                    self.apply_gesture_step(step);
                }
            }

            Command::TouchStart { x, y, at_ms, target } => {
                debug!("touch start ({:.0}, {:.0}) on {:?}", x, y, target);
                if let Some(g) = self.interpreter_mut() {
                    g.touch_start(Point::new(x, y), at_ms, target);
                }
                self.set_scroll_lock(false);
            }

            Command::TouchMove { x, y } => {
                let active = self
                    .interpreter_mut()
                    .map(|g| g.touch_move(Point::new(x, y)))
                    .unwrap_or(false);
                self.set_scroll_lock(active);
            }

            Command::TouchEnd { x, y, at_ms } => {
                debug!("touch end ({:.0}, {:.0})", x, y);
                let step = self
                    .interpreter_mut()
                    .and_then(|g| g.touch_end(Point::new(x, y), at_ms));
                self.set_scroll_lock(false);
                if let Some(step) = step {
                    self.apply_gesture_step(step);
                }
            }

            Command::TouchCancel => {
                debug!("touch cancelled");
                if let Some(g) = self.interpreter_mut() {
                    g.touch_cancel();
                }
                self.set_scroll_lock(false);
            }
        }
        Ok(())
    }

    //  Helpers

    fn interpreter_mut(&mut self) -> Option<&mut GestureInterpreter> {
        self.router.subscription_mut().map(|s| s.interpreter_mut())
    }

    /// Apply a gesture step to whichever cube owns the listeners.
    fn apply_gesture_step(&mut self, step: Step) {
        match self.router.scope() {
            Some(InputScope::MainCube) => self.step(step),
            Some(InputScope::ProjectCube) => self.step_project_face(step),
            None => debug!("gesture step {} with no subscribed scope", step),
        }
    }

    /// Move the listeners to `scope`.  A half-finished gesture in the old
    /// scope is dropped, so any scroll lock it held is lifted.
    fn switch_scope(&mut self, scope: InputScope) {
        if self.router.scope() != Some(scope) {
            self.set_scroll_lock(false);
        }
        self.router.activate(scope);
    }

    fn set_scroll_lock(&mut self, locked: bool) {
        if self.scroll_locked != locked {
            self.scroll_locked = locked;
            self.send(RenderEvent::ScrollLock(locked));
        }
    }

    fn send(&self, event: RenderEvent) {
        if let Some(tx) = &self.render_tx {
            let _ = tx.send(event);
        }
    }
}

//  Tests
