//! The command vocabulary shared by input sources and the controller.
//!
//! A [`Command`] is either an explicit navigation request (menu click,
//! arrow button, project tile) or a raw input event forwarded by the
//! rendering surface.  Raw events are interpreted by the gesture
//! interpreter of whichever cube currently owns the input listeners.

use crate::catalog::ProjectId;
use crate::face::{Face, Step};
use crate::gesture::{Point, PointerTarget};
use serde::{Deserialize, Serialize};

/// Every action the navigation controller can perform.
///
/// Commands are produced by [`CommandSource`](crate::traits::CommandSource)
/// implementations and consumed by the
/// [`NavigationController`](crate::navigation::NavigationController).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Show `face` on the main cube (menu item or navigation dot).
    SelectFace(Face),

    /// Move the main cube one face along the cycle (arrow buttons).
    Step(Step),

    /// Open the project modal for the given catalog id.
    ///
    /// Ids that are not in the catalog are rejected and leave the state
    /// untouched.
    OpenProject(ProjectId),

    /// Close the project modal.  The main cube keeps its face.
    CloseProject,

    /// Show `face` on the project cube (the modal's navigate buttons).
    SelectProjectFace(Face),

    /// Move the project cube one face along the cycle.
    StepProjectFace(Step),

    //  Raw input forwarded by the rendering surface

    /// A wheel / scroll event.  Only the vertical delta is used.
    Wheel { delta_y: f64, at_ms: u64 },

    /// A finger touched down.
    TouchStart {
        x: f64,
        y: f64,
        at_ms: u64,
        #[serde(default)]
        target: PointerTarget,
    },

    /// The finger moved.
    TouchMove { x: f64, y: f64 },

    /// The finger lifted.
    TouchEnd { x: f64, y: f64, at_ms: u64 },

    /// The platform interrupted the touch (e.g. `touchcancel`).
    TouchCancel,
}

impl Command {
    /// Convenience for building a surface touch-down.
    pub fn touch_start(point: Point, at_ms: u64) -> Self {
        Command::TouchStart {
            x: point.x,
            y: point.y,
            at_ms,
            target: PointerTarget::Surface,
        }
    }

    /// Whether this command is raw input that goes through a gesture
    /// interpreter.
    pub fn is_raw_input(&self) -> bool {
        matches!(
            self,
            Command::Wheel { .. }
                | Command::TouchStart { .. }
                | Command::TouchMove { .. }
                | Command::TouchEnd { .. }
                | Command::TouchCancel
        )
    }
}
