//! Translates raw wheel and touch input into relative [`Step`]s.
//!
//! # Channels
//!
//! The [`GestureInterpreter`] runs two independent channels, each with its
//! own debouncing:
//!
//! | Channel | Input                                  | Emits a step when                               |
//! |---------|----------------------------------------|-------------------------------------------------|
//! | wheel   | vertical scroll delta + timestamp      | `|delta| >= noise_threshold` outside cooldown   |
//! | touch   | down / move / up coordinates           | the swipe covers `min_swipe_distance`           |
//!
//! The wheel cooldown is measured from the last *accepted* event; events
//! inside the window are dropped, not queued.
//!
//! Swipes follow "drag the cube" semantics: swiping right or down shows
//! the previous face, swiping left or up shows the next one.  Screen
//! coordinates grow rightwards and downwards.

use crate::face::Step;
use log::debug;
use serde::{Deserialize, Serialize};

/// Tuning knobs shared by every gesture scope.
///
/// All distances are in CSS pixels, all durations in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Wheel deltas smaller than this are treated as noise.  Default: `5.0`.
    pub noise_threshold: f64,
    /// Minimum time between two accepted wheel steps.  Default: `500`.
    pub cooldown_ms: u64,
    /// Displacement after which a touch counts as a gesture and default
    /// scrolling is suppressed.  Default: `10.0`.
    pub jitter_threshold: f64,
    /// Minimum travel along the dominant axis for a swipe to step.
    /// Default: `40.0`.
    pub min_swipe_distance: f64,
    /// If set, swipes that take longer than this yield no step.
    /// Default: `None`.
    pub max_swipe_ms: Option<u64>,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            noise_threshold: 5.0,
            cooldown_ms: 500,
            jitter_threshold: 10.0,
            min_swipe_distance: 40.0,
            max_swipe_ms: None,
        }
    }
}

/// Which swipe axes are allowed to produce steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwipeAxes {
    /// Only horizontal swipes step; vertical swipes are ignored.
    Horizontal,
    /// Horizontal and vertical swipes both step.
    Both,
}

/// A screen coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// What a touch landed on.
///
/// Touches on interactive elements belong to that element and are never
/// captured as gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PointerTarget {
    /// The cube or page background.
    #[default]
    Surface,
    /// A link or button.
    Interactive,
}

/// One completed touch gesture, ready for classification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    pub start: Point,
    pub end: Point,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl GestureSample {
    /// `(dx, dy)` from start to end.
    pub fn delta(&self) -> (f64, f64) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// Gesture duration; zero if the clock went backwards.
    pub fn duration_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

/// Decide the step for a swipe displacement.
///
/// Returns `None` if neither axis reaches `min_distance`, or if the
/// dominant axis is vertical and `axes` is [`SwipeAxes::Horizontal`].
/// Ties go to the horizontal axis.
pub fn swipe_step(dx: f64, dy: f64, min_distance: f64, axes: SwipeAxes) -> Option<Step> {
    let abs_x = dx.abs();
    let abs_y = dy.abs();

    if abs_x.max(abs_y) < min_distance {
        return None;
    }

    if abs_x >= abs_y {
        Some(if dx > 0.0 { Step::Previous } else { Step::Next })
    } else if axes == SwipeAxes::Both {
        Some(if dy > 0.0 { Step::Previous } else { Step::Next })
    } else {
        None
    }
}

/// Debounce state for the wheel channel.
#[derive(Debug, Default)]
struct WheelChannel {
    last_accepted_ms: Option<u64>,
}

impl WheelChannel {
    fn accept(&mut self, delta_y: f64, at_ms: u64, config: &GestureConfig) -> Option<Step> {
        if delta_y.abs() < config.noise_threshold {
            return None;
        }
        if let Some(last) = self.last_accepted_ms {
            if at_ms.saturating_sub(last) < config.cooldown_ms {
                debug!("wheel dropped: inside cooldown ({} ms since last)", at_ms.saturating_sub(last));
                return None;
            }
        }
        self.last_accepted_ms = Some(at_ms);
        Some(if delta_y > 0.0 { Step::Next } else { Step::Previous })
    }
}

/// Touch-down record for an in-flight swipe.
#[derive(Debug, Clone, Copy)]
struct TouchStart {
    point: Point,
    at_ms: u64,
}

/// Accumulator for the touch channel.
#[derive(Debug, Default)]
struct TouchChannel {
    start: Option<TouchStart>,
    /// Set once the touch moved past the jitter threshold.
    active: bool,
}

/// Wheel + touch interpreter for one navigation scope.
#[derive(Debug)]
pub struct GestureInterpreter {
    config: GestureConfig,
    axes: SwipeAxes,
    wheel: WheelChannel,
    touch: TouchChannel,
}

impl GestureInterpreter {
    pub fn new(config: GestureConfig, axes: SwipeAxes) -> Self {
        Self {
            config,
            axes,
            wheel: WheelChannel::default(),
            touch: TouchChannel::default(),
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn axes(&self) -> SwipeAxes {
        self.axes
    }

    /// Feed one wheel event.  Returns the step to take, if any.
    pub fn wheel(&mut self, delta_y: f64, at_ms: u64) -> Option<Step> {
        self.wheel.accept(delta_y, at_ms, &self.config)
    }

    /// Record a touch-down.
    ///
    /// A touch on an [`PointerTarget::Interactive`] element is not
    /// captured; any stale record from an earlier touch is dropped.
    pub fn touch_start(&mut self, point: Point, at_ms: u64, target: PointerTarget) {
        self.touch.active = false;
        if target == PointerTarget::Interactive {
            debug!("touch on interactive element, not captured");
            self.touch.start = None;
            return;
        }
        self.touch.start = Some(TouchStart { point, at_ms });
    }

    /// Feed a touch-move.
    ///
    /// Returns `true` while the gesture is active, i.e. the caller should
    /// suppress default scrolling.
    pub fn touch_move(&mut self, point: Point) -> bool {
        let Some(start) = self.touch.start else {
            return false;
        };
        if !self.touch.active {
            let dx = (point.x - start.point.x).abs();
            let dy = (point.y - start.point.y).abs();
            if dx > self.config.jitter_threshold || dy > self.config.jitter_threshold {
                debug!("touch gesture active");
                self.touch.active = true;
            }
        }
        self.touch.active
    }

    /// Feed a touch-up and classify the finished gesture.
    ///
    /// A touch-up with no matching touch-down is a no-op.
    pub fn touch_end(&mut self, point: Point, at_ms: u64) -> Option<Step> {
        self.touch.active = false;
        let start = self.touch.start.take()?;
        let sample = GestureSample {
            start: start.point,
            end: point,
            start_ms: start.at_ms,
            end_ms: at_ms,
        };
        self.classify(&sample)
    }

    /// Abandon any in-flight touch gesture.
    pub fn touch_cancel(&mut self) {
        self.touch = TouchChannel::default();
    }

    /// Whether a touch gesture is currently suppressing default scrolling.
    pub fn is_touch_active(&self) -> bool {
        self.touch.active
    }

    /// Decide the step for a completed gesture under this interpreter's
    /// configuration.
    pub fn classify(&self, sample: &GestureSample) -> Option<Step> {
        if let Some(max) = self.config.max_swipe_ms {
            if sample.duration_ms() > max {
                debug!("swipe too slow ({} ms)", sample.duration_ms());
                return None;
            }
        }
        let (dx, dy) = sample.delta();
        let step = swipe_step(dx, dy, self.config.min_swipe_distance, self.axes);
        debug!("swipe dx={:.1} dy={:.1} -> {:?}", dx, dy, step);
        step
    }
}

//  Tests

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg_min(min: f64) -> GestureConfig {
        GestureConfig {
            min_swipe_distance: min,
            ..GestureConfig::default()
        }
    }

    #[test]
    fn default_config_values() {
        let cfg = GestureConfig::default();
        assert_eq!(cfg.noise_threshold, 5.0);
        assert_eq!(cfg.cooldown_ms, 500);
        assert_eq!(cfg.jitter_threshold, 10.0);
        assert_eq!(cfg.min_swipe_distance, 40.0);
        assert_eq!(cfg.max_swipe_ms, None);
    }

    #[test]
    fn swipe_left_is_next() {
        assert_eq!(swipe_step(-60.0, 5.0, 30.0, SwipeAxes::Horizontal), Some(Step::Next));
    }

    #[test]
    fn swipe_right_is_previous() {
        assert_eq!(swipe_step(60.0, -5.0, 30.0, SwipeAxes::Both), Some(Step::Previous));
    }

    #[test]
    fn swipe_up_is_next_down_is_previous() {
        assert_eq!(swipe_step(3.0, -80.0, 30.0, SwipeAxes::Both), Some(Step::Next));
        assert_eq!(swipe_step(3.0, 80.0, 30.0, SwipeAxes::Both), Some(Step::Previous));
    }

    #[test]
    fn vertical_swipe_ignored_when_horizontal_only() {
        assert_eq!(swipe_step(3.0, -80.0, 30.0, SwipeAxes::Horizontal), None);
    }

    #[test]
    fn swipe_below_threshold_is_none() {
        assert_eq!(swipe_step(5.0, 0.0, 30.0, SwipeAxes::Both), None);
        assert_eq!(swipe_step(-29.9, 29.9, 30.0, SwipeAxes::Both), None);
    }

    #[test]
    fn swipe_exactly_at_threshold_steps() {
        assert_eq!(swipe_step(-30.0, 0.0, 30.0, SwipeAxes::Horizontal), Some(Step::Next));
    }

    #[test]
    fn swipe_tie_goes_horizontal() {
        assert_eq!(swipe_step(50.0, 50.0, 30.0, SwipeAxes::Horizontal), Some(Step::Previous));
    }

    #[test]
    fn wheel_sign_maps_to_direction() {
        let mut g = GestureInterpreter::new(GestureConfig::default(), SwipeAxes::Both);
        assert_eq!(g.wheel(120.0, 1_000), Some(Step::Next));
        assert_eq!(g.wheel(-120.0, 2_000), Some(Step::Previous));
    }

    #[test]
    fn wheel_noise_is_ignored() {
        let mut g = GestureInterpreter::new(GestureConfig::default(), SwipeAxes::Both);
        assert_eq!(g.wheel(4.9, 1_000), None);
        assert_eq!(g.wheel(-2.0, 2_000), None);
        assert_eq!(g.wheel(0.0, 3_000), None);
    }

    #[test]
    fn wheel_cooldown_drops_second_event() {
        let mut g = GestureInterpreter::new(GestureConfig::default(), SwipeAxes::Both);
        assert_eq!(g.wheel(50.0, 1_000), Some(Step::Next));
        assert_eq!(g.wheel(50.0, 1_100), None);
    }

    /// Dropped events do not extend the cooldown window.
    #[test]
    fn wheel_cooldown_measured_from_last_accepted() {
        let mut g = GestureInterpreter::new(GestureConfig::default(), SwipeAxes::Both);
        assert_eq!(g.wheel(50.0, 1_000), Some(Step::Next));
        assert_eq!(g.wheel(50.0, 1_400), None);
        assert_eq!(g.wheel(50.0, 1_500), Some(Step::Next));
    }

    #[test]
    fn noise_does_not_arm_cooldown() {
        let mut g = GestureInterpreter::new(GestureConfig::default(), SwipeAxes::Both);
        assert_eq!(g.wheel(1.0, 1_000), None);
        assert_eq!(g.wheel(50.0, 1_010), Some(Step::Next));
    }

    #[test]
    fn touch_swipe_left_steps_next() {
        let mut g = GestureInterpreter::new(cfg_min(30.0), SwipeAxes::Horizontal);
        g.touch_start(Point::new(200.0, 100.0), 0, PointerTarget::Surface);
        assert!(g.touch_move(Point::new(170.0, 102.0)));
        assert_eq!(g.touch_end(Point::new(140.0, 105.0), 120), Some(Step::Next));
        assert!(!g.is_touch_active());
    }

    #[test]
    fn small_touch_yields_nothing() {
        let mut g = GestureInterpreter::new(cfg_min(30.0), SwipeAxes::Both);
        g.touch_start(Point::new(100.0, 100.0), 0, PointerTarget::Surface);
        assert!(!g.touch_move(Point::new(103.0, 101.0)));
        assert_eq!(g.touch_end(Point::new(105.0, 100.0), 80), None);
    }

    #[test]
    fn jitter_threshold_activates_gesture() {
        let mut g = GestureInterpreter::new(GestureConfig::default(), SwipeAxes::Both);
        g.touch_start(Point::new(0.0, 0.0), 0, PointerTarget::Surface);
        assert!(!g.touch_move(Point::new(10.0, 0.0)));
        assert!(g.touch_move(Point::new(0.0, 10.5)));
        // Stays active even if the finger drifts back.
        assert!(g.touch_move(Point::new(0.0, 0.0)));
    }

    #[test]
    fn touch_end_without_start_is_noop() {
        let mut g = GestureInterpreter::new(cfg_min(30.0), SwipeAxes::Both);
        assert_eq!(g.touch_end(Point::new(500.0, 0.0), 10), None);
        assert!(!g.touch_move(Point::new(600.0, 0.0)));
    }

    #[test]
    fn touch_start_is_consumed_by_end() {
        let mut g = GestureInterpreter::new(cfg_min(30.0), SwipeAxes::Both);
        g.touch_start(Point::new(100.0, 0.0), 0, PointerTarget::Surface);
        assert_eq!(g.touch_end(Point::new(0.0, 0.0), 50), Some(Step::Next));
        assert_eq!(g.touch_end(Point::new(0.0, 0.0), 60), None);
    }

    #[test]
    fn interactive_target_is_not_captured() {
        let mut g = GestureInterpreter::new(cfg_min(30.0), SwipeAxes::Both);
        g.touch_start(Point::new(300.0, 0.0), 0, PointerTarget::Interactive);
        assert!(!g.touch_move(Point::new(200.0, 0.0)));
        assert_eq!(g.touch_end(Point::new(100.0, 0.0), 100), None);
    }

    #[test]
    fn cancel_clears_in_flight_gesture() {
        let mut g = GestureInterpreter::new(cfg_min(30.0), SwipeAxes::Both);
        g.touch_start(Point::new(300.0, 0.0), 0, PointerTarget::Surface);
        assert!(g.touch_move(Point::new(250.0, 0.0)));
        g.touch_cancel();
        assert!(!g.is_touch_active());
        assert_eq!(g.touch_end(Point::new(100.0, 0.0), 100), None);
    }

    #[test]
    fn slow_swipe_rejected_when_limit_set() {
        let cfg = GestureConfig {
            max_swipe_ms: Some(300),
            ..cfg_min(30.0)
        };
        let mut g = GestureInterpreter::new(cfg, SwipeAxes::Both);
        g.touch_start(Point::new(100.0, 0.0), 0, PointerTarget::Surface);
        assert_eq!(g.touch_end(Point::new(0.0, 0.0), 301), None);
        g.touch_start(Point::new(100.0, 0.0), 1_000, PointerTarget::Surface);
        assert_eq!(g.touch_end(Point::new(0.0, 0.0), 1_300), Some(Step::Next));
    }

    #[test]
    fn wheel_and_touch_channels_are_independent() {
        let mut g = GestureInterpreter::new(cfg_min(30.0), SwipeAxes::Both);
        assert_eq!(g.wheel(50.0, 1_000), Some(Step::Next));
        g.touch_start(Point::new(0.0, 0.0), 1_010, PointerTarget::Surface);
        assert_eq!(g.touch_end(Point::new(80.0, 0.0), 1_050), Some(Step::Previous));
    }

    #[test]
    fn sample_delta_and_duration() {
        let s = GestureSample {
            start: Point::new(10.0, 20.0),
            end: Point::new(-50.0, 25.0),
            start_ms: 100,
            end_ms: 40,
        };
        assert_eq!(s.delta(), (-60.0, 5.0));
        assert_eq!(s.duration_ms(), 0);
    }
}
