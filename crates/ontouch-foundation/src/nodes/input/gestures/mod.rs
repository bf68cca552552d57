//! Gesture detectors owned by each routed surface.
//!
//! A detector is switched on only while its surface's filter asks for the
//! kinds it produces, so surfaces that only want raw touches pay nothing for
//! recognition. Detectors see the primary-touch stream when the router runs
//! with [`GestureSource::Builtin`](crate::GestureSource::Builtin); with host
//! recognition they only gate and classify what the host reports.

pub mod long_press;
pub mod tap;

pub use long_press::LongPressDetector;
pub use tap::TapDetector;

use super::event_kind::TouchEventKind;
use super::types::PointerEvent;
use ontouch_geometry::Point;
use smallvec::SmallVec;
use web_time::Instant;

/// A gesture a detector recognised, in surface-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureRecognition {
    pub position: Point,
    pub kind: TouchEventKind,
}

impl GestureRecognition {
    pub fn new(position: Point, kind: TouchEventKind) -> Self {
        Self { position, kind }
    }
}

/// Recognitions produced by a single input notification. A late long press
/// can start and end on the same release, hence two inline slots.
pub type Recognitions = SmallVec<[GestureRecognition; 2]>;

pub trait GestureDetector {
    fn is_enabled(&self) -> bool;

    /// Switching a detector off drops any gesture it was tracking.
    fn set_enabled(&mut self, enabled: bool);

    /// Feeds one primary-touch event. Disabled detectors return nothing.
    fn on_pointer(&mut self, event: &PointerEvent, now: Instant) -> Recognitions;

    /// Lets time-based recognition progress without a new event.
    fn on_tick(&mut self, _now: Instant) -> Recognitions {
        Recognitions::new()
    }

    fn reset(&mut self);
}
