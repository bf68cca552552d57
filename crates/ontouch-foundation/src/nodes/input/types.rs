use ontouch_geometry::Point;

pub type PointerId = u64;

/// Lifecycle phase of a touch as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Start,
    Move,
    End,
    /// The host interrupted the touch (system alert, gesture takeover).
    /// Routed exactly like [`PointerPhase::End`].
    Cancel,
}

impl PointerPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, PointerPhase::End | PointerPhase::Cancel)
    }
}

/// A single touch, in the local coordinates of the surface it was delivered to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub phase: PointerPhase,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, position: Point) -> Self {
        Self {
            id: 0,
            phase,
            position,
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn start(position: Point) -> Self {
        Self::new(PointerPhase::Start, position)
    }

    pub fn moved(position: Point) -> Self {
        Self::new(PointerPhase::Move, position)
    }

    pub fn end(position: Point) -> Self {
        Self::new(PointerPhase::End, position)
    }

    pub fn cancel(position: Point) -> Self {
        Self::new(PointerPhase::Cancel, position)
    }
}

/// State a host long-press recogniser reports with each action.
///
/// Anything past `Changed` ends the gesture: a cancelled or failed recogniser
/// is delivered as `LongGestureEnded`, the same as a normal release.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LongPressPhase {
    Began,
    Changed,
    Ended,
    Cancelled,
    Failed,
}
