pub mod event_kind;
pub mod gestures;
pub mod types;

pub use event_kind::{TouchEventKind, TouchEventKinds};
pub use gestures::{
    GestureDetector, GestureRecognition, LongPressDetector, Recognitions, TapDetector,
};
pub use types::{LongPressPhase, PointerEvent, PointerId, PointerPhase};

pub mod prelude {
    pub use super::event_kind::{TouchEventKind, TouchEventKinds};
    pub use super::types::{LongPressPhase, PointerEvent, PointerId, PointerPhase};
}
