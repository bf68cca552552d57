//! Foundation for ontouch: the touch event taxonomy, gesture detectors and
//! the router that delivers filtered touch events to attached surfaces.

pub mod config;
pub mod error;
pub mod gesture_constants;
pub mod nodes;
pub mod router;

// Re-export commonly used items
pub use config::{GestureConfig, GestureSource, TouchOptions};
pub use error::RouterError;
pub use nodes::input::{
    GestureDetector, GestureRecognition, LongPressDetector, LongPressPhase, PointerEvent,
    PointerId, PointerPhase, Recognitions, TapDetector, TouchEventKind, TouchEventKinds,
};
pub use ontouch_geometry::{Point, Rect, Size};
pub use router::{DetectorEnablement, SurfaceId, TouchHandler, TouchRouter};

pub mod prelude {
    pub use crate::config::{GestureConfig, GestureSource, TouchOptions};
    pub use crate::error::RouterError;
    pub use crate::nodes::input::prelude::*;
    pub use crate::router::{SurfaceId, TouchRouter};
    pub use ontouch_geometry::prelude::*;
}
