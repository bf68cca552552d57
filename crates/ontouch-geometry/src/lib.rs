//! Pure geometry for ontouch
//!
//! Touch locations are reported in the local coordinate space of the surface
//! they were delivered to. This crate holds the small set of value types the
//! router needs for that: points, sizes and the surface rectangle used for
//! bounds-limiting.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}
