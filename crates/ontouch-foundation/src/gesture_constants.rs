//! Shared gesture constants for touch recognition.
//!
//! These values are in logical pixels and milliseconds. They seed
//! [`GestureConfig`](crate::GestureConfig), which is what the detectors
//! actually read, so a host with different platform conventions can override
//! them per router.

/// Touch slop in logical pixels.
///
/// A press that stays within this distance of where it went down still counts
/// as stationary:
/// - a tap is recognised on release
/// - a long press keeps waiting for its timeout
///
/// Moving further fails both. Matches the drag threshold used by scroll and
/// clickable handling (Android's ViewConfiguration.TOUCH_SLOP is ~8dp).
pub const TOUCH_SLOP: f32 = 8.0;

/// How long a stationary press must be held before it becomes a long press.
///
/// Also the upper bound on tap duration, which keeps the two gestures
/// mutually exclusive. Both UIKit and Android default to half a second.
pub const LONG_PRESS_TIMEOUT_MS: u64 = 500;
