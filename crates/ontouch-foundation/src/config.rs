//! Router and subscription configuration.

use crate::gesture_constants::{LONG_PRESS_TIMEOUT_MS, TOUCH_SLOP};
use crate::nodes::input::TouchEventKinds;
use std::time::Duration;

/// Where gesture recognitions come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureSource {
    /// The host toolkit runs its own recognisers and reports them through
    /// `on_tap_recognized` / `on_long_press_recognized`.
    #[default]
    Host,
    /// The router's detectors recognise taps and long presses from the raw
    /// primary-touch stream. Host recognitions are still accepted.
    Builtin,
}

/// Gesture thresholds shared by every surface of a router.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub source: GestureSource,
    pub touch_slop: f32,
    pub long_press_timeout: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            source: GestureSource::Host,
            touch_slop: TOUCH_SLOP,
            long_press_timeout: Duration::from_millis(LONG_PRESS_TIMEOUT_MS),
        }
    }
}

impl GestureConfig {
    pub fn builtin() -> Self {
        Self::default().with_source(GestureSource::Builtin)
    }

    pub fn with_source(mut self, source: GestureSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_touch_slop(mut self, touch_slop: f32) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// A timeout too large to elapse, such as `Duration::MAX`, disables
    /// built-in long presses.
    pub fn with_long_press_timeout(mut self, timeout: Duration) -> Self {
        self.long_press_timeout = timeout;
        self
    }
}

/// Per-surface subscription settings.
///
/// Defaults to every event kind with bounds-limiting off.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TouchOptions {
    /// Event kinds the subscriber wants delivered.
    pub kinds: TouchEventKinds,
    /// Drop events whose location falls outside the surface rectangle.
    pub limit_to_bounds: bool,
}

impl Default for TouchOptions {
    fn default() -> Self {
        Self {
            kinds: TouchEventKinds::ALL,
            limit_to_bounds: false,
        }
    }
}

impl TouchOptions {
    pub fn new(kinds: impl Into<TouchEventKinds>) -> Self {
        Self {
            kinds: kinds.into(),
            limit_to_bounds: false,
        }
    }

    pub fn limit_to_bounds(mut self, limit: bool) -> Self {
        self.limit_to_bounds = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::input::TouchEventKind;

    #[test]
    fn defaults_come_from_gesture_constants() {
        let config = GestureConfig::default();
        assert_eq!(config.source, GestureSource::Host);
        assert_eq!(config.touch_slop, TOUCH_SLOP);
        assert_eq!(config.long_press_timeout, Duration::from_millis(500));
    }

    #[test]
    fn builder_overrides_single_fields() {
        let config = GestureConfig::builtin()
            .with_touch_slop(12.0)
            .with_long_press_timeout(Duration::from_millis(300));
        assert_eq!(config.source, GestureSource::Builtin);
        assert_eq!(config.touch_slop, 12.0);
        assert_eq!(config.long_press_timeout, Duration::from_millis(300));
    }

    #[test]
    fn options_default_to_everything_unbounded() {
        let options = TouchOptions::default();
        assert_eq!(options.kinds, TouchEventKinds::ALL);
        assert!(!options.limit_to_bounds);

        let options = TouchOptions::new(TouchEventKind::TapGesture).limit_to_bounds(true);
        assert_eq!(options.kinds, TouchEventKinds::TAP_GESTURE);
        assert!(options.limit_to_bounds);
    }
}
