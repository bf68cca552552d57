//! Tap gesture recogniser.

use super::{GestureDetector, GestureRecognition, Recognitions};
use crate::config::GestureConfig;
use crate::nodes::input::event_kind::TouchEventKind;
use crate::nodes::input::types::{PointerEvent, PointerId, PointerPhase};
use ontouch_geometry::Point;
use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
enum TapState {
    Idle,
    Pressed {
        pointer: PointerId,
        origin: Point,
        pressed_at: Instant,
    },
    /// The press moved, lasted too long or was joined by another touch; wait
    /// for it to lift before accepting a new one.
    Failed { pointer: PointerId },
}

/// Recognises a single-touch tap: press and release without travelling past
/// the touch slop, released before the long-press timeout.
#[derive(Clone, Debug)]
pub struct TapDetector {
    enabled: bool,
    config: GestureConfig,
    state: TapState,
}

impl TapDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            enabled: false,
            config,
            state: TapState::Idle,
        }
    }

    /// Classifies a tap the host toolkit recognised on its own.
    pub fn recognize(&self, position: Point) -> Option<GestureRecognition> {
        self.enabled
            .then(|| GestureRecognition::new(position, TouchEventKind::TapGesture))
    }

    pub fn is_tracking(&self) -> bool {
        !matches!(self.state, TapState::Idle)
    }
}

impl GestureDetector for TapDetector {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            self.reset();
        }
    }

    fn on_pointer(&mut self, event: &PointerEvent, now: Instant) -> Recognitions {
        let mut recognitions = Recognitions::new();
        if !self.enabled {
            return recognitions;
        }

        self.state = match (self.state, event.phase) {
            (TapState::Idle, PointerPhase::Start) => TapState::Pressed {
                pointer: event.id,
                origin: event.position,
                pressed_at: now,
            },
            (TapState::Idle, _) => TapState::Idle,
            (TapState::Pressed { pointer, .. }, PointerPhase::Start) if pointer != event.id => {
                TapState::Failed { pointer }
            }
            (state @ TapState::Pressed { pointer, .. }, _) if pointer != event.id => state,
            (TapState::Pressed { .. }, PointerPhase::Start) => TapState::Pressed {
                pointer: event.id,
                origin: event.position,
                pressed_at: now,
            },
            (state @ TapState::Pressed { pointer, origin, .. }, PointerPhase::Move) => {
                if origin.distance_to(event.position) > self.config.touch_slop {
                    TapState::Failed { pointer }
                } else {
                    state
                }
            }
            (
                TapState::Pressed {
                    origin, pressed_at, ..
                },
                PointerPhase::End,
            ) => {
                let held = now.saturating_duration_since(pressed_at);
                if held < self.config.long_press_timeout
                    && origin.distance_to(event.position) <= self.config.touch_slop
                {
                    recognitions.push(GestureRecognition::new(
                        event.position,
                        TouchEventKind::TapGesture,
                    ));
                }
                TapState::Idle
            }
            (TapState::Pressed { .. }, PointerPhase::Cancel) => TapState::Idle,
            (TapState::Failed { pointer }, phase) if pointer == event.id && phase.is_terminal() => {
                TapState::Idle
            }
            (state @ TapState::Failed { .. }, _) => state,
        };

        recognitions
    }

    fn reset(&mut self) {
        self.state = TapState::Idle;
    }
}
