//! Long-press gesture recogniser.
//!
//! Lifecycle per gesture: `LongGestureStarted`, any number of
//! `LongGestureMoved`, then exactly one `LongGestureEnded`.

use super::{GestureDetector, GestureRecognition, Recognitions};
use crate::config::GestureConfig;
use crate::nodes::input::event_kind::TouchEventKind;
use crate::nodes::input::types::{LongPressPhase, PointerEvent, PointerId, PointerPhase};
use ontouch_geometry::Point;
use web_time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
enum LongPressState {
    Idle,
    /// Down and holding still, waiting for the timeout. A timeout too large to
    /// reach leaves no deadline and the press never becomes a long press.
    Pending {
        pointer: PointerId,
        origin: Point,
        last: Point,
        deadline: Option<Instant>,
    },
    /// Recognised; every move is reported until the touch lifts.
    Active { pointer: PointerId, last: Point },
    Failed { pointer: PointerId },
}

#[derive(Clone, Debug)]
pub struct LongPressDetector {
    enabled: bool,
    config: GestureConfig,
    state: LongPressState,
    /// Whether the host recogniser reported `Began` without an end yet.
    host_active: bool,
}

impl LongPressDetector {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            enabled: false,
            config,
            state: LongPressState::Idle,
            host_active: false,
        }
    }

    /// Classifies a phase reported by the host toolkit's recogniser.
    ///
    /// Cancelled and failed recognisers end the gesture like a release does.
    /// Out-of-order phases are logged but still delivered.
    pub fn recognize(
        &mut self,
        position: Point,
        phase: LongPressPhase,
    ) -> Option<GestureRecognition> {
        if !self.enabled {
            return None;
        }

        let kind = match phase {
            LongPressPhase::Began => {
                if self.host_active {
                    log::warn!("long press began again before the previous one ended");
                }
                self.host_active = true;
                TouchEventKind::LongGestureStarted
            }
            LongPressPhase::Changed => {
                if !self.host_active {
                    log::warn!("long press changed before it began");
                }
                TouchEventKind::LongGestureMoved
            }
            LongPressPhase::Ended | LongPressPhase::Cancelled | LongPressPhase::Failed => {
                self.host_active = false;
                TouchEventKind::LongGestureEnded
            }
        };

        Some(GestureRecognition::new(position, kind))
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, LongPressState::Active { .. }) || self.host_active
    }

    pub fn is_tracking(&self) -> bool {
        !matches!(self.state, LongPressState::Idle)
    }

    fn promote_if_due(&mut self, now: Instant, recognitions: &mut Recognitions) {
        if let LongPressState::Pending {
            pointer,
            last,
            deadline,
            ..
        } = self.state
        {
            if deadline.is_some_and(|deadline| now >= deadline) {
                recognitions.push(GestureRecognition::new(
                    last,
                    TouchEventKind::LongGestureStarted,
                ));
                self.state = LongPressState::Active { pointer, last };
            }
        }
    }

    fn pending(&self, event: &PointerEvent, now: Instant) -> LongPressState {
        LongPressState::Pending {
            pointer: event.id,
            origin: event.position,
            last: event.position,
            deadline: now.checked_add(self.config.long_press_timeout),
        }
    }
}

impl GestureDetector for LongPressDetector {
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

        self.promote_if_due(now, &mut recognitions);

        self.state = match (self.state, event.phase) {
            (LongPressState::Idle, PointerPhase::Start) => self.pending(event, now),
            (LongPressState::Idle, _) => LongPressState::Idle,

            (LongPressState::Pending { pointer, .. }, PointerPhase::Start)
                if pointer != event.id =>
            {
                LongPressState::Failed { pointer }
            }
            (state @ LongPressState::Pending { pointer, .. }, _) if pointer != event.id => state,
            (LongPressState::Pending { .. }, PointerPhase::Start) => self.pending(event, now),
            (
                LongPressState::Pending {
                    pointer,
                    origin,
                    deadline,
                    ..
                },
                PointerPhase::Move,
            ) => {
                if origin.distance_to(event.position) > self.config.touch_slop {
                    LongPressState::Failed { pointer }
                } else {
                    LongPressState::Pending {
                        pointer,
                        origin,
                        last: event.position,
                        deadline,
                    }
                }
            }
            (LongPressState::Pending { .. }, PointerPhase::End | PointerPhase::Cancel) => {
                LongPressState::Idle
            }

            (state @ LongPressState::Active { pointer, .. }, _) if pointer != event.id => state,
            (LongPressState::Active { last, .. }, PointerPhase::Start) => {
                // Lost the lift for the previous press; close it before tracking the new one.
                recognitions.push(GestureRecognition::new(
                    last,
                    TouchEventKind::LongGestureEnded,
                ));
                self.pending(event, now)
            }
            (LongPressState::Active { pointer, .. }, PointerPhase::Move) => {
                recognitions.push(GestureRecognition::new(
                    event.position,
                    TouchEventKind::LongGestureMoved,
                ));
                LongPressState::Active {
                    pointer,
                    last: event.position,
                }
            }
            (LongPressState::Active { .. }, PointerPhase::End | PointerPhase::Cancel) => {
                recognitions.push(GestureRecognition::new(
                    event.position,
                    TouchEventKind::LongGestureEnded,
                ));
                LongPressState::Idle
            }

            (LongPressState::Failed { pointer }, phase)
                if pointer == event.id && phase.is_terminal() =>
            {
                LongPressState::Idle
            }
            (state @ LongPressState::Failed { .. }, _) => state,
        };

        recognitions
    }

    fn on_tick(&mut self, now: Instant) -> Recognitions {
        let mut recognitions = Recognitions::new();
        if self.enabled {
            self.promote_if_due(now, &mut recognitions);
        }
        recognitions
    }

    fn reset(&mut self) {
        self.state = LongPressState::Idle;
        self.host_active = false;
    }
}
