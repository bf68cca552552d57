//! Robot-style driver for touch routing tests
//!
//! `TouchRobot` plays the host toolkit: it owns a [`TouchRouter`] with one
//! attached surface, feeds it touches and recogniser callbacks, and runs a
//! virtual clock so time-based gestures are deterministic.
//!
//! # Example
//!
//! ```
//! use ontouch_foundation::{GestureConfig, Size, TouchEventKind, TouchOptions};
//! use ontouch_testing::TouchRobot;
//!
//! let mut robot = TouchRobot::with_config(
//!     GestureConfig::builtin(),
//!     Size::new(100.0, 100.0),
//!     TouchOptions::default(),
//! );
//!
//! robot.tap_at(20.0, 20.0);
//! assert!(robot.kinds().contains(&TouchEventKind::TapGesture));
//! ```

use crate::recorder::{Delivery, DeliveryRecorder};
use ontouch_foundation::{
    GestureConfig, LongPressPhase, PointerEvent, PointerId, PointerPhase, SurfaceId, TouchEventKind,
    TouchEventKinds, TouchOptions, TouchRouter,
};
use ontouch_geometry::{Point, Rect, Size};
use std::time::Duration;
use web_time::Instant;

/// How long `tap_at` holds the touch down.
const TAP_HOLD_MS: u64 = 50;

/// Steps `drag` interpolates between its endpoints.
const DRAG_STEPS: usize = 10;

pub struct TouchRobot {
    router: TouchRouter,
    surface: SurfaceId,
    recorder: DeliveryRecorder,
    start: Instant,
    now: Instant,
    cursor: Point,
}

impl TouchRobot {
    /// A robot over a host-recognition router.
    pub fn new(size: Size, options: TouchOptions) -> Self {
        Self::with_config(GestureConfig::default(), size, options)
    }

    pub fn with_config(config: GestureConfig, size: Size, options: TouchOptions) -> Self {
        let mut router = TouchRouter::with_config(config);
        let recorder = DeliveryRecorder::new();
        let surface = router.attach(Rect::from_size(size), options, recorder.handler());
        let start = Instant::now();

        Self {
            router,
            surface,
            recorder,
            start,
            now: start,
            cursor: Point::ZERO,
        }
    }

    pub fn router(&self) -> &TouchRouter {
        &self.router
    }

    pub fn surface(&self) -> SurfaceId {
        self.surface
    }

    pub fn recorder(&self) -> &DeliveryRecorder {
        &self.recorder
    }

    /// Virtual time since the robot was created.
    pub fn elapsed(&self) -> Duration {
        self.now - self.start
    }

    /// Advances the virtual clock and lets the router's timers run.
    pub fn advance_time(&mut self, millis: u64) {
        self.now += Duration::from_millis(millis);
        self.router.advance_time(self.now);
    }

    /// Advances the virtual clock without notifying the router, as if the
    /// host had no frame callback while the touch was held.
    pub fn skip_time(&mut self, millis: u64) {
        self.now += Duration::from_millis(millis);
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.cursor = Point::new(x, y);
        self.router.on_raw_touch_start(self.surface, self.cursor, self.now);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.cursor = Point::new(x, y);
        self.router.on_raw_touch_move(self.surface, self.cursor, self.now);
    }

    /// Lifts the touch where it currently is.
    pub fn release(&mut self) {
        self.router.on_raw_touch_end(self.surface, self.cursor, self.now);
    }

    pub fn release_at(&mut self, x: f32, y: f32) {
        self.cursor = Point::new(x, y);
        self.release();
    }

    pub fn cancel(&mut self) {
        self.router.on_raw_touch_cancel(self.surface, self.cursor, self.now);
    }

    /// Delivers a whole touch set of `(pointer id, x, y)`; the first touch is
    /// the primary one.
    pub fn touches(&mut self, phase: PointerPhase, touches: &[(PointerId, f32, f32)]) {
        let touches: Vec<PointerEvent> = touches
            .iter()
            .map(|&(id, x, y)| PointerEvent::new(phase, Point::new(x, y)).with_id(id))
            .collect();
        if let Some(primary) = touches.first() {
            self.cursor = primary.position;
        }
        self.router.on_touches(self.surface, phase, &touches, self.now);
    }

    /// Presses and releases in place after a short hold.
    pub fn tap_at(&mut self, x: f32, y: f32) {
        self.press(x, y);
        self.advance_time(TAP_HOLD_MS);
        self.release();
    }

    /// Presses, holds still for `hold_ms` with the clock running, then releases.
    pub fn long_press_at(&mut self, x: f32, y: f32, hold_ms: u64) {
        self.press(x, y);
        self.advance_time(hold_ms);
        self.release();
    }

    /// Press, move in steps, release.
    pub fn drag(&mut self, from_x: f32, from_y: f32, to_x: f32, to_y: f32) {
        self.press(from_x, from_y);
        for i in 1..=DRAG_STEPS {
            let t = i as f32 / DRAG_STEPS as f32;
            self.advance_time(16);
            self.move_to(from_x + (to_x - from_x) * t, from_y + (to_y - from_y) * t);
        }
        self.release();
    }

    /// Reports a tap as if the host's own recogniser had detected it.
    pub fn host_tap(&mut self, x: f32, y: f32) {
        self.router.on_tap_recognized(self.surface, Point::new(x, y));
    }

    /// Reports a long-press phase from the host's own recogniser.
    pub fn host_long_press(&mut self, x: f32, y: f32, phase: LongPressPhase) {
        self.router
            .on_long_press_recognized(self.surface, Point::new(x, y), phase);
    }

    pub fn set_filter(&mut self, kinds: impl Into<TouchEventKinds>) {
        self.router
            .set_filter(self.surface, kinds)
            .expect("robot surface is attached");
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.router
            .set_bounds(self.surface, Rect::from_size(Size::new(width, height)))
            .expect("robot surface is attached");
    }

    pub fn detach(&mut self) {
        self.router
            .detach(self.surface)
            .expect("robot surface is attached");
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.recorder.deliveries()
    }

    pub fn kinds(&self) -> Vec<TouchEventKind> {
        self.recorder.kinds()
    }

    /// Deliveries since the last call, clearing them.
    pub fn take(&mut self) -> Vec<Delivery> {
        self.recorder.take()
    }
}
