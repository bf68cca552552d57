//! Touch routing for attached surfaces.
//!
//! The host toolkit forwards the primary touch of every touch callback and
//! whatever its own gesture recognisers report. The router classifies each
//! notification into a [`TouchEventKind`], drops kinds the surface did not ask
//! for and, when bounds-limiting is on, locations outside the surface. What
//! survives is rounded to whole units and handed to the surface's handler
//! synchronously, before the host call returns.
//!
//! Everything runs on the UI thread. The router holds `Rc` handlers and is
//! neither `Send` nor `Sync`.

use crate::config::{GestureConfig, GestureSource, TouchOptions};
use crate::error::RouterError;
use crate::nodes::input::{
    GestureDetector, GestureRecognition, LongPressDetector, LongPressPhase, PointerEvent,
    PointerId, PointerPhase, TapDetector, TouchEventKind, TouchEventKinds,
};
use indexmap::IndexMap;
use ontouch_geometry::{Point, Rect};
use smallvec::SmallVec;
use std::fmt;
use std::rc::Rc;
use web_time::Instant;

/// Receives every delivered event with its rounded surface-local location.
pub type TouchHandler = Rc<dyn Fn(Point, TouchEventKind)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface #{}", self.0)
    }
}

/// Which detectors a surface currently runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetectorEnablement {
    pub tap: bool,
    pub long_press: bool,
}

impl DetectorEnablement {
    pub fn for_kinds(kinds: TouchEventKinds) -> Self {
        Self {
            tap: kinds.contains(TouchEventKind::TapGesture),
            long_press: kinds.intersects(TouchEventKinds::LONG_GESTURE),
        }
    }
}

type Deliveries = SmallVec<[(Point, TouchEventKind); 4]>;

struct TouchSurface {
    bounds: Rect,
    options: TouchOptions,
    handler: TouchHandler,
    tap: TapDetector,
    long_press: LongPressDetector,
    /// Pointers currently down according to the touch sets the host reported.
    active_touches: SmallVec<[PointerId; 4]>,
}

impl TouchSurface {
    fn new(
        bounds: Rect,
        options: TouchOptions,
        handler: TouchHandler,
        config: GestureConfig,
    ) -> Self {
        let mut surface = Self {
            bounds,
            options,
            handler,
            tap: TapDetector::new(config),
            long_press: LongPressDetector::new(config),
            active_touches: SmallVec::new(),
        };
        surface.sync_detectors();
        surface
    }

    fn sync_detectors(&mut self) {
        let wanted = DetectorEnablement::for_kinds(self.options.kinds);
        self.tap.set_enabled(wanted.tap);
        self.long_press.set_enabled(wanted.long_press);
    }

    fn enablement(&self) -> DetectorEnablement {
        DetectorEnablement {
            tap: self.tap.is_enabled(),
            long_press: self.long_press.is_enabled(),
        }
    }

    fn dispatch(&self, id: SurfaceId, point: Point, kind: TouchEventKind) {
        if !self.options.kinds.contains(kind) {
            log::trace!("{id}: {kind} not subscribed, dropped");
            return;
        }
        if self.options.limit_to_bounds && !self.bounds.hit_test(point) {
            log::trace!("{id}: {kind} at {point} outside bounds, dropped");
            return;
        }
        let point = point.rounded();
        log::trace!("{id}: delivering {kind} at {point}");
        (self.handler)(point, kind);
    }

    fn dispatch_all(&self, id: SurfaceId, deliveries: Deliveries) {
        for (point, kind) in deliveries {
            self.dispatch(id, point, kind);
        }
    }
}

fn raw_kind(phase: PointerPhase) -> TouchEventKind {
    match phase {
        PointerPhase::Start => TouchEventKind::Started,
        PointerPhase::Move => TouchEventKind::Moved,
        PointerPhase::End | PointerPhase::Cancel => TouchEventKind::Ended,
    }
}

fn extend_with(
    deliveries: &mut Deliveries,
    recognitions: impl IntoIterator<Item = GestureRecognition>,
) {
    deliveries.extend(
        recognitions
            .into_iter()
            .map(|recognition| (recognition.position, recognition.kind)),
    );
}

/// Routes host touch notifications to the subscriptions of attached surfaces.
pub struct TouchRouter {
    config: GestureConfig,
    surfaces: IndexMap<SurfaceId, TouchSurface>,
    next_id: u64,
}

impl Default for TouchRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl TouchRouter {
    pub fn new() -> Self {
        Self::with_config(GestureConfig::default())
    }

    pub fn with_config(config: GestureConfig) -> Self {
        Self {
            config,
            surfaces: IndexMap::new(),
            next_id: 1,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Subscribes a surface with local `bounds` to touch events.
    ///
    /// The tap detector runs only if `options.kinds` contains `TapGesture`, the
    /// long-press detector only if it contains any long-gesture kind.
    pub fn attach(
        &mut self,
        bounds: Rect,
        options: TouchOptions,
        handler: impl Fn(Point, TouchEventKind) + 'static,
    ) -> SurfaceId {
        self.attach_handler(bounds, options, Rc::new(handler))
    }

    pub fn attach_handler(
        &mut self,
        bounds: Rect,
        options: TouchOptions,
        handler: TouchHandler,
    ) -> SurfaceId {
        let id = SurfaceId(self.next_id);
        self.next_id += 1;

        let surface = TouchSurface::new(bounds, options, handler, self.config);
        log::debug!(
            "attached {id}: kinds={:?} limit_to_bounds={} detectors={:?}",
            options.kinds,
            options.limit_to_bounds,
            surface.enablement()
        );
        self.surfaces.insert(id, surface);
        id
    }

    /// Removes the subscription. Its handler is released and never called again.
    pub fn detach(&mut self, id: SurfaceId) -> Result<(), RouterError> {
        if self.surfaces.shift_remove(&id).is_none() {
            return Err(RouterError::UnknownSurface { id });
        }
        log::debug!("detached {id}");
        Ok(())
    }

    pub fn is_attached(&self, id: SurfaceId) -> bool {
        self.surfaces.contains_key(&id)
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn options(&self, id: SurfaceId) -> Result<TouchOptions, RouterError> {
        self.surface(id).map(|surface| surface.options)
    }

    pub fn bounds(&self, id: SurfaceId) -> Result<Rect, RouterError> {
        self.surface(id).map(|surface| surface.bounds)
    }

    pub fn detector_enablement(&self, id: SurfaceId) -> Result<DetectorEnablement, RouterError> {
        self.surface(id).map(TouchSurface::enablement)
    }

    /// Replaces the surface's filter and switches detectors to match it.
    ///
    /// A detector that gets switched off forgets any gesture in progress.
    pub fn set_filter(
        &mut self,
        id: SurfaceId,
        kinds: impl Into<TouchEventKinds>,
    ) -> Result<(), RouterError> {
        let surface = self.surface_mut(id)?;
        surface.options.kinds = kinds.into();
        surface.sync_detectors();
        log::debug!(
            "{id}: filter now {:?}, detectors={:?}",
            surface.options.kinds,
            surface.enablement()
        );
        Ok(())
    }

    /// Updates the rectangle used for bounds-limiting, e.g. after layout.
    pub fn set_bounds(&mut self, id: SurfaceId, bounds: Rect) -> Result<(), RouterError> {
        self.surface_mut(id)?.bounds = bounds;
        Ok(())
    }

    pub fn on_raw_touch_start(&mut self, id: SurfaceId, point: Point, now: Instant) {
        self.on_pointer_event(id, PointerEvent::start(point), now);
    }

    pub fn on_raw_touch_move(&mut self, id: SurfaceId, point: Point, now: Instant) {
        self.on_pointer_event(id, PointerEvent::moved(point), now);
    }

    pub fn on_raw_touch_end(&mut self, id: SurfaceId, point: Point, now: Instant) {
        self.on_pointer_event(id, PointerEvent::end(point), now);
    }

    /// Interrupted touches are delivered as `Ended`.
    pub fn on_raw_touch_cancel(&mut self, id: SurfaceId, point: Point, now: Instant) {
        self.on_pointer_event(id, PointerEvent::cancel(point), now);
    }

    /// Routes a host touch callback carrying a whole touch set.
    ///
    /// Only the first touch is routed; the others are tracked so `FirstTouch`
    /// fires once per contact set, but produce no events of their own.
    pub fn on_touches(
        &mut self,
        id: SurfaceId,
        phase: PointerPhase,
        touches: &[PointerEvent],
        now: Instant,
    ) {
        let Some(primary) = touches.first() else {
            return;
        };
        self.route(id, PointerEvent { phase, ..*primary }, touches, now);
    }

    /// Routes the primary touch of a host callback.
    pub fn on_pointer_event(&mut self, id: SurfaceId, event: PointerEvent, now: Instant) {
        self.route(id, event, std::slice::from_ref(&event), now);
    }

    fn route(
        &mut self,
        id: SurfaceId,
        event: PointerEvent,
        touches: &[PointerEvent],
        now: Instant,
    ) {
        let source = self.config.source;
        let Some(surface) = self.surfaces.get_mut(&id) else {
            log::trace!("{id} not attached, {:?} ignored", event.phase);
            return;
        };

        let mut deliveries = Deliveries::new();
        deliveries.push((event.position, raw_kind(event.phase)));
        match event.phase {
            PointerPhase::Start => {
                let active = &mut surface.active_touches;
                if touches.iter().any(|touch| active.contains(&touch.id)) {
                    // The lift was never reported.
                    log::warn!("{id}: pointer went down twice, starting a new contact set");
                    active.clear();
                }
                if active.is_empty() {
                    deliveries.push((event.position, TouchEventKind::FirstTouch));
                }
                active.extend(touches.iter().map(|touch| touch.id));
            }
            PointerPhase::Move => {}
            PointerPhase::End | PointerPhase::Cancel => {
                surface
                    .active_touches
                    .retain(|pointer| !touches.iter().any(|touch| touch.id == *pointer));
            }
        }

        if source == GestureSource::Builtin {
            extend_with(&mut deliveries, surface.tap.on_pointer(&event, now));
            extend_with(&mut deliveries, surface.long_press.on_pointer(&event, now));
        }

        surface.dispatch_all(id, deliveries);
    }

    /// Reports a tap the host's tap recogniser detected.
    pub fn on_tap_recognized(&mut self, id: SurfaceId, point: Point) {
        let Some(surface) = self.surfaces.get(&id) else {
            log::trace!("{id} not attached, tap ignored");
            return;
        };
        if let Some(recognition) = surface.tap.recognize(point) {
            surface.dispatch(id, recognition.position, recognition.kind);
        }
    }

    /// Reports an action from the host's long-press recogniser.
    ///
    /// `Began` and `Changed` map to `LongGestureStarted` and `LongGestureMoved`;
    /// every other phase ends the gesture.
    pub fn on_long_press_recognized(
        &mut self,
        id: SurfaceId,
        point: Point,
        phase: LongPressPhase,
    ) {
        let Some(surface) = self.surfaces.get_mut(&id) else {
            log::trace!("{id} not attached, long press {phase:?} ignored");
            return;
        };
        if let Some(recognition) = surface.long_press.recognize(point, phase) {
            surface.dispatch(id, recognition.position, recognition.kind);
        }
    }

    /// Advances time-based recognition (the long-press timeout) without input.
    ///
    /// Only meaningful with [`GestureSource::Builtin`]; hosts call it from
    /// their frame or timer callback while a touch is down.
    pub fn advance_time(&mut self, now: Instant) {
        if self.config.source != GestureSource::Builtin {
            return;
        }
        for (id, surface) in &mut self.surfaces {
            let mut deliveries = Deliveries::new();
            extend_with(&mut deliveries, surface.tap.on_tick(now));
            extend_with(&mut deliveries, surface.long_press.on_tick(now));
            surface.dispatch_all(*id, deliveries);
        }
    }

    fn surface(&self, id: SurfaceId) -> Result<&TouchSurface, RouterError> {
        self.surfaces
            .get(&id)
            .ok_or(RouterError::UnknownSurface { id })
    }

    fn surface_mut(&mut self, id: SurfaceId) -> Result<&mut TouchSurface, RouterError> {
        self.surfaces
            .get_mut(&id)
            .ok_or(RouterError::UnknownSurface { id })
    }
}
