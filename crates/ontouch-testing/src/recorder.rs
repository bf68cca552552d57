//! Captures what a surface handler receives.

use ontouch_foundation::TouchEventKind;
use ontouch_geometry::Point;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// One handler invocation.
#[derive(Clone, Copy, PartialEq)]
pub struct Delivery {
    pub position: Point,
    pub kind: TouchEventKind,
}

impl Delivery {
    pub fn new(x: f32, y: f32, kind: TouchEventKind) -> Self {
        Self {
            position: Point::new(x, y),
            kind,
        }
    }
}

impl fmt::Debug for Delivery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.kind, self.position)
    }
}

/// Shared log of deliveries. Clones observe the same log.
#[derive(Clone, Default)]
pub struct DeliveryRecorder {
    deliveries: Rc<RefCell<Vec<Delivery>>>,
}

impl DeliveryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handler suitable for `TouchRouter::attach` that appends to this log.
    pub fn handler(&self) -> impl Fn(Point, TouchEventKind) + 'static {
        let deliveries = self.deliveries.clone();
        move |position, kind| deliveries.borrow_mut().push(Delivery { position, kind })
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.borrow().clone()
    }

    pub fn kinds(&self) -> Vec<TouchEventKind> {
        self.deliveries.borrow().iter().map(|d| d.kind).collect()
    }

    pub fn last(&self) -> Option<Delivery> {
        self.deliveries.borrow().last().copied()
    }

    pub fn len(&self) -> usize {
        self.deliveries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.borrow().is_empty()
    }

    /// Returns everything recorded so far and clears the log.
    pub fn take(&self) -> Vec<Delivery> {
        std::mem::take(&mut *self.deliveries.borrow_mut())
    }
}
