//! The touch event taxonomy delivered to subscribers.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// One kind of touch notification.
///
/// The discriminant is the kind's bit position inside [`TouchEventKinds`].
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchEventKind {
    Started = 0,
    Moved = 1,
    Ended = 2,
    TapGesture = 3,
    LongGestureStarted = 4,
    LongGestureMoved = 5,
    LongGestureEnded = 6,
    /// The primary touch of a new contact set went down on a surface with no
    /// other touch in progress. Follows the matching `Started`.
    FirstTouch = 7,
}

impl TouchEventKind {
    pub const ALL: [TouchEventKind; 8] = [
        TouchEventKind::Started,
        TouchEventKind::Moved,
        TouchEventKind::Ended,
        TouchEventKind::TapGesture,
        TouchEventKind::LongGestureStarted,
        TouchEventKind::LongGestureMoved,
        TouchEventKind::LongGestureEnded,
        TouchEventKind::FirstTouch,
    ];

    pub const fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn is_long_gesture(self) -> bool {
        TouchEventKinds::LONG_GESTURE.contains(self)
    }

    pub fn is_gesture(self) -> bool {
        self == TouchEventKind::TapGesture || self.is_long_gesture()
    }

    pub fn name(self) -> &'static str {
        match self {
            TouchEventKind::Started => "started",
            TouchEventKind::Moved => "moved",
            TouchEventKind::Ended => "ended",
            TouchEventKind::TapGesture => "tap_gesture",
            TouchEventKind::LongGestureStarted => "long_gesture_started",
            TouchEventKind::LongGestureMoved => "long_gesture_moved",
            TouchEventKind::LongGestureEnded => "long_gesture_ended",
            TouchEventKind::FirstTouch => "first_touch",
        }
    }
}

impl fmt::Display for TouchEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of [`TouchEventKind`]s, stored as a bitmask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TouchEventKinds(u8);

impl TouchEventKinds {
    pub const NONE: Self = Self(0);
    pub const STARTED: Self = Self(TouchEventKind::Started.bit());
    pub const MOVED: Self = Self(TouchEventKind::Moved.bit());
    pub const ENDED: Self = Self(TouchEventKind::Ended.bit());
    pub const FIRST_TOUCH: Self = Self(TouchEventKind::FirstTouch.bit());
    pub const TAP_GESTURE: Self = Self(TouchEventKind::TapGesture.bit());
    pub const LONG_GESTURE_STARTED: Self = Self(TouchEventKind::LongGestureStarted.bit());
    pub const LONG_GESTURE_MOVED: Self = Self(TouchEventKind::LongGestureMoved.bit());
    pub const LONG_GESTURE_ENDED: Self = Self(TouchEventKind::LongGestureEnded.bit());

    pub const LONG_GESTURE: Self = Self(
        Self::LONG_GESTURE_STARTED.0 | Self::LONG_GESTURE_MOVED.0 | Self::LONG_GESTURE_ENDED.0,
    );
    pub const ALL_WITHOUT_GESTURES: Self =
        Self(Self::STARTED.0 | Self::MOVED.0 | Self::ENDED.0 | Self::FIRST_TOUCH.0);
    pub const ALL_WITHOUT_LONG_GESTURE: Self =
        Self(Self::ALL_WITHOUT_GESTURES.0 | Self::TAP_GESTURE.0);
    pub const ALL: Self = Self(Self::ALL_WITHOUT_LONG_GESTURE.0 | Self::LONG_GESTURE.0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub fn with(mut self, kind: TouchEventKind) -> Self {
        self.insert(kind);
        self
    }

    pub fn without(mut self, kind: TouchEventKind) -> Self {
        self.remove(kind);
        self
    }

    pub fn insert(&mut self, kind: TouchEventKind) {
        self.0 |= kind.bit();
    }

    pub fn remove(&mut self, kind: TouchEventKind) {
        self.0 &= !kind.bit();
    }

    pub fn contains(&self, kind: TouchEventKind) -> bool {
        (self.0 & kind.bit()) != 0
    }

    pub fn intersects(&self, other: TouchEventKinds) -> bool {
        (self.0 & other.0) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = TouchEventKind> {
        TouchEventKind::ALL
            .into_iter()
            .filter(move |kind| self.contains(*kind))
    }
}

impl From<TouchEventKind> for TouchEventKinds {
    fn from(kind: TouchEventKind) -> Self {
        Self(kind.bit())
    }
}

impl FromIterator<TouchEventKind> for TouchEventKinds {
    fn from_iter<I: IntoIterator<Item = TouchEventKind>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |set, kind| set.with(kind))
    }
}

impl<const N: usize> From<[TouchEventKind; N]> for TouchEventKinds {
    fn from(kinds: [TouchEventKind; N]) -> Self {
        kinds.into_iter().collect()
    }
}

impl BitOr for TouchEventKinds {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOr<TouchEventKind> for TouchEventKinds {
    type Output = Self;

    fn bitor(self, rhs: TouchEventKind) -> Self {
        self.with(rhs)
    }
}

impl BitOr for TouchEventKind {
    type Output = TouchEventKinds;

    fn bitor(self, rhs: Self) -> TouchEventKinds {
        TouchEventKinds::from(self).with(rhs)
    }
}

impl BitOrAssign for TouchEventKinds {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitOrAssign<TouchEventKind> for TouchEventKinds {
    fn bitor_assign(&mut self, rhs: TouchEventKind) {
        self.insert(rhs);
    }
}

impl fmt::Debug for TouchEventKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregates_are_unions_of_their_members() {
        let expected: TouchEventKinds = [
            TouchEventKind::Started,
            TouchEventKind::Moved,
            TouchEventKind::Ended,
            TouchEventKind::FirstTouch,
            TouchEventKind::TapGesture,
        ]
        .into();
        assert_eq!(TouchEventKinds::ALL_WITHOUT_LONG_GESTURE, expected);
        assert_eq!(
            TouchEventKinds::ALL_WITHOUT_GESTURES,
            expected.without(TouchEventKind::TapGesture)
        );
        assert_eq!(
            TouchEventKinds::ALL,
            TouchEventKind::ALL.into_iter().collect::<TouchEventKinds>()
        );
        assert_eq!(TouchEventKinds::ALL.bits(), 0xff);
    }

    #[test]
    fn every_kind_has_a_distinct_bit() {
        let mut seen = 0u8;
        for kind in TouchEventKind::ALL {
            assert_eq!(seen & kind.bit(), 0, "{kind} shares a bit");
            seen |= kind.bit();
        }
    }

    #[test]
    fn insert_remove_and_contains() {
        let mut kinds = TouchEventKinds::new();
        assert!(kinds.is_empty());
        kinds.insert(TouchEventKind::Moved);
        kinds |= TouchEventKind::LongGestureEnded;
        assert!(kinds.contains(TouchEventKind::Moved));
        assert!(kinds.contains(TouchEventKind::LongGestureEnded));
        assert!(!kinds.contains(TouchEventKind::Started));
        assert!(kinds.intersects(TouchEventKinds::LONG_GESTURE));

        kinds.remove(TouchEventKind::LongGestureEnded);
        assert!(!kinds.intersects(TouchEventKinds::LONG_GESTURE));
    }

    #[test]
    fn bit_or_builds_sets_from_kinds() {
        let kinds = TouchEventKind::Started | TouchEventKind::Ended | TouchEventKind::TapGesture;
        assert_eq!(
            kinds.iter().collect::<Vec<_>>(),
            vec![
                TouchEventKind::Started,
                TouchEventKind::Ended,
                TouchEventKind::TapGesture
            ]
        );
    }

    #[test]
    fn gesture_classification() {
        assert!(TouchEventKind::TapGesture.is_gesture());
        assert!(TouchEventKind::LongGestureMoved.is_long_gesture());
        assert!(!TouchEventKind::TapGesture.is_long_gesture());
        assert!(!TouchEventKind::FirstTouch.is_gesture());
    }

    #[test]
    fn debug_lists_members() {
        let kinds = TouchEventKind::Started | TouchEventKind::Moved;
        assert_eq!(format!("{kinds:?}"), "{Started, Moved}");
    }
}
