//! Geometric primitives: Point, Size, Rect

use std::fmt;
use std::ops::Sub;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Rounds both coordinates to the nearest whole unit, halves away from zero.
    ///
    /// Rounding an already-integral point returns it unchanged.
    pub fn rounded(self) -> Self {
        Self {
            x: self.x.round(),
            y: self.y.round(),
        }
    }

    pub fn distance_to(self, other: Point) -> f32 {
        let delta = other - self;
        (delta.x * delta.x + delta.y * delta.y).sqrt()
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    /// Local bounds of a surface with the given size.
    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Edge-inclusive containment test.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && y >= self.y && x <= self.max_x() && y <= self.max_y()
    }

    /// Whether a touch at `point` lands on this rectangle.
    ///
    /// Unlike [`Rect::contains`] the max edges are outside, so adjacent
    /// rectangles never both claim a touch on their shared edge.
    pub fn hit_test(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.max_x()
            && point.y < self.max_y()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_goes_to_nearest_and_halves_away_from_zero() {
        assert_eq!(Point::new(10.4, 10.6).rounded(), Point::new(10.0, 11.0));
        assert_eq!(Point::new(2.5, -2.5).rounded(), Point::new(3.0, -3.0));
        assert_eq!(Point::new(-0.4, 99.5).rounded(), Point::new(-0.0, 100.0));
    }

    #[test]
    fn rounding_is_idempotent() {
        for point in [
            Point::new(0.0, 0.0),
            Point::new(13.0, -7.0),
            Point::new(1.49, 88.51),
            Point::new(-3.5, 1024.5),
        ] {
            let once = point.rounded();
            assert_eq!(once.rounded(), once);
        }
    }

    #[test]
    fn contains_includes_edges() {
        let rect = Rect::from_size(Size::new(100.0, 100.0));
        assert!(rect.contains(0.0, 0.0));
        assert!(rect.contains(100.0, 100.0));
        assert!(rect.contains(50.0, 99.9));
        assert!(!rect.contains(100.1, 50.0));
        assert!(!rect.contains(-0.1, 10.0));
        assert!(!rect.contains(150.0, 150.0));
    }

    #[test]
    fn hit_test_excludes_max_edges() {
        let rect = Rect::from_size(Size::new(100.0, 100.0));
        assert!(rect.hit_test(Point::new(0.0, 0.0)));
        assert!(rect.hit_test(Point::new(99.9, 99.9)));
        assert!(!rect.hit_test(Point::new(100.0, 50.0)));
        assert!(!rect.hit_test(Point::new(50.0, 100.0)));
        assert!(!rect.hit_test(Point::new(100.0, 100.0)));
        assert!(!rect.hit_test(Point::new(-0.1, 10.0)));
    }

    #[test]
    fn offset_rect_contains_relative_to_origin() {
        let rect = Rect::from_origin_size(Point::new(20.0, 30.0), Size::new(10.0, 10.0));
        assert!(rect.contains(25.0, 35.0));
        assert!(!rect.contains(5.0, 5.0));
        assert!(rect.hit_test(Point::new(20.0, 30.0)));
        assert!(!rect.hit_test(Point::new(30.0, 35.0)));
        assert_eq!(rect.size(), Size::new(10.0, 10.0));
    }

    #[test]
    fn distance_between_points() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }
}
