//! Geometry primitives: [`Point`] and [`Range`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (row-major text order).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// The four cardinal neighbours (up, right, down, left).
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        [
            self.shift(0, -1),
            self.shift(1, 0),
            self.shift(0, 1),
            self.shift(-1, 0),
        ]
    }

    /// All eight neighbours, clockwise from up.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            self.shift(0, -1),
            self.shift(1, -1),
            self.shift(1, 0),
            self.shift(1, 1),
            self.shift(0, 1),
            self.shift(-1, 1),
            self.shift(-1, 0),
            self.shift(-1, -1),
        ]
    }

    /// Whether `other` differs from `self` on both axes.
    #[inline]
    pub fn is_diagonal_to(self, other: Point) -> bool {
        self.x != other.x && self.y != other.y
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Create a range from two corners, swapping coordinates so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Size as a `Point` (width, height).
    #[inline]
    pub fn size(self) -> Point {
        self.max - self.min
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Number of cells in the range.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.height() as usize)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Iterate over all points in row-major order.
    pub fn iter(self) -> impl Iterator<Item = Point> {
        (self.min.y..self.max.y)
            .flat_map(move |y| (self.min.x..self.max.x).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbours_are_adjacent() {
        let p = Point::new(3, 3);
        for n in p.neighbors_4() {
            let d = n - p;
            assert_eq!(d.x.abs() + d.y.abs(), 1);
            assert!(!p.is_diagonal_to(n));
        }
        let diagonals = p.neighbors_8().iter().filter(|&&n| p.is_diagonal_to(n)).count();
        assert_eq!(diagonals, 4);
    }

    #[test]
    fn range_canonicalises_corners() {
        let r = Range::new(5, 4, 1, 0);
        assert_eq!(r.min, Point::new(1, 0));
        assert_eq!(r.size(), Point::new(4, 4));
        assert_eq!(r.len(), 16);
    }

    #[test]
    fn range_contains_is_half_open() {
        let r = Range::new(0, 0, 3, 2);
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 1)));
        assert!(!r.contains(Point::new(3, 1)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn range_iter_row_major() {
        let pts: Vec<Point> = Range::new(0, 0, 2, 2).iter().collect();
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(0, 1),
                Point::new(1, 1)
            ]
        );
        assert_eq!(Range::new(0, 0, 0, 5).iter().count(), 0);
        assert!(Range::new(0, 0, 0, 5).is_empty());
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_json_shape() {
        let json = serde_json::to_string(&Point::new(3, -7)).unwrap();
        assert_eq!(json, r#"{"x":3,"y":-7}"#);
        let back: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Point::new(3, -7));
    }

    #[test]
    fn range_json_round_trip() {
        let r = Range::new(1, 2, 6, 4);
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"min":{"x":1,"y":2},"max":{"x":6,"y":4}}"#);
        let back: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
        assert_eq!(back.len(), 10);
    }
}
