//! Rect: A half-open rectangle used to bound rasterizer scans.

use super::point::Point;

/// A rectangle spanning `x..right` and `y..bottom` (right and bottom exclusive).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: i32,
    /// Y coordinate (row) of the top-left corner.
    pub y: i32,
    /// Right edge (exclusive).
    pub right: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and exclusive bottom-right corner.
    #[inline]
    pub const fn from_corners(top_left: Point, bottom_right: Point) -> Self {
        Self {
            x: top_left.x,
            y: top_left.y,
            right: bottom_right.x,
            bottom: bottom_right.y,
        }
    }

    /// Create a rectangle covering a `width` x `height` grid at the origin.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self {
            x: 0,
            y: 0,
            right: width as i32,
            bottom: height as i32,
        }
    }

    /// The smallest rectangle containing every point, inclusive of the
    /// points themselves (so `right`/`bottom` are one past the maximum).
    pub fn bounding(points: &[Point]) -> Self {
        let mut it = points.iter();
        let Some(first) = it.next() else {
            return Self::default();
        };
        let mut r = Self {
            x: first.x,
            y: first.y,
            right: first.x.saturating_add(1),
            bottom: first.y.saturating_add(1),
        };
        for p in it {
            r.x = r.x.min(p.x);
            r.y = r.y.min(p.y);
            r.right = r.right.max(p.x.saturating_add(1));
            r.bottom = r.bottom.max(p.y.saturating_add(1));
        }
        r
    }

    /// Width in columns (zero if inverted).
    #[inline]
    pub const fn width(&self) -> i32 {
        if self.right > self.x {
            self.right - self.x
        } else {
            0
        }
    }

    /// Height in rows (zero if inverted).
    #[inline]
    pub const fn height(&self) -> i32 {
        if self.bottom > self.y {
            self.bottom - self.y
        } else {
            0
        }
    }

    /// Check if the rectangle covers no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.x || self.bottom <= self.y
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right && p.y >= self.y && p.y < self.bottom
    }

    /// The overlap of two rectangles (possibly empty).
    #[inline]
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
            right: self.right.min(other.right),
            bottom: self.bottom.min(other.bottom),
        }
    }

    /// Iterate every point in row-major order.
    pub fn points(self) -> impl Iterator<Item = Point> {
        (self.y..self.bottom).flat_map(move |y| (self.x..self.right).map(move |x| Point::new(x, y)))
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Rect({}, {} .. {}, {})",
            self.x, self.y, self.right, self.bottom
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::from_corners(Point::new(0, 0), Point::new(3, 3));
        assert!(r.contains(Point::new(0, 0)));
        assert!(r.contains(Point::new(2, 2)));
        assert!(!r.contains(Point::new(3, 3)));
        assert!(!r.contains(Point::new(-1, 0)));
    }

    #[test]
    fn test_rect_intersection() {
        let screen = Rect::from_size(10, 5);
        let shape = Rect::from_corners(Point::new(-4, 3), Point::new(4, 20));
        let clip = shape.intersection(&screen);
        assert_eq!(clip, Rect::from_corners(Point::new(0, 3), Point::new(4, 5)));
        assert_eq!(clip.width(), 4);
        assert_eq!(clip.height(), 2);
    }

    #[test]
    fn test_rect_empty_when_inverted() {
        let r = Rect::from_corners(Point::new(5, 5), Point::new(2, 8));
        assert!(r.is_empty());
        assert_eq!(r.width(), 0);
        assert_eq!(r.points().count(), 0);
    }

    #[test]
    fn test_rect_bounding() {
        let r = Rect::bounding(&[Point::new(4, 0), Point::new(0, 4), Point::new(1, 1)]);
        assert_eq!(r, Rect::from_corners(Point::new(0, 0), Point::new(5, 5)));
        assert!(Rect::bounding(&[]).is_empty());
    }

    #[test]
    fn test_rect_points_row_major() {
        let r = Rect::from_corners(Point::new(1, 1), Point::new(3, 2));
        let pts: Vec<_> = r.points().collect();
        assert_eq!(pts, vec![Point::new(1, 1), Point::new(2, 1)]);
    }
}
