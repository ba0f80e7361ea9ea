//! Geometric primitives: Point, Size, Rect.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Split off a band of `height` from the top.
    ///
    /// Returns `(top, rest)`; the band is clamped to this rectangle's height.
    #[must_use]
    pub fn split_top(&self, height: f32) -> (Self, Self) {
        let height = height.clamp(0.0, self.height.max(0.0));
        (
            Self::new(self.x, self.y, self.width, height),
            Self::new(self.x, self.y + height, self.width, self.height - height),
        )
    }

    /// Divide into `count` equal-width columns, left to right.
    #[must_use]
    pub fn split_columns(&self, count: usize) -> Vec<Self> {
        if count == 0 {
            return Vec::new();
        }
        let width = self.width / count as f32;
        (0..count)
            .map(|i| Self::new((i as f32).mul_add(width, self.x), self.y, width, self.height))
            .collect()
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_default() {
        assert_eq!(Point::default(), Point::ORIGIN);
    }

    #[test]
    fn test_point_sub() {
        let d = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(d, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_contains_point_edges() {
        let r = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert!(r.contains_point(&Point::new(10.0, 10.0)));
        assert!(r.contains_point(&Point::new(110.0, 110.0)));
        assert!(!r.contains_point(&Point::new(9.0, 50.0)));
    }

    #[test]
    fn test_rect_split_top() {
        let r = Rect::new(0.0, 0.0, 300.0, 264.0);
        let (top, rest) = r.split_top(44.0);
        assert_eq!(top, Rect::new(0.0, 0.0, 300.0, 44.0));
        assert_eq!(rest, Rect::new(0.0, 44.0, 300.0, 220.0));
    }

    #[test]
    fn test_rect_split_top_clamps() {
        let r = Rect::new(0.0, 0.0, 100.0, 20.0);
        let (top, rest) = r.split_top(44.0);
        assert_eq!(top.height, 20.0);
        assert_eq!(rest.height, 0.0);
    }

    #[test]
    fn test_rect_split_columns() {
        let cols = Rect::new(0.0, 44.0, 300.0, 220.0).split_columns(3);
        assert_eq!(cols.len(), 3);
        assert_eq!(cols[1], Rect::new(100.0, 44.0, 100.0, 220.0));
        assert!(Rect::default().split_columns(0).is_empty());
    }
}
