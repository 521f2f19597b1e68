use crate::math::{interval_overlap, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Axis-aligned rectangle given by its top-left corner and size
///
/// Used both for static tile geometry (world space) and for body colliders,
/// where `x`/`y` are the offset from the body's position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Rect {
    /// Left edge
    pub x: f32,

    /// Top edge
    pub y: f32,

    /// Width
    pub w: f32,

    /// Height
    pub h: f32,
}

impl Rect {
    /// Creates a new rectangle
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a rectangle from its top-left corner and size
    #[inline]
    pub fn from_position_size(position: Vector2, size: Vector2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// Returns the top-left corner
    #[inline]
    pub fn position(&self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Returns the width and height as a vector
    #[inline]
    pub fn size(&self) -> Vector2 {
        Vector2::new(self.w, self.h)
    }

    /// Returns the x coordinate of the right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Returns the y coordinate of the bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Returns the center of the rectangle
    #[inline]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Returns the area of the rectangle
    #[inline]
    pub fn area(&self) -> f32 {
        self.w * self.h
    }

    /// Returns a copy of this rectangle moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Checks if this rectangle contains a point (edges inclusive)
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.x && point.x <= self.right() &&
        point.y >= self.y && point.y <= self.bottom()
    }

    /// Checks if the interiors of the two rectangles intersect
    ///
    /// Rectangles that only share an edge or a corner do not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.x < other.right() && self.right() > other.x &&
        self.y < other.bottom() && self.bottom() > other.y
    }

    /// Returns the intersection lengths along x and y, if the rectangles overlap
    pub fn overlap_extents(&self, other: &Self) -> Option<Vector2> {
        if !self.overlaps(other) {
            return None;
        }

        Some(Vector2::new(
            interval_overlap(self.x, self.right(), other.x, other.right()),
            interval_overlap(self.y, self.bottom(), other.y, other.bottom()),
        ))
    }

    /// Returns the area of the intersection of the two rectangles, zero if disjoint
    #[inline]
    pub fn overlap_area(&self, other: &Self) -> f32 {
        self.overlap_extents(other)
            .map(|extents| extents.x * extents.y)
            .unwrap_or(0.0)
    }

    /// Returns the closest point inside the rectangle to a given point
    #[inline]
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            point.x.max(self.x).min(self.right()),
            point.y.max(self.y).min(self.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        let c = Rect::new(0.0, 10.0, 10.0, 10.0);

        assert!(!a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.overlap_area(&b), 0.0);
    }

    #[test]
    fn overlap_extents_are_interval_intersections() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(6.0, 8.0, 10.0, 10.0);

        let extents = a.overlap_extents(&b).unwrap();
        assert_eq!(extents, Vector2::new(4.0, 2.0));
        assert_eq!(a.overlap_area(&b), 8.0);
    }

    #[test]
    fn contained_rect_overlaps_fully() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(10.0, 20.0, 5.0, 5.0);

        assert_eq!(outer.overlap_area(&inner), inner.area());
        assert!(outer.contains_point(inner.center()));
    }
}
