use crate::math::{Rect, Vector2};

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// A circle given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    /// Center of the circle
    pub center: Vector2,

    /// Radius of the circle
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle
    #[inline]
    pub const fn new(center: Vector2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Returns a copy of this circle moved by `offset`
    #[inline]
    pub fn translated(&self, offset: Vector2) -> Self {
        Self::new(self.center + offset, self.radius)
    }

    /// Returns the smallest axis-aligned rectangle enclosing the circle
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }

    /// Checks if the circle's interior intersects the rectangle's interior
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        let closest = rect.closest_point(self.center);
        closest.distance_squared(&self.center) < self.radius * self.radius
    }

    /// Checks if two circles intersect
    pub fn overlaps_circle(&self, other: &Self) -> bool {
        let reach = self.radius + other.radius;
        self.center.distance_squared(&other.center) < reach * reach
    }
}

/// A trigger shape: either a rectangle or a circle
///
/// Hitboxes are expressed relative to their body and translated into world
/// space before testing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    /// Axis-aligned rectangle
    Rect(Rect),

    /// Circle
    Circle(Circle),
}

impl Shape {
    /// Returns a copy of this shape moved by `offset`
    pub fn translated(&self, offset: Vector2) -> Self {
        match self {
            Shape::Rect(rect) => Shape::Rect(rect.translated(offset)),
            Shape::Circle(circle) => Shape::Circle(circle.translated(offset)),
        }
    }

    /// Returns the axis-aligned bounds of the shape
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rect(rect) => *rect,
            Shape::Circle(circle) => circle.bounds(),
        }
    }

    /// General overlap predicate between any two shapes
    pub fn overlaps(&self, other: &Shape) -> bool {
        match (self, other) {
            (Shape::Rect(a), Shape::Rect(b)) => a.overlaps(b),
            (Shape::Rect(rect), Shape::Circle(circle))
            | (Shape::Circle(circle), Shape::Rect(rect)) => circle.overlaps_rect(rect),
            (Shape::Circle(a), Shape::Circle(b)) => a.overlaps_circle(b),
        }
    }

    /// Checks if the shape overlaps a rectangle
    #[inline]
    pub fn overlaps_rect(&self, rect: &Rect) -> bool {
        self.overlaps(&Shape::Rect(*rect))
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Rect(Rect::default())
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Shape::Rect(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn circle_against_rect_corner() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        // Diagonal distance to the corner is ~2.83
        assert!(Circle::new(Vector2::new(12.0, 12.0), 3.0).overlaps_rect(&rect));
        assert!(!Circle::new(Vector2::new(12.0, 12.0), 2.5).overlaps_rect(&rect));
    }

    #[test]
    fn circle_inside_rect_overlaps() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(Shape::from(Circle::new(Vector2::new(5.0, 5.0), 1.0)).overlaps_rect(&rect));
    }

    #[test]
    fn translated_shape_moves_with_offset() {
        let hitbox = Shape::Circle(Circle::new(Vector2::new(0.0, -4.0), 2.0));
        let world = hitbox.translated(Vector2::new(10.0, 10.0));

        assert_eq!(world.bounds(), Rect::new(8.0, 4.0, 4.0, 4.0));
    }
}
