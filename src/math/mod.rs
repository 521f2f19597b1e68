mod vector;
mod rect;
mod shape;

pub use vector::Vector2;
pub use rect::Rect;
pub use shape::{Circle, Shape};

/// Constant for a very small number, used for comparisons
pub const EPSILON: f32 = 1.0e-6;

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f32) -> bool {
    a.abs() < EPSILON
}

/// Length of the intersection of the intervals `[a_min, a_max]` and `[b_min, b_max]`.
///
/// Negative when the intervals are disjoint.
#[inline]
pub fn interval_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> f32 {
    a_max.min(b_max) - a_min.max(b_min)
}
