use crate::bodies::CollisionType;
use crate::math::Rect;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Immutable world geometry, typically one per solid tile
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct StaticBody {
    /// The rectangle in world space
    pub rect: Rect,

    /// How dynamic bodies collide with this rectangle
    pub collision_type: CollisionType,
}

impl StaticBody {
    /// Creates a new static body
    pub fn new(rect: Rect, collision_type: CollisionType) -> Self {
        Self { rect, collision_type }
    }

    /// Creates a fully solid static body
    pub fn full(rect: Rect) -> Self {
        Self::new(rect, CollisionType::Full)
    }

    /// Creates a one-way platform
    pub fn one_way(rect: Rect) -> Self {
        Self::new(rect, CollisionType::OneWay)
    }
}
