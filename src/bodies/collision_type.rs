#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// How a static body interacts with dynamic bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum CollisionType {
    /// No collision, bodies pass through
    #[default]
    None,

    /// Solid from every side
    Full,

    /// Solid only for bodies landing on it from above
    OneWay,
}

impl CollisionType {
    /// Returns whether this type can ever produce a contact
    #[inline]
    pub fn is_solid(&self) -> bool {
        !matches!(self, CollisionType::None)
    }
}
