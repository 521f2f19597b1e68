mod physics_body;
mod static_body;
mod collision_type;

pub use self::physics_body::PhysicsBody;
pub use self::static_body::StaticBody;
pub use self::collision_type::CollisionType;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Identifier of the gameplay entity that owns a body
///
/// The physics core never dereferences it; it is handed back to an
/// [`OwnerRegistry`](crate::owner::OwnerRegistry) to find the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EntityId(pub u32);
