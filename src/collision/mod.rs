mod contact;
mod detection;
mod resolution;

pub use self::contact::{Collision, CollisionBuffer, MAX_COLLISIONS};
pub use self::detection::{contact_normal, detect_static_overlaps, static_collision};
pub use self::resolution::{resolve_collision, resolve_static_overlaps, ResolutionReport};
