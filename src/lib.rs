pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod integration;
pub mod owner;
pub mod sync;
pub mod tiles;
pub mod debug;

/// Re-export common types for easier usage
pub use crate::core::{Space, SpaceConfig, BodyHandle};
pub use crate::bodies::{PhysicsBody, StaticBody, CollisionType, EntityId};
pub use crate::owner::{BodyOwner, OwnerRegistry, NoOwners};
pub use crate::math::{Vector2, Rect, Circle, Shape};

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
