use std::collections::HashMap;

use crate::bodies::EntityId;
use crate::core::TouchEvent;

/// Capabilities a gameplay entity can expose to the physics bodies it owns
///
/// Every hook is optional. The space only tests a body's hitbox when its
/// owner returns true from [`BodyOwner::listens_for_static_touch`].
pub trait BodyOwner {
    /// Whether this owner wants [`BodyOwner::on_static_touch`] notifications
    fn listens_for_static_touch(&self) -> bool {
        false
    }

    /// Called once per overlapping static body per sub-step
    ///
    /// This is a notification only; the body has already been integrated and
    /// corrected for the sub-step.
    fn on_static_touch(&mut self, _touch: &TouchEvent) {}
}

/// Looks up the owner of a body by entity id
pub trait OwnerRegistry {
    /// Returns the owner, or `None` if the entity no longer exists
    fn owner_mut(&mut self, id: EntityId) -> Option<&mut dyn BodyOwner>;
}

/// Registry with no owners, for spaces driven without an entity layer
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOwners;

impl OwnerRegistry for NoOwners {
    fn owner_mut(&mut self, _id: EntityId) -> Option<&mut dyn BodyOwner> {
        None
    }
}

impl<T: BodyOwner> OwnerRegistry for HashMap<EntityId, T> {
    fn owner_mut(&mut self, id: EntityId) -> Option<&mut dyn BodyOwner> {
        self.get_mut(&id).map(|owner| owner as &mut dyn BodyOwner)
    }
}
