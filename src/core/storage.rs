use slotmap::SlotMap;

use crate::bodies::PhysicsBody;
use crate::core::BodyHandle;
use crate::error::PhysicsError;
use crate::Result;

/// Generational arena owning every physics body of a space
///
/// A handle stays valid until its body is removed. Reusing the slot bumps its
/// generation, so an old handle can never reach the new occupant.
#[derive(Debug, Default)]
pub struct BodyStorage {
    items: SlotMap<BodyHandle, PhysicsBody>,
}

impl BodyStorage {
    /// Creates a new empty storage
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }

    /// Adds a body to the storage and returns its handle
    pub fn add(&mut self, body: PhysicsBody) -> BodyHandle {
        self.items.insert(body)
    }

    /// Gets a reference to a body by its handle
    pub fn get(&self, handle: BodyHandle) -> Option<&PhysicsBody> {
        self.items.get(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut PhysicsBody> {
        self.items.get_mut(handle)
    }

    /// Removes a body from the storage
    pub fn remove(&mut self, handle: BodyHandle) -> Option<PhysicsBody> {
        self.items.remove(handle)
    }

    /// Returns whether the handle refers to a live body
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.items.contains_key(handle)
    }

    /// Returns the number of bodies in the storage
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the storage is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears all bodies from the storage
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over all bodies
    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &PhysicsBody)> + '_ {
        self.items.iter()
    }

    /// Returns a mutable iterator over all bodies
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyHandle, &mut PhysicsBody)> + '_ {
        self.items.iter_mut()
    }

    /// Gets a body by its handle, returning an error if the handle is stale
    pub fn get_body(&self, handle: BodyHandle) -> Result<&PhysicsBody> {
        self.get(handle).ok_or_else(|| stale(handle))
    }

    /// Gets a mutable reference to a body by its handle, returning an error if the handle is stale
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut PhysicsBody> {
        self.get_mut(handle).ok_or_else(|| stale(handle))
    }
}

fn stale(handle: BodyHandle) -> PhysicsError {
    PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Vector2};

    fn body() -> PhysicsBody {
        PhysicsBody::new(Vector2::zero(), Rect::new(0.0, 0.0, 1.0, 1.0))
    }

    #[test]
    fn stale_handle_does_not_reach_reused_slot() {
        let mut storage = BodyStorage::new();
        let first = storage.add(body());
        assert!(storage.remove(first).is_some());

        let second = storage.add(body());
        assert_ne!(first, second);
        assert!(storage.get(first).is_none());
        assert!(storage.get_body(first).is_err());
        assert!(storage.get_body(second).is_ok());
        assert_eq!(storage.len(), 1);
    }
}
