use crate::bodies::EntityId;
use crate::core::{BodyHandle, Space};
use crate::math::Vector2;
use crate::owner::{BodyOwner, OwnerRegistry};
use crate::Result;

/// The motion state copied between an entity and its body
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Kinematics {
    /// Position in world space
    pub position: Vector2,

    /// Velocity
    pub velocity: Vector2,

    /// Acceleration accumulated for the coming frame
    pub acceleration: Vector2,
}

/// A gameplay entity that may own a physics body
pub trait PhysicsEntity {
    /// The entity's id, matching the owner stored on its body
    fn entity_id(&self) -> EntityId;

    /// The entity's body, if it has one
    fn body_handle(&self) -> Option<BodyHandle>;

    /// The entity-authored motion state to push into the body
    fn kinematics(&self) -> Kinematics;

    /// Receives the resolved motion state after the physics frame
    fn apply_kinematics(&mut self, kinematics: Kinematics, grounded: bool);
}

/// Copies the entity's position, velocity and acceleration into its body
///
/// Entities without a body are skipped. Fails if the entity holds a stale handle.
pub fn presync<E: PhysicsEntity + ?Sized>(space: &mut Space, entity: &E) -> Result<()> {
    let Some(handle) = entity.body_handle() else {
        return Ok(());
    };

    let kinematics = entity.kinematics();
    let body = space.get_body_mut(handle)?;
    body.set_position(kinematics.position);
    body.set_velocity(kinematics.velocity);
    body.set_acceleration(kinematics.acceleration);
    Ok(())
}

/// Copies the body's resolved state and grounded flag back into the entity
pub fn postsync<E: PhysicsEntity + ?Sized>(space: &Space, entity: &mut E) -> Result<()> {
    let Some(handle) = entity.body_handle() else {
        return Ok(());
    };

    let body = space.get_body(handle)?;
    let kinematics = Kinematics {
        position: body.get_position(),
        velocity: body.get_velocity(),
        acceleration: body.get_acceleration(),
    };
    entity.apply_kinematics(kinematics, body.is_grounded());
    Ok(())
}

/// Owner lookup over a slice of entities, by entity id
struct EntitySlice<'a, E>(&'a mut [E]);

impl<E: PhysicsEntity + BodyOwner> OwnerRegistry for EntitySlice<'_, E> {
    fn owner_mut(&mut self, id: EntityId) -> Option<&mut dyn BodyOwner> {
        self.0
            .iter_mut()
            .find(|entity| entity.entity_id() == id)
            .map(|entity| entity as &mut dyn BodyOwner)
    }
}

/// Runs the physics part of a frame for a set of entities
///
/// A frame is think, presync, [`Space::update`], postsync, then update and
/// draw. Syncing happens once per frame, never per sub-step.
///
/// Every entity is presynced, the space is updated once with the entities
/// acting as body owners, and every entity is postsynced.
pub fn run_frame<E: PhysicsEntity + BodyOwner>(space: &mut Space, entities: &mut [E]) -> Result<()> {
    for entity in entities.iter() {
        presync(space, entity)?;
    }

    space.update(&mut EntitySlice(&mut *entities));

    for entity in entities.iter_mut() {
        postsync(space, entity)?;
    }
    Ok(())
}
