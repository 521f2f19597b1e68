use crate::bodies::EntityId;
use crate::collision::CollisionBuffer;
use crate::math::{Rect, Shape, Vector2};

/// A dynamic body simulated by a [`Space`](crate::core::Space)
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    /// The body's position in world space
    pub(crate) position: Vector2,

    /// The body's velocity
    pub(crate) velocity: Vector2,

    /// Acceleration accumulated by gameplay code, cleared after every frame
    pub(crate) acceleration: Vector2,

    /// Acceleration actually integrated during the current sub-step
    pub(crate) net_acceleration: Vector2,

    /// Movement collider, relative to `position`
    pub(crate) collider: Rect,

    /// Whether the body takes part in collision detection and resolution
    pub(crate) can_collide: bool,

    /// Collisions found by the latest detection pass
    pub(crate) collisions: CollisionBuffer,

    /// Whether the latest frame pushed the body up out of a floor
    pub(crate) grounded: bool,

    /// Trigger shape, relative to `position`
    pub(crate) hitbox: Shape,

    /// The entity that owns this body, if any
    pub(crate) owner: Option<EntityId>,
}

impl PhysicsBody {
    /// Creates a new colliding body at `position` with the given collider
    ///
    /// The hitbox defaults to the collider.
    pub fn new(position: Vector2, collider: Rect) -> Self {
        Self {
            position,
            velocity: Vector2::zero(),
            acceleration: Vector2::zero(),
            net_acceleration: Vector2::zero(),
            collider,
            can_collide: true,
            collisions: CollisionBuffer::new(),
            grounded: false,
            hitbox: Shape::Rect(collider),
            owner: None,
        }
    }

    /// Sets the hitbox, builder style
    pub fn with_hitbox(mut self, hitbox: impl Into<Shape>) -> Self {
        self.hitbox = hitbox.into();
        self
    }

    /// Sets the owning entity, builder style
    pub fn with_owner(mut self, owner: EntityId) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Sets whether the body collides, builder style
    pub fn with_can_collide(mut self, can_collide: bool) -> Self {
        self.can_collide = can_collide;
        self
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's velocity
    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    /// Sets the body's velocity
    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    /// Returns the accumulated acceleration for this frame
    pub fn get_acceleration(&self) -> Vector2 {
        self.acceleration
    }

    /// Replaces the accumulated acceleration for this frame
    pub fn set_acceleration(&mut self, acceleration: Vector2) {
        self.acceleration = acceleration;
    }

    /// Returns the acceleration integrated during the latest sub-step
    pub fn get_net_acceleration(&self) -> Vector2 {
        self.net_acceleration
    }

    /// Adds to the acceleration accumulator
    ///
    /// The accumulator is cleared after every frame, so continuous forces
    /// such as gravity must be applied again each frame.
    pub fn apply_force(&mut self, force: Vector2) {
        self.acceleration += force;
    }

    /// Returns the movement collider, relative to the body position
    pub fn get_collider(&self) -> Rect {
        self.collider
    }

    /// Sets the movement collider
    pub fn set_collider(&mut self, collider: Rect) {
        self.collider = collider;
    }

    /// Returns the collider in world space
    pub fn world_collider(&self) -> Rect {
        self.collider.translated(self.position)
    }

    /// Returns whether the body takes part in collision resolution
    pub fn can_collide(&self) -> bool {
        self.can_collide
    }

    /// Sets whether the body takes part in collision resolution
    ///
    /// Disabling collision also empties the collision list.
    pub fn set_can_collide(&mut self, can_collide: bool) {
        self.can_collide = can_collide;
        if !can_collide {
            self.collisions.clear();
        }
    }

    /// Returns the collisions registered by the latest detection pass
    pub fn get_collisions(&self) -> &CollisionBuffer {
        &self.collisions
    }

    /// Number of collisions still present after the latest resolution pass
    pub fn unresolved_collisions(&self) -> usize {
        self.collisions.len()
    }

    /// Returns whether the body is resting on the ground
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Returns the hitbox, relative to the body position
    pub fn get_hitbox(&self) -> Shape {
        self.hitbox
    }

    /// Sets the hitbox
    pub fn set_hitbox(&mut self, hitbox: impl Into<Shape>) {
        self.hitbox = hitbox.into();
    }

    /// Returns the hitbox in world space
    pub fn world_hitbox(&self) -> Shape {
        self.hitbox.translated(self.position)
    }

    /// Returns the owning entity
    pub fn get_owner(&self) -> Option<EntityId> {
        self.owner
    }

    /// Sets the owning entity
    pub fn set_owner(&mut self, owner: Option<EntityId>) {
        self.owner = owner;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_body_defaults() {
        let body = PhysicsBody::new(Vector2::new(50.0, 0.0), Rect::new(-8.0, -8.0, 16.0, 16.0));

        assert!(body.can_collide());
        assert!(!body.is_grounded());
        assert_eq!(body.unresolved_collisions(), 0);
        assert_eq!(body.get_hitbox(), Shape::Rect(body.get_collider()));
        assert_eq!(body.world_collider(), Rect::new(42.0, -8.0, 16.0, 16.0));
    }

    #[test]
    fn forces_accumulate() {
        let mut body = PhysicsBody::new(Vector2::zero(), Rect::new(0.0, 0.0, 1.0, 1.0));
        body.apply_force(Vector2::new(0.0, 700.0));
        body.apply_force(Vector2::new(5.0, -100.0));

        assert_eq!(body.get_acceleration(), Vector2::new(5.0, 600.0));
    }
}
