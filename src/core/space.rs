use crate::bodies::{CollisionType, EntityId, PhysicsBody, StaticBody};
use crate::collision::{detect_static_overlaps, resolve_static_overlaps};
use crate::core::{
    BodyEvent, BodyEventType, BodyHandle, BodyStorage, EventQueue, SpaceConfig, TouchEvent,
};
use crate::error::PhysicsError;
use crate::integration::{Integrator, SymplecticEulerIntegrator};
use crate::math::{Rect, Vector2};
use crate::owner::{BodyOwner, OwnerRegistry};
use crate::Result;

/// The simulation space: static tile geometry plus the dynamic bodies moving through it
pub struct Space {
    /// Static geometry, in registration order
    static_bodies: Vec<StaticBody>,

    /// Every body owned by the space
    bodies: BodyStorage,

    /// Bodies that are simulated, in processing order
    active: Vec<BodyHandle>,

    /// Configuration for the simulation
    config: SpaceConfig,

    /// Integrator used for every sub-step
    integrator: SymplecticEulerIntegrator,

    /// Queue of physics events
    events: EventQueue,

    /// Number of frames simulated so far
    frame: u64,
}

impl Space {
    /// Creates a new space with default settings
    pub fn new() -> Self {
        Self::from_valid_config(SpaceConfig::default())
    }

    /// Creates a new space with the given configuration
    pub fn with_config(config: SpaceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SpaceConfig) -> Self {
        let integrator = SymplecticEulerIntegrator::new();
        log::debug!("creating space with {:?}, integrator {}", config, integrator.name());
        Self {
            static_bodies: Vec::new(),
            bodies: BodyStorage::new(),
            active: Vec::new(),
            config,
            integrator,
            events: EventQueue::new(),
            frame: 0,
        }
    }

    /// Returns a reference to the simulation configuration
    pub fn get_config(&self) -> &SpaceConfig {
        &self.config
    }

    /// Replaces the simulation configuration
    pub fn set_config(&mut self, config: SpaceConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Returns the number of frames simulated so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    // Static geometry

    /// Appends a static rectangle and returns its registration index
    ///
    /// No deduplication is done. Registration order only matters for
    /// breaking ties between equally large overlaps.
    pub fn add_static(&mut self, rect: Rect, collision_type: CollisionType) -> usize {
        self.static_bodies.push(StaticBody::new(rect, collision_type));
        self.static_bodies.len() - 1
    }

    /// Returns the static bodies in registration order
    pub fn static_bodies(&self) -> &[StaticBody] {
        &self.static_bodies
    }

    // Dynamic bodies

    /// Stores a body in the space without simulating it yet
    pub fn insert_body(&mut self, body: PhysicsBody) -> BodyHandle {
        self.bodies.add(body)
    }

    /// Stores a body and immediately starts simulating it
    pub fn spawn_body(&mut self, body: PhysicsBody) -> BodyHandle {
        let handle = self.insert_body(body);
        self.add_body(handle);
        handle
    }

    /// Starts simulating a stored body
    ///
    /// Returns false if the handle is stale or the body is already active.
    pub fn add_body(&mut self, handle: BodyHandle) -> bool {
        if !self.bodies.contains(handle) {
            log::warn!("ignoring add of unknown body {:?}", handle);
            return false;
        }
        if self.active.contains(&handle) {
            return false;
        }

        self.active.push(handle);
        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Activated,
            body: handle,
        });
        true
    }

    /// Stops simulating a body, keeping it stored
    ///
    /// Removing a body that is not active is a no-op and returns false.
    pub fn remove_body(&mut self, handle: BodyHandle) -> bool {
        let Some(index) = self.active.iter().position(|&h| h == handle) else {
            return false;
        };

        // Keep processing order stable for the remaining bodies
        self.active.remove(index);
        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Deactivated,
            body: handle,
        });
        true
    }

    /// Removes a body from the simulation and from storage, returning it
    ///
    /// The handle is dead afterwards, even if its slot is reused.
    pub fn free_body(&mut self, handle: BodyHandle) -> Result<PhysicsBody> {
        self.remove_body(handle);
        let body = self.bodies.remove(handle).ok_or_else(|| {
            PhysicsError::ResourceNotFound(format!("Body with handle {:?} not found", handle))
        })?;

        self.events.add_body_event(BodyEvent {
            event_type: BodyEventType::Freed,
            body: handle,
        });
        Ok(body)
    }

    /// Returns whether the body is currently simulated
    pub fn is_active(&self, handle: BodyHandle) -> bool {
        self.active.contains(&handle)
    }

    /// Returns whether the handle refers to a stored body
    pub fn contains_body(&self, handle: BodyHandle) -> bool {
        self.bodies.contains(handle)
    }

    /// Gets a reference to a body by its handle
    pub fn get_body(&self, handle: BodyHandle) -> Result<&PhysicsBody> {
        self.bodies.get_body(handle)
    }

    /// Gets a mutable reference to a body by its handle
    pub fn get_body_mut(&mut self, handle: BodyHandle) -> Result<&mut PhysicsBody> {
        self.bodies.get_body_mut(handle)
    }

    /// Returns the handles of the simulated bodies, in processing order
    pub fn active_bodies(&self) -> &[BodyHandle] {
        &self.active
    }

    /// Returns the number of stored bodies
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Returns the number of simulated bodies
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Returns a reference to the event queue
    pub fn get_events(&self) -> &EventQueue {
        &self.events
    }

    /// Returns a mutable reference to the event queue
    pub fn get_events_mut(&mut self) -> &mut EventQueue {
        &mut self.events
    }

    /// Removes every body and static rectangle and resets the frame counter
    pub fn clear(&mut self) {
        self.static_bodies.clear();
        self.bodies.clear();
        self.active.clear();
        self.events.clear();
        self.frame = 0;
    }

    // Simulation

    /// Advances the space by one game frame
    ///
    /// The frame is split into `config.substeps` fixed sub-steps. Grounded
    /// flags are recomputed during the frame and every body's acceleration
    /// accumulator is cleared at the end, so forces must be re-applied each
    /// frame. Events from the previous frame are dropped first.
    pub fn update<R: OwnerRegistry + ?Sized>(&mut self, owners: &mut R) {
        self.events.clear();

        for &handle in &self.active {
            if let Some(body) = self.bodies.get_mut(handle) {
                body.grounded = false;
            }
        }

        let dt = self.config.substep_dt();
        for _ in 0..self.config.substeps {
            self.step(dt, owners);
        }

        for &handle in &self.active {
            if let Some(body) = self.bodies.get_mut(handle) {
                body.acceleration = Vector2::zero();
            }
        }

        self.frame += 1;
    }

    /// Performs a single sub-step of length `dt` for every active body
    pub fn step<R: OwnerRegistry + ?Sized>(&mut self, dt: f32, owners: &mut R) {
        let Self {
            static_bodies,
            bodies,
            active,
            config,
            integrator,
            events,
            frame,
        } = self;

        for &handle in active.iter() {
            let Some(body) = bodies.get_mut(handle) else {
                continue;
            };

            integrator.integrate(body, dt);

            if body.can_collide {
                resolve_static_overlaps(body, static_bodies, config);
            }

            let Some(owner_id) = body.owner else {
                continue;
            };
            let Some(owner) = owners.owner_mut(owner_id) else {
                continue;
            };
            if owner.listens_for_static_touch() {
                dispatch_touches(handle, body, owner_id, static_bodies, *frame, owner, events);
            }
        }
    }

    /// Re-runs overlap detection for one body without moving it
    ///
    /// Returns the number of collisions now in the body's collision list.
    pub fn refresh_collisions(&mut self, handle: BodyHandle) -> Result<usize> {
        let body = self.bodies.get_body_mut(handle)?;
        Ok(detect_static_overlaps(body, &self.static_bodies, &self.config))
    }
}

impl Default for Space {
    fn default() -> Self {
        Self::new()
    }
}

/// Tests a body's hitbox against every static body and notifies its owner
///
/// Collision type does not matter here, so non-colliding statics work as
/// trigger zones.
fn dispatch_touches(
    handle: BodyHandle,
    body: &PhysicsBody,
    owner_id: EntityId,
    static_bodies: &[StaticBody],
    frame: u64,
    owner: &mut dyn BodyOwner,
    events: &mut EventQueue,
) {
    let hitbox = body.world_hitbox();
    for (static_index, static_body) in static_bodies.iter().enumerate() {
        if !hitbox.overlaps_rect(&static_body.rect) {
            continue;
        }

        let touch = TouchEvent {
            body: handle,
            owner: owner_id,
            static_index,
            static_body: *static_body,
            frame,
        };
        owner.on_static_touch(&touch);
        events.add_touch_event(touch);
    }
}
