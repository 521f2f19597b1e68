use crate::bodies::{EntityId, StaticBody};
use crate::core::BodyHandle;
use std::collections::VecDeque;

/// A body's hitbox overlapped a static body during a sub-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// The body whose hitbox made contact
    pub body: BodyHandle,

    /// The entity owning the body
    pub owner: EntityId,

    /// Registration index of the static body
    pub static_index: usize,

    /// Copy of the static body that was touched
    pub static_body: StaticBody,

    /// Frame counter of the space when the touch happened
    pub frame: u64,
}

/// Types of body events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyEventType {
    /// A body started being simulated
    Activated,

    /// A body stopped being simulated
    Deactivated,

    /// A body was freed from the space
    Freed,
}

/// An event related to a single body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyEvent {
    /// The type of body event
    pub event_type: BodyEventType,

    /// The body that the event refers to
    pub body: BodyHandle,
}

/// A queue of physics events
///
/// The space clears the whole queue at the start of every frame, so events
/// must be read before the next `update`.
#[derive(Debug, Default)]
pub struct EventQueue {
    /// Touch events
    touch_events: VecDeque<TouchEvent>,

    /// Body events
    body_events: VecDeque<BodyEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a touch event to the queue
    pub fn add_touch_event(&mut self, event: TouchEvent) {
        self.touch_events.push_back(event);
    }

    /// Adds a body event to the queue
    pub fn add_body_event(&mut self, event: BodyEvent) {
        self.body_events.push_back(event);
    }

    /// Gets the next touch event from the queue
    pub fn next_touch_event(&mut self) -> Option<TouchEvent> {
        self.touch_events.pop_front()
    }

    /// Gets the next body event from the queue
    pub fn next_body_event(&mut self) -> Option<BodyEvent> {
        self.body_events.pop_front()
    }

    /// Returns the pending touch events
    pub fn touch_events(&self) -> impl Iterator<Item = &TouchEvent> {
        self.touch_events.iter()
    }

    /// Returns the pending body events
    pub fn body_events(&self) -> impl Iterator<Item = &BodyEvent> {
        self.body_events.iter()
    }

    /// Gets all touch events involving a specific body
    pub fn get_touch_events_for_body(&self, body: BodyHandle) -> Vec<&TouchEvent> {
        self.touch_events.iter().filter(|e| e.body == body).collect()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.touch_events.is_empty() && self.body_events.is_empty()
    }

    /// Clears the touch events
    pub fn clear_touch_events(&mut self) {
        self.touch_events.clear();
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.touch_events.clear();
        self.body_events.clear();
    }
}
