use crate::math::{Rect, Vector2};

/// Maximum number of collisions a body can register in one detection pass
pub const MAX_COLLISIONS: usize = 8;

/// A single overlap between a body's collider and a static rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Collision {
    /// Unit normal pointing from the static body toward the dynamic body
    ///
    /// Axis-aligned for edge contacts, diagonal for exact corner contacts.
    pub normal: Vector2,

    /// Product of the x and y penetration lengths, used to order resolution
    pub overlap: f32,

    /// Copy of the static rectangle that was hit
    pub shape: Rect,

    /// Registration index of the static body in its space
    pub static_index: usize,
}

/// Fixed-capacity collision list, refilled on every detection pass
///
/// Once the buffer is full further collisions are counted in
/// [`CollisionBuffer::overflow`] instead of being stored.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionBuffer {
    slots: [Collision; MAX_COLLISIONS],
    len: usize,
    overflow: u32,
}

impl CollisionBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the buffer and resets the overflow counter
    pub fn clear(&mut self) {
        self.len = 0;
        self.overflow = 0;
    }

    /// Appends a collision, returning false if the buffer was already full
    pub fn push(&mut self, collision: Collision) -> bool {
        if self.len == MAX_COLLISIONS {
            self.overflow += 1;
            return false;
        }

        self.slots[self.len] = collision;
        self.len += 1;
        true
    }

    /// Number of stored collisions
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns whether the buffer holds no collisions
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the buffer has reached its capacity
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == MAX_COLLISIONS
    }

    /// Number of collisions dropped since the last `clear` because the buffer was full
    #[inline]
    pub fn overflow(&self) -> u32 {
        self.overflow
    }

    /// The stored collisions, in detection order
    #[inline]
    pub fn as_slice(&self) -> &[Collision] {
        &self.slots[..self.len]
    }

    /// Iterates over the stored collisions
    pub fn iter(&self) -> impl Iterator<Item = &Collision> {
        self.as_slice().iter()
    }

    /// Returns the collision with the largest overlap
    ///
    /// Ties keep the earliest entry, i.e. the first registered static body.
    pub fn max_overlap(&self) -> Option<&Collision> {
        let mut max: Option<&Collision> = None;
        for collision in self.iter() {
            if max.map_or(true, |current| current.overlap < collision.overlap) {
                max = Some(collision);
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collision(overlap: f32, static_index: usize) -> Collision {
        Collision {
            overlap,
            static_index,
            ..Collision::default()
        }
    }

    #[test]
    fn push_past_capacity_counts_overflow() {
        let mut buffer = CollisionBuffer::new();
        for i in 0..MAX_COLLISIONS + 3 {
            buffer.push(collision(1.0, i));
        }

        assert_eq!(buffer.len(), MAX_COLLISIONS);
        assert!(buffer.is_full());
        assert_eq!(buffer.overflow(), 3);

        // The first entries are kept, later ones dropped
        assert_eq!(buffer.as_slice()[MAX_COLLISIONS - 1].static_index, MAX_COLLISIONS - 1);

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.overflow(), 0);
    }

    #[test]
    fn max_overlap_prefers_first_on_ties() {
        let mut buffer = CollisionBuffer::new();
        buffer.push(collision(2.0, 0));
        buffer.push(collision(5.0, 1));
        buffer.push(collision(5.0, 2));
        buffer.push(collision(3.0, 3));

        assert_eq!(buffer.max_overlap().unwrap().static_index, 1);
    }

    #[test]
    fn max_overlap_of_empty_buffer_is_none() {
        assert!(CollisionBuffer::new().max_overlap().is_none());
    }
}
