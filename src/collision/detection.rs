use crate::bodies::{CollisionType, PhysicsBody, StaticBody};
use crate::collision::Collision;
use crate::core::SpaceConfig;
use crate::math::{Rect, Vector2};

/// Computes the minimum-translation normal for `body` overlapping `other`
///
/// On each axis the shorter of the two push-out distances is chosen (ties
/// push toward the positive direction); then the axis needing the smaller
/// correction wins. If both axes need exactly the same correction the
/// contact is a corner and the normal is diagonal.
pub fn contact_normal(body: &Rect, other: &Rect) -> Vector2 {
    let (x_norm, x_corr) = push_out(body.right() - other.x, other.right() - body.x);
    let (y_norm, y_corr) = push_out(body.bottom() - other.y, other.bottom() - body.y);

    if x_corr < y_corr {
        Vector2::new(x_norm, 0.0)
    } else if x_corr > y_corr {
        Vector2::new(0.0, y_norm)
    } else {
        Vector2::new(x_norm, y_norm).normalize()
    }
}

/// Picks the push direction and distance along one axis
#[inline]
fn push_out(lower_corr: f32, upper_corr: f32) -> (f32, f32) {
    if lower_corr < upper_corr {
        (-1.0, lower_corr)
    } else {
        (1.0, upper_corr)
    }
}

/// Builds the collision record for one static body, if the body touches it
///
/// Returns `None` when the rectangles do not overlap, when the static body
/// has no collision, or when a one-way platform should let the body through.
pub fn static_collision(
    body: &PhysicsBody,
    world_collider: &Rect,
    static_body: &StaticBody,
    static_index: usize,
    config: &SpaceConfig,
) -> Option<Collision> {
    let shape = static_body.rect;
    let extents = world_collider.overlap_extents(&shape)?;

    let normal = match static_body.collision_type {
        CollisionType::None => return None,
        CollisionType::Full => contact_normal(world_collider, &shape),
        CollisionType::OneWay => {
            // Only land when falling (or resting) with the feet near the top edge
            let depth = world_collider.bottom() - shape.y;
            if body.velocity.y < 0.0 || depth > config.one_way_tolerance {
                return None;
            }
            Vector2::new(0.0, -1.0)
        }
    };

    Some(Collision {
        normal,
        overlap: extents.x * extents.y,
        shape,
        static_index,
    })
}

/// Refills the body's collision list with every static body it overlaps
///
/// Static bodies are visited in registration order. Returns the number of
/// stored collisions; overlaps past the buffer capacity are only counted.
pub fn detect_static_overlaps(
    body: &mut PhysicsBody,
    static_bodies: &[StaticBody],
    config: &SpaceConfig,
) -> usize {
    body.collisions.clear();
    if !body.can_collide {
        return 0;
    }

    let world_collider = body.world_collider();
    for (index, static_body) in static_bodies.iter().enumerate() {
        if let Some(collision) = static_collision(body, &world_collider, static_body, index, config) {
            body.collisions.push(collision);
        }
    }

    if body.collisions.overflow() > 0 {
        log::debug!(
            "collision list full, dropped {} overlap(s) at {}",
            body.collisions.overflow(),
            body.position
        );
    }

    body.collisions.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_floor_contact_pushes_up() {
        let body = Rect::new(0.0, 95.0, 16.0, 16.0);
        let floor = Rect::new(-100.0, 100.0, 300.0, 20.0);

        assert_eq!(contact_normal(&body, &floor), Vector2::new(0.0, -1.0));
    }

    #[test]
    fn shallow_wall_contact_pushes_sideways() {
        let body = Rect::new(-14.0, 0.0, 16.0, 16.0);
        let wall = Rect::new(0.0, -50.0, 20.0, 200.0);
        assert_eq!(contact_normal(&body, &wall), Vector2::new(-1.0, 0.0));

        let body = Rect::new(18.0, 0.0, 16.0, 16.0);
        assert_eq!(contact_normal(&body, &wall), Vector2::new(1.0, 0.0));
    }

    #[test]
    fn ceiling_contact_pushes_down() {
        let body = Rect::new(0.0, 18.0, 16.0, 16.0);
        let ceiling = Rect::new(-100.0, 0.0, 300.0, 20.0);

        assert_eq!(contact_normal(&body, &ceiling), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn exact_corner_gives_diagonal_normal() {
        let body = Rect::new(-4.0, -4.0, 16.0, 16.0);
        let block = Rect::new(8.0, 8.0, 32.0, 32.0);

        let normal = contact_normal(&body, &block);
        let expected = std::f32::consts::FRAC_1_SQRT_2;
        assert!((normal.x + expected).abs() < 1.0e-6);
        assert!((normal.y + expected).abs() < 1.0e-6);
    }

    #[test]
    fn none_type_never_registers() {
        let mut body = PhysicsBody::new(Vector2::new(0.0, 0.0), Rect::new(0.0, 0.0, 16.0, 16.0));
        let statics = [StaticBody::new(Rect::new(0.0, 0.0, 32.0, 32.0), CollisionType::None)];

        assert_eq!(detect_static_overlaps(&mut body, &statics, &SpaceConfig::default()), 0);
    }

    #[test]
    fn non_colliding_body_registers_nothing() {
        let mut body = PhysicsBody::new(Vector2::new(0.0, 0.0), Rect::new(0.0, 0.0, 16.0, 16.0))
            .with_can_collide(false);
        let statics = [StaticBody::full(Rect::new(0.0, 0.0, 32.0, 32.0))];

        assert_eq!(detect_static_overlaps(&mut body, &statics, &SpaceConfig::default()), 0);
    }
}
