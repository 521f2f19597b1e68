use crate::bodies::{PhysicsBody, StaticBody};
use crate::collision::{detect_static_overlaps, Collision};
use crate::core::SpaceConfig;

/// Summary of one resolution pass for a single body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolutionReport {
    /// Number of corrections applied
    pub iterations: u32,

    /// Collisions still present when the pass ended
    pub residual: usize,

    /// Whether any correction pushed the body up out of a floor
    pub grounded: bool,
}

/// Pushes the body out of a single static rectangle along the collision normal
///
/// The body is snapped so its collider touches the static edge on every axis
/// the normal has a component on, and velocity and acceleration on those axes
/// are zeroed. Returns true if the body was pushed
/// upward, i.e. it is standing on the rectangle.
pub fn resolve_collision(body: &mut PhysicsBody, collision: &Collision) -> bool {
    let shape = &collision.shape;
    let collider = body.collider;
    let normal = collision.normal;

    if normal.x < 0.0 {
        body.position.x = shape.x - collider.w - collider.x;
    } else if normal.x > 0.0 {
        body.position.x = shape.right() - collider.x;
    }

    if normal.y < 0.0 {
        body.position.y = shape.y - collider.h - collider.y;
    } else if normal.y > 0.0 {
        body.position.y = shape.bottom() - collider.y;
    }

    // Inelastic along the normal
    if normal.x != 0.0 {
        body.velocity.x = 0.0;
        body.acceleration.x = 0.0;
    }
    if normal.y != 0.0 {
        body.velocity.y = 0.0;
        body.acceleration.y = 0.0;
    }

    let landed = normal.y < 0.0;
    if landed {
        body.grounded = true;
    }
    landed
}

/// Runs detection and then resolves the largest overlap first, repeatedly
///
/// After every correction the overlap set is rebuilt from scratch. The loop
/// stops when nothing overlaps or after `config.max_resolution_iterations`
/// corrections, in which case some penetration may remain until a later step.
pub fn resolve_static_overlaps(
    body: &mut PhysicsBody,
    static_bodies: &[StaticBody],
    config: &SpaceConfig,
) -> ResolutionReport {
    let mut report = ResolutionReport::default();
    if !body.can_collide {
        body.collisions.clear();
        return report;
    }

    detect_static_overlaps(body, static_bodies, config);
    while !body.collisions.is_empty() && report.iterations < config.max_resolution_iterations {
        let Some(collision) = body.collisions.max_overlap().copied() else {
            break;
        };

        report.grounded |= resolve_collision(body, &collision);
        report.iterations += 1;

        detect_static_overlaps(body, static_bodies, config);
    }

    report.residual = body.collisions.len();
    if report.residual > 0 {
        log::trace!(
            "{} collision(s) left unresolved after {} iteration(s) at {}",
            report.residual,
            report.iterations,
            body.position
        );
    }

    report
}
