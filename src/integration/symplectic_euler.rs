use crate::bodies::PhysicsBody;
use crate::integration::Integrator;

/// Symplectic Euler integrator (semi-implicit Euler)
///
/// Velocity is updated first and the *new* velocity moves the body, which
/// keeps constant-acceleration motion such as gravity stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Integrator for SymplecticEulerIntegrator {
    fn integrate(&self, body: &mut PhysicsBody, dt: f32) {
        // Gameplay acceleration is the only force source for now
        body.net_acceleration = body.acceleration;

        body.velocity += body.net_acceleration * dt;
        body.position += body.velocity * dt;
    }

    fn name(&self) -> &str {
        "SymplecticEuler"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{Rect, Vector2};

    #[test]
    fn velocity_is_updated_before_position() {
        let mut body = PhysicsBody::new(Vector2::zero(), Rect::new(0.0, 0.0, 1.0, 1.0));
        body.set_acceleration(Vector2::new(0.0, 10.0));

        SymplecticEulerIntegrator.integrate(&mut body, 0.5);

        assert_eq!(body.get_net_acceleration(), Vector2::new(0.0, 10.0));
        assert_eq!(body.get_velocity(), Vector2::new(0.0, 5.0));
        // Explicit Euler would leave the position at zero here
        assert_eq!(body.get_position(), Vector2::new(0.0, 2.5));
    }
}
