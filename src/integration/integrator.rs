use crate::bodies::PhysicsBody;

/// Trait for numerical integration algorithms
pub trait Integrator: Send + Sync {
    /// Advances a body's velocity and position over a time step
    fn integrate(&self, body: &mut PhysicsBody, dt: f32);

    /// Returns the name of the integrator
    fn name(&self) -> &str;
}
