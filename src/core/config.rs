use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Serialize, Deserialize};

/// Configuration parameters for a [`Space`](crate::core::Space)
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SpaceConfig {
    /// Duration of one game frame in seconds
    pub frame_dt: f32,

    /// Number of fixed sub-steps a frame is divided into
    pub substeps: u32,

    /// Maximum number of resolution iterations per body and sub-step
    pub max_resolution_iterations: u32,

    /// How far below a one-way platform's top edge a falling body may reach
    /// and still land on it
    pub one_way_tolerance: f32,
}

impl Default for SpaceConfig {
    fn default() -> Self {
        Self {
            frame_dt: 1.0 / 60.0,
            substeps: 10,
            max_resolution_iterations: 5,
            one_way_tolerance: 10.0,
        }
    }
}

impl SpaceConfig {
    /// Sets the frame duration
    pub fn with_frame_dt(mut self, frame_dt: f32) -> Self {
        self.frame_dt = frame_dt;
        self
    }

    /// Sets the number of sub-steps per frame
    pub fn with_substeps(mut self, substeps: u32) -> Self {
        self.substeps = substeps;
        self
    }

    /// Sets the resolution iteration cap
    pub fn with_max_resolution_iterations(mut self, iterations: u32) -> Self {
        self.max_resolution_iterations = iterations;
        self
    }

    /// Sets the one-way platform landing tolerance
    pub fn with_one_way_tolerance(mut self, tolerance: f32) -> Self {
        self.one_way_tolerance = tolerance;
        self
    }

    /// Duration of one sub-step
    #[inline]
    pub fn substep_dt(&self) -> f32 {
        self.frame_dt / self.substeps as f32
    }

    /// Checks that every parameter is usable
    pub fn validate(&self) -> Result<()> {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "frame_dt must be positive and finite, got {}",
                self.frame_dt
            )));
        }

        if self.substeps == 0 {
            return Err(PhysicsError::InvalidParameter(
                "substeps must be at least 1".to_string(),
            ));
        }

        if self.max_resolution_iterations == 0 {
            return Err(PhysicsError::InvalidParameter(
                "max_resolution_iterations must be at least 1".to_string(),
            ));
        }

        if !(self.one_way_tolerance.is_finite() && self.one_way_tolerance >= 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "one_way_tolerance must be non-negative and finite, got {}",
                self.one_way_tolerance
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = SpaceConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.substeps, 10);
        assert!((config.substep_dt() - 1.0 / 600.0).abs() < 1.0e-9);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert!(SpaceConfig::default().with_frame_dt(0.0).validate().is_err());
        assert!(SpaceConfig::default().with_frame_dt(f32::NAN).validate().is_err());
        assert!(SpaceConfig::default().with_substeps(0).validate().is_err());
        assert!(SpaceConfig::default().with_max_resolution_iterations(0).validate().is_err());
        assert!(SpaceConfig::default().with_one_way_tolerance(-1.0).validate().is_err());
    }
}
