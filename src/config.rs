use nalgebra::Point3;

use crate::consts::{
    DEFAULT_FPS, DEFAULT_SCALE, DEFAULT_SURFACE_SIZE, DEFAULT_TIMESTEP, DEFAULT_TRAIL_CAPACITY,
    NEWTON_G,
};
use crate::error::{SimError, SimResult};

/// A path needs two ends.
pub const MIN_PATH_POINTS: usize = 2;

/// All the knobs the simulation reads. Built once at startup and only ever
/// borrowed afterwards.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub title: String,
    /// Newton's gravitational constant, in N m^2 / kg^2
    pub gravitational_constant: f64,
    /// Meters per pixel
    pub scale: f64,
    /// Simulated seconds per integration step
    pub timestep: f64,
    pub width: u32,
    pub height: u32,
    /// None means the loop never sleeps
    pub target_fps: Option<u32>,
    pub trail_capacity: usize,
    /// Trails with fewer samples than this aren't drawn
    pub min_trail_points: usize,
    pub background: Point3<f32>,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            title: "Solar System Simulation".to_owned(),
            gravitational_constant: NEWTON_G,
            scale: DEFAULT_SCALE,
            timestep: DEFAULT_TIMESTEP,
            width: DEFAULT_SURFACE_SIZE,
            height: DEFAULT_SURFACE_SIZE,
            target_fps: Some(DEFAULT_FPS),
            trail_capacity: DEFAULT_TRAIL_CAPACITY,
            min_trail_points: 3,
            background: Point3::new(0.0, 0.0, 0.0),
        }
    }
}

impl SimConfig {
    /// Same parameters, but without frame pacing. Handy for headless runs.
    pub fn unpaced(self) -> Self {
        SimConfig {
            target_fps: None,
            ..self
        }
    }

    pub fn validate(&self) -> SimResult<()> {
        fn positive(name: &str, value: f64) -> SimResult<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig(format!(
                    "{} must be positive and finite, got {}",
                    name, value
                )))
            }
        }

        positive("gravitational constant", self.gravitational_constant)?;
        positive("scale", self.scale)?;
        positive("timestep", self.timestep)?;

        if self.width == 0 || self.height == 0 {
            return Err(SimError::InvalidConfig(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.target_fps == Some(0) {
            return Err(SimError::InvalidConfig(
                "target frame rate must be positive".to_owned(),
            ));
        }
        if self.trail_capacity == 0 {
            return Err(SimError::InvalidConfig(
                "trail capacity must be positive".to_owned(),
            ));
        }
        if self.min_trail_points < MIN_PATH_POINTS {
            return Err(SimError::InvalidConfig(format!(
                "trails need at least {} points to draw, got {}",
                MIN_PATH_POINTS, self.min_trail_points
            )));
        }
        Ok(())
    }
}
