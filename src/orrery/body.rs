use nalgebra::{Point3, Vector2};

use super::force::{CentralGravity, ForceModel};
use super::trail::Trail;
use crate::config::SimConfig;
use crate::error::{SimError, SimResult};

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    /// On-screen radius, in pixels. Has nothing to do with the mass.
    pub radius: f32,
    pub color: Point3<f32>,
}

#[derive(Debug, Clone)]
pub struct Body {
    pub info: BodyInfo,
    position: Vector2<f64>,
    velocity: Vector2<f64>,
    mass: f64,
    trail: Trail,
}

impl Body {
    pub fn new(
        info: BodyInfo,
        position: Vector2<f64>,
        velocity: Vector2<f64>,
        mass: f64,
        trail_capacity: usize,
    ) -> SimResult<Self> {
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::NonPositiveMass {
                name: info.name,
                mass,
            });
        }
        if !(info.radius.is_finite() && info.radius > 0.0) {
            return Err(SimError::NonPositiveRadius {
                radius: info.radius,
                name: info.name,
            });
        }
        if trail_capacity == 0 {
            return Err(SimError::InvalidConfig(format!(
                "body {} needs a trail capacity of at least 1",
                info.name
            )));
        }

        Ok(Body {
            info,
            position,
            velocity,
            mass,
            trail: Trail::with_capacity(trail_capacity),
        })
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn position(&self) -> Vector2<f64> {
        self.position
    }

    pub fn velocity(&self) -> Vector2<f64> {
        self.velocity
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Advances this body by one timestep, pulled toward `reference`.
    ///
    /// This is semi-implicit Euler: the velocity is kicked first, and the
    /// position drifts with the new velocity. On error nothing is modified.
    pub fn integrate(&mut self, reference: &Body, config: &SimConfig) -> SimResult<()> {
        let gravity = CentralGravity::new(reference, config.gravitational_constant);
        self.step(&gravity, config.timestep)
    }

    pub fn step<F: ForceModel>(&mut self, model: &F, dt: f64) -> SimResult<()> {
        let force = model.force_on(self)?;

        self.velocity += force / self.mass * dt;
        self.position += self.velocity * dt;
        self.trail.push(self.position);
        Ok(())
    }
}

#[cfg(test)]
impl Body {
    pub(crate) fn set_position(&mut self, position: Vector2<f64>) {
        self.position = position;
    }
}
