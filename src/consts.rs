use std::f64::consts::PI;

// Newton's gravitational constant, in N m^2 / kg^2
pub const NEWTON_G: f64 = 6.67430e-11;

// 1 pixel = 1.5 million km
pub const DEFAULT_SCALE: f64 = 1.5e9;
// 30 days per step
pub const DEFAULT_TIMESTEP: f64 = 30.0 * 86400.0;
pub const DEFAULT_SURFACE_SIZE: u32 = 1000;
pub const DEFAULT_FPS: u32 = 60;
pub const DEFAULT_TRAIL_CAPACITY: usize = 500;

pub const SUN_MASS: f64 = 1.989e30;
pub const EARTH_MASS: f64 = 5.972e24;
pub const EARTH_ORBIT_RADIUS: f64 = 149.6e9;
pub const EARTH_ORBIT_SPEED: f64 = 29.8e3;

pub fn get_circular_velocity(radius: f64, mu: f64) -> f64 {
    (mu / radius).sqrt()
}

pub fn get_period(a: f64, mu: f64) -> f64 {
    (4.0 * PI * PI * a.powi(3) / mu).sqrt()
}
