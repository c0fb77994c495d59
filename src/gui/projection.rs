use nalgebra::{Point2, Vector2};

use crate::config::SimConfig;

/// Maps world space (meters, origin at the central body) onto the surface
/// (pixels, origin at the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    scale: f64,
    center: Point2<i32>,
}

impl Projection {
    pub fn new(scale: f64, width: u32, height: u32) -> Self {
        Projection {
            scale,
            center: Point2::new((width / 2) as i32, (height / 2) as i32),
        }
    }

    pub fn from_config(config: &SimConfig) -> Self {
        Projection::new(config.scale, config.width, config.height)
    }

    /// Rounds toward negative infinity. Points far off-surface still get
    /// their exact coordinates; clipping is the surface's business.
    pub fn to_screen(&self, position: &Vector2<f64>) -> Point2<i32> {
        let offset = position.map(|c| (c / self.scale).floor() as i32);
        self.center + offset
    }

    pub fn project_path<'a, I>(&'a self, positions: I) -> impl Iterator<Item = Point2<i32>> + 'a
    where
        I: IntoIterator<Item = &'a Vector2<f64>>,
        I::IntoIter: 'a,
    {
        positions.into_iter().map(move |p| self.to_screen(p))
    }
}
