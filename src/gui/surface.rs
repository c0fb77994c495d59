use nalgebra::{Point2, Point3};

/// Whatever the simulation draws onto. Coordinates are in pixels with the
/// origin at the top-left corner, as produced by
/// [Projection](super::projection::Projection).
pub trait Surface {
    fn clear(&mut self, color: &Point3<f32>);

    /// Open polyline through `points`, one pixel wide.
    fn draw_path(&mut self, points: &[Point2<i32>], color: &Point3<f32>);

    fn draw_circle(&mut self, center: Point2<i32>, radius: f32, color: &Point3<f32>);

    /// Shows everything drawn since the last clear.
    fn present(&mut self);

    /// Drains pending input. Returns true if any of it asked us to quit.
    fn poll_quit(&mut self) -> bool;

    /// Releases the display. Nothing is drawn after this.
    fn close(&mut self);
}
