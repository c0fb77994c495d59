use nalgebra::{Point2, Point3};

use super::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Point3<f32>),
    Path(Vec<Point2<i32>>, Point3<f32>),
    Circle(Point2<i32>, f32, Point3<f32>),
}

/// A surface with no display behind it. It remembers what was drawn in the
/// most recent frame, and can pretend the user closed the window after a
/// given number of frames.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    frame_ops: Vec<DrawOp>,
    frames_presented: u64,
    quit_after: Option<u64>,
    closed: bool,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a quit request when polled after the `frames`-th present.
    pub fn quit_after(frames: u64) -> Self {
        HeadlessSurface {
            quit_after: Some(frames),
            ..Self::default()
        }
    }

    pub fn frame_ops(&self) -> &[DrawOp] {
        &self.frame_ops
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn record(&mut self, op: DrawOp) {
        assert!(!self.closed, "Drew {:?} on a closed surface", op);
        self.frame_ops.push(op);
    }
}

impl Surface for HeadlessSurface {
    fn clear(&mut self, color: &Point3<f32>) {
        self.frame_ops.clear();
        self.record(DrawOp::Clear(*color));
    }

    fn draw_path(&mut self, points: &[Point2<i32>], color: &Point3<f32>) {
        self.record(DrawOp::Path(points.to_vec(), *color));
    }

    fn draw_circle(&mut self, center: Point2<i32>, radius: f32, color: &Point3<f32>) {
        self.record(DrawOp::Circle(center, radius, *color));
    }

    fn present(&mut self) {
        assert!(!self.closed, "Presented a closed surface");
        self.frames_presented += 1;
    }

    fn poll_quit(&mut self) -> bool {
        match self.quit_after {
            Some(n) => self.frames_presented >= n,
            None => false,
        }
    }

    fn close(&mut self) {
        self.closed = true;
    }
}
