use kiss3d::event::WindowEvent;
use kiss3d::scene::PlanarSceneNode;
use kiss3d::window::Window;

use nalgebra::{Point2, Point3, Translation2};

use super::surface::Surface;
use crate::config::SimConfig;

/// A kiss3d window, drawn on with the planar (2D) primitives.
///
/// kiss3d's planar space has its origin in the middle of the window and y
/// pointing up, so every point gets flipped on the way in. Circles are scene
/// nodes rather than immediate-mode shapes, so we keep a pool of unit circles
/// and scale, move and show as many as each frame needs.
pub struct WindowSurface {
    window: Window,
    half_width: f32,
    half_height: f32,
    circles: Vec<PlanarSceneNode>,
    circles_used: usize,
    close_requested: bool,
}

impl WindowSurface {
    pub fn open(config: &SimConfig) -> Self {
        let mut window = Window::new_with_size(&config.title, config.width, config.height);
        // The simulation loop does its own pacing
        window.set_framerate_limit(None);
        let bg = &config.background;
        window.set_background_color(bg.x, bg.y, bg.z);

        log::info!(
            "Opened {}x{} window {:?}",
            config.width,
            config.height,
            config.title
        );

        WindowSurface {
            window,
            half_width: (config.width / 2) as f32,
            half_height: (config.height / 2) as f32,
            circles: vec![],
            circles_used: 0,
            close_requested: false,
        }
    }

    fn to_planar(&self, p: Point2<i32>) -> Point2<f32> {
        Point2::new(p.x as f32 - self.half_width, self.half_height - p.y as f32)
    }
}

impl Surface for WindowSurface {
    fn clear(&mut self, color: &Point3<f32>) {
        self.window.set_background_color(color.x, color.y, color.z);
        self.circles_used = 0;
    }

    fn draw_path(&mut self, points: &[Point2<i32>], color: &Point3<f32>) {
        let mut prev_pt = None;
        for &pt in points {
            let pt = self.to_planar(pt);
            if let Some(prev_pt) = prev_pt {
                self.window.draw_planar_line(&prev_pt, &pt, color);
            }
            prev_pt = Some(pt);
        }
    }

    fn draw_circle(&mut self, center: Point2<i32>, radius: f32, color: &Point3<f32>) {
        if self.circles_used == self.circles.len() {
            let node = self.window.add_circle(1.0);
            self.circles.push(node);
        }

        let center = self.to_planar(center);
        let node = &mut self.circles[self.circles_used];
        node.set_color(color.x, color.y, color.z);
        node.set_local_scale(radius, radius);
        node.set_local_translation(Translation2::new(center.x, center.y));
        node.set_visible(true);
        self.circles_used += 1;
    }

    fn present(&mut self) {
        for node in self.circles[self.circles_used..].iter_mut() {
            node.set_visible(false);
        }
        if !self.window.render() {
            self.close_requested = true;
        }
    }

    fn poll_quit(&mut self) -> bool {
        let mut events = self.window.events();
        for event in events.iter() {
            if let WindowEvent::Close = event.value {
                self.close_requested = true;
            }
        }
        self.close_requested
    }

    fn close(&mut self) {
        self.window.close();
        log::info!("Closed window");
    }
}
