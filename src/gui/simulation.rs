use nalgebra::Point2;

use super::pacing::FrameLimiter;
use super::projection::Projection;
use super::surface::Surface;
use crate::config::{SimConfig, MIN_PATH_POINTS};
use crate::error::{SimError, SimResult};
use crate::orrery::{Body, Orrery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Quit was requested; the surface gets closed at the top of the next
    /// iteration.
    Stopping,
    Stopped,
}

pub struct Simulation<'c, S: Surface> {
    config: &'c SimConfig,
    orrery: Orrery,
    surface: S,
    projection: Projection,
    state: LoopState,
    limiter: FrameLimiter,
    frames: u64,
    fault: Option<SimError>,
    // Scratch space for projected trails
    path_buffer: Vec<Point2<i32>>,
}

impl<'c, S: Surface> Simulation<'c, S> {
    pub fn new(config: &'c SimConfig, orrery: Orrery, surface: S) -> Self {
        Simulation {
            config,
            orrery,
            surface,
            projection: Projection::from_config(config),
            state: LoopState::Running,
            limiter: FrameLimiter::new(config.target_fps),
            frames: 0,
            fault: None,
            path_buffer: Vec::with_capacity(config.trail_capacity),
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Number of frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Runs until a quit is requested or a body can't be stepped, then
    /// closes the surface.
    pub fn run(&mut self) -> SimResult<()> {
        log::info!(
            "Starting simulation with {} orbiting bodies",
            self.orrery.num_bodies()
        );

        loop {
            match self.state {
                LoopState::Running => self.run_frame(),
                LoopState::Stopping => {
                    self.surface.close();
                    self.state = LoopState::Stopped;
                }
                LoopState::Stopped => break,
            }
        }

        log::info!("Simulation stopped after {} frames", self.frames);
        match self.fault.take() {
            None => Ok(()),
            Some(e) => Err(e),
        }
    }

    /// Runs exactly one frame. Does nothing unless we're running.
    pub fn run_frame(&mut self) {
        if self.state != LoopState::Running {
            return;
        }

        self.limiter.wait();
        self.surface.clear(&self.config.background);

        // The central body never moves, so it has no trail
        let central = self.orrery.central();
        let center = self.projection.to_screen(&central.position());
        self.surface
            .draw_circle(center, central.info.radius, &central.info.color);

        let (central, bodies) = self.orrery.split_mut();
        for body in bodies {
            if let Err(e) = body.integrate(central, self.config) {
                log::error!("Frame {}: {}", self.frames, e);
                self.fault.get_or_insert(e);
            }
            Self::draw_body(
                &mut self.surface,
                &self.projection,
                self.config.min_trail_points,
                &mut self.path_buffer,
                body,
            );
        }

        self.surface.present();
        self.frames += 1;
        if let Some(rate) = self.limiter.frame_done() {
            log::debug!("{:.1} fps", rate);
        }
        log::trace!("Finished frame {}", self.frames);

        if self.surface.poll_quit() {
            log::info!("Quit requested");
            self.state = LoopState::Stopping;
        } else if self.fault.is_some() {
            self.state = LoopState::Stopping;
        }
    }

    fn draw_body(
        surface: &mut S,
        projection: &Projection,
        min_trail_points: usize,
        path_buffer: &mut Vec<Point2<i32>>,
        body: &Body,
    ) {
        let trail = body.trail();
        if trail.len() >= min_trail_points.max(MIN_PATH_POINTS) {
            path_buffer.clear();
            path_buffer.extend(projection.project_path(trail.iter()));
            surface.draw_path(path_buffer, &body.info.color);
        }

        let center = projection.to_screen(&body.position());
        surface.draw_circle(center, body.info.radius, &body.info.color);
    }
}

#[cfg(test)]
mod tests {
    use nalgebra::{Point3, Vector2};

    use super::*;
    use crate::gui::headless::{DrawOp, HeadlessSurface};
    use crate::orrery::BodyInfo;

    fn make_body(name: &str, x: f64, vy: f64, mass: f64, color: Point3<f32>) -> Body {
        let info = BodyInfo {
            name: name.to_owned(),
            radius: 6.0,
            color,
        };
        Body::new(info, Vector2::new(x, 0.0), Vector2::new(0.0, vy), mass, 500).unwrap()
    }

    fn two_planets() -> Orrery {
        let yellow = Point3::new(1.0, 1.0, 0.0);
        let blue = Point3::new(0.0, 0.0, 1.0);
        let red = Point3::new(1.0, 0.0, 0.0);

        let mut orrery = Orrery::new(make_body("Sun", 0.0, 0.0, 1.989e30, yellow));
        orrery.add_body(make_body("Earth", 149.6e9, 29.8e3, 5.972e24, blue));
        orrery.add_body(make_body("Mars", 227.9e9, 24.1e3, 6.39e23, red));
        orrery
    }

    fn count_paths(surface: &HeadlessSurface) -> usize {
        surface
            .frame_ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::Path(..)))
            .count()
    }

    #[test]
    fn test_frame_draw_order() {
        let config = SimConfig::default().unpaced();
        let mut sim = Simulation::new(&config, two_planets(), HeadlessSurface::new());

        sim.run_frame();
        let ops = sim.surface().frame_ops();
        // Clear, sun, then one circle per planet; no trails yet
        assert_eq!(ops.len(), 4);
        assert_eq!(ops[0], DrawOp::Clear(Point3::new(0.0, 0.0, 0.0)));
        assert_eq!(
            ops[1],
            DrawOp::Circle(Point2::new(500, 500), 6.0, Point3::new(1.0, 1.0, 0.0))
        );
        assert!(matches!(ops[2], DrawOp::Circle(_, _, c) if c == Point3::new(0.0, 0.0, 1.0)));
        assert!(matches!(ops[3], DrawOp::Circle(_, _, c) if c == Point3::new(1.0, 0.0, 0.0)));

        // Circles are drawn where the bodies are after this frame's step
        let earth = sim.orrery().get_body("Earth").unwrap();
        let expected = Projection::from_config(&config).to_screen(&earth.position());
        assert!(matches!(ops[2], DrawOp::Circle(p, _, _) if p == expected));
    }

    #[test]
    fn test_trail_needs_three_points() {
        let config = SimConfig::default().unpaced();
        let mut sim = Simulation::new(&config, two_planets(), HeadlessSurface::new());

        sim.run_frame();
        sim.run_frame();
        assert_eq!(count_paths(sim.surface()), 0);

        sim.run_frame();
        assert_eq!(count_paths(sim.surface()), 2);

        // Trail comes right before its body's circle, oldest point first
        let ops = sim.surface().frame_ops();
        let earth = sim.orrery().get_body("Earth").unwrap();
        let proj = Projection::from_config(&config);
        match (&ops[2], &ops[3]) {
            (DrawOp::Path(points, _), DrawOp::Circle(center, _, _)) => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[0], proj.to_screen(earth.trail().oldest().unwrap()));
                assert_eq!(points[2], *center);
            }
            other => panic!("Expected path then circle, got {:?}", other),
        }
    }

    #[test]
    fn test_single_sample_trail_not_drawn() {
        // Not validated, so the loop has to cope on its own
        let config = SimConfig {
            min_trail_points: 1,
            ..SimConfig::default().unpaced()
        };
        let mut sim = Simulation::new(&config, two_planets(), HeadlessSurface::new());

        sim.run_frame();
        assert_eq!(count_paths(sim.surface()), 0);

        sim.run_frame();
        assert_eq!(count_paths(sim.surface()), 2);
    }

    #[test]
    fn test_quit_stops_after_frame() {
        let config = SimConfig::default().unpaced();
        let mut sim = Simulation::new(&config, two_planets(), HeadlessSurface::quit_after(3));

        sim.run().unwrap();
        assert_eq!(sim.state(), LoopState::Stopped);
        assert_eq!(sim.frames(), 3);
        assert_eq!(sim.surface().frames_presented(), 3);
        assert!(sim.surface().is_closed());
        for body in sim.orrery().bodies() {
            assert_eq!(body.trail().len(), 3);
        }

        // Nothing happens once stopped
        sim.run_frame();
        assert_eq!(sim.frames(), 3);
    }

    #[test]
    fn test_state_transitions() {
        let config = SimConfig::default().unpaced();
        let mut sim = Simulation::new(&config, two_planets(), HeadlessSurface::quit_after(1));
        assert_eq!(sim.state(), LoopState::Running);

        sim.run_frame();
        assert_eq!(sim.state(), LoopState::Stopping);
        assert!(!sim.surface().is_closed());

        sim.run().unwrap();
        assert_eq!(sim.state(), LoopState::Stopped);
        assert!(sim.surface().is_closed());
        assert_eq!(sim.frames(), 1);
    }

    #[test]
    fn test_degenerate_body_stops_run() {
        let config = SimConfig::default().unpaced();
        let mut orrery = two_planets();
        orrery.add_body(make_body("Stuck", 0.0, 0.0, 1.0, Point3::new(1.0, 1.0, 1.0)));
        let mut sim = Simulation::new(&config, orrery, HeadlessSurface::new());

        match sim.run() {
            Err(SimError::DegenerateGeometry { name, .. }) => assert_eq!(name, "Stuck"),
            other => panic!("Expected degenerate geometry, got {:?}", other),
        }

        // The frame still finished
        assert_eq!(sim.frames(), 1);
        assert_eq!(sim.surface().frame_ops().len(), 5);
        assert!(sim.surface().is_closed());
        assert_eq!(sim.orrery().get_body("Earth").unwrap().trail().len(), 1);
        assert_eq!(sim.orrery().get_body("Stuck").unwrap().position(), Vector2::zeros());
    }
}
