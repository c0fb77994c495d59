use std::thread;
use std::time::{Duration, Instant};

const RATE_WINDOW: Duration = Duration::from_secs(1);

/// Caps the loop at a target frame rate by sleeping off whatever is left of
/// the frame interval. Also keeps track of the rate actually achieved.
pub struct FrameLimiter {
    interval: Option<Duration>,
    last_frame: Option<Instant>,
    window_start: Instant,
    window_frames: u32,
}

impl FrameLimiter {
    pub fn new(target_fps: Option<u32>) -> Self {
        FrameLimiter {
            interval: target_fps.map(|fps| Duration::from_secs(1) / fps.max(1)),
            last_frame: None,
            window_start: Instant::now(),
            window_frames: 0,
        }
    }

    pub fn interval(&self) -> Option<Duration> {
        self.interval
    }

    /// Blocks until one interval has passed since the previous call. The
    /// first call never blocks.
    pub fn wait(&mut self) {
        if let (Some(interval), Some(last_frame)) = (self.interval, self.last_frame) {
            let elapsed = last_frame.elapsed();
            if elapsed < interval {
                thread::sleep(interval - elapsed);
            }
        }
        self.last_frame = Some(Instant::now());
    }

    /// Counts a finished frame. About once a second, returns the average
    /// frame rate since the last report.
    pub fn frame_done(&mut self) -> Option<f64> {
        self.frame_done_at(Instant::now())
    }

    fn frame_done_at(&mut self, now: Instant) -> Option<f64> {
        self.window_frames += 1;
        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < RATE_WINDOW {
            return None;
        }

        let rate = self.window_frames as f64 / elapsed.as_secs_f64();
        self.window_start = now;
        self.window_frames = 0;
        Some(rate)
    }
}
