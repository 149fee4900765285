use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate and measures frame times.
pub struct FpsLimiter {
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl Default for FpsLimiter {
    fn default() -> Self {
        Self {
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        }
    }
}

impl FpsLimiter {
    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleeps out the rest of the frame and returns the full frame time,
    /// which drives the automaton's stepping.
    pub fn sleep(&mut self, max_fps: f64) -> Duration {
        let before_wait = self.frame_timer.elapsed();

        let target_frametime = Duration::from_secs_f64(1. / max_fps.max(1.));
        if target_frametime > before_wait {
            sleep(target_frametime - before_wait);
        }

        let frametime = self.frame_timer.elapsed();
        self.frametime_smoothed += (frametime.as_secs_f64() - self.frametime_smoothed) * 0.1;

        self.frame_timer = Instant::now();
        frametime
    }
}
