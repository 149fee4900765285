use std::time::Duration;

/// Paces automatic stepping.
///
/// The buffer counts hundredths of a second until the next generation. Each
/// [`tick`](Self::tick) first takes the elapsed time off the buffer and then
/// reports an advance once it has run out, refilling it with `speed` at once.
#[derive(Clone, Debug, Default)]
pub struct SteppingController {
    buffer: i64,
    speed: u32,
}

impl SteppingController {
    /// Time units per second of `dt`.
    pub const TICKS_PER_SECOND: f64 = 100.;

    /// `speed` - hundredths of a second between generations; 0 steps on every tick.
    pub fn new(speed: u32) -> Self {
        Self { buffer: 0, speed }
    }

    /// Returns `true` when exactly one generation should be advanced now.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let elapsed = (dt.as_secs_f64() * Self::TICKS_PER_SECOND).round();
        // a saturating cast; durations this long just mean "due"
        self.buffer = self.buffer.saturating_sub(elapsed as i64);
        if self.buffer <= 0 {
            self.buffer = self.speed as i64;
            true
        } else {
            false
        }
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Takes effect after the next advance; the pending buffer is kept.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed;
    }

    pub fn buffer(&self) -> i64 {
        self.buffer
    }
}
