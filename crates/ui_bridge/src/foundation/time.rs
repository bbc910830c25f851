//! Time management utilities

use crate::core::config::DEFAULT_DELTA_TIME;

/// Per-frame clock fed with host timestamps
///
/// The host (or input backend) supplies the current time in seconds; the clock turns
/// consecutive samples into a delta time. The first sample has nothing to diff
/// against and reports the configured default instead of zero.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Option<f64>,
    default_delta: f32,
    delta_time: f32,
    total_time: f64,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_DELTA_TIME)
    }
}

impl FrameClock {
    /// Create a clock that reports `default_delta` seconds for the first frame
    pub fn new(default_delta: f32) -> Self {
        Self {
            last_frame: None,
            default_delta,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance the clock to `now_seconds` and return the frame's delta time
    pub fn tick(&mut self, now_seconds: f64) -> f32 {
        self.delta_time = match self.last_frame {
            Some(last) => (now_seconds - last) as f32,
            None => self.default_delta,
        };
        self.total_time += f64::from(self.delta_time);
        self.last_frame = Some(now_seconds);
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total time accumulated over all ticks
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
