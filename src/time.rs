//! Frame timing for the windowed runner.
//!
//! Uses `std::time` for high-precision timing with no external dependencies.
//!
//! # Example
//!
//! ```ignore
//! let mut time = Time::new();
//!
//! // In your frame loop:
//! time.update();
//! println!("frame {} at {:.1} fps", time.frame(), time.fps());
//! ```

use std::time::{Duration, Instant};

/// How often the FPS estimate is refreshed.
const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks elapsed time, per-frame delta, frame count and a smoothed FPS.
#[derive(Debug)]
pub struct Time {
    /// When the timer was created.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Time since last frame in seconds.
    delta_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Calculated FPS (updated periodically).
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
        }
    }

    /// Update timing values. Call once per frame.
    ///
    /// Returns `(elapsed_time, delta_time)` for convenience.
    pub fn update(&mut self) -> (f32, f32) {
        let now = Instant::now();

        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let since_fps_update = now.duration_since(self.fps_update_time);
        if since_fps_update >= FPS_UPDATE_INTERVAL {
            let frames = self.frame_count - self.fps_frame_count;
            self.fps = frames as f32 / since_fps_update.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        (self.elapsed(), self.delta_secs)
    }

    /// Seconds since the tracker was created.
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Seconds between the two most recent updates.
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Number of updates so far.
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Smoothed frames per second, refreshed every half second.
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_counts_frames() {
        let mut time = Time::new();
        assert_eq!(time.frame(), 0);
        time.update();
        time.update();
        assert_eq!(time.frame(), 2);
    }

    #[test]
    fn test_delta_is_non_negative() {
        let mut time = Time::new();
        let (elapsed, delta) = time.update();
        assert!(elapsed >= 0.0);
        assert!(delta >= 0.0);
        assert_eq!(time.delta(), delta);
    }

    #[test]
    fn test_fps_updates_after_interval() {
        let mut time = Time::new();
        time.update();
        std::thread::sleep(Duration::from_millis(550));
        time.update();
        assert!(time.fps() > 0.0);
    }
}
