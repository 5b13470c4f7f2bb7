//! Fixed-cadence frame stepping.
//!
//! A frame driver advances the scene by one [`Spin`] per frame and then
//! yields until the next tick reported by [`FramePacer`]. How it yields is up
//! to the driver: a blocking sleep natively, a timer callback elsewhere.

use std::time::{Duration, Instant};

use crate::Space;

/// Time between frame submissions (about 40 frames per second).
pub const FRAME_LENGTH: Duration = Duration::from_millis(25);

/// A rotation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A rotation applied to a space once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    pub axis: Axis,
    pub angle: f64,
}

impl Spin {
    pub fn new(axis: Axis, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Advances `space` by one step.
    pub fn apply(&self, space: &mut Space) {
        match self.axis {
            Axis::X => space.rotate_x(self.angle),
            Axis::Y => space.rotate_y(self.angle),
            Axis::Z => space.rotate_z(self.angle),
        }
    }
}

/// Tracks when the next frame is due.
#[derive(Debug)]
pub struct FramePacer {
    frame_length: Duration,
    last_tick: Instant,
    frames: u64,
}

impl FramePacer {
    /// Creates a pacer whose first frame starts now.
    pub fn new(frame_length: Duration) -> Self {
        Self {
            frame_length,
            last_tick: Instant::now(),
            frames: 0,
        }
    }

    /// Number of completed frames.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Marks the current frame as finished.
    ///
    /// Returns how long to wait before starting the next one. An overrun frame
    /// returns zero; late frames are never made up.
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        let wait = self.frame_length.saturating_sub(elapsed);
        self.last_tick = now + wait;
        self.frames += 1;
        wait
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(FRAME_LENGTH)
    }
}
