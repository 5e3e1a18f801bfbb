//! Fixed-period frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Caps the frame loop to a target period by sleeping off the unused budget.
///
/// Overrun frames are not compensated: a frame that takes longer than the
/// target simply gets no sleep, and the next frame starts with a full budget.
#[derive(Debug, Clone, Copy)]
pub struct FramePacer {
    target: Duration,
    frame_start: Instant,
}

impl FramePacer {
    #[must_use]
    pub fn new(target: Duration) -> Self {
        Self {
            target,
            frame_start: Instant::now(),
        }
    }

    /// Target frame period.
    #[must_use]
    pub const fn target(&self) -> Duration {
        self.target
    }

    /// Mark the start of a frame.
    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time since [`begin`](Self::begin).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.frame_start.elapsed()
    }

    /// Sleep budget left after `elapsed`; zero once the target is reached.
    #[must_use]
    pub const fn remaining(&self, elapsed: Duration) -> Duration {
        self.target.saturating_sub(elapsed)
    }

    /// Sleep for whatever is left of this frame's budget. Returns the slept
    /// duration.
    pub fn pace(&self) -> Duration {
        let sleep = self.remaining(self.elapsed());
        if !sleep.is_zero() {
            thread::sleep(sleep);
        }
        sleep
    }
}
