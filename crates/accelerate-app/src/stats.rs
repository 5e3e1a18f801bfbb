//! Frame timing statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Number of recent frames averaged for the displayed FPS.
const SMOOTHING_WINDOW: usize = 60;

/// Per-frame delta, smoothed FPS, and whole-session min/max/average.
#[derive(Debug, Clone)]
pub struct FrameStats {
    last_frame: Option<Instant>,
    dt: Duration,
    recent: VecDeque<f64>,
    recent_sum: f64,
    frame_count: u64,
    min_fps: f64,
    max_fps: f64,
    fps_sum: f64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self {
            last_frame: None,
            dt: Duration::ZERO,
            recent: VecDeque::with_capacity(SMOOTHING_WINDOW),
            recent_sum: 0.0,
            frame_count: 0,
            min_fps: f64::MAX,
            max_fps: 0.0,
            fps_sum: 0.0,
        }
    }
}

impl FrameStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a frame starting at `now`. The first call only sets the
    /// reference point.
    pub fn tick(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.record(now.saturating_duration_since(last));
        }
        self.last_frame = Some(now);
    }

    /// Record one frame that took `dt`.
    pub fn record(&mut self, dt: Duration) {
        self.dt = dt;
        let secs = dt.as_secs_f64();

        if self.recent.len() == SMOOTHING_WINDOW {
            if let Some(oldest) = self.recent.pop_front() {
                self.recent_sum -= oldest;
            }
        }
        self.recent.push_back(secs);
        self.recent_sum += secs;

        self.frame_count += 1;
        if secs > 0.0 {
            let fps = 1.0 / secs;
            self.min_fps = self.min_fps.min(fps);
            self.max_fps = self.max_fps.max(fps);
            self.fps_sum += fps;
        }
    }

    /// Duration of the last recorded frame.
    #[must_use]
    pub const fn dt(&self) -> Duration {
        self.dt
    }

    /// FPS averaged over the last few frames.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fps(&self) -> f64 {
        if self.recent_sum > 0.0 {
            self.recent.len() as f64 / self.recent_sum
        } else {
            0.0
        }
    }

    /// Frames recorded so far.
    #[must_use]
    pub const fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Lowest instantaneous FPS seen, if any frame was recorded.
    #[must_use]
    pub fn min_fps(&self) -> Option<f64> {
        (self.max_fps > 0.0).then_some(self.min_fps)
    }

    /// Highest instantaneous FPS seen, if any frame was recorded.
    #[must_use]
    pub fn max_fps(&self) -> Option<f64> {
        (self.max_fps > 0.0).then_some(self.max_fps)
    }

    /// Mean instantaneous FPS over the session.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> Option<f64> {
        (self.frame_count > 0).then(|| self.fps_sum / self.frame_count as f64)
    }

    /// Log the session summary.
    pub fn log_summary(&self) {
        let (Some(min), Some(max), Some(avg)) =
            (self.min_fps(), self.max_fps(), self.average_fps())
        else {
            return;
        };
        tracing::info!("FPS Statistics:");
        tracing::info!("  Min: {min:.1}");
        tracing::info!("  Max: {max:.1}");
        tracing::info!("  Avg: {avg:.1}");
        tracing::info!("  Total frames: {}", self.frame_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_stats() {
        let stats = FrameStats::new();
        assert_eq!(stats.frame_count(), 0);
        assert_eq!(stats.fps(), 0.0);
        assert!(stats.min_fps().is_none());
        assert!(stats.average_fps().is_none());
    }

    #[test]
    fn first_tick_sets_reference_only() {
        let mut stats = FrameStats::new();
        let t0 = Instant::now();
        stats.tick(t0);
        assert_eq!(stats.frame_count(), 0);

        stats.tick(t0 + Duration::from_millis(10));
        assert_eq!(stats.frame_count(), 1);
        assert_eq!(stats.dt(), Duration::from_millis(10));
    }

    #[test]
    fn tracks_min_max_average() {
        let mut stats = FrameStats::new();
        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(20));
        stats.record(Duration::from_millis(40));

        assert_relative_eq!(stats.max_fps().unwrap(), 100.0, epsilon = 1e-6);
        assert_relative_eq!(stats.min_fps().unwrap(), 25.0, epsilon = 1e-6);
        assert_relative_eq!(stats.average_fps().unwrap(), 175.0 / 3.0, epsilon = 1e-6);
        // 3 frames over 70ms
        assert_relative_eq!(stats.fps(), 3.0 / 0.07, epsilon = 1e-6);
    }

    #[test]
    fn smoothing_window_forgets_old_frames() {
        let mut stats = FrameStats::new();
        for _ in 0..SMOOTHING_WINDOW {
            stats.record(Duration::from_millis(100));
        }
        for _ in 0..SMOOTHING_WINDOW {
            stats.record(Duration::from_millis(10));
        }
        assert_relative_eq!(stats.fps(), 100.0, epsilon = 1e-6);
        assert_eq!(stats.frame_count(), 2 * SMOOTHING_WINDOW as u64);
    }

    #[test]
    fn zero_length_frame_is_counted_without_fps() {
        let mut stats = FrameStats::new();
        stats.record(Duration::ZERO);
        assert_eq!(stats.frame_count(), 1);
        assert!(stats.max_fps().is_none());
    }
}
