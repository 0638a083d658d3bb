use std::time::{Duration, Instant};

use basalt_core::profiling::profile_function;

/// Frame timing information handed to `update` and `draw`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTime {
    /// Time elapsed since the last frame
    pub delta: Duration,
    /// Total time elapsed since the first frame
    pub elapsed: Duration,
    /// Total number of frames rendered, including this one
    pub frame_count: u64,
}

impl FrameTime {
    pub fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Returns delta time in seconds (f32)
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Returns elapsed time in seconds (f32)
    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}

/// Paces frames against a target rate.
///
/// The pacer never sleeps; pumps ask [`next_frame_at`](Self::next_frame_at) how
/// long they may wait for events and call [`tick`](Self::tick) when a frame is
/// [due](Self::is_due).
#[derive(Debug, Clone)]
pub struct FramePacer {
    target_fps: f32,
    start_time: Option<Instant>,
    last_frame_time: Option<Instant>,
    frame_count: u64,
}

impl FramePacer {
    pub fn new(target_fps: f32) -> Self {
        Self {
            target_fps,
            start_time: None,
            last_frame_time: None,
            frame_count: 0,
        }
    }

    pub fn target_fps(&self) -> f32 {
        self.target_fps
    }

    pub fn set_target_fps(&mut self, target_fps: f32) {
        tracing::debug!("frame rate target: {} -> {}", self.target_fps, target_fps);
        self.target_fps = target_fps;
    }

    /// Time between frames, or `None` when pacing is disabled.
    pub fn frame_interval(&self) -> Option<Duration> {
        if self.target_fps.is_finite() && self.target_fps > 0.0 {
            Some(Duration::from_secs_f64(1.0 / self.target_fps as f64))
        } else {
            None
        }
    }

    /// When the next frame becomes due. `None` means "now".
    pub fn next_frame_at(&self) -> Option<Instant> {
        match (self.last_frame_time, self.frame_interval()) {
            (Some(last), Some(interval)) => Some(last + interval),
            _ => None,
        }
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_frame_at().is_none_or(|due| now >= due)
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn tick(&mut self, now: Instant) -> FrameTime {
        profile_function!();
        let start = *self.start_time.get_or_insert(now);
        let delta = self
            .last_frame_time
            .map_or(Duration::ZERO, |last| now.saturating_duration_since(last));
        let elapsed = now.saturating_duration_since(start);

        self.last_frame_time = Some(now);
        self.frame_count += 1;

        FrameTime {
            delta,
            elapsed,
            frame_count: self.frame_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_is_due_immediately() {
        let pacer = FramePacer::new(60.0);
        assert!(pacer.is_due(Instant::now()));
        assert_eq!(pacer.next_frame_at(), None);
    }

    #[test]
    fn test_pacing_interval() {
        let mut pacer = FramePacer::new(50.0);
        let start = Instant::now();

        let first = pacer.tick(start);
        assert_eq!(first.frame_count, 1);
        assert_eq!(first.delta, Duration::ZERO);

        assert!(!pacer.is_due(start + Duration::from_millis(10)));
        assert!(pacer.is_due(start + Duration::from_millis(20)));
        assert_eq!(pacer.next_frame_at(), Some(start + Duration::from_millis(20)));

        let second = pacer.tick(start + Duration::from_millis(25));
        assert_eq!(second.frame_count, 2);
        assert_eq!(second.delta, Duration::from_millis(25));
        assert_eq!(second.elapsed, Duration::from_millis(25));
    }

    #[test]
    fn test_zero_rate_disables_pacing() {
        let mut pacer = FramePacer::new(0.0);
        let now = Instant::now();
        pacer.tick(now);
        assert!(pacer.is_due(now));
        assert_eq!(pacer.frame_interval(), None);

        pacer.set_target_fps(f32::NAN);
        assert_eq!(pacer.frame_interval(), None);
    }

    #[test]
    fn test_rate_change_applies_to_next_frame() {
        let mut pacer = FramePacer::new(10.0);
        let start = Instant::now();
        pacer.tick(start);
        pacer.set_target_fps(100.0);
        assert!(pacer.is_due(start + Duration::from_millis(10)));
    }
}
