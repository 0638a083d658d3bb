use std::collections::VecDeque;
use std::time::Instant;

use basalt_core::geometry::{Pos, Size};

use crate::event::PlatformEvent;
use crate::platform::EventSource;
use crate::touch::RawTouch;

/// An [`EventSource`] that replays a fixed script, one step per pump iteration.
///
/// It never blocks. Once the script runs out the source reports itself closed,
/// which ends the run.
///
/// ```
/// use basalt_shell::platform::ScriptedSource;
/// use basalt_shell::RawTouch;
///
/// let source = ScriptedSource::new()
///     .idle()
///     .with_touches(vec![RawTouch::began(1, 10.0, 10.0)])
///     .with_touches(vec![RawTouch::ended(1, 12.0, 10.0)]);
/// assert_eq!(source.remaining(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    steps: VecDeque<Vec<PlatformEvent>>,
    iterations: usize,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one iteration delivering `events`.
    pub fn with_batch(mut self, events: Vec<PlatformEvent>) -> Self {
        self.steps.push_back(events);
        self
    }

    pub fn with_event(self, event: PlatformEvent) -> Self {
        self.with_batch(vec![event])
    }

    pub fn with_touches(self, touches: Vec<RawTouch>) -> Self {
        self.with_event(PlatformEvent::Touches(touches))
    }

    pub fn with_resize(self, width: u32, height: u32) -> Self {
        self.with_event(PlatformEvent::Resized(Size::new(width, height)))
    }

    pub fn with_move(self, x: i32, y: i32) -> Self {
        self.with_event(PlatformEvent::Moved(Pos::new(x, y)))
    }

    pub fn with_close(self) -> Self {
        self.with_event(PlatformEvent::CloseRequested)
    }

    /// Appends one iteration with no notifications (a plain frame).
    pub fn idle(self) -> Self {
        self.with_batch(Vec::new())
    }

    /// Appends `count` idle iterations.
    pub fn idle_frames(mut self, count: usize) -> Self {
        for _ in 0..count {
            self = self.idle();
        }
        self
    }

    /// Steps not yet delivered.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }

    /// Number of times the pump asked for events.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

impl EventSource for ScriptedSource {
    fn wait(&mut self, _deadline: Option<Instant>) -> Option<Vec<PlatformEvent>> {
        self.iterations += 1;
        self.steps.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replays_steps_in_order() {
        let mut source = ScriptedSource::new().with_resize(10, 20).idle().with_close();

        assert_eq!(
            source.wait(None),
            Some(vec![PlatformEvent::Resized(Size::new(10, 20))])
        );
        assert_eq!(source.wait(None), Some(Vec::new()));
        assert_eq!(source.wait(None), Some(vec![PlatformEvent::CloseRequested]));
        assert_eq!(source.wait(None), None);
        assert_eq!(source.iterations(), 4);
    }

    #[test]
    fn test_idle_frames() {
        let source = ScriptedSource::new().idle_frames(5);
        assert_eq!(source.remaining(), 5);
    }
}
