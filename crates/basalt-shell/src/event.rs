use basalt_core::geometry::{Pos, Size};

use std::collections::VecDeque;

use crate::touch::RawTouch;

/// A native notification, already translated out of the platform's own types.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformEvent {
    /// A batch of raw touch notifications.
    Touches(Vec<RawTouch>),
    /// Window (or surface) resized to a new pixel size.
    Resized(Size<u32>),
    /// Window moved to a new desktop position.
    Moved(Pos<i32>),
    /// Mouse cursor moved (window coordinates).
    CursorMoved(Pos<i32>),
    /// Window focus changed.
    Focused(bool),
    /// The user or the system asked the window to close.
    CloseRequested,
}

/// Collects the notifications of one pump iteration and hands them to the shell
/// as one ordered batch.
///
/// Touch notifications are merged into a single [`PlatformEvent::Touches`] batch
/// unless a focus change arrives in between, in which case the touches before it
/// stay before it. Resizes and cursor moves are deduplicated so only the latest
/// value survives.
pub struct EventQueue {
    /// Normal priority events, in arrival order
    pending: VecDeque<PlatformEvent>,

    /// Touches gathered this iteration
    touches: Vec<RawTouch>,

    /// Deduplicated events (only last value kept)
    latest_resize: Option<Size<u32>>,
    latest_cursor: Option<Pos<i32>>,

    close_requested: bool,

    stats: EventStats,
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(16),
            touches: Vec::with_capacity(16),
            latest_resize: None,
            latest_cursor: None,
            close_requested: false,
            stats: EventStats::default(),
        }
    }

    pub fn push(&mut self, event: PlatformEvent) {
        self.stats.events_received += 1;

        match event {
            PlatformEvent::Touches(batch) => {
                self.touches.extend(batch);
            }
            PlatformEvent::Resized(size) => {
                self.latest_resize = Some(size);
            }
            PlatformEvent::CursorMoved(pos) => {
                self.latest_cursor = Some(pos);
            }
            PlatformEvent::CloseRequested => {
                self.close_requested = true;
            }
            PlatformEvent::Focused(focused) => {
                // Focus loss ends the active set, so touches that arrived first
                // must reach the relay first.
                if !self.touches.is_empty() {
                    let batch = std::mem::take(&mut self.touches);
                    self.pending.push_back(PlatformEvent::Touches(batch));
                }
                self.pending.push_back(PlatformEvent::Focused(focused));
            }
            event => {
                self.pending.push_back(event);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
            && self.touches.is_empty()
            && self.latest_resize.is_none()
            && self.latest_cursor.is_none()
            && !self.close_requested
    }

    /// Empties the queue.
    ///
    /// Order: window moves and focus changes (with any touches that arrived ahead
    /// of a focus change), the cursor position, the remaining touch batch, the
    /// resize, and finally the close request, so every other notification is
    /// applied before the app starts quitting.
    pub fn drain(&mut self) -> Vec<PlatformEvent> {
        let mut events = Vec::with_capacity(self.pending.len() + 4);

        events.extend(self.pending.drain(..));

        if let Some(pos) = self.latest_cursor.take() {
            events.push(PlatformEvent::CursorMoved(pos));
        }
        if !self.touches.is_empty() {
            events.push(PlatformEvent::Touches(std::mem::take(&mut self.touches)));
        }
        if let Some(size) = self.latest_resize.take() {
            events.push(PlatformEvent::Resized(size));
        }
        if std::mem::take(&mut self.close_requested) {
            events.push(PlatformEvent::CloseRequested);
        }

        self.stats.batches_drained += 1;
        self.stats.events_emitted += events.len();

        events
    }

    pub fn stats(&self) -> &EventStats {
        &self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = EventStats::default();
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default, Debug, Clone)]
pub struct EventStats {
    pub events_received: usize,
    pub events_emitted: usize,
    pub batches_drained: usize,
}
