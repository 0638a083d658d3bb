//! Touch tracking and delta computation for the event relay.
//!
//! Platforms deliver raw notifications in batches. [`TouchRelay::process`] applies
//! a batch to the active set and returns the deltas to hand to the app hooks.

use ahash::AHashSet;
use basalt_core::math::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
    /// The system took the touch away (e.g. a gesture recognizer). Treated as `Ended`.
    Cancelled,
}

/// A single native touch notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawTouch {
    pub id: u64,
    pub pos: Vec2,
    pub phase: TouchPhase,
}

impl RawTouch {
    pub fn new(id: u64, pos: Vec2, phase: TouchPhase) -> Self {
        Self { id, pos, phase }
    }

    pub fn began(id: u64, x: f32, y: f32) -> Self {
        Self::new(id, Vec2::new(x, y), TouchPhase::Began)
    }

    pub fn moved(id: u64, x: f32, y: f32) -> Self {
        Self::new(id, Vec2::new(x, y), TouchPhase::Moved)
    }

    pub fn ended(id: u64, x: f32, y: f32) -> Self {
        Self::new(id, Vec2::new(x, y), TouchPhase::Ended)
    }

    pub fn cancelled(id: u64, x: f32, y: f32) -> Self {
        Self::new(id, Vec2::new(x, y), TouchPhase::Cancelled)
    }
}

/// A touch as seen by application code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Touch {
    id: u64,
    pos: Vec2,
    prev_pos: Vec2,
    start_pos: Vec2,
}

impl Touch {
    fn began(id: u64, pos: Vec2) -> Self {
        Self {
            id,
            pos,
            prev_pos: pos,
            start_pos: pos,
        }
    }

    fn move_to(&mut self, pos: Vec2) {
        self.prev_pos = self.pos;
        self.pos = pos;
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Position before the most recent move.
    pub fn prev_pos(&self) -> Vec2 {
        self.prev_pos
    }

    /// Position where the touch began.
    pub fn start_pos(&self) -> Vec2 {
        self.start_pos
    }
}

/// The touches that changed in one relay pass, in notification order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchEvent {
    touches: Vec<Touch>,
}

impl TouchEvent {
    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    pub fn iter(&self) -> impl Iterator<Item = &Touch> {
        self.touches.iter()
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Touch> {
        self.touches.iter().find(|touch| touch.id == id)
    }
}

/// Every touch currently down, ordered by when it began.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveTouches {
    touches: Vec<Touch>,
}

impl ActiveTouches {
    pub fn touches(&self) -> &[Touch] {
        &self.touches
    }

    pub fn iter(&self) -> impl Iterator<Item = &Touch> {
        self.touches.iter()
    }

    pub fn len(&self) -> usize {
        self.touches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Touch> {
        self.touches.iter().find(|touch| touch.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.touches.iter().map(|touch| touch.id)
    }
}

/// Which app hook a [`TouchDispatch`] goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchHook {
    Began,
    Moved,
    Ended,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TouchDispatch {
    pub hook: TouchHook,
    pub event: TouchEvent,
}

/// The hook calls for one part of a batch, with the active set as of the end of
/// that part.
///
/// A batch splits into several segments only when an identifier ends and begins
/// again inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchSegment {
    pub active: ActiveTouches,
    pub dispatches: Vec<TouchDispatch>,
}

#[derive(Default)]
struct SegmentBuilder {
    began: Vec<Touch>,
    moved: Vec<Touch>,
    ended: Vec<Touch>,
    ended_ids: AHashSet<u64>,
}

impl SegmentBuilder {
    fn record_move(&mut self, touch: Touch) {
        match self.moved.iter_mut().find(|moved| moved.id == touch.id) {
            Some(moved) => *moved = touch,
            None => self.moved.push(touch),
        }
    }

    fn is_empty(&self) -> bool {
        self.began.is_empty() && self.moved.is_empty() && self.ended.is_empty()
    }

    fn finish(self, active: &[Touch]) -> TouchSegment {
        let hooks = [
            (TouchHook::Began, self.began),
            (TouchHook::Moved, self.moved),
            (TouchHook::Ended, self.ended),
        ];
        let dispatches = hooks
            .into_iter()
            .filter(|(_, touches)| !touches.is_empty())
            .map(|(hook, touches)| TouchDispatch {
                hook,
                event: TouchEvent { touches },
            })
            .collect();

        TouchSegment {
            active: ActiveTouches {
                touches: active.to_vec(),
            },
            dispatches,
        }
    }
}

/// Maintains the active touch set.
#[derive(Debug, Default)]
pub struct TouchRelay {
    active: ActiveTouches,
}

impl TouchRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &ActiveTouches {
        &self.active
    }

    /// Applies `batch` and returns the hook calls to make, in order.
    ///
    /// Within a segment, `Began` comes before `Moved` before `Ended`, and every
    /// hook of the segment observes the segment's [`TouchSegment::active`] set.
    /// If an identifier ends and begins again inside one batch, the batch is split
    /// so the `Ended` for the old touch (which does not see the identifier) is
    /// dispatched before the `Began` for the new one (which does).
    ///
    /// The relay's own set is the post-batch set when this returns; callers that
    /// dispatch segment by segment republish each snapshot with
    /// [`publish`](Self::publish).
    ///
    /// Moves and ends for identifiers that are not down are dropped. A second
    /// `Began` for an identifier that is already down is treated as a move.
    pub fn process(&mut self, batch: &[RawTouch]) -> Vec<TouchSegment> {
        let mut next = self.active.touches.clone();
        let mut segments = Vec::new();
        let mut segment = SegmentBuilder::default();

        for raw in batch {
            match raw.phase {
                TouchPhase::Began => {
                    if let Some(touch) = next.iter_mut().find(|touch| touch.id == raw.id) {
                        tracing::warn!("touch {} began twice; treating as a move", raw.id);
                        touch.move_to(raw.pos);
                        segment.record_move(*touch);
                        continue;
                    }

                    if segment.ended_ids.contains(&raw.id) {
                        segments.push(std::mem::take(&mut segment).finish(&next));
                    }

                    let touch = Touch::began(raw.id, raw.pos);
                    next.push(touch);
                    segment.began.push(touch);
                }
                TouchPhase::Moved => match next.iter_mut().find(|touch| touch.id == raw.id) {
                    Some(touch) => {
                        touch.move_to(raw.pos);
                        segment.record_move(*touch);
                    }
                    None => tracing::warn!("move for unknown touch {}, dropping", raw.id),
                },
                TouchPhase::Ended | TouchPhase::Cancelled => {
                    match next.iter().position(|touch| touch.id == raw.id) {
                        Some(index) => {
                            let mut touch = next.remove(index);
                            touch.move_to(raw.pos);
                            segment.ended.push(touch);
                            segment.ended_ids.insert(raw.id);
                        }
                        None => tracing::warn!("end for unknown touch {}, dropping", raw.id),
                    }
                }
            }
        }

        if !segment.is_empty() {
            segments.push(segment.finish(&next));
        }

        self.active.touches = next;
        segments
    }

    /// Replaces the visible set with a segment snapshot taken by [`process`](Self::process).
    pub fn publish(&mut self, active: ActiveTouches) {
        self.active = active;
    }

    /// Ends every active touch, e.g. when the window loses focus mid-gesture.
    pub fn cancel_all(&mut self) -> Option<TouchDispatch> {
        if self.active.is_empty() {
            return None;
        }

        let touches = std::mem::take(&mut self.active.touches);
        Some(TouchDispatch {
            hook: TouchHook::Ended,
            event: TouchEvent { touches },
        })
    }
}
