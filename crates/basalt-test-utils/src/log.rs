use std::sync::Arc;

use basalt_shell::{LifecycleState, Size};
use parking_lot::Mutex;

/// One recorded hook call.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    PrepareSettings,
    Setup {
        size: Size<u32>,
        full_screen: bool,
    },
    Update {
        frame: u64,
    },
    Draw {
        frame: u64,
    },
    /// Ids carried by the event, and the ids active while the hook ran (sorted).
    TouchesBegan {
        ids: Vec<u64>,
        active: Vec<u64>,
    },
    TouchesMoved {
        ids: Vec<u64>,
        active: Vec<u64>,
    },
    TouchesEnded {
        ids: Vec<u64>,
        active: Vec<u64>,
    },
    FocusChanged(bool),
    Shutdown {
        state: LifecycleState,
    },

    RendererSetup {
        size: Size<u32>,
    },
    RendererResize {
        size: Size<u32>,
    },
    StartDraw,
    FinishDraw,
    RendererTeardown,
}

impl Call {
    pub fn is_touch(&self) -> bool {
        matches!(
            self,
            Call::TouchesBegan { .. } | Call::TouchesMoved { .. } | Call::TouchesEnded { .. }
        )
    }
}

/// Shared, clonable call log.
///
/// `App` and `Renderer` are moved into the shell at launch, so tests keep a clone
/// of the log to inspect afterwards.
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.calls.lock().push(call);
    }

    /// Get a copy of all recorded calls.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().iter().filter(|call| predicate(call)).count()
    }

    /// Only the touch hook calls, in order.
    pub fn touch_calls(&self) -> Vec<Call> {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.is_touch())
            .cloned()
            .collect()
    }

    /// Position of the first call matching `predicate`.
    pub fn position(&self, predicate: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls.lock().iter().position(predicate)
    }

    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}
