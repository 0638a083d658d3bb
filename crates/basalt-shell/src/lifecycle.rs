//! The app lifecycle state machine.
//!
//! ```text
//! Unlaunched -> Negotiating -> Running -> Quitting -> Terminated
//!                    |                                  ^
//!                    +------- (startup aborted) --------+
//! ```

use std::fmt;

use crate::error::{ShellError, ShellResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LifecycleState {
    #[default]
    Unlaunched,
    /// The instance is installed and settings are being negotiated.
    Negotiating,
    /// The window exists and the event loop is pumping.
    Running,
    /// Quit was requested; the pump exits before its next iteration.
    Quitting,
    Terminated,
}

impl LifecycleState {
    pub const fn can_transition_to(self, next: LifecycleState) -> bool {
        use LifecycleState::*;
        matches!(
            (self, next),
            (Unlaunched, Negotiating)
                | (Negotiating, Running)
                | (Negotiating, Terminated)
                | (Running, Quitting)
                | (Quitting, Terminated)
        )
    }

    pub const fn is_running(self) -> bool {
        matches!(self, LifecycleState::Running)
    }

    /// True once quit has been requested (or teardown finished).
    pub const fn is_terminating(self) -> bool {
        matches!(self, LifecycleState::Quitting | LifecycleState::Terminated)
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecycleState::Unlaunched => "Unlaunched",
            LifecycleState::Negotiating => "Negotiating",
            LifecycleState::Running => "Running",
            LifecycleState::Quitting => "Quitting",
            LifecycleState::Terminated => "Terminated",
        };
        f.write_str(name)
    }
}

/// Holds the current state and enforces the allowed transitions.
#[derive(Debug, Default)]
pub struct Lifecycle {
    state: LifecycleState,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn advance(&mut self, next: LifecycleState) -> ShellResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(ShellError::InvalidTransition {
                from: self.state,
                to: next,
            });
        }

        tracing::debug!("lifecycle: {} -> {}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// Moves `Running` to `Quitting`. Returns false (and changes nothing) in any
    /// other state, which makes repeated quits harmless.
    pub fn request_quit(&mut self) -> bool {
        if self.state.is_running() {
            tracing::debug!("lifecycle: quit requested");
            self.state = LifecycleState::Quitting;
            true
        } else {
            tracing::trace!("lifecycle: quit ignored in state {}", self.state);
            false
        }
    }

    pub fn should_terminate(&self) -> bool {
        self.state.is_terminating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_forward_path() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.state(), LifecycleState::Unlaunched);

        lifecycle.advance(LifecycleState::Negotiating).unwrap();
        lifecycle.advance(LifecycleState::Running).unwrap();
        assert!(!lifecycle.should_terminate());

        lifecycle.advance(LifecycleState::Quitting).unwrap();
        assert!(lifecycle.should_terminate());

        lifecycle.advance(LifecycleState::Terminated).unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Terminated);
    }

    #[test]
    fn test_abort_path_skips_running() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.advance(LifecycleState::Negotiating).unwrap();
        lifecycle.advance(LifecycleState::Terminated).unwrap();
    }

    #[test]
    fn test_rejects_backwards_transition() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.advance(LifecycleState::Negotiating).unwrap();
        lifecycle.advance(LifecycleState::Running).unwrap();

        let err = lifecycle.advance(LifecycleState::Negotiating).unwrap_err();
        assert_eq!(
            err,
            ShellError::InvalidTransition {
                from: LifecycleState::Running,
                to: LifecycleState::Negotiating,
            }
        );
        assert_eq!(lifecycle.state(), LifecycleState::Running);
    }

    #[test]
    fn test_quit_is_idempotent() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.request_quit());

        lifecycle.advance(LifecycleState::Negotiating).unwrap();
        lifecycle.advance(LifecycleState::Running).unwrap();

        assert!(lifecycle.request_quit());
        assert!(!lifecycle.request_quit());
        assert_eq!(lifecycle.state(), LifecycleState::Quitting);

        lifecycle.advance(LifecycleState::Terminated).unwrap();
        assert!(!lifecycle.request_quit());
        assert_eq!(lifecycle.state(), LifecycleState::Terminated);
    }
}
