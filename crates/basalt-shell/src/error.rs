//! Error types for the application shell.

use std::fmt;

use crate::lifecycle::LifecycleState;

/// Errors surfaced by the launch protocol.
///
/// None of these are recoverable from the application's point of view: the
/// entry point is expected to log them and terminate the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// An app instance is already installed on this thread.
    AlreadyLaunched,

    /// The platform could not create the window or display surface.
    WindowCreation {
        /// Description reported by the platform.
        message: String,
    },

    /// The native event loop failed to start or aborted.
    EventLoop {
        /// Description reported by the platform.
        message: String,
    },

    /// The shell was asked to move between lifecycle states that are not adjacent.
    InvalidTransition {
        from: LifecycleState,
        to: LifecycleState,
    },
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::AlreadyLaunched => {
                write!(f, "An application instance is already running on this thread")
            }
            ShellError::WindowCreation { message } => {
                write!(f, "Failed to create window: {}", message)
            }
            ShellError::EventLoop { message } => {
                write!(f, "Event loop error: {}", message)
            }
            ShellError::InvalidTransition { from, to } => {
                write!(f, "Invalid lifecycle transition: {} -> {}", from, to)
            }
        }
    }
}

impl std::error::Error for ShellError {}

impl ShellError {
    pub fn window_creation(message: impl Into<String>) -> Self {
        ShellError::WindowCreation {
            message: message.into(),
        }
    }

    pub fn event_loop(message: impl Into<String>) -> Self {
        ShellError::EventLoop {
            message: message.into(),
        }
    }
}

/// Result type alias for shell operations.
pub type ShellResult<T> = Result<T, ShellError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShellError::window_creation("no surface");
        assert_eq!(err.to_string(), "Failed to create window: no surface");

        let err = ShellError::InvalidTransition {
            from: LifecycleState::Running,
            to: LifecycleState::Negotiating,
        };
        assert_eq!(
            err.to_string(),
            "Invalid lifecycle transition: Running -> Negotiating"
        );
    }
}
