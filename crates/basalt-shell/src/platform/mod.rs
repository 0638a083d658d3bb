//! Platform backends.
//!
//! A [`Platform`] owns the native event loop for the duration of a launch. This
//! crate ships the pump-driven backends ([`HeadlessPlatform`] and
//! [`SurfacePlatform`]); the desktop backend lives in `basalt-winit`.
//!
//! Pump-driven backends pull native notifications from an [`EventSource`] and
//! share [`run_pump`].

pub mod headless;
pub mod scripted;
pub mod surface;

pub use headless::{HeadlessPlatform, HeadlessWindow, IdleSource};
pub use scripted::ScriptedSource;
pub use surface::{SurfacePlatform, SurfaceWindow};

use std::time::Instant;

use basalt_core::profiling::profile_scope;

use crate::capability::Capabilities;
use crate::error::ShellResult;
use crate::event::{EventQueue, PlatformEvent};
use crate::shell::Shell;

/// A native backend.
///
/// `run` must negotiate through [`Shell::start`], pump events into the shell
/// until [`Shell::should_terminate`] is true, and then return. Teardown is done
/// by the caller.
pub trait Platform {
    fn name(&self) -> &'static str;

    /// What windows created by this platform can do.
    fn capabilities(&self) -> Capabilities;

    fn run(self, shell: &mut Shell) -> ShellResult<()>;
}

/// The native notification source of a pump-driven platform.
pub trait EventSource {
    /// Returns the notifications that arrived before `deadline`.
    ///
    /// `None` as a deadline means "do not wait". Returning `None` means the
    /// source is gone, which the shell treats as a close request.
    fn wait(&mut self, deadline: Option<Instant>) -> Option<Vec<PlatformEvent>>;
}

impl<S: EventSource + ?Sized> EventSource for Box<S> {
    fn wait(&mut self, deadline: Option<Instant>) -> Option<Vec<PlatformEvent>> {
        (**self).wait(deadline)
    }
}

/// Drives `shell` from `source` until the app quits.
///
/// Each iteration waits for notifications up to the next frame deadline, hands
/// them to the shell as one batch and then ticks.
pub fn run_pump<S: EventSource + ?Sized>(shell: &mut Shell, source: &mut S) -> ShellResult<()> {
    let mut queue = EventQueue::new();

    while !shell.should_terminate() {
        profile_scope!("pump_iteration");

        match source.wait(shell.next_frame_at()) {
            Some(events) => {
                for event in events {
                    queue.push(event);
                }
            }
            None => {
                tracing::debug!("event source closed");
                shell.request_close();
            }
        }

        for event in queue.drain() {
            shell.handle_event(event);
        }

        shell.tick(Instant::now());
    }

    let stats = queue.stats();
    tracing::debug!(
        "pump finished: {} events received, {} delivered in {} batches",
        stats.events_received,
        stats.events_emitted,
        stats.batches_drained
    );
    Ok(())
}
