//! Profiling utilities based on the `puffin` crate.

pub use puffin::{GlobalProfiler, profile_function, profile_scope};

use crate::config::ProfilingMode;

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Default address for the puffin HTTP server.
pub const SERVER_ADDR: &str = "127.0.0.1:8585";

/// Enable profiling according to `mode`.
///
/// # Example
/// ```no_run
/// use basalt_core::config::ProfilingMode;
/// use basalt_core::profiling::init_profiling;
///
/// init_profiling(ProfilingMode::On);
/// ```
pub fn init_profiling(mode: ProfilingMode) {
    match mode {
        ProfilingMode::Off => puffin::set_scopes_on(false),
        ProfilingMode::On => puffin::set_scopes_on(true),
        ProfilingMode::WithServer => {
            puffin::set_scopes_on(true);
            start_server();
        }
    }
}

#[cfg(feature = "profiling")]
fn start_server() {
    if PROFILING_SERVER.get().is_some() {
        return;
    }

    match puffin_http::Server::new(SERVER_ADDR) {
        Ok(server) => {
            tracing::info!("Puffin profiler server started on http://{}", SERVER_ADDR);
            // Keep the server alive for the rest of the process
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => {
            tracing::error!("Failed to start puffin server: {}", e);
        }
    }
}

#[cfg(not(feature = "profiling"))]
fn start_server() {
    tracing::warn!("puffin server requested but the `profiling` feature is disabled");
}

/// Mark the start of a new frame for profiling.
///
/// The frame tick calls this once per rendered frame.
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}
