//! Basalt - a portable application shell
//!
//! Basalt gives an application one window (or display surface), a one-time
//! settings negotiation before that window exists, a frame loop and a multi-touch
//! relay, behind the same API on every platform:
//!
//! - **Settings negotiation**: adjust [`Settings`] once in [`App::prepare_settings`]
//! - **Uniform window contract**: size, position and full-screen through [`AppCtx`],
//!   with [`Capabilities`] telling portable code what the platform can do
//! - **Touch relay**: batched native touches become began/moved/ended hooks
//! - **Platforms**: winit on the desktop, an embedded surface, and a headless
//!   window for CI, picked at build time as [`DefaultPlatform`]
//!
//! # Quick Start
//!
//! ```no_run
//! use basalt::prelude::*;
//!
//! struct Sketch;
//!
//! impl App for Sketch {
//!     fn prepare_settings(&mut self, settings: &mut Settings) {
//!         settings.set_window_size(1280, 720);
//!         settings.enable_multi_touch(true);
//!     }
//!
//!     fn touches_began(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {
//!         for touch in event.iter() {
//!             tracing::info!("touch {} at {:?}", touch.id(), touch.pos());
//!         }
//!         if ctx.active_touches().len() >= 5 {
//!             ctx.quit();
//!         }
//!     }
//! }
//!
//! fn main() {
//!     Application::new("Sketch").run(Sketch).expect("launch failed");
//! }
//! ```

pub mod application;
pub mod platform;

// Re-export core types
pub use basalt_core as core;
pub use basalt_core::math;

pub use basalt_shell as shell;
pub use basalt_shell::{
    ActiveTouches, App, AppCtx, AppInstance, Capabilities, Display, FrameTime, FullScreenMode,
    FullScreenOptions, LaunchConfig, LifecycleState, NullRenderer, PlatformWindow, Pos,
    ProfilingMode, Rect, Renderer, Settings, ShellError, ShellResult, Size, Touch, TouchEvent,
    TouchPhase, cleanup_launch, current, execute_launch, prepare_launch,
};

#[cfg(feature = "winit")]
pub use basalt_winit as winit;
#[cfg(feature = "winit")]
pub use basalt_winit::run_app;

pub use application::Application;
pub use platform::{DefaultPlatform, default_platform};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::application::Application;

    pub use basalt_shell::prelude::*;
    pub use basalt_shell::{Capabilities, LifecycleState, ShellResult};

    // Core math types
    pub use basalt_core::math::{IVec2, UVec2, Vec2};

    #[cfg(feature = "winit")]
    pub use basalt_winit::run_app;
}
