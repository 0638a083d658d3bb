//! Basalt Shell
//!
//! The platform-independent half of the Basalt application shell. Application
//! code implements [`App`], the launch protocol negotiates [`Settings`], builds
//! one [`PlatformWindow`] through a [`Platform`] backend, and the shell relays
//! native notifications (touches, resizes, close requests) back to the app.
//!
//! # Quick Start
//!
//! ```no_run
//! use basalt_shell::prelude::*;
//! use basalt_shell::platform::{HeadlessPlatform, ScriptedSource};
//!
//! struct Sketch;
//!
//! impl App for Sketch {
//!     fn prepare_settings(&mut self, settings: &mut Settings) {
//!         settings.set_window_size(800, 600);
//!         settings.enable_multi_touch(true);
//!     }
//!
//!     fn touches_began(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {
//!         tracing::info!("{} new touches, {} active", event.len(), ctx.active_touches().len());
//!     }
//! }
//!
//! fn main() {
//!     prepare_launch(&LaunchConfig::default());
//!     let platform = HeadlessPlatform::new(ScriptedSource::new());
//!     let result = execute_launch(platform, Sketch, NullRenderer, "Sketch", std::env::args());
//!     cleanup_launch();
//!     result.expect("launch failed");
//! }
//! ```

pub mod app;
pub mod capability;
pub mod context;
pub mod display;
pub mod error;
pub mod event;
pub mod instance;
pub mod launch;
pub mod lifecycle;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod shell;
pub mod time;
pub mod touch;
pub mod window;

pub use app::App;
pub use capability::Capabilities;
pub use context::AppCtx;
pub use display::Display;
pub use error::{ShellError, ShellResult};
pub use event::{EventQueue, PlatformEvent};
pub use instance::{AppInstance, current};
pub use launch::{cleanup_launch, execute_launch, prepare_launch};
pub use lifecycle::LifecycleState;
pub use platform::Platform;
pub use renderer::{NullRenderer, Renderer};
pub use settings::Settings;
pub use shell::{Negotiation, Shell};
pub use time::{FramePacer, FrameTime};
pub use touch::{ActiveTouches, RawTouch, Touch, TouchEvent, TouchPhase, TouchRelay};
pub use window::{FullScreenMode, FullScreenOptions, PlatformWindow, WindowGeometry};

pub use basalt_core::config::{LaunchConfig, ProfilingMode};
pub use basalt_core::geometry::{Pos, Rect, Size};
pub use basalt_core::math::Vec2;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::app::App;
    pub use crate::capability::Capabilities;
    pub use crate::context::AppCtx;
    pub use crate::display::Display;
    pub use crate::launch::{cleanup_launch, execute_launch, prepare_launch};
    pub use crate::renderer::{NullRenderer, Renderer};
    pub use crate::settings::Settings;
    pub use crate::time::FrameTime;
    pub use crate::touch::{Touch, TouchEvent};
    pub use crate::window::{FullScreenOptions, PlatformWindow};

    pub use basalt_core::config::LaunchConfig;
    pub use basalt_core::geometry::{Pos, Size};
    pub use basalt_core::math::Vec2;
}
