//! Test utilities for Basalt applications.
//!
//! [`RecordingApp`] and [`RecordingRenderer`] write every hook call into a shared
//! [`CallLog`], so a test can launch against the headless platform and then assert
//! on the exact sequence the shell produced.
//!
//! # Example
//!
//! ```rust
//! use basalt_shell::execute_launch;
//! use basalt_shell::platform::{HeadlessPlatform, ScriptedSource};
//! use basalt_test_utils::{Call, RecordingApp, RecordingRenderer};
//!
//! let app = RecordingApp::new().with_settings(|settings| settings.set_frame_rate(0.0));
//! let log = app.log();
//! let renderer = RecordingRenderer::new(log.clone());
//!
//! let source = ScriptedSource::new().idle_frames(2);
//! execute_launch(HeadlessPlatform::new(source), app, renderer, "Test", Vec::new()).unwrap();
//!
//! assert_eq!(log.count(|call| matches!(call, Call::Update { .. })), 2);
//! assert_eq!(log.calls().last(), Some(&Call::RendererTeardown));
//! ```

mod log;
mod recording_app;
mod recording_renderer;

pub use log::{Call, CallLog};
pub use recording_app::RecordingApp;
pub use recording_renderer::RecordingRenderer;
