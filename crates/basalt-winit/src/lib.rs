//! Desktop platform for the Basalt shell, built on winit.
//!
//! ```no_run
//! use basalt_shell::prelude::*;
//!
//! struct Hello;
//!
//! impl App for Hello {
//!     fn prepare_settings(&mut self, settings: &mut Settings) {
//!         settings.set_window_size(800, 600);
//!     }
//! }
//!
//! fn main() {
//!     basalt_winit::run_app(Hello, NullRenderer, "Hello");
//! }
//! ```

pub mod app;
pub mod display;
pub mod event;
pub mod window;

pub use app::{WinitPlatform, run_app, run_app_with_config};
pub use window::WinitWindow;

// Re-export WindowId for convenience
pub use winit::window::WindowId;
