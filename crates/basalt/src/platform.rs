//! Build-time platform selection.
//!
//! Application code never names a platform. [`DefaultPlatform`] is the winit
//! desktop platform when the `winit` feature is enabled and the headless platform
//! otherwise.

use basalt_shell::ShellResult;

pub use basalt_shell::Platform;
pub use basalt_shell::platform::{
    EventSource, HeadlessPlatform, HeadlessWindow, IdleSource, ScriptedSource, SurfacePlatform,
    SurfaceWindow,
};

#[cfg(feature = "winit")]
pub type DefaultPlatform = basalt_winit::WinitPlatform;

#[cfg(not(feature = "winit"))]
pub type DefaultPlatform = HeadlessPlatform<IdleSource>;

/// Creates the platform selected at build time.
#[cfg(feature = "winit")]
pub fn default_platform() -> ShellResult<DefaultPlatform> {
    basalt_winit::WinitPlatform::new()
}

/// Creates the platform selected at build time.
#[cfg(not(feature = "winit"))]
pub fn default_platform() -> ShellResult<DefaultPlatform> {
    Ok(HeadlessPlatform::new(IdleSource))
}
