//! Embedded displays: one fixed surface covering the whole panel.
//!
//! The surface is full-screen from creation until teardown. The requested window
//! size is ignored, and window management operations are no-ops.

use basalt_core::geometry::{Pos, Size};

use crate::capability::Capabilities;
use crate::display::Display;
use crate::error::ShellResult;
use crate::platform::{EventSource, Platform, run_pump};
use crate::settings::Settings;
use crate::shell::Shell;
use crate::window::{FullScreenOptions, PlatformWindow, WindowGeometry, unsupported};

const PLATFORM: &str = "surface";

#[derive(Debug)]
pub struct SurfaceWindow {
    geometry: WindowGeometry,
    display: Display,
    title: String,
    close_requested: bool,
}

impl SurfaceWindow {
    pub fn create(settings: &Settings, display: Display) -> Self {
        let bounds = display.bounds();
        if settings.window_size() != bounds.size() {
            tracing::debug!(
                "surface ignores the requested {}x{}; using the panel's {}x{}",
                settings.window_width(),
                settings.window_height(),
                bounds.width,
                bounds.height
            );
        }

        let mut geometry = WindowGeometry::new(bounds);
        geometry.enter_full_screen(bounds, FullScreenOptions::new().with_display(display.clone()));

        Self {
            geometry,
            display,
            title: settings.title().to_string(),
            close_requested: false,
        }
    }
}

impl PlatformWindow for SurfaceWindow {
    fn capabilities(&self) -> Capabilities {
        Capabilities::SURFACE
    }

    fn geometry(&self) -> &WindowGeometry {
        &self.geometry
    }

    fn geometry_mut(&mut self) -> &mut WindowGeometry {
        &mut self.geometry
    }

    fn display(&self) -> &Display {
        &self.display
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn is_borderless(&self) -> bool {
        true
    }

    fn is_always_on_top(&self) -> bool {
        true
    }

    fn is_cursor_visible(&self) -> bool {
        false
    }

    fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    fn set_full_screen(&mut self, full_screen: bool, _options: &FullScreenOptions) {
        if !full_screen {
            unsupported(PLATFORM, "leaving full-screen");
        }
    }

    fn set_size(&mut self, _size: Size<u32>) {
        unsupported(PLATFORM, "set_size");
    }

    fn set_pos(&mut self, _pos: Pos<i32>) {
        unsupported(PLATFORM, "set_pos");
    }

    fn close(&mut self) {
        self.close_requested = true;
    }

    fn set_title(&mut self, _title: &str) {
        unsupported(PLATFORM, "set_title");
    }

    fn show(&mut self) {
        unsupported(PLATFORM, "show");
    }

    fn hide(&mut self) {
        unsupported(PLATFORM, "hide");
    }

    fn set_borderless(&mut self, _borderless: bool) {
        unsupported(PLATFORM, "set_borderless");
    }

    fn set_always_on_top(&mut self, _always_on_top: bool) {
        unsupported(PLATFORM, "set_always_on_top");
    }

    fn set_cursor_visible(&mut self, _visible: bool) {
        unsupported(PLATFORM, "set_cursor_visible");
    }

    fn apply_native_move(&mut self, _pos: Pos<i32>) {
        unsupported(PLATFORM, "moving the surface");
    }
}

/// Runs a launch on an embedded panel, fed by the external pump.
pub struct SurfacePlatform<S> {
    source: S,
    display: Display,
}

impl<S: EventSource> SurfacePlatform<S> {
    pub fn new(source: S, display: Display) -> Self {
        Self { source, display }
    }
}

impl<S: EventSource> Platform for SurfacePlatform<S> {
    fn name(&self) -> &'static str {
        PLATFORM
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::SURFACE
    }

    fn run(mut self, shell: &mut Shell) -> ShellResult<()> {
        let display = self.display.clone();
        let started = shell.start(self.display, move |settings| {
            Ok(Box::new(SurfaceWindow::create(settings, display)) as Box<dyn PlatformWindow>)
        })?;
        if !started {
            return Ok(());
        }

        run_pump(shell, &mut self.source)
    }
}
