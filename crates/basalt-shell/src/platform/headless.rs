//! A software window with no native counterpart.
//!
//! Used in CI, in tests and anywhere a launch has to run without a compositor.
//! It supports every capability and simply records what it was told.

use std::time::Instant;

use basalt_core::geometry::{Pos, Rect, Size};

use crate::capability::Capabilities;
use crate::display::Display;
use crate::error::{ShellError, ShellResult};
use crate::event::PlatformEvent;
use crate::platform::scripted::ScriptedSource;
use crate::platform::{EventSource, Platform, run_pump};
use crate::settings::Settings;
use crate::shell::Shell;
use crate::window::{FullScreenOptions, PlatformWindow, WindowGeometry};

#[derive(Debug)]
pub struct HeadlessWindow {
    geometry: WindowGeometry,
    display: Display,
    title: String,
    visible: bool,
    borderless: bool,
    always_on_top: bool,
    cursor_visible: bool,
    close_requested: bool,
}

impl HeadlessWindow {
    /// Builds the window described by negotiated `settings`.
    ///
    /// A window without area cannot be created and yields
    /// [`ShellError::WindowCreation`].
    pub fn create(settings: &Settings) -> ShellResult<Self> {
        let size = settings.window_size();
        if size.is_empty() {
            return Err(ShellError::window_creation(format!(
                "window size {}x{} has no area",
                size.width, size.height
            )));
        }

        let display = settings.display().clone();
        let pos = settings
            .window_pos()
            .unwrap_or_else(|| display.centered(size));

        tracing::debug!(
            "headless window '{}' {}x{} at ({}, {})",
            settings.title(),
            size.width,
            size.height,
            pos.x,
            pos.y
        );

        Ok(Self {
            geometry: WindowGeometry::new(Rect::new(pos, size)),
            display,
            title: settings.title().to_string(),
            visible: true,
            borderless: settings.is_borderless(),
            always_on_top: settings.is_always_on_top(),
            cursor_visible: true,
            close_requested: false,
        })
    }
}

impl PlatformWindow for HeadlessWindow {
    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
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
        self.visible
    }

    fn is_borderless(&self) -> bool {
        self.borderless
    }

    fn is_always_on_top(&self) -> bool {
        self.always_on_top
    }

    fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    fn is_close_requested(&self) -> bool {
        self.close_requested
    }

    fn set_full_screen(&mut self, full_screen: bool, options: &FullScreenOptions) {
        if full_screen == self.geometry.is_full_screen() {
            return;
        }

        if full_screen {
            if let Some(display) = &options.display {
                self.display = display.clone();
            }
            let bounds = options.resolve_bounds(&self.display);
            self.geometry.enter_full_screen(bounds, options.clone());
        } else {
            self.geometry.exit_full_screen();
        }
    }

    fn set_size(&mut self, size: Size<u32>) {
        self.geometry.set_size(size.clamp_nonzero());
    }

    fn set_pos(&mut self, pos: Pos<i32>) {
        self.geometry.set_pos(pos);
    }

    fn close(&mut self) {
        self.close_requested = true;
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn set_borderless(&mut self, borderless: bool) {
        self.borderless = borderless;
    }

    fn set_always_on_top(&mut self, always_on_top: bool) {
        self.always_on_top = always_on_top;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.cursor_visible = visible;
    }
}

/// An [`EventSource`] with no native input.
///
/// It sleeps until the next frame is due and never reports anything, so a
/// headless app runs until it quits on its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdleSource;

impl EventSource for IdleSource {
    fn wait(&mut self, deadline: Option<Instant>) -> Option<Vec<PlatformEvent>> {
        if let Some(deadline) = deadline {
            let now = Instant::now();
            if deadline > now {
                std::thread::sleep(deadline - now);
            }
        }
        Some(Vec::new())
    }
}

/// Runs a launch against [`HeadlessWindow`], fed by an [`EventSource`].
pub struct HeadlessPlatform<S = ScriptedSource> {
    source: S,
    display: Display,
}

impl<S: EventSource> HeadlessPlatform<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            display: Display::default(),
        }
    }

    /// Replaces the simulated primary display.
    pub fn with_display(mut self, display: Display) -> Self {
        self.display = display;
        self
    }
}

impl<S: EventSource> Platform for HeadlessPlatform<S> {
    fn name(&self) -> &'static str {
        "headless"
    }

    fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    fn run(mut self, shell: &mut Shell) -> ShellResult<()> {
        let started = shell.start(self.display, |settings| {
            Ok(Box::new(HeadlessWindow::create(settings)?) as Box<dyn PlatformWindow>)
        })?;
        if !started {
            return Ok(());
        }

        run_pump(shell, &mut self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        let mut settings = Settings::default();
        settings.set_window_size(800, 600);
        settings
    }

    #[test]
    fn test_create_centers_on_display() {
        let window = HeadlessWindow::create(&settings()).unwrap();
        assert_eq!(window.size(), Size::new(800, 600));
        assert_eq!(window.pos(), Pos::new(560, 240));
    }

    #[test]
    fn test_create_uses_explicit_pos() {
        let mut settings = settings();
        settings.set_window_pos(10, 20);
        let window = HeadlessWindow::create(&settings).unwrap();
        assert_eq!(window.pos(), Pos::new(10, 20));
    }

    #[test]
    fn test_zero_area_is_rejected() {
        let mut settings = settings();
        settings.set_window_size(0, 600);
        let err = HeadlessWindow::create(&settings).unwrap_err();
        assert!(matches!(err, ShellError::WindowCreation { .. }));
    }

    #[test]
    fn test_set_size_clamps_zero_after_creation() {
        let mut window = HeadlessWindow::create(&settings()).unwrap();
        window.set_size(Size::new(0, 0));
        assert_eq!(window.size(), Size::new(1, 1));

        window.set_size(Size::new(0, 300));
        assert_eq!(window.size(), Size::new(1, 300));
    }

    #[test]
    fn test_full_screen_is_idempotent() {
        let mut window = HeadlessWindow::create(&settings()).unwrap();
        let options = FullScreenOptions::new();

        window.set_full_screen(true, &options);
        let once = window.geometry().clone();
        window.set_full_screen(true, &options);
        assert_eq!(window.geometry(), &once);
        assert_eq!(window.size(), Size::new(1920, 1080));

        window.set_full_screen(false, &options);
        window.set_full_screen(false, &options);
        assert_eq!(window.size(), Size::new(800, 600));
    }

    #[test]
    fn test_idle_source_waits_for_deadline() {
        let mut source = IdleSource;
        let deadline = Instant::now() + std::time::Duration::from_millis(5);
        assert_eq!(source.wait(Some(deadline)), Some(Vec::new()));
        assert!(Instant::now() >= deadline);
    }

    #[test]
    fn test_close_only_flags() {
        let mut window = HeadlessWindow::create(&settings()).unwrap();
        window.close();
        assert!(window.is_close_requested());
        assert!(window.is_visible());
    }
}
