//! Launch settings negotiated with the application before the window exists.

use basalt_core::geometry::{Pos, Size};

use crate::display::Display;
use crate::window::FullScreenOptions;

/// Window size used when the application does not pick one.
pub const DEFAULT_WINDOW_SIZE: Size<u32> = Size::new(640, 480);

/// Frame-rate target used when the application does not pick one.
pub const DEFAULT_FRAME_RATE: f32 = 60.0;

/// The negotiable launch configuration.
///
/// A default `Settings` is handed to [`App::prepare_settings`](crate::App::prepare_settings)
/// exactly once. Whatever the hook leaves behind is used to create the window;
/// afterwards the shell only exposes it read-only.
///
/// Nothing here is validated. A zero-area window, for example, is passed through
/// and the platform's window creation decides whether to clamp or reject it.
#[derive(Debug, Clone)]
pub struct Settings {
    window_size: Size<u32>,
    window_pos: Option<Pos<i32>>,
    full_screen_size: Option<Size<u32>>,
    full_screen: bool,
    resizable: bool,
    borderless: bool,
    always_on_top: bool,
    display: Display,
    multi_touch: bool,
    frame_rate: f32,
    title: String,
    should_quit: bool,
}

impl Settings {
    /// Creates default settings targeting `display`.
    pub fn new(display: Display) -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            window_pos: None,
            full_screen_size: None,
            full_screen: false,
            resizable: true,
            borderless: false,
            always_on_top: false,
            display,
            multi_touch: false,
            frame_rate: DEFAULT_FRAME_RATE,
            title: String::new(),
            should_quit: false,
        }
    }

    pub fn window_width(&self) -> u32 {
        self.window_size.width
    }

    pub fn window_height(&self) -> u32 {
        self.window_size.height
    }

    pub fn window_size(&self) -> Size<u32> {
        self.window_size
    }

    pub fn set_window_width(&mut self, width: u32) {
        self.window_size.width = width;
    }

    pub fn set_window_height(&mut self, height: u32) {
        self.window_size.height = height;
    }

    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_size = Size::new(width, height);
    }

    /// Initial window position. `None` lets the platform place the window.
    pub fn window_pos(&self) -> Option<Pos<i32>> {
        self.window_pos
    }

    pub fn set_window_pos(&mut self, x: i32, y: i32) {
        self.window_pos = Some(Pos::new(x, y));
    }

    /// The explicit full-screen extent, if one was configured.
    ///
    /// When unset, full-screen mode uses the display's native resolution.
    pub fn full_screen_size(&self) -> Option<Size<u32>> {
        self.full_screen_size
    }

    /// Configured full-screen width, or 0 when unset.
    pub fn full_screen_width(&self) -> u32 {
        self.full_screen_size.map_or(0, |size| size.width)
    }

    /// Configured full-screen height, or 0 when unset.
    pub fn full_screen_height(&self) -> u32 {
        self.full_screen_size.map_or(0, |size| size.height)
    }

    /// Sets the full-screen extent. Both components must be positive; if either
    /// is zero the pair is left unset.
    pub fn set_full_screen_size(&mut self, width: u32, height: u32) {
        let size = Size::new(width, height);
        if size.is_empty() {
            tracing::debug!(
                "ignoring full-screen size {}x{}; both extents must be positive",
                width,
                height
            );
            self.full_screen_size = None;
        } else {
            self.full_screen_size = Some(size);
        }
    }

    pub fn clear_full_screen_size(&mut self) {
        self.full_screen_size = None;
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen
    }

    pub fn set_full_screen(&mut self, full_screen: bool) {
        self.full_screen = full_screen;
    }

    pub fn is_resizable(&self) -> bool {
        self.resizable
    }

    pub fn set_resizable(&mut self, resizable: bool) {
        self.resizable = resizable;
    }

    pub fn is_borderless(&self) -> bool {
        self.borderless
    }

    pub fn set_borderless(&mut self, borderless: bool) {
        self.borderless = borderless;
    }

    pub fn is_always_on_top(&self) -> bool {
        self.always_on_top
    }

    pub fn set_always_on_top(&mut self, always_on_top: bool) {
        self.always_on_top = always_on_top;
    }

    /// The display the window will be created on. During negotiation this is the
    /// primary display.
    pub fn display(&self) -> &Display {
        &self.display
    }

    pub fn set_display(&mut self, display: Display) {
        self.display = display;
    }

    /// Opts in to multi-touch notifications. Disabled by default.
    ///
    /// Only honoured on platforms whose windows advertise
    /// [`Capabilities::MULTI_TOUCH`](crate::Capabilities::MULTI_TOUCH); elsewhere
    /// the flag is kept but no touch events are delivered.
    pub fn enable_multi_touch(&mut self, enable: bool) {
        self.multi_touch = enable;
    }

    pub fn is_multi_touch_enabled(&self) -> bool {
        self.multi_touch
    }

    /// Target frame rate in frames per second. A value of zero (or any
    /// non-finite value) renders as fast as the event loop ticks.
    pub fn frame_rate(&self) -> f32 {
        self.frame_rate
    }

    pub fn set_frame_rate(&mut self, frame_rate: f32) {
        self.frame_rate = frame_rate;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Aborts startup: the launch skips window creation and goes straight to
    /// teardown.
    pub fn set_should_quit(&mut self, should_quit: bool) {
        self.should_quit = should_quit;
    }

    /// Full-screen options derived from these settings: the target display plus
    /// the configured full-screen extent.
    pub fn full_screen_options(&self) -> FullScreenOptions {
        FullScreenOptions::new()
            .with_display(self.display.clone())
            .with_size(self.full_screen_size)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new(Display::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window_size(), DEFAULT_WINDOW_SIZE);
        assert_eq!(settings.frame_rate(), DEFAULT_FRAME_RATE);
        assert!(settings.is_resizable());
        assert!(!settings.is_full_screen());
        assert!(!settings.is_multi_touch_enabled());
        assert!(!settings.should_quit());
        assert_eq!(settings.full_screen_size(), None);
        assert_eq!(settings.window_pos(), None);
    }

    #[test]
    fn test_full_screen_size_is_paired() {
        let mut settings = Settings::default();
        settings.set_full_screen_size(1280, 720);
        assert_eq!(settings.full_screen_size(), Some(Size::new(1280, 720)));
        assert_eq!(settings.full_screen_width(), 1280);
        assert_eq!(settings.full_screen_height(), 720);

        settings.set_full_screen_size(1280, 0);
        assert_eq!(settings.full_screen_size(), None);
        assert_eq!(settings.full_screen_width(), 0);
        assert_eq!(settings.full_screen_height(), 0);
    }

    #[test]
    fn test_window_size_setters() {
        let mut settings = Settings::default();
        settings.set_window_size(800, 600);
        assert_eq!((settings.window_width(), settings.window_height()), (800, 600));

        settings.set_window_width(1024);
        settings.set_window_height(768);
        assert_eq!(settings.window_size(), Size::new(1024, 768));
    }

    #[test]
    fn test_zero_window_size_is_accepted() {
        let mut settings = Settings::default();
        settings.set_window_size(0, 0);
        assert_eq!(settings.window_size(), Size::new(0, 0));
    }

    #[test]
    fn test_full_screen_options_follow_display() {
        let mut settings = Settings::default();
        settings.set_full_screen_size(1024, 768);
        let options = settings.full_screen_options();
        assert_eq!(options.display.as_ref(), Some(settings.display()));
        assert_eq!(options.size, Some(Size::new(1024, 768)));
    }
}
