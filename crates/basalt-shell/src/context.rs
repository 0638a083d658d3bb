use std::path::Path;
use std::rc::Rc;

use basalt_core::geometry::{Pos, Size};

use crate::capability::Capabilities;
use crate::display::Display;
use crate::instance::AppInstance;
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::time::FramePacer;
use crate::touch::{ActiveTouches, TouchRelay};
use crate::window::PlatformWindow;

/// Everything the shell owns apart from the app itself.
pub(crate) struct ShellState {
    pub(crate) instance: Rc<AppInstance>,
    pub(crate) lifecycle: Lifecycle,
    pub(crate) settings: Settings,
    pub(crate) window: Option<Box<dyn PlatformWindow>>,
    pub(crate) renderer: Box<dyn Renderer>,
    pub(crate) relay: TouchRelay,
    pub(crate) pacer: FramePacer,
    pub(crate) mouse_pos: Pos<i32>,
    pub(crate) pending_resize: Option<Size<u32>>,
}

/// The app's view of the shell, passed to every hook.
///
/// Window queries fall back to the negotiated settings when no window exists
/// (which only happens during teardown of an aborted launch).
pub struct AppCtx<'a> {
    state: &'a mut ShellState,
}

impl<'a> AppCtx<'a> {
    pub(crate) fn new(state: &'a mut ShellState) -> Self {
        Self { state }
    }

    pub fn instance(&self) -> &Rc<AppInstance> {
        &self.state.instance
    }

    /// The negotiated settings. Frozen for the rest of the run.
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.state.lifecycle.state()
    }

    pub fn window(&self) -> Option<&dyn PlatformWindow> {
        self.state.window.as_deref()
    }

    pub fn window_mut(&mut self) -> Option<&mut (dyn PlatformWindow + 'static)> {
        self.state.window.as_deref_mut()
    }

    pub fn supports(&self, capability: Capabilities) -> bool {
        self.window().is_some_and(|window| window.supports(capability))
    }

    /// Width of the window in pixels, or of the display while full-screen.
    pub fn window_width(&self) -> u32 {
        self.window_size().width
    }

    /// Height of the window in pixels, or of the display while full-screen.
    pub fn window_height(&self) -> u32 {
        self.window_size().height
    }

    pub fn window_size(&self) -> Size<u32> {
        match self.window() {
            Some(window) => window.size(),
            None => self.state.settings.window_size(),
        }
    }

    pub fn set_window_width(&mut self, width: u32) {
        let height = self.windowed_size().height;
        self.set_window_size(width, height);
    }

    pub fn set_window_height(&mut self, height: u32) {
        let width = self.windowed_size().width;
        self.set_window_size(width, height);
    }

    /// Resizes the window. While full-screen the new size is remembered and
    /// applied when full-screen mode ends.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        if let Some(window) = self.window_mut() {
            window.set_size(Size::new(width, height));
        }
    }

    fn windowed_size(&self) -> Size<u32> {
        match self.window() {
            Some(window) => window.geometry().windowed().size(),
            None => self.state.settings.window_size(),
        }
    }

    pub fn window_pos(&self) -> Pos<i32> {
        self.window().map(|window| window.pos()).unwrap_or_default()
    }

    pub fn set_window_pos(&mut self, x: i32, y: i32) {
        if let Some(window) = self.window_mut() {
            window.set_pos(Pos::new(x, y));
        }
    }

    pub fn frame_rate(&self) -> f32 {
        self.state.pacer.target_fps()
    }

    pub fn set_frame_rate(&mut self, frame_rate: f32) {
        self.state.pacer.set_target_fps(frame_rate);
    }

    pub fn is_full_screen(&self) -> bool {
        self.window().is_some_and(|window| window.is_full_screen())
    }

    /// Enters or leaves full-screen on the negotiated display, using the
    /// negotiated full-screen size if one was set.
    pub fn set_full_screen(&mut self, full_screen: bool) {
        let options = self.state.settings.full_screen_options();
        if let Some(window) = self.window_mut() {
            window.set_full_screen(full_screen, &options);
        }
    }

    /// Last known cursor position in window coordinates.
    pub fn mouse_pos(&self) -> Pos<i32> {
        self.state.mouse_pos
    }

    pub fn show_cursor(&mut self) {
        if let Some(window) = self.window_mut() {
            window.set_cursor_visible(true);
        }
    }

    pub fn hide_cursor(&mut self) {
        if let Some(window) = self.window_mut() {
            window.set_cursor_visible(false);
        }
    }

    /// The display the window is on.
    pub fn display(&self) -> &Display {
        match self.window() {
            Some(window) => window.display(),
            None => self.state.settings.display(),
        }
    }

    pub fn active_touches(&self) -> &ActiveTouches {
        self.state.relay.active()
    }

    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        self.state.renderer.as_mut()
    }

    /// Directory containing the application executable.
    pub fn app_path(&self) -> &Path {
        self.state.instance.app_path()
    }

    /// Stops the app after the current event-loop iteration. Calling it again, or
    /// after the app stopped, does nothing.
    pub fn quit(&mut self) {
        if self.state.lifecycle.request_quit() {
            tracing::info!("quit requested by {}", self.state.instance.title());
        }
    }
}
