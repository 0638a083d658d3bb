use std::sync::Arc;

use basalt_shell::{
    Capabilities, Display, FullScreenMode, FullScreenOptions, PlatformWindow, Pos, Rect,
    Settings, ShellError, ShellResult, Size, WindowGeometry,
};
pub use winit::window::Fullscreen;
pub use winit::window::Window as NativeWindow;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::monitor::{MonitorHandle, VideoModeHandle};
use winit::window::{WindowId, WindowLevel};

use crate::display::resolve_display;

/// Touch input is only relayed where winit reports it reliably.
#[cfg(any(target_os = "windows", target_os = "ios", target_os = "android"))]
pub const CAPABILITIES: Capabilities = Capabilities::DESKTOP.union(Capabilities::MULTI_TOUCH);
#[cfg(not(any(target_os = "windows", target_os = "ios", target_os = "android")))]
pub const CAPABILITIES: Capabilities = Capabilities::DESKTOP;

fn window_level(always_on_top: bool) -> WindowLevel {
    if always_on_top {
        WindowLevel::AlwaysOnTop
    } else {
        WindowLevel::Normal
    }
}

/// Records a size the platform applied synchronously. `None` means the request
/// is pending and a `Resized` event will follow.
fn adopt_applied_size(geometry: &mut WindowGeometry, applied: Option<PhysicalSize<u32>>) {
    if let Some(applied) = applied {
        geometry.apply_native_resize(Size::new(applied.width, applied.height));
    }
}

/// A desktop window backed by winit.
pub struct WinitWindow {
    window: Arc<NativeWindow>,
    geometry: WindowGeometry,
    display: Display,
    title: String,
    visible: bool,
    borderless: bool,
    always_on_top: bool,
    cursor_visible: bool,
    close_requested: bool,
}

impl WinitWindow {
    /// Creates the native window described by negotiated `settings`.
    ///
    /// A zero extent is clamped to one pixel. Without an explicit position the
    /// window is centered on the negotiated display.
    pub fn new(event_loop: &ActiveEventLoop, settings: &Settings) -> ShellResult<Self> {
        let requested = settings.window_size();
        let size = requested.clamp_nonzero();
        if size != requested {
            tracing::warn!(
                "window size {}x{} clamped to {}x{}",
                requested.width,
                requested.height,
                size.width,
                size.height
            );
        }

        let pos = settings
            .window_pos()
            .unwrap_or_else(|| settings.display().centered(size));

        let attributes = NativeWindow::default_attributes()
            .with_title(settings.title())
            .with_resizable(settings.is_resizable())
            .with_decorations(!settings.is_borderless())
            .with_window_level(window_level(settings.is_always_on_top()))
            .with_inner_size(PhysicalSize::new(size.width, size.height))
            .with_position(PhysicalPosition::new(pos.x, pos.y));

        let window = event_loop
            .create_window(attributes)
            .map_err(|e| ShellError::window_creation(e.to_string()))?;

        // The compositor has the final say over size and placement.
        let inner = window.inner_size();
        let pos = window
            .outer_position()
            .map(|pos| Pos::new(pos.x, pos.y))
            .unwrap_or(pos);

        let display = match window.current_monitor() {
            Some(monitor) => resolve_display(&monitor, window.available_monitors()),
            None => settings.display().clone(),
        };

        Ok(Self {
            window: Arc::new(window),
            geometry: WindowGeometry::new(Rect::new(pos, Size::new(inner.width, inner.height))),
            display,
            title: settings.title().to_string(),
            visible: true,
            borderless: settings.is_borderless(),
            always_on_top: settings.is_always_on_top(),
            cursor_visible: true,
            close_requested: false,
        })
    }

    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// The underlying winit window, for renderers that create a surface from it.
    pub fn native(&self) -> &Arc<NativeWindow> {
        &self.window
    }

    fn monitor_for(&self, display: &Display) -> Option<MonitorHandle> {
        self.window
            .available_monitors()
            .nth(display.id() as usize)
            .or_else(|| self.window.current_monitor())
    }

    fn fullscreen_for(&self, monitor: Option<MonitorHandle>, options: &FullScreenOptions) -> Fullscreen {
        match options.mode {
            FullScreenMode::Borderless => Fullscreen::Borderless(monitor),
            FullScreenMode::Exclusive => {
                match monitor.as_ref().and_then(|monitor| video_mode(monitor, options.size)) {
                    Some(mode) => Fullscreen::Exclusive(mode),
                    None => {
                        tracing::warn!("no matching video mode, using borderless full-screen");
                        Fullscreen::Borderless(monitor)
                    }
                }
            }
        }
    }

    fn request_size(&mut self, size: Size<u32>) {
        let applied = self
            .window
            .request_inner_size(PhysicalSize::new(size.width, size.height));
        adopt_applied_size(&mut self.geometry, applied);
    }

    fn apply_windowed_geometry(&mut self) {
        let windowed = self.geometry.windowed();
        self.request_size(windowed.size());
        self.window
            .set_outer_position(PhysicalPosition::new(windowed.x, windowed.y));
    }
}

/// The video mode with the requested extent (or the monitor's native one) and
/// the highest refresh rate.
fn video_mode(monitor: &MonitorHandle, size: Option<Size<u32>>) -> Option<VideoModeHandle> {
    let native = monitor.size();
    let (width, height) = size.map_or((native.width, native.height), |size| (size.width, size.height));

    monitor
        .video_modes()
        .filter(|mode| mode.size().width == width && mode.size().height == height)
        .max_by_key(|mode| (mode.refresh_rate_millihertz(), mode.bit_depth()))
}

impl PlatformWindow for WinitWindow {
    fn capabilities(&self) -> Capabilities {
        CAPABILITIES
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
            let target = options.display.clone().unwrap_or_else(|| self.display.clone());
            let monitor = self.monitor_for(&target);
            let fullscreen = self.fullscreen_for(monitor, options);
            self.window.set_fullscreen(Some(fullscreen));

            self.display = target;
            let bounds = options.resolve_bounds(&self.display);
            self.geometry.enter_full_screen(bounds, options.clone());
            tracing::debug!("entered full-screen at {}x{}", bounds.width, bounds.height);
        } else {
            self.window.set_fullscreen(None);
            self.geometry.exit_full_screen();
            self.apply_windowed_geometry();
            tracing::debug!("left full-screen");
        }
    }

    fn set_size(&mut self, size: Size<u32>) {
        let size = size.clamp_nonzero();
        self.geometry.set_size(size);
        if !self.geometry.is_full_screen() {
            self.request_size(size);
        }
    }

    fn set_pos(&mut self, pos: Pos<i32>) {
        self.geometry.set_pos(pos);
        if !self.geometry.is_full_screen() {
            self.window
                .set_outer_position(PhysicalPosition::new(pos.x, pos.y));
        }
    }

    fn close(&mut self) {
        self.close_requested = true;
    }

    fn set_title(&mut self, title: &str) {
        self.window.set_title(title);
        self.title = title.to_string();
    }

    fn show(&mut self) {
        self.window.set_visible(true);
        self.visible = true;
    }

    fn hide(&mut self) {
        self.window.set_visible(false);
        self.visible = false;
    }

    fn set_borderless(&mut self, borderless: bool) {
        self.window.set_decorations(!borderless);
        self.borderless = borderless;
    }

    fn set_always_on_top(&mut self, always_on_top: bool) {
        self.window.set_window_level(window_level(always_on_top));
        self.always_on_top = always_on_top;
    }

    fn set_cursor_visible(&mut self, visible: bool) {
        self.window.set_cursor_visible(visible);
        self.cursor_visible = visible;
    }

    fn request_redraw(&self) {
        self.window.request_redraw();
    }
}
