//! The per-platform window contract.
//!
//! Every platform supplies one [`PlatformWindow`] implementation. The shell owns
//! exactly one of them at a time and only talks to it through this trait.

use basalt_core::geometry::{Pos, Rect, Size};

use crate::capability::Capabilities;
use crate::display::Display;

/// How a full-screen transition is performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FullScreenMode {
    /// Take over the display and switch its video mode.
    Exclusive,
    /// Cover the display with an undecorated window, leaving the video mode alone.
    #[default]
    Borderless,
}

/// Options for entering full-screen mode.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FullScreenOptions {
    /// Display to cover. `None` keeps the window's current display.
    pub display: Option<Display>,
    /// Extent to use instead of the display's native resolution.
    pub size: Option<Size<u32>>,
    pub mode: FullScreenMode,
}

impl FullScreenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn with_size(mut self, size: Option<Size<u32>>) -> Self {
        self.size = size;
        self
    }

    pub fn with_mode(mut self, mode: FullScreenMode) -> Self {
        self.mode = mode;
        self
    }

    /// The rectangle a full-screen window occupies under these options.
    pub fn resolve_bounds(&self, current: &Display) -> Rect {
        let display = self.display.as_ref().unwrap_or(current);
        Rect::new(display.pos(), self.size.unwrap_or(display.size()))
    }
}

/// Window geometry with an explicit split between what the app asked for and
/// what is on screen.
///
/// * `windowed` is the rectangle used whenever the window is not full-screen.
///   [`set_size`](Self::set_size) and [`set_pos`](Self::set_pos) always write it.
/// * `effective` is the rectangle currently on screen. Outside full-screen it
///   mirrors `windowed`; while full-screen it is the resolved display extent and
///   setters leave it untouched.
///
/// Leaving full-screen copies `windowed` back into `effective`, so any size or
/// position set while full-screen takes effect at that point.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowGeometry {
    windowed: Rect,
    effective: Rect,
    full_screen: Option<FullScreenOptions>,
}

impl WindowGeometry {
    pub fn new(windowed: Rect) -> Self {
        Self {
            windowed,
            effective: windowed,
            full_screen: None,
        }
    }

    pub fn windowed(&self) -> Rect {
        self.windowed
    }

    pub fn effective(&self) -> Rect {
        self.effective
    }

    pub fn size(&self) -> Size<u32> {
        self.effective.size()
    }

    pub fn pos(&self) -> Pos<i32> {
        self.effective.pos()
    }

    pub fn is_full_screen(&self) -> bool {
        self.full_screen.is_some()
    }

    pub fn full_screen_options(&self) -> Option<&FullScreenOptions> {
        self.full_screen.as_ref()
    }

    pub fn set_size(&mut self, size: Size<u32>) {
        self.windowed.set_size(size);
        if !self.is_full_screen() {
            self.effective.set_size(size);
        }
    }

    pub fn set_pos(&mut self, pos: Pos<i32>) {
        self.windowed.set_pos(pos);
        if !self.is_full_screen() {
            self.effective.set_pos(pos);
        }
    }

    pub fn enter_full_screen(&mut self, bounds: Rect, options: FullScreenOptions) {
        self.effective = bounds;
        self.full_screen = Some(options);
    }

    pub fn exit_full_screen(&mut self) {
        self.effective = self.windowed;
        self.full_screen = None;
    }

    /// Records a size reported by the native side.
    ///
    /// While full-screen the report describes the full-screen surface, so only
    /// `effective` changes.
    pub fn apply_native_resize(&mut self, size: Size<u32>) {
        if !self.is_full_screen() {
            self.windowed.set_size(size);
        }
        self.effective.set_size(size);
    }

    pub fn apply_native_move(&mut self, pos: Pos<i32>) {
        if !self.is_full_screen() {
            self.windowed.set_pos(pos);
        }
        self.effective.set_pos(pos);
    }
}

/// The capability contract every platform window honours.
///
/// All mutators are synchronous from the caller's point of view. Operations the
/// platform cannot perform are silent no-ops; check [`capabilities`](Self::capabilities)
/// to find out beforehand.
///
/// Size and position changes requested while full-screen only update the windowed
/// geometry (see [`WindowGeometry`]).
pub trait PlatformWindow {
    fn capabilities(&self) -> Capabilities;

    fn supports(&self, capability: Capabilities) -> bool {
        self.capabilities().supports(capability)
    }

    fn geometry(&self) -> &WindowGeometry;

    fn geometry_mut(&mut self) -> &mut WindowGeometry;

    /// Size currently on screen: the display extent while full-screen.
    fn size(&self) -> Size<u32> {
        self.geometry().size()
    }

    fn pos(&self) -> Pos<i32> {
        self.geometry().pos()
    }

    fn is_full_screen(&self) -> bool {
        self.geometry().is_full_screen()
    }

    fn display(&self) -> &Display;

    fn title(&self) -> &str;

    fn is_visible(&self) -> bool;

    fn is_borderless(&self) -> bool;

    fn is_always_on_top(&self) -> bool;

    fn is_cursor_visible(&self) -> bool;

    /// True after [`close`](Self::close) was called.
    fn is_close_requested(&self) -> bool;

    fn set_full_screen(&mut self, full_screen: bool, options: &FullScreenOptions);

    /// Sets the windowed size. While full-screen only the stored windowed size
    /// changes, and it takes effect on exit.
    ///
    /// A zero width or height is clamped to 1px here. This differs from window
    /// creation, where a zero-area size from negotiation is a launch error on
    /// platforms that honor the requested size.
    fn set_size(&mut self, size: Size<u32>);

    fn set_pos(&mut self, pos: Pos<i32>);

    /// Asks the app to quit. The native window is released during teardown, not here.
    fn close(&mut self);

    fn set_title(&mut self, title: &str);

    fn show(&mut self);

    fn hide(&mut self);

    fn set_borderless(&mut self, borderless: bool);

    fn set_always_on_top(&mut self, always_on_top: bool);

    fn set_cursor_visible(&mut self, visible: bool);

    /// Called by the relay when the native side reports a new size.
    fn apply_native_resize(&mut self, size: Size<u32>) {
        self.geometry_mut().apply_native_resize(size);
    }

    /// Called by the relay when the native side reports a new position.
    fn apply_native_move(&mut self, pos: Pos<i32>) {
        self.geometry_mut().apply_native_move(pos);
    }

    /// Asks the platform to schedule another frame. No-op where frames are driven
    /// by the pump alone.
    fn request_redraw(&self) {}
}

/// Logs a capability gap at trace level. Used by platform windows for their no-op paths.
pub(crate) fn unsupported(platform: &str, operation: &str) {
    tracing::trace!("{}: {} is not supported, ignoring", platform, operation);
}
