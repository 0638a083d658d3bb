//! The renderer boundary.
//!
//! Surface/context creation and drawing belong to the renderer, which the shell
//! only drives at fixed points of the lifecycle.

use basalt_core::geometry::Size;

use crate::window::PlatformWindow;

pub trait Renderer {
    /// Called once, after the window exists and before [`App::setup`](crate::App::setup).
    #[allow(unused_variables)]
    fn setup(&mut self, window: &dyn PlatformWindow) {}

    /// Called at the start of a frame tick when the window size changed.
    #[allow(unused_variables)]
    fn resize(&mut self, size: Size<u32>) {}

    /// Called right before [`App::draw`](crate::App::draw).
    fn start_draw(&mut self) {}

    /// Called right after [`App::draw`](crate::App::draw).
    fn finish_draw(&mut self) {}

    /// Called during teardown, before the window is released.
    fn teardown(&mut self) {}
}

/// A renderer that does nothing. Useful for headless runs and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {}
