use crate::context::AppCtx;
use crate::settings::Settings;
use crate::time::FrameTime;
use crate::touch::TouchEvent;

/// Application code implements this trait; every method has an empty default.
///
/// The shell calls hooks on the event-loop thread, one at a time, and never
/// while another hook is running.
pub trait App {
    /// Called exactly once, before the window exists.
    ///
    /// Any field may be changed. Call `settings.set_should_quit(true)` to abort
    /// startup without creating a window.
    #[allow(unused_variables)]
    fn prepare_settings(&mut self, settings: &mut Settings) {}

    /// Called once after the window and renderer are ready.
    #[allow(unused_variables)]
    fn setup(&mut self, ctx: &mut AppCtx) {}

    /// Called once per frame, before `draw()`.
    ///
    /// Frame-independent movement should use `time.delta_seconds()`.
    #[allow(unused_variables)]
    fn update(&mut self, ctx: &mut AppCtx, time: &FrameTime) {}

    /// Called once per frame, between the renderer's `start_draw` and `finish_draw`.
    #[allow(unused_variables)]
    fn draw(&mut self, ctx: &mut AppCtx, time: &FrameTime) {}

    /// New touches went down. `event` holds only the new touches; the full set is
    /// available from [`AppCtx::active_touches`].
    #[allow(unused_variables)]
    fn touches_began(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {}

    /// Active touches moved.
    #[allow(unused_variables)]
    fn touches_moved(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {}

    /// Touches lifted (or were cancelled). They are already gone from
    /// [`AppCtx::active_touches`].
    #[allow(unused_variables)]
    fn touches_ended(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {}

    #[allow(unused_variables)]
    fn focus_changed(&mut self, ctx: &mut AppCtx, focused: bool) {}

    /// Called once during teardown if `setup()` ran, while the window still exists.
    #[allow(unused_variables)]
    fn shutdown(&mut self, ctx: &mut AppCtx) {}
}
