use basalt_shell::{App, AppCtx, FrameTime, Settings, TouchEvent};

use crate::log::{Call, CallLog};

type SettingsFn = Box<dyn FnMut(&mut Settings)>;
type CtxFn = Box<dyn FnMut(&mut AppCtx)>;
type FrameFn = Box<dyn FnMut(&mut AppCtx, &FrameTime)>;
type TouchFn = Box<dyn FnMut(&mut AppCtx, &TouchEvent)>;

/// An [`App`] that records every hook call and optionally runs a closure in it.
///
/// Closures run after the call is recorded.
///
/// # Example
///
/// ```rust
/// use basalt_test_utils::RecordingApp;
///
/// let app = RecordingApp::new()
///     .with_settings(|settings| settings.enable_multi_touch(true))
///     .quit_after_frames(3);
/// let log = app.log();
/// assert!(log.calls().is_empty());
/// ```
#[derive(Default)]
pub struct RecordingApp {
    log: CallLog,
    on_settings: Option<SettingsFn>,
    on_setup: Option<CtxFn>,
    on_update: Option<FrameFn>,
    on_touches_began: Option<TouchFn>,
    on_touches_ended: Option<TouchFn>,
    quit_after: Option<u64>,
}

impl RecordingApp {
    pub fn new() -> Self {
        Self::default()
    }

    /// A handle to the log this app records into.
    pub fn log(&self) -> CallLog {
        self.log.clone()
    }

    pub fn with_settings(mut self, f: impl FnMut(&mut Settings) + 'static) -> Self {
        self.on_settings = Some(Box::new(f));
        self
    }

    pub fn with_setup(mut self, f: impl FnMut(&mut AppCtx) + 'static) -> Self {
        self.on_setup = Some(Box::new(f));
        self
    }

    pub fn with_update(mut self, f: impl FnMut(&mut AppCtx, &FrameTime) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn with_touches_began(mut self, f: impl FnMut(&mut AppCtx, &TouchEvent) + 'static) -> Self {
        self.on_touches_began = Some(Box::new(f));
        self
    }

    pub fn with_touches_ended(mut self, f: impl FnMut(&mut AppCtx, &TouchEvent) + 'static) -> Self {
        self.on_touches_ended = Some(Box::new(f));
        self
    }

    /// Calls [`AppCtx::quit`] from `update` once `frames` frames have run.
    pub fn quit_after_frames(mut self, frames: u64) -> Self {
        self.quit_after = Some(frames);
        self
    }
}

fn ids(event: &TouchEvent) -> Vec<u64> {
    event.iter().map(|touch| touch.id()).collect()
}

fn active(ctx: &AppCtx) -> Vec<u64> {
    let mut ids: Vec<u64> = ctx.active_touches().ids().collect();
    ids.sort_unstable();
    ids
}

impl App for RecordingApp {
    fn prepare_settings(&mut self, settings: &mut Settings) {
        self.log.push(Call::PrepareSettings);
        if let Some(f) = self.on_settings.as_mut() {
            f(settings);
        }
    }

    fn setup(&mut self, ctx: &mut AppCtx) {
        self.log.push(Call::Setup {
            size: ctx.window_size(),
            full_screen: ctx.is_full_screen(),
        });
        if let Some(f) = self.on_setup.as_mut() {
            f(ctx);
        }
    }

    fn update(&mut self, ctx: &mut AppCtx, time: &FrameTime) {
        self.log.push(Call::Update {
            frame: time.frame_count,
        });
        if let Some(f) = self.on_update.as_mut() {
            f(ctx, time);
        }
        if self.quit_after.is_some_and(|frames| time.frame_count >= frames) {
            ctx.quit();
        }
    }

    fn draw(&mut self, _ctx: &mut AppCtx, time: &FrameTime) {
        self.log.push(Call::Draw {
            frame: time.frame_count,
        });
    }

    fn touches_began(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {
        self.log.push(Call::TouchesBegan {
            ids: ids(event),
            active: active(ctx),
        });
        if let Some(f) = self.on_touches_began.as_mut() {
            f(ctx, event);
        }
    }

    fn touches_moved(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {
        self.log.push(Call::TouchesMoved {
            ids: ids(event),
            active: active(ctx),
        });
    }

    fn touches_ended(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {
        self.log.push(Call::TouchesEnded {
            ids: ids(event),
            active: active(ctx),
        });
        if let Some(f) = self.on_touches_ended.as_mut() {
            f(ctx, event);
        }
    }

    fn focus_changed(&mut self, _ctx: &mut AppCtx, focused: bool) {
        self.log.push(Call::FocusChanged(focused));
    }

    fn shutdown(&mut self, ctx: &mut AppCtx) {
        self.log.push(Call::Shutdown {
            state: ctx.lifecycle(),
        });
    }
}
