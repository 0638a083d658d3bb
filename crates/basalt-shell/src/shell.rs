//! The lifecycle controller.
//!
//! A [`Shell`] owns the app, its negotiated settings, the platform window and the
//! touch relay. Platform backends drive it:
//!
//! 1. [`Shell::launch`] installs the instance (`Negotiating`).
//! 2. [`Shell::start`] negotiates settings and attaches the window (`Running`).
//! 3. The native pump feeds [`Shell::handle_event`] and calls [`Shell::tick`]
//!    until [`Shell::should_terminate`] returns true.
//! 4. [`Shell::teardown`] releases everything (`Terminated`).
//!
//! Everything runs on the event-loop thread; the shell is neither `Send` nor `Sync`.

use std::rc::Rc;
use std::time::Instant;

use basalt_core::profiling::profile_function;

use crate::app::App;
use crate::capability::Capabilities;
use crate::context::{AppCtx, ShellState};
use crate::display::Display;
use crate::error::ShellResult;
use crate::event::PlatformEvent;
use crate::instance::{self, AppInstance};
use crate::lifecycle::{Lifecycle, LifecycleState};
use crate::renderer::Renderer;
use crate::settings::Settings;
use crate::time::{FramePacer, FrameTime};
use crate::touch::{ActiveTouches, RawTouch, TouchDispatch, TouchHook, TouchRelay};
use crate::window::PlatformWindow;

static_assertions::assert_not_impl_any!(Shell: Send, Sync);

/// Outcome of settings negotiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Negotiation {
    /// Create the window from the negotiated settings.
    Proceed,
    /// The app set `should_quit`; skip window creation.
    Abort,
}

pub struct Shell {
    app: Box<dyn App>,
    state: ShellState,
    setup_done: bool,
}

impl Shell {
    /// Installs the app instance and enters `Negotiating`.
    pub fn launch(
        app: Box<dyn App>,
        renderer: Box<dyn Renderer>,
        title: &str,
        args: Vec<String>,
    ) -> ShellResult<Self> {
        let instance = instance::install(title, args)?;

        let mut lifecycle = Lifecycle::new();
        lifecycle.advance(LifecycleState::Negotiating)?;

        let mut settings = Settings::default();
        settings.set_title(title);

        Ok(Self {
            app,
            state: ShellState {
                instance,
                lifecycle,
                pacer: FramePacer::new(settings.frame_rate()),
                settings,
                window: None,
                renderer,
                relay: TouchRelay::new(),
                mouse_pos: Default::default(),
                pending_resize: None,
            },
            setup_done: false,
        })
    }

    pub fn instance(&self) -> &Rc<AppInstance> {
        &self.state.instance
    }

    pub fn state(&self) -> LifecycleState {
        self.state.lifecycle.state()
    }

    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    pub fn window(&self) -> Option<&dyn PlatformWindow> {
        self.state.window.as_deref()
    }

    pub fn active_touches(&self) -> &ActiveTouches {
        self.state.relay.active()
    }

    /// Checked by pumps before every iteration.
    pub fn should_terminate(&self) -> bool {
        self.state.lifecycle.should_terminate()
    }

    /// When the pump should tick next. `None` means as soon as possible.
    pub fn next_frame_at(&self) -> Option<Instant> {
        self.state.pacer.next_frame_at()
    }

    /// Gives the app its single chance to edit the settings.
    ///
    /// `display` is the primary display, resolved by the platform.
    pub fn negotiate(&mut self, display: Display) -> Negotiation {
        let mut settings = Settings::new(display);
        settings.set_title(self.state.instance.title());

        self.app.prepare_settings(&mut settings);

        tracing::debug!(
            "negotiated settings: {}x{}, full_screen={}, frame_rate={}",
            settings.window_width(),
            settings.window_height(),
            settings.is_full_screen(),
            settings.frame_rate()
        );

        self.state.pacer = FramePacer::new(settings.frame_rate());
        let should_quit = settings.should_quit();
        self.state.settings = settings;

        if should_quit {
            tracing::info!("startup aborted during settings negotiation");
            Negotiation::Abort
        } else {
            Negotiation::Proceed
        }
    }

    /// Takes ownership of the platform window and enters `Running`.
    pub fn attach_window(&mut self, mut window: Box<dyn PlatformWindow>) -> ShellResult<()> {
        self.state.lifecycle.advance(LifecycleState::Running)?;

        let settings = &self.state.settings;
        if settings.is_full_screen() && !window.is_full_screen() {
            window.set_full_screen(true, &settings.full_screen_options());
        }
        if settings.is_multi_touch_enabled() && !window.supports(Capabilities::MULTI_TOUCH) {
            tracing::info!("multi-touch requested but not supported here; touches will be ignored");
        }

        tracing::info!(
            "window ready: {}x{} at ({}, {})",
            window.size().width,
            window.size().height,
            window.pos().x,
            window.pos().y
        );

        self.state.renderer.setup(window.as_ref());
        self.state.window = Some(window);
        self.setup_done = true;

        self.app.setup(&mut AppCtx::new(&mut self.state));
        self.observe_close_request();
        Ok(())
    }

    /// Negotiates settings and, unless the app aborted, builds the window with
    /// `create_window` and attaches it.
    ///
    /// Returns `Ok(false)` when startup was aborted. A window creation error is
    /// returned unchanged and is fatal to the launch.
    pub fn start<F>(&mut self, display: Display, create_window: F) -> ShellResult<bool>
    where
        F: FnOnce(&Settings) -> ShellResult<Box<dyn PlatformWindow>>,
    {
        if self.negotiate(display) == Negotiation::Abort {
            return Ok(false);
        }

        let window = create_window(&self.state.settings)?;
        self.attach_window(window)?;
        Ok(true)
    }

    /// Applies one native notification.
    ///
    /// All state changes and hook calls for the event happen before this returns.
    /// Resizes are the exception: they are held until the next [`tick`](Self::tick).
    pub fn handle_event(&mut self, event: PlatformEvent) {
        if !self.state.lifecycle.state().is_running() {
            tracing::trace!("dropping {:?} in state {}", event, self.state());
            return;
        }

        match event {
            PlatformEvent::Touches(batch) => self.relay_touches(&batch),
            PlatformEvent::Resized(size) => {
                self.state.pending_resize = Some(size);
            }
            PlatformEvent::Moved(pos) => {
                if let Some(window) = self.state.window.as_mut() {
                    window.apply_native_move(pos);
                }
            }
            PlatformEvent::CursorMoved(pos) => {
                self.state.mouse_pos = pos;
            }
            PlatformEvent::Focused(focused) => {
                // Touches still down when focus goes away never get their end
                // notification.
                if !focused && let Some(dispatch) = self.state.relay.cancel_all() {
                    tracing::debug!("focus lost, ending {} touches", dispatch.event.len());
                    self.dispatch_touches(dispatch);
                }
                self.app.focus_changed(&mut AppCtx::new(&mut self.state), focused);
            }
            PlatformEvent::CloseRequested => {
                tracing::info!("close requested by the platform");
                self.state.lifecycle.request_quit();
            }
        }

        self.observe_close_request();
    }

    fn relay_touches(&mut self, batch: &[RawTouch]) {
        profile_function!();

        if !self.touch_enabled() {
            tracing::trace!("multi-touch disabled, dropping {} touches", batch.len());
            return;
        }

        // Each segment's hooks see the set as of the end of that segment, so an
        // identifier that ends and begins again is absent while its end runs.
        for segment in self.state.relay.process(batch) {
            self.state.relay.publish(segment.active);
            for dispatch in segment.dispatches {
                self.dispatch_touches(dispatch);
            }
        }
    }

    fn dispatch_touches(&mut self, dispatch: TouchDispatch) {
        let mut ctx = AppCtx::new(&mut self.state);
        match dispatch.hook {
            TouchHook::Began => self.app.touches_began(&mut ctx, &dispatch.event),
            TouchHook::Moved => self.app.touches_moved(&mut ctx, &dispatch.event),
            TouchHook::Ended => self.app.touches_ended(&mut ctx, &dispatch.event),
        }
    }

    fn touch_enabled(&self) -> bool {
        self.state.settings.is_multi_touch_enabled()
            && self
                .state
                .window
                .as_ref()
                .is_some_and(|window| window.supports(Capabilities::MULTI_TOUCH))
    }

    /// Runs one frame if one is due at `now`.
    ///
    /// A pending resize is applied first, whether or not a frame is due, so the
    /// next `update` always sees the latest size.
    pub fn tick(&mut self, now: Instant) -> Option<FrameTime> {
        if !self.state.lifecycle.state().is_running() {
            return None;
        }

        profile_function!();
        self.apply_pending_resize();

        if !self.state.pacer.is_due(now) {
            return None;
        }

        let time = self.state.pacer.tick(now);
        basalt_core::profiling::new_frame();

        self.app.update(&mut AppCtx::new(&mut self.state), &time);

        self.state.renderer.start_draw();
        self.app.draw(&mut AppCtx::new(&mut self.state), &time);
        self.state.renderer.finish_draw();

        self.observe_close_request();
        Some(time)
    }

    fn apply_pending_resize(&mut self) {
        let Some(size) = self.state.pending_resize.take() else {
            return;
        };
        let Some(window) = self.state.window.as_mut() else {
            return;
        };

        window.apply_native_resize(size);
        tracing::debug!("window resized to {}x{}", size.width, size.height);
        self.state.renderer.resize(window.size());
    }

    /// The native side asked to close (or disappeared).
    pub fn request_close(&mut self) {
        self.state.lifecycle.request_quit();
    }

    /// Turns a [`PlatformWindow::close`] call made during a hook into a quit.
    fn observe_close_request(&mut self) {
        let close_requested = self
            .state
            .window
            .as_ref()
            .is_some_and(|window| window.is_close_requested());
        if close_requested && self.state.lifecycle.request_quit() {
            tracing::info!("window closed");
        }
    }

    /// Releases the window and renderer and removes the instance.
    ///
    /// Safe to call in any state and more than once. Works whether or not a
    /// window was ever attached.
    pub fn teardown(&mut self) {
        if self.state() == LifecycleState::Terminated {
            return;
        }

        self.state.lifecycle.request_quit();

        if self.setup_done {
            self.app.shutdown(&mut AppCtx::new(&mut self.state));
            self.state.renderer.teardown();
        }

        if let Err(e) = self.state.lifecycle.advance(LifecycleState::Terminated) {
            tracing::error!("teardown: {}", e);
        }

        match self.state.window.take() {
            Some(window) => {
                tracing::debug!("releasing window");
                drop(window);
            }
            None => tracing::debug!("no window to release"),
        }

        instance::uninstall(&self.state.instance);
        tracing::info!("{} terminated", self.state.instance.title());
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.teardown();
    }
}
