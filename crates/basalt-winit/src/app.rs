use std::time::Instant;

use basalt_core::config::LaunchConfig;
use basalt_shell::{
    App, Capabilities, EventQueue, LifecycleState, Platform, PlatformWindow, Renderer, Shell,
    ShellError, ShellResult, cleanup_launch, execute_launch, prepare_launch,
};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::WindowId;

use crate::display::primary_display;
use crate::event::from_winit;
use crate::window::{CAPABILITIES, WinitWindow};

/// Bridges winit's callbacks to the shell.
///
/// Window events are queued as they arrive and handed to the shell as one batch
/// in `about_to_wait`, followed by the frame tick.
struct ShellProxy<'a> {
    shell: &'a mut Shell,
    events: EventQueue,
    window_id: Option<WindowId>,
    error: Option<ShellError>,
}

impl<'a> ShellProxy<'a> {
    fn new(shell: &'a mut Shell) -> Self {
        Self {
            shell,
            events: EventQueue::new(),
            window_id: None,
            error: None,
        }
    }

    fn schedule_next_frame(&self, event_loop: &ActiveEventLoop) {
        match self.shell.next_frame_at() {
            Some(deadline) => event_loop.set_control_flow(ControlFlow::WaitUntil(deadline)),
            None => event_loop.set_control_flow(ControlFlow::Poll),
        }
    }
}

impl ApplicationHandler for ShellProxy<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Mobile platforms resume more than once; negotiation only happens on the first.
        if self.shell.state() != LifecycleState::Negotiating {
            return;
        }

        let display = primary_display(event_loop.primary_monitor(), event_loop.available_monitors());
        let mut window_id = None;
        let started = self.shell.start(display, |settings| {
            let window = WinitWindow::new(event_loop, settings)?;
            window_id = Some(window.id());
            Ok(Box::new(window) as Box<dyn PlatformWindow>)
        });

        match started {
            Ok(true) => {
                self.window_id = window_id;
                self.schedule_next_frame(event_loop);
            }
            Ok(false) => event_loop.exit(),
            Err(e) => {
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        if self.window_id != Some(window_id) {
            return;
        }

        if let Some(event) = from_winit(event) {
            self.events.push(event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.shell.state() == LifecycleState::Negotiating {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        for event in self.events.drain() {
            self.shell.handle_event(event);
        }

        if self.shell.tick(Instant::now()).is_some()
            && let Some(window) = self.shell.window()
        {
            window.request_redraw();
        }

        if self.shell.should_terminate() {
            event_loop.exit();
            return;
        }

        self.schedule_next_frame(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        let stats = self.events.stats();
        tracing::debug!(
            "event loop exiting: {} events received, {} delivered",
            stats.events_received,
            stats.events_emitted
        );
    }
}

/// The desktop platform.
///
/// The event loop is created up front because winit requires it on the main thread.
pub struct WinitPlatform {
    event_loop: EventLoop<()>,
}

impl WinitPlatform {
    pub fn new() -> ShellResult<Self> {
        let event_loop = EventLoop::new().map_err(|e| ShellError::event_loop(e.to_string()))?;
        Ok(Self { event_loop })
    }
}

impl Platform for WinitPlatform {
    fn name(&self) -> &'static str {
        "winit"
    }

    fn capabilities(&self) -> Capabilities {
        CAPABILITIES
    }

    fn run(self, shell: &mut Shell) -> ShellResult<()> {
        let mut proxy = ShellProxy::new(shell);
        self.event_loop
            .run_app(&mut proxy)
            .map_err(|e| ShellError::event_loop(e.to_string()))?;

        if let Some(e) = proxy.error.take() {
            return Err(e);
        }

        // The loop can also end without a close request, e.g. when the OS kills it.
        proxy.shell.request_close();
        Ok(())
    }
}

/// Runs `app` in a desktop window with the default [`LaunchConfig`].
///
/// Exits the process with status 1 if the launch fails.
pub fn run_app<A, R>(app: A, renderer: R, title: &str)
where
    A: App + 'static,
    R: Renderer + 'static,
{
    run_app_with_config(&LaunchConfig::default(), app, renderer, title);
}

pub fn run_app_with_config<A, R>(config: &LaunchConfig, app: A, renderer: R, title: &str)
where
    A: App + 'static,
    R: Renderer + 'static,
{
    prepare_launch(config);

    let result = WinitPlatform::new()
        .and_then(|platform| execute_launch(platform, app, renderer, title, std::env::args()));

    cleanup_launch();

    if let Err(e) = result {
        tracing::error!("{} could not run: {}", title, e);
        std::process::exit(1);
    }
}
