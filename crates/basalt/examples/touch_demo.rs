//! Touch Demo - follows fingers and toggles full-screen.
//!
//! Demonstrates:
//! - Negotiating settings before the window exists
//! - Multi-touch hooks and the active touch set
//! - Capability queries and full-screen switching
//!
//! Tap with three fingers to toggle full-screen. Lift all fingers after a
//! five-finger touch to quit.

use basalt::prelude::*;

#[derive(Default)]
struct TouchDemo {
    max_fingers: usize,
    frames: u64,
}

impl App for TouchDemo {
    fn prepare_settings(&mut self, settings: &mut Settings) {
        settings.set_window_size(1024, 768);
        settings.set_full_screen_size(1920, 1080);
        settings.enable_multi_touch(true);
        settings.set_frame_rate(30.0);
    }

    fn setup(&mut self, ctx: &mut AppCtx) {
        tracing::info!(
            "window {}x{} on {:?}, app at {}",
            ctx.window_width(),
            ctx.window_height(),
            ctx.display().name(),
            ctx.app_path().display()
        );

        if !ctx.supports(Capabilities::MULTI_TOUCH) {
            tracing::warn!("this platform does not deliver touches; the demo will idle");
        }
    }

    fn update(&mut self, _ctx: &mut AppCtx, time: &FrameTime) {
        self.frames = time.frame_count;
        if time.frame_count % 300 == 0 {
            tracing::info!("{} frames in {:.1}s", time.frame_count, time.elapsed_seconds());
        }
    }

    fn touches_began(&mut self, ctx: &mut AppCtx, event: &TouchEvent) {
        let active = ctx.active_touches().len();
        self.max_fingers = self.max_fingers.max(active);

        for touch in event.iter() {
            tracing::info!("touch {} down at {:?}", touch.id(), touch.pos());
        }

        if active == 3 {
            let full_screen = !ctx.is_full_screen();
            ctx.set_full_screen(full_screen);
        }
    }

    fn touches_moved(&mut self, _ctx: &mut AppCtx, event: &TouchEvent) {
        for touch in event.iter() {
            tracing::trace!(
                "touch {} moved by {:?}",
                touch.id(),
                touch.pos() - touch.start_pos()
            );
        }
    }

    fn touches_ended(&mut self, ctx: &mut AppCtx, _event: &TouchEvent) {
        if ctx.active_touches().is_empty() && self.max_fingers >= 5 {
            ctx.quit();
        }
    }

    fn shutdown(&mut self, _ctx: &mut AppCtx) {
        tracing::info!("ran {} frames", self.frames);
    }
}

fn main() {
    if let Err(e) = Application::new("Touch Demo").run(TouchDemo::default()) {
        eprintln!("touch demo failed: {}", e);
        std::process::exit(1);
    }
}
