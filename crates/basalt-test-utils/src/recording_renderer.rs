use basalt_shell::{PlatformWindow, Renderer, Size};

use crate::log::{Call, CallLog};

/// A [`Renderer`] that records what the shell asked of it.
pub struct RecordingRenderer {
    log: CallLog,
}

impl RecordingRenderer {
    /// Records into `log`, usually the log of the app under test so the two
    /// sequences interleave.
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Renderer for RecordingRenderer {
    fn setup(&mut self, window: &dyn PlatformWindow) {
        self.log.push(Call::RendererSetup {
            size: window.size(),
        });
    }

    fn resize(&mut self, size: Size<u32>) {
        self.log.push(Call::RendererResize { size });
    }

    fn start_draw(&mut self) {
        self.log.push(Call::StartDraw);
    }

    fn finish_draw(&mut self) {
        self.log.push(Call::FinishDraw);
    }

    fn teardown(&mut self) {
        self.log.push(Call::RendererTeardown);
    }
}
