//! High-level entry point that runs the three launch phases in order.

use basalt_core::config::{LaunchConfig, ProfilingMode};
use basalt_shell::{
    App, NullRenderer, Platform, Renderer, ShellResult, cleanup_launch, execute_launch,
    prepare_launch,
};

use crate::platform::default_platform;

/// Builder for launching an [`App`].
///
/// # Example
///
/// ```no_run
/// use basalt::prelude::*;
///
/// struct MyApp;
/// impl App for MyApp {}
///
/// Application::new("My App")
///     .with_log_filter("debug")
///     .run(MyApp)
///     .unwrap();
/// ```
pub struct Application {
    title: String,
    config: LaunchConfig,
    args: Option<Vec<String>>,
}

impl Application {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            config: LaunchConfig::default(),
            args: None,
        }
    }

    pub fn with_config(mut self, config: LaunchConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.config = self.config.with_log_filter(filter);
        self
    }

    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.config = self.config.with_profiling(profiling);
        self
    }

    /// Overrides the command-line arguments recorded on the instance. By default
    /// the process arguments are used.
    pub fn with_args(mut self, args: impl IntoIterator<Item = String>) -> Self {
        self.args = Some(args.into_iter().collect());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Runs `app` on the default platform without a renderer.
    pub fn run<A: App + 'static>(self, app: A) -> ShellResult<()> {
        self.run_with_renderer(app, NullRenderer)
    }

    /// Runs `app` on the default platform.
    pub fn run_with_renderer<A, R>(self, app: A, renderer: R) -> ShellResult<()>
    where
        A: App + 'static,
        R: Renderer + 'static,
    {
        prepare_launch(&self.config);
        let result =
            default_platform().and_then(|platform| self.execute(platform, app, renderer));
        cleanup_launch();
        result
    }

    /// Runs `app` on an explicit platform.
    pub fn run_on<P, A, R>(self, platform: P, app: A, renderer: R) -> ShellResult<()>
    where
        P: Platform,
        A: App + 'static,
        R: Renderer + 'static,
    {
        prepare_launch(&self.config);
        let result = self.execute(platform, app, renderer);
        cleanup_launch();
        result
    }

    fn execute<P, A, R>(self, platform: P, app: A, renderer: R) -> ShellResult<()>
    where
        P: Platform,
        A: App + 'static,
        R: Renderer + 'static,
    {
        let args = self.args.unwrap_or_else(|| std::env::args().collect());
        tracing::debug!("{} starting with {} arguments", self.title, args.len());
        execute_launch(platform, app, renderer, &self.title, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basalt_shell::platform::{HeadlessPlatform, ScriptedSource};
    use basalt_test_utils::{Call, RecordingApp};

    #[test]
    fn test_run_on_headless() {
        let app = RecordingApp::new().with_settings(|settings| settings.set_frame_rate(0.0));
        let log = app.log();

        Application::new("Facade")
            .with_args(vec!["demo".to_string()])
            .run_on(
                HeadlessPlatform::new(ScriptedSource::new().idle_frames(2)),
                app,
                NullRenderer,
            )
            .unwrap();

        assert_eq!(log.count(|call| matches!(call, Call::Draw { .. })), 2);
        assert!(basalt_shell::current().is_none());
    }

    #[test]
    fn test_builder_keeps_config() {
        let app = Application::new("Configured")
            .with_log_filter("warn")
            .with_profiling(ProfilingMode::On);
        assert_eq!(app.title(), "Configured");
        assert_eq!(app.config.log_filter, "warn");
        assert_eq!(app.config.profiling, ProfilingMode::On);
    }
}
