/// Process-wide configuration consumed by the launch protocol.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Default `tracing` filter. `RUST_LOG` takes precedence when set.
    pub log_filter: String,
    pub profiling: ProfilingMode,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        LaunchConfig {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            profiling: ProfilingMode::Off,
        }
    }
}

impl LaunchConfig {
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }
}

pub const DEFAULT_LOG_FILTER: &str = "info,basalt_shell=debug,basalt_winit=debug,winit=info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but disabled
    #[default]
    Off,
    /// Scopes are recorded and can be inspected in-process
    On,
    /// Scopes are recorded and served to external tools such as 'puffin_viewer'
    WithServer,
}
