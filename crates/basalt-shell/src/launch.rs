//! The three launch phases called by an entry point.
//!
//! ```no_run
//! # use basalt_shell::prelude::*;
//! # use basalt_shell::platform::{HeadlessPlatform, ScriptedSource};
//! # struct MyApp;
//! # impl App for MyApp {}
//! prepare_launch(&LaunchConfig::default());
//! let result = execute_launch(
//!     HeadlessPlatform::new(ScriptedSource::new()),
//!     MyApp,
//!     NullRenderer,
//!     "My App",
//!     std::env::args(),
//! );
//! cleanup_launch();
//! ```

use basalt_core::config::LaunchConfig;
use basalt_core::{logging, profiling};

use crate::app::App;
use crate::error::ShellResult;
use crate::platform::Platform;
use crate::renderer::Renderer;
use crate::shell::Shell;

/// Installs logging and profiling. Safe to call more than once.
pub fn prepare_launch(config: &LaunchConfig) {
    logging::init(&config.log_filter);
    profiling::init_profiling(config.profiling);
    tracing::debug!("launch prepared");
}

/// Runs `app` on `platform` until it quits.
///
/// Blocks for the lifetime of the app. The shell is torn down before this returns,
/// on success and on error alike.
pub fn execute_launch<P, A, R>(
    platform: P,
    app: A,
    renderer: R,
    title: &str,
    args: impl IntoIterator<Item = String>,
) -> ShellResult<()>
where
    P: Platform,
    A: App + 'static,
    R: Renderer + 'static,
{
    tracing::info!("launching {} on the {} platform", title, platform.name());

    let mut shell = Shell::launch(
        Box::new(app),
        Box::new(renderer),
        title,
        args.into_iter().collect(),
    )?;

    let result = platform.run(&mut shell);
    if let Err(e) = &result {
        tracing::error!("{} failed: {}", title, e);
    }

    shell.teardown();
    result
}

/// Flushes anything the launch left behind.
pub fn cleanup_launch() {
    profiling::new_frame();
    tracing::debug!("launch cleaned up");
}
