//! The read-only app instance and its accessor.
//!
//! The launch protocol installs one [`AppInstance`] when negotiation starts and
//! removes it at the end of teardown. At most one instance exists per event-loop
//! thread; a second launch while one is installed fails with
//! [`ShellError::AlreadyLaunched`].
//!
//! Mutable app state is not reachable from here. It is passed explicitly to every
//! hook as [`AppCtx`](crate::AppCtx).

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{ShellError, ShellResult};

static NEXT_INSTANCE_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static CURRENT: RefCell<Option<Rc<AppInstance>>> = const { RefCell::new(None) };
}

/// Identity and launch parameters of the running app.
#[derive(Debug)]
pub struct AppInstance {
    id: u64,
    title: String,
    args: Vec<String>,
    app_path: PathBuf,
}

impl AppInstance {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The title passed to the launch protocol.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Directory containing the application executable. Empty if the platform
    /// cannot report it.
    pub fn app_path(&self) -> &Path {
        &self.app_path
    }
}

/// Returns the installed instance, or `None` outside a launch.
pub fn current() -> Option<Rc<AppInstance>> {
    CURRENT.with(|current| current.borrow().clone())
}

pub(crate) fn install(title: &str, args: Vec<String>) -> ShellResult<Rc<AppInstance>> {
    CURRENT.with(|current| {
        let mut current = current.borrow_mut();
        if current.is_some() {
            return Err(ShellError::AlreadyLaunched);
        }

        let instance = Rc::new(AppInstance {
            id: NEXT_INSTANCE_ID.fetch_add(1, Ordering::Relaxed),
            title: title.to_string(),
            args,
            app_path: resolve_app_path(),
        });
        tracing::debug!("installed app instance {} ({})", instance.id, instance.title);

        *current = Some(instance.clone());
        Ok(instance)
    })
}

/// Removes `instance` if it is the installed one.
pub(crate) fn uninstall(instance: &Rc<AppInstance>) {
    CURRENT.with(|current| {
        let mut current = current.borrow_mut();
        if current.as_ref().is_some_and(|installed| Rc::ptr_eq(installed, instance)) {
            tracing::debug!("removed app instance {}", instance.id);
            *current = None;
        }
    });
}

fn resolve_app_path() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => exe.parent().map(Path::to_path_buf).unwrap_or_default(),
        Err(e) => {
            tracing::warn!("could not resolve the application path: {}", e);
            PathBuf::new()
        }
    }
}
