//! Desktop collaborators: input method status and URL launching
//!
//! Spawned helpers are detached and reaped in the background. A helper that
//! cannot be started is logged and otherwise ignored.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use kbd_home::UrlLauncher;
use kbd_prefs::PlatformStatusSource;

/// A helper process that was started
struct Launched {
    /// Thread waiting on the child; `None` if that thread failed to start
    #[cfg_attr(not(test), allow(dead_code))]
    reaper: Option<JoinHandle<()>>,
}

/// Start `program` without waiting for it
///
/// The child is reaped on a background thread. `None` means the process
/// could not be spawned.
fn spawn_detached(program: &str, args: &[&str]) -> Option<Launched> {
    let mut child = match Command::new(program).args(args).spawn() {
        Ok(child) => child,
        Err(e) => {
            log::warn!("Failed to launch {}: {}", program, e);
            return None;
        }
    };
    log::info!("Launched {} (pid {})", program, child.id());

    let name = program.to_string();
    let reaper = thread::Builder::new()
        .name(format!("reap-{}", program))
        .spawn(move || match child.wait() {
            Ok(status) => log::debug!("{} exited with {}", name, status),
            Err(e) => log::warn!("Failed to wait for {}: {}", name, e),
        });
    let reaper = match reaper {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Failed to start reaper for {}: {}", program, e);
            None
        }
    };
    Some(Launched { reaper })
}

/// Input method environment variables of the running session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImeEnv {
    pub xmodifiers: Option<String>,
    pub gtk_im_module: Option<String>,
    pub qt_im_module: Option<String>,
}

impl ImeEnv {
    pub fn from_process() -> Self {
        Self {
            xmodifiers: std::env::var("XMODIFIERS").ok(),
            gtk_im_module: std::env::var("GTK_IM_MODULE").ok(),
            qt_im_module: std::env::var("QT_IM_MODULE").ok(),
        }
    }

    /// Whether the session routes input through `engine`
    pub fn names_engine(&self, engine: &str) -> bool {
        let xim = format!("@im={}", engine);
        self.xmodifiers
            .as_deref()
            .map_or(false, |v| v.split_whitespace().any(|part| part.eq_ignore_ascii_case(&xim)))
            || self
                .gtk_im_module
                .as_deref()
                .map_or(false, |v| v.eq_ignore_ascii_case(engine))
            || self
                .qt_im_module
                .as_deref()
                .map_or(false, |v| v.eq_ignore_ascii_case(engine))
    }
}

/// Keyboard status read from the desktop's IBus installation
///
/// Enabled means an IBus component file for the engine is installed.
/// Selected means the session's input method variables name the engine.
pub struct DesktopImeStatus {
    engine: String,
    component_dirs: Vec<PathBuf>,
}

impl DesktopImeStatus {
    pub fn new(engine: impl Into<String>) -> Self {
        let mut component_dirs = vec![PathBuf::from("/usr/share/ibus/component")];
        if let Some(data) = dirs::data_dir() {
            component_dirs.push(data.join("ibus").join("component"));
        }
        Self::with_component_dirs(engine, component_dirs)
    }

    pub fn with_component_dirs(engine: impl Into<String>, component_dirs: Vec<PathBuf>) -> Self {
        Self {
            engine: engine.into(),
            component_dirs,
        }
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    fn component_file(&self, dir: &Path) -> PathBuf {
        dir.join(format!("{}.xml", self.engine))
    }
}

impl PlatformStatusSource for DesktopImeStatus {
    fn is_enabled(&self) -> bool {
        self.component_dirs
            .iter()
            .any(|dir| self.component_file(dir).is_file())
    }

    fn is_selected(&self) -> bool {
        ImeEnv::from_process().names_engine(&self.engine)
    }

    fn open_enabler_ui(&self) {
        spawn_detached("ibus-setup", &[]);
    }

    fn open_picker_ui(&self) {
        if spawn_detached("im-config", &[]).is_none() {
            spawn_detached("ibus-setup", &[]);
        }
    }
}

/// Status source with answers forced from the command line
///
/// Unforced answers and all actions go to the wrapped source.
pub struct OverriddenStatus {
    inner: Arc<dyn PlatformStatusSource>,
    enabled: Option<bool>,
    selected: Option<bool>,
}

impl OverriddenStatus {
    pub fn new(
        inner: Arc<dyn PlatformStatusSource>,
        enabled: Option<bool>,
        selected: Option<bool>,
    ) -> Self {
        Self {
            inner,
            enabled,
            selected,
        }
    }
}

impl PlatformStatusSource for OverriddenStatus {
    fn is_enabled(&self) -> bool {
        self.enabled.unwrap_or_else(|| self.inner.is_enabled())
    }

    fn is_selected(&self) -> bool {
        self.selected.unwrap_or_else(|| self.inner.is_selected())
    }

    fn open_enabler_ui(&self) {
        self.inner.open_enabler_ui();
    }

    fn open_picker_ui(&self) {
        self.inner.open_picker_ui();
    }
}

/// Opens URLs with the platform's default handler
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemUrlLauncher;

impl UrlLauncher for SystemUrlLauncher {
    fn launch(&self, url: &str) {
        #[cfg(target_os = "macos")]
        spawn_detached("open", &[url]);

        #[cfg(target_os = "windows")]
        spawn_detached("cmd", &["/C", "start", "", url]);

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        spawn_detached("xdg-open", &[url]);
    }
}
