//! Construction of the shell's long-lived collaborators

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use std::path::Path;
use std::sync::Arc;

use kbd_home::{
    execute_command, EnglishStrings, HomeCommand, HomeConfig, HomeScreenModel, UrlLauncher,
};
use kbd_prefs::{JsonFileBackend, PlatformStatusSource, PreferenceStore, StatusProbe};
use kbd_widgets::Navigator;

use crate::cli::Args;
use crate::platform::{DesktopImeStatus, OverriddenStatus};

/// Open the JSON preference store at `path`, or at the default location
pub fn open_store(path: Option<&Path>) -> anyhow::Result<PreferenceStore> {
    let backend = match path {
        Some(path) => JsonFileBackend::new(path),
        None => JsonFileBackend::at_default_path()
            .context("Failed to locate the default preferences file")?,
    };
    log::info!("Preferences file: {}", backend.path().display());
    Ok(PreferenceStore::open(backend))
}

/// Status source for `args`: the desktop's IBus state, with CLI overrides
pub fn status_source(args: &Args) -> Arc<dyn PlatformStatusSource> {
    let desktop: Arc<dyn PlatformStatusSource> = Arc::new(DesktopImeStatus::new(&args.ime));
    if args.has_status_override() {
        log::info!(
            "Keyboard status overridden (enabled: {:?}, selected: {:?})",
            args.assume_enabled,
            args.assume_selected
        );
        Arc::new(OverriddenStatus::new(
            desktop,
            args.assume_enabled,
            args.assume_selected,
        ))
    } else {
        desktop
    }
}

/// Shared state behind the shell's pages
pub struct Services {
    pub store: Arc<PreferenceStore>,
    pub probe: Arc<StatusProbe>,
    pub status: Arc<dyn PlatformStatusSource>,
}

impl Services {
    pub fn new(store: PreferenceStore, status: Arc<dyn PlatformStatusSource>) -> Self {
        Self {
            store: Arc::new(store),
            probe: Arc::new(StatusProbe::new(Arc::clone(&status))),
            status,
        }
    }

    /// Services for a CLI invocation
    ///
    /// When the preferences file cannot be located the session runs on an
    /// in-memory store and nothing is persisted.
    pub fn from_args(args: &Args) -> Self {
        let store = match open_store(args.prefs.as_deref()) {
            Ok(store) => store,
            Err(e) => {
                log::warn!("{:#}; preferences will not be saved", e);
                PreferenceStore::in_memory()
            }
        };
        Self::new(store, status_source(args))
    }

    /// Home screen model sending its commands to `sink`
    pub fn home_model(&self, sink: Sender<HomeCommand>) -> HomeScreenModel {
        HomeScreenModel::new(
            Arc::clone(&self.store),
            Arc::clone(&self.probe),
            Arc::new(EnglishStrings),
            Box::new(sink),
            HomeConfig::default(),
        )
    }
}

/// Execute every queued command, returning how many ran
pub fn drain_commands(
    commands: &Receiver<HomeCommand>,
    navigator: &mut dyn Navigator,
    launcher: &dyn UrlLauncher,
    platform: &dyn PlatformStatusSource,
) -> usize {
    let mut count = 0;
    for command in commands.try_iter() {
        execute_command(command, navigator, launcher, platform);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use kbd_home::command_channel;
    use kbd_prefs::keys::internal::HOME_IS_BETA_TOOLBOX_COLLAPSED;
    use kbd_prefs::FixedStatus;
    use kbd_widgets::{PageRouter, Route};
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingLauncher {
        urls: RefCell<Vec<String>>,
    }

    impl UrlLauncher for RecordingLauncher {
        fn launch(&self, url: &str) {
            self.urls.borrow_mut().push(url.to_string());
        }
    }

    #[test]
    fn test_store_persists_across_sessions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("prefs.json");

        let store = open_store(Some(path.as_path())).expect("open store");
        assert!(!store.get(&HOME_IS_BETA_TOOLBOX_COLLAPSED));
        store
            .set(&HOME_IS_BETA_TOOLBOX_COLLAPSED, true)
            .expect("write flag");

        let reopened = open_store(Some(path.as_path())).expect("reopen store");
        assert!(reopened.get(&HOME_IS_BETA_TOOLBOX_COLLAPSED));
    }

    #[test]
    fn test_status_source_applies_overrides() {
        let args = Args {
            ime: "kbd-test-engine-that-is-not-installed".to_string(),
            assume_enabled: Some(true),
            assume_selected: Some(true),
            ..Args::default()
        };
        let status = status_source(&args);
        assert!(status.is_enabled());
        assert!(status.is_selected());
    }

    #[test]
    fn test_menu_click_reaches_router() {
        let status = Arc::new(FixedStatus::new(true, true));
        let services = Services::new(PreferenceStore::in_memory(), status.clone());
        let (tx, rx) = command_channel();
        let model = services.home_model(tx);

        let mut router = PageRouter::new();
        let launcher = RecordingLauncher::default();

        model.render();
        assert_eq!(drain_commands(&rx, &mut router, &launcher, status.as_ref()), 0);

        model.activate_menu_entry(1);
        assert_eq!(drain_commands(&rx, &mut router, &launcher, status.as_ref()), 1);
        assert_eq!(router.current(), Route::Theme);
    }

    #[test]
    fn test_banner_and_link_reach_collaborators() {
        let status = Arc::new(FixedStatus::new(false, false));
        let services = Services::new(PreferenceStore::in_memory(), status.clone());
        let (tx, rx) = command_channel();
        let model = services.home_model(tx);

        let mut router = PageRouter::new();
        let launcher = RecordingLauncher::default();

        model.activate_banner();
        model.open_feedback_thread();
        assert_eq!(drain_commands(&rx, &mut router, &launcher, status.as_ref()), 2);

        assert_eq!(status.enabler_requests(), 1);
        assert_eq!(launcher.urls.borrow().len(), 1);
        assert!(router.is_home());
    }
}
