//! Home screen model: reactive inputs, render and interactions
//!
//! The model owns its subscriptions to the collapsed flag and the two
//! foreground-only status observations. Any change marks the model dirty;
//! the widget checks [`HomeScreenModel::take_dirty`] on its timer and
//! redraws from [`HomeScreenModel::render`].
//!
//! Navigating away from the screen suspends the model, releasing every
//! subscription; returning resumes it. [`HomeScreenModel::dispose`] is final.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use kbd_prefs::keys::internal::HOME_IS_BETA_TOOLBOX_COLLAPSED;
use kbd_prefs::{Observable, PreferenceStore, StatusProbe, SubscriptionSet};

use crate::banner::BannerState;
use crate::command::{CommandSink, HomeCommand};
use crate::composer::{compose, HomeState, HomeView};
use crate::data::{info_panel, MenuEntry, HOME_MENU};
use crate::strings::StringResolver;

/// Static configuration of a home screen
#[derive(Clone, Debug)]
pub struct HomeConfig {
    pub menu: Vec<MenuEntry>,
    /// Shown in the info panel's version line
    pub version: String,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            menu: HOME_MENU.to_vec(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Active,
    Suspended,
    Disposed,
}

pub struct HomeScreenModel {
    store: Arc<PreferenceStore>,
    strings: Arc<dyn StringResolver>,
    sink: Box<dyn CommandSink>,
    config: HomeConfig,
    collapsed: Observable<bool>,
    enabled: Observable<bool>,
    selected: Observable<bool>,
    subscriptions: SubscriptionSet,
    dirty: Arc<AtomicBool>,
    lifecycle: Lifecycle,
}

impl HomeScreenModel {
    pub fn new(
        store: Arc<PreferenceStore>,
        probe: Arc<StatusProbe>,
        strings: Arc<dyn StringResolver>,
        sink: Box<dyn CommandSink>,
        config: HomeConfig,
    ) -> Self {
        let collapsed = store.observe(&HOME_IS_BETA_TOOLBOX_COLLAPSED);
        let enabled = probe.observe_enabled(true);
        let selected = probe.observe_selected(true);

        let mut model = Self {
            store,
            strings,
            sink,
            config,
            collapsed,
            enabled,
            selected,
            subscriptions: SubscriptionSet::new(),
            // First render is always pending
            dirty: Arc::new(AtomicBool::new(true)),
            lifecycle: Lifecycle::Active,
        };
        model.subscribe_inputs();

        log::debug!(
            "Home screen model created ({} menu entries, {} subscriptions)",
            model.config.menu.len(),
            model.subscriptions.len()
        );
        model
    }

    fn subscribe_inputs(&mut self) {
        for observable in [&self.collapsed, &self.enabled, &self.selected] {
            let dirty = Arc::clone(&self.dirty);
            self.subscriptions.push(observable.subscribe(move |_| {
                dirty.store(true, Ordering::Release);
            }));
        }
    }

    /// Snapshot of the inputs
    pub fn state(&self) -> HomeState {
        HomeState {
            enabled: self.enabled.get(),
            selected: self.selected.get(),
            is_collapsed: self.collapsed.get(),
        }
    }

    pub fn banner(&self) -> BannerState {
        self.state().banner()
    }

    /// Compose the current view. Never dispatches commands.
    pub fn render(&self) -> HomeView {
        compose(
            &self.state(),
            self.strings.as_ref(),
            &self.config.menu,
            &self.config.version,
        )
    }

    /// Whether an input changed since the last call
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    /// Flip the collapsed flag
    ///
    /// A write the store rejects is logged and the panel keeps its state.
    pub fn toggle_info_panel(&self) {
        if !self.is_active() {
            return;
        }
        let next = !self.collapsed.get();
        match self.store.set(&HOME_IS_BETA_TOOLBOX_COLLAPSED, next) {
            Ok(()) => log::debug!("Info panel collapsed = {}", next),
            Err(e) => log::error!("Failed to persist info panel state: {}", e),
        }
    }

    /// Run the visible banner's action, if any
    pub fn activate_banner(&self) {
        if !self.is_active() {
            return;
        }
        if let Some(command) = self.banner().action() {
            self.sink.dispatch(command);
        }
    }

    /// Launch the feedback thread; ignored while the panel is collapsed
    pub fn open_feedback_thread(&self) {
        if !self.is_active() || self.collapsed.get() {
            return;
        }
        self.sink
            .dispatch(HomeCommand::LaunchUrl(info_panel::FEEDBACK_THREAD_URL.to_string()));
    }

    /// Navigate to the route of menu entry `index`
    pub fn activate_menu_entry(&self, index: usize) {
        if !self.is_active() {
            return;
        }
        match self.config.menu.get(index) {
            Some(entry) => self.sink.dispatch(HomeCommand::Navigate(entry.route)),
            None => log::warn!(
                "Menu index {} out of range ({} entries)",
                index,
                self.config.menu.len()
            ),
        }
    }

    /// Release every subscription while the screen is not shown
    pub fn suspend(&mut self) {
        if self.lifecycle != Lifecycle::Active {
            return;
        }
        self.subscriptions.clear();
        self.lifecycle = Lifecycle::Suspended;
        log::debug!("Home screen model suspended");
    }

    /// Subscribe again after [`HomeScreenModel::suspend`]
    ///
    /// Changes missed while suspended are picked up by the next render,
    /// which is marked pending.
    pub fn resume(&mut self) {
        if self.lifecycle != Lifecycle::Suspended {
            return;
        }
        self.subscribe_inputs();
        self.dirty.store(true, Ordering::Release);
        self.lifecycle = Lifecycle::Active;
        log::debug!("Home screen model resumed");
    }

    /// Release every subscription; the model stops reacting to changes
    /// and cannot be resumed
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.subscriptions.clear();
        self.lifecycle = Lifecycle::Disposed;
        log::debug!("Home screen model disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::Severity;
    use crate::command::RecordingSink;
    use crate::composer::ToggleIcon;
    use crate::data::MenuIcon;
    use crate::strings::EnglishStrings;
    use kbd_prefs::{FixedStatus, PreferenceBackend, PrefsError, PrefsResult, PrefMap};
    use kbd_widgets::Route;

    struct Fixture {
        model: HomeScreenModel,
        store: Arc<PreferenceStore>,
        probe: Arc<StatusProbe>,
        status: Arc<FixedStatus>,
        sink: RecordingSink,
    }

    fn fixture_with_store(store: PreferenceStore, enabled: bool, selected: bool) -> Fixture {
        let store = Arc::new(store);
        let status = Arc::new(FixedStatus::new(enabled, selected));
        let probe = Arc::new(StatusProbe::new(status.clone()));
        let sink = RecordingSink::new();
        let model = HomeScreenModel::new(
            Arc::clone(&store),
            Arc::clone(&probe),
            Arc::new(EnglishStrings),
            Box::new(sink.clone()),
            HomeConfig::default(),
        );
        Fixture {
            model,
            store,
            probe,
            status,
            sink,
        }
    }

    fn fixture(enabled: bool, selected: bool, collapsed: bool) -> Fixture {
        let backend = kbd_prefs::MemoryBackend::with_flags([(
            HOME_IS_BETA_TOOLBOX_COLLAPSED.key,
            collapsed,
        )]);
        fixture_with_store(PreferenceStore::open(backend), enabled, selected)
    }

    struct ReadOnlyBackend;

    impl PreferenceBackend for ReadOnlyBackend {
        fn load(&self) -> PrefsResult<PrefMap> {
            Ok(PrefMap::new())
        }

        fn save(&self, _values: &PrefMap) -> PrefsResult<()> {
            Err(PrefsError::Backend("read-only".to_string()))
        }
    }

    #[test]
    fn test_collapsed_defaults_to_false() {
        let f = fixture_with_store(PreferenceStore::in_memory(), true, true);
        assert!(!f.model.state().is_collapsed);
        assert!(f.model.render().is_info_expanded());
    }

    #[test]
    fn test_first_render_is_pending() {
        let f = fixture(true, true, false);
        assert!(f.model.take_dirty());
        assert!(!f.model.take_dirty());
    }

    #[test]
    fn test_scenario_not_enabled_collapsed() {
        let f = fixture(false, false, true);
        let view = f.model.render();
        assert!(view.has_error_banner());
        assert!(!view.is_info_expanded());
        assert_eq!(view.menu.len(), 12);

        f.model.toggle_info_panel();
        let view = f.model.render();
        assert!(view.is_info_expanded());
        assert!(view.has_error_banner());
    }

    #[test]
    fn test_scenario_all_good_expanded() {
        let f = fixture(true, true, false);
        let view = f.model.render();
        assert!(view.banner.is_none());
        let body = view.info_panel.body.expect("expanded");
        assert_eq!(body.feedback.url, info_panel::FEEDBACK_THREAD_URL);
        assert_eq!(view.menu.len(), 12);
    }

    #[test]
    fn test_toggle_flips_and_persists() {
        let f = fixture(true, true, false);
        f.model.take_dirty();

        f.model.toggle_info_panel();
        assert!(f.model.take_dirty());
        assert!(f.store.get(&HOME_IS_BETA_TOOLBOX_COLLAPSED));
        let view = f.model.render();
        assert_eq!(view.info_panel.toggle_icon, ToggleIcon::ChevronDown);
        assert!(!view.is_info_expanded());

        f.model.toggle_info_panel();
        let view = f.model.render();
        assert_eq!(view.info_panel.toggle_icon, ToggleIcon::ChevronUp);
        assert!(view.is_info_expanded());
    }

    #[test]
    fn test_failed_write_keeps_state() {
        let f = fixture_with_store(PreferenceStore::open(ReadOnlyBackend), true, true);
        f.model.take_dirty();

        f.model.toggle_info_panel();
        assert!(!f.model.state().is_collapsed);
        assert!(!f.model.take_dirty());
    }

    #[test]
    fn test_render_never_dispatches() {
        let f = fixture(false, false, false);
        for _ in 0..3 {
            f.model.render();
        }
        assert!(f.sink.commands().is_empty());
    }

    #[test]
    fn test_menu_entry_navigates_once() {
        let f = fixture(true, true, false);
        for (i, entry) in HOME_MENU.iter().enumerate() {
            f.model.activate_menu_entry(i);
            assert_eq!(f.sink.take(), vec![HomeCommand::Navigate(entry.route)]);
        }
        assert_eq!(f.model.state(), HomeState {
            enabled: true,
            selected: true,
            is_collapsed: false,
        });
    }

    #[test]
    fn test_menu_entry_out_of_range_is_ignored() {
        let f = fixture(true, true, false);
        f.model.activate_menu_entry(HOME_MENU.len());
        assert!(f.sink.commands().is_empty());
    }

    #[test]
    fn test_banner_actions() {
        let f = fixture(false, false, false);
        f.model.activate_banner();
        assert_eq!(f.sink.take(), vec![HomeCommand::OpenImeEnabler]);

        f.status.set_enabled(true);
        f.probe.poll();
        f.model.activate_banner();
        assert_eq!(f.sink.take(), vec![HomeCommand::OpenImePicker]);

        f.status.set_selected(true);
        f.probe.poll();
        f.model.activate_banner();
        assert!(f.sink.take().is_empty());
    }

    #[test]
    fn test_feedback_link() {
        let f = fixture(true, true, true);
        f.model.open_feedback_thread();
        assert!(f.sink.take().is_empty());

        f.model.toggle_info_panel();
        f.model.open_feedback_thread();
        assert_eq!(
            f.sink.take(),
            vec![HomeCommand::LaunchUrl(info_panel::FEEDBACK_THREAD_URL.to_string())]
        );
    }

    #[test]
    fn test_status_frozen_in_background() {
        let f = fixture(false, false, false);
        f.model.take_dirty();

        f.probe.set_foreground(false);
        f.status.set_enabled(true);
        f.probe.poll();
        assert!(!f.model.state().enabled);
        assert!(!f.model.take_dirty());

        f.probe.set_foreground(true);
        assert!(f.model.state().enabled);
        assert!(f.model.take_dirty());
        assert_eq!(
            f.model.render().banner.map(|b| b.severity),
            Some(Severity::Warning)
        );
    }

    #[test]
    fn test_dispose_stops_notifications() {
        let mut f = fixture(true, true, false);
        f.model.take_dirty();

        f.model.dispose();
        assert!(!f.model.is_active());

        f.store
            .set(&HOME_IS_BETA_TOOLBOX_COLLAPSED, true)
            .expect("memory write");
        f.status.set_selected(false);
        f.probe.poll();
        assert!(!f.model.take_dirty());

        f.model.activate_menu_entry(0);
        assert!(f.sink.commands().is_empty());
    }

    #[test]
    fn test_suspend_releases_and_resume_resubscribes() {
        let mut f = fixture(true, true, false);
        f.model.take_dirty();
        let collapsed = f.store.observe(&HOME_IS_BETA_TOOLBOX_COLLAPSED);
        assert_eq!(collapsed.subscriber_count(), 1);

        f.model.suspend();
        assert!(!f.model.is_active());
        assert_eq!(collapsed.subscriber_count(), 0);

        f.store
            .set(&HOME_IS_BETA_TOOLBOX_COLLAPSED, true)
            .expect("memory write");
        assert!(!f.model.take_dirty());
        f.model.activate_menu_entry(0);
        assert!(f.sink.commands().is_empty());

        f.model.resume();
        assert!(f.model.is_active());
        assert_eq!(collapsed.subscriber_count(), 1);
        // The write missed while suspended shows up on the next render
        assert!(f.model.take_dirty());
        assert!(!f.model.render().is_info_expanded());

        f.model.toggle_info_panel();
        assert!(f.model.take_dirty());
    }

    #[test]
    fn test_dispose_is_final() {
        let mut f = fixture(true, true, false);
        f.model.suspend();
        f.model.dispose();
        f.model.resume();

        assert!(!f.model.is_active());
        assert_eq!(
            f.store.observe(&HOME_IS_BETA_TOOLBOX_COLLAPSED).subscriber_count(),
            0
        );
    }

    #[test]
    fn test_custom_menu_and_version() {
        let store = Arc::new(PreferenceStore::in_memory());
        let probe = Arc::new(StatusProbe::new(Arc::new(FixedStatus::new(true, true))));
        let sink = RecordingSink::new();
        let config = HomeConfig {
            menu: vec![HOME_MENU[11], HOME_MENU[11]],
            version: "0.4.0-beta06".to_string(),
        };
        let model = HomeScreenModel::new(
            store,
            probe,
            Arc::new(EnglishStrings),
            Box::new(sink.clone()),
            config,
        );

        let view = model.render();
        assert_eq!(view.menu_routes(), vec![Route::About, Route::About]);
        assert_eq!(
            view.info_panel.body.map(|b| b.version_line),
            Some("Current version: 0.4.0-beta06".to_string())
        );

        model.activate_menu_entry(0);
        model.activate_menu_entry(1);
        assert_eq!(
            sink.commands(),
            vec![HomeCommand::Navigate(Route::About), HomeCommand::Navigate(Route::About)]
        );
    }

    #[test]
    fn test_reordered_menu_keeps_config_order() {
        let probe = Arc::new(StatusProbe::new(Arc::new(FixedStatus::new(true, true))));
        let sink = RecordingSink::new();
        let config = HomeConfig {
            menu: vec![HOME_MENU[11], HOME_MENU[0]],
            ..HomeConfig::default()
        };
        let model = HomeScreenModel::new(
            Arc::new(PreferenceStore::in_memory()),
            probe,
            Arc::new(EnglishStrings),
            Box::new(sink.clone()),
            config,
        );

        let view = model.render();
        assert_eq!(view.menu_routes(), vec![Route::About, Route::Localization]);
        let icons: Vec<_> = view.menu.iter().map(|item| item.icon).collect();
        assert_eq!(icons, vec![Some(MenuIcon::Info), Some(MenuIcon::Language)]);

        model.activate_menu_entry(0);
        assert_eq!(sink.take(), vec![HomeCommand::Navigate(Route::About)]);
    }
}
