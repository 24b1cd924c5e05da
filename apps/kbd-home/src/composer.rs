//! Pure composition of the home screen view tree
//!
//! [`compose`] turns one snapshot of the inputs into a [`HomeView`]. It has
//! no side effects and never dispatches commands; interactions live on
//! [`crate::model::HomeScreenModel`].

use kbd_widgets::Route;

use crate::banner::{BannerState, Severity};
use crate::command::HomeCommand;
use crate::data::info_panel;
use crate::data::{MenuEntry, MenuIcon};
use crate::strings::{StringId, StringResolver};

/// Inputs of one render pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HomeState {
    pub enabled: bool,
    pub selected: bool,
    pub is_collapsed: bool,
}

impl HomeState {
    pub fn banner(&self) -> BannerState {
        BannerState::from_status(self.enabled, self.selected)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerView {
    pub severity: Severity,
    pub text: String,
    pub action: HomeCommand,
}

/// Icon on the info panel's toggle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleIcon {
    /// Panel is collapsed, activating expands it
    ChevronDown,
    /// Panel is expanded, activating collapses it
    ChevronUp,
}

impl ToggleIcon {
    pub fn for_collapsed(is_collapsed: bool) -> Self {
        if is_collapsed {
            ToggleIcon::ChevronDown
        } else {
            ToggleIcon::ChevronUp
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinkAction {
    pub label: String,
    pub url: String,
}

impl LinkAction {
    pub fn command(&self) -> HomeCommand {
        HomeCommand::LaunchUrl(self.url.clone())
    }
}

/// Expanded content of the info panel
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoPanelBody {
    pub intro: Vec<String>,
    pub feedback: LinkAction,
    pub version_line: String,
    pub unavailable_heading: String,
    pub unavailable_features: Vec<String>,
    pub closing_note: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InfoPanelView {
    pub title: String,
    pub toggle_icon: ToggleIcon,
    /// Present only while expanded
    pub body: Option<InfoPanelBody>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuItemView {
    pub icon: Option<MenuIcon>,
    pub label: String,
    pub route: Route,
}

/// Complete render output of the home screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeView {
    pub title: String,
    /// Home is the root of the settings, so there is nothing to go back to
    pub back_arrow_visible: bool,
    pub banner: Option<BannerView>,
    pub info_panel: InfoPanelView,
    pub menu: Vec<MenuItemView>,
}

impl HomeView {
    pub fn has_error_banner(&self) -> bool {
        matches!(&self.banner, Some(b) if b.severity == Severity::Error)
    }

    pub fn has_warning_banner(&self) -> bool {
        matches!(&self.banner, Some(b) if b.severity == Severity::Warning)
    }

    pub fn is_info_expanded(&self) -> bool {
        self.info_panel.body.is_some()
    }

    pub fn menu_routes(&self) -> Vec<Route> {
        self.menu.iter().map(|item| item.route).collect()
    }
}

/// Build the view tree for `state`
pub fn compose(
    state: &HomeState,
    strings: &dyn StringResolver,
    menu: &[MenuEntry],
    version: &str,
) -> HomeView {
    let banner = state.banner();
    let banner = match (banner.severity(), banner.text_id(), banner.action()) {
        (Some(severity), Some(text), Some(action)) => Some(BannerView {
            severity,
            text: strings.resolve(text),
            action,
        }),
        _ => None,
    };

    let body = (!state.is_collapsed).then(|| info_panel_body(version));

    HomeView {
        title: strings.resolve(StringId::HomeTitle),
        back_arrow_visible: false,
        banner,
        info_panel: InfoPanelView {
            title: info_panel::TITLE.to_string(),
            toggle_icon: ToggleIcon::for_collapsed(state.is_collapsed),
            body,
        },
        menu: menu
            .iter()
            .map(|entry| MenuItemView {
                icon: entry.icon,
                label: strings.resolve(entry.label),
                route: entry.route,
            })
            .collect(),
    }
}

fn info_panel_body(version: &str) -> InfoPanelBody {
    InfoPanelBody {
        intro: info_panel::INTRO.iter().map(|s| s.to_string()).collect(),
        feedback: LinkAction {
            label: info_panel::FEEDBACK_LABEL.to_string(),
            url: info_panel::FEEDBACK_THREAD_URL.to_string(),
        },
        version_line: info_panel::version_line(version),
        unavailable_heading: info_panel::UNAVAILABLE_HEADING.to_string(),
        unavailable_features: info_panel::UNAVAILABLE_FEATURES
            .iter()
            .map(|s| s.to_string())
            .collect(),
        closing_note: info_panel::CLOSING_NOTE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::HOME_MENU;
    use crate::strings::EnglishStrings;

    fn view(enabled: bool, selected: bool, is_collapsed: bool) -> HomeView {
        let state = HomeState {
            enabled,
            selected,
            is_collapsed,
        };
        compose(&state, &EnglishStrings, &HOME_MENU, "1.0.0")
    }

    #[test]
    fn test_not_enabled_shows_error_only() {
        for selected in [false, true] {
            let v = view(false, selected, false);
            assert!(v.has_error_banner());
            assert!(!v.has_warning_banner());
        }
    }

    #[test]
    fn test_enabled_not_selected_shows_warning_only() {
        let v = view(true, false, false);
        assert!(v.has_warning_banner());
        assert!(!v.has_error_banner());
        let banner = v.banner.as_ref().map(|b| b.action.clone());
        assert_eq!(banner, Some(HomeCommand::OpenImePicker));
    }

    #[test]
    fn test_enabled_and_selected_shows_no_banner() {
        assert!(view(true, true, false).banner.is_none());
    }

    #[test]
    fn test_banner_text_resolved() {
        let v = view(false, false, false);
        let text = v.banner.map(|b| b.text).unwrap_or_default();
        assert_eq!(text, EnglishStrings.resolve(StringId::ImeNotEnabled));
    }

    #[test]
    fn test_collapsed_hides_body_and_points_down() {
        let v = view(true, true, true);
        assert!(v.info_panel.body.is_none());
        assert_eq!(v.info_panel.toggle_icon, ToggleIcon::ChevronDown);
        assert_eq!(v.info_panel.title, info_panel::TITLE);
    }

    #[test]
    fn test_expanded_shows_body_and_points_up() {
        let v = view(true, true, false);
        assert_eq!(v.info_panel.toggle_icon, ToggleIcon::ChevronUp);

        let body = v.info_panel.body.expect("expanded panel has a body");
        assert_eq!(body.feedback.url, info_panel::FEEDBACK_THREAD_URL);
        assert_eq!(
            body.feedback.command(),
            HomeCommand::LaunchUrl(info_panel::FEEDBACK_THREAD_URL.to_string())
        );
        assert_eq!(body.version_line, "Current version: 1.0.0");
        assert_eq!(body.intro.len(), 3);
        assert_eq!(body.unavailable_features.len(), 8);
    }

    #[test]
    fn test_menu_is_independent_of_state() {
        let expected: Vec<Route> = HOME_MENU.iter().map(|e| e.route).collect();
        for enabled in [false, true] {
            for selected in [false, true] {
                for collapsed in [false, true] {
                    let v = view(enabled, selected, collapsed);
                    assert_eq!(v.menu.len(), 12);
                    assert_eq!(v.menu_routes(), expected);
                }
            }
        }
    }

    #[test]
    fn test_menu_labels_and_icons() {
        let v = view(true, true, true);
        assert_eq!(v.menu[0].label, "Languages & Layouts");
        assert_eq!(v.menu[0].icon, Some(MenuIcon::Language));
        assert_eq!(v.menu[3].label, "Smartbar");
        assert_eq!(v.menu[3].icon, None);
        assert_eq!(v.menu[11].label, "About");
    }

    #[test]
    fn test_title_and_back_arrow() {
        let v = view(true, true, true);
        assert_eq!(v.title, "Welcome!");
        assert!(!v.back_arrow_visible);
    }

    #[test]
    fn test_duplicate_menu_entries_render_twice() {
        let menu = [HOME_MENU[1], HOME_MENU[1]];
        let v = compose(&HomeState::default(), &EnglishStrings, &menu, "1.0.0");
        assert_eq!(v.menu_routes(), vec![Route::Theme, Route::Theme]);
    }
}
