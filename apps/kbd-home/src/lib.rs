//! Keyboard settings home screen
//!
//! Shows input method status banners, a collapsible beta information card
//! and the menu of settings sections. Everything except [`screen`] is plain
//! Rust and independent of the UI toolkit.

pub mod banner;
pub mod command;
pub mod composer;
pub mod data;
pub mod model;
pub mod screen;
pub mod strings;

pub use banner::{BannerState, Severity};
pub use command::{
    command_channel, execute_command, CommandSink, HomeCommand, RecordingSink, UrlLauncher,
};
pub use composer::{compose, BannerView, HomeState, HomeView, InfoPanelView, MenuItemView, ToggleIcon};
pub use model::{HomeConfig, HomeScreenModel};
pub use screen::{HomeScreen, HomeScreenRef, HomeScreenWidgetRefExt};
pub use strings::{EnglishStrings, StringId, StringResolver};

use makepad_widgets::Cx;
use kbd_widgets::{AppInfo, KbdApp};

/// Home page descriptor
pub struct KbdHomeApp;

impl KbdApp for KbdHomeApp {
    fn info() -> AppInfo {
        AppInfo {
            name: "Home",
            id: "kbd-home",
            description: "Keyboard status, beta notes and settings sections",
        }
    }

    fn live_design(cx: &mut Cx) {
        screen::live_design(cx);
    }
}

/// Register all home screen widgets with Makepad
pub fn live_design(cx: &mut Cx) {
    KbdHomeApp::live_design(cx);
}
