//! # KbdApp Trait - Settings Page Interface
//!
//! Standard interface for the pages hosted by the settings shell.
//!
//! Makepad's `live_design!` macro resolves widget types at compile time, so
//! page widgets are still imported directly by the shell. This module adds:
//!
//! - **Standardized metadata** - page name, ID, description via [`AppInfo`]
//! - **Consistent registration** - widget registration via [`KbdApp::live_design`]
//! - **Timer lifecycle** - polling control via [`TimerControl`]
//! - **Page inventory** - registered page metadata via [`AppRegistry`]
//!
//! ## Usage in Shell
//!
//! ```rust,ignore
//! use kbd_widgets::{AppRegistry, KbdApp};
//! use kbd_home::KbdHomeApp;
//!
//! impl LiveRegister for App {
//!     fn live_register(cx: &mut Cx) {
//!         makepad_widgets::live_design(cx);
//!         kbd_widgets::live_design(cx);
//!         <KbdHomeApp as KbdApp>::live_design(cx);
//!     }
//! }
//!
//! let mut registry = AppRegistry::new();
//! registry.register(KbdHomeApp::info());
//! ```

use makepad_widgets::Cx;

/// Metadata about a registered page
#[derive(Clone, Debug, Default)]
pub struct AppInfo {
    /// Display name shown in UI
    pub name: &'static str,
    /// Unique identifier for the page
    pub id: &'static str,
    /// Description of the page
    pub description: &'static str,
}

/// Trait for pages that integrate with the settings shell
pub trait KbdApp {
    /// Returns metadata about this page
    fn info() -> AppInfo
    where
        Self: Sized;

    /// Register this page's widgets with Makepad
    fn live_design(cx: &mut Cx);
}

/// Trait for pages that poll state on timers
///
/// Pages stop their timers when hidden and restart them when shown.
pub trait TimerControl {
    /// Stop all timers (call when the page becomes hidden)
    fn stop_timers(&self, cx: &mut Cx);

    /// Start/restart timers (call when the page becomes visible)
    fn start_timers(&self, cx: &mut Cx);
}

/// Registry of all installed pages
///
/// Pages must still be imported at compile time; the registry only records
/// their metadata.
pub struct AppRegistry {
    apps: Vec<AppInfo>,
}

impl AppRegistry {
    /// Create a new empty registry
    pub const fn new() -> Self {
        Self { apps: Vec::new() }
    }

    /// Register a page in the registry
    pub fn register(&mut self, info: AppInfo) {
        log::debug!("Registered page {}", info.id);
        self.apps.push(info);
    }

    pub fn len(&self) -> usize {
        self.apps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.apps.is_empty()
    }
}

impl Default for AppRegistry {
    fn default() -> Self {
        Self::new()
    }
}
