//! Command-line interface for the keyboard settings app
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! kbd-settings --help
//!
//! # Keep preferences in a custom file
//! kbd-settings --prefs /tmp/kbd-prefs.json
//!
//! # Check status against another input method engine
//! kbd-settings --ime florisboard
//!
//! # Preview the banners without touching system settings
//! kbd-settings --assume-enabled true --assume-selected false
//!
//! # Start on a section
//! kbd-settings --open settings/theme
//! ```

use clap::Parser;
use kbd_widgets::Route;
use std::path::PathBuf;

/// Keyboard settings - home screen and section navigation
#[derive(Parser, Debug, Clone)]
#[command(name = "kbd-settings")]
#[command(version)]
#[command(about = "Settings for the software keyboard", long_about = None)]
pub struct Args {
    /// Preferences file
    ///
    /// Defaults to ~/.kbd-settings/preferences.json.
    #[arg(long, value_name = "FILE")]
    pub prefs: Option<PathBuf>,

    /// Input method engine name checked for enabled/selected status
    #[arg(long, default_value = "kbd", value_name = "ENGINE")]
    pub ime: String,

    /// Start in dark mode
    #[arg(long)]
    pub dark_mode: bool,

    /// Log level for output
    ///
    /// Available levels: error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Window width in pixels
    #[arg(long, default_value = "900", value_name = "PIXELS")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "700", value_name = "PIXELS")]
    pub height: u32,

    /// Force the "keyboard enabled" answer instead of asking the system
    #[arg(long, value_name = "BOOL")]
    pub assume_enabled: Option<bool>,

    /// Force the "keyboard selected" answer instead of asking the system
    #[arg(long, value_name = "BOOL")]
    pub assume_selected: Option<bool>,

    /// Route path of the section to show on startup, e.g. settings/theme
    #[arg(long, value_name = "ROUTE")]
    pub open: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            prefs: None,
            ime: "kbd".to_string(),
            dark_mode: false,
            log_level: "info".to_string(),
            width: 900,
            height: 700,
            assume_enabled: None,
            assume_selected: None,
            open: None,
        }
    }
}

impl Args {
    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }

    /// Whether any status answer is forced from the command line
    pub fn has_status_override(&self) -> bool {
        self.assume_enabled.is_some() || self.assume_selected.is_some()
    }

    /// Section requested with `--open`, if it names a known route
    pub fn start_route(&self) -> Option<Route> {
        let path = self.open.as_deref()?;
        let route = Route::from_path(path);
        if route.is_none() {
            log::warn!("Unknown route {:?}, starting on home", path);
        }
        route
    }
}
