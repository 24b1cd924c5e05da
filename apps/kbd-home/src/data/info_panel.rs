//! Content of the collapsible beta information card

/// Feedback discussion opened by the card's link
pub const FEEDBACK_THREAD_URL: &str = "https://github.com/florisboard/florisboard/discussions/1235";

pub const TITLE: &str = "Beta-access to new Settings UI";

pub const INTRO: [&str; 3] = [
    "You are currently testing out the new Settings of the keyboard.",
    "This beta release contains a completely rewritten keyboard logic and UI backend, thus some \
     features are still missing. These will get re-added in later beta versions (see below).",
    "If you want to give feedback on the development of the new prefs and keyboard logic, \
     please do so in below linked feedback thread:",
];

pub const FEEDBACK_LABEL: &str = "Open Feedback Thread";

pub const UNAVAILABLE_HEADING: &str =
    "List of unavailable features (and when they will get re-implemented):";

/// Features missing from this release, with their planned version
pub const UNAVAILABLE_FEATURES: [&str; 8] = [
    "Smartbar (beta07)",
    "Password autofill on Android11+ (beta07)",
    "Clipboard manager / clipboard row (beta07)",
    "Theme customization (new theme engine and look) (beta08)",
    "Glide typing (beta09)",
    "Emoji view (beta09 or beta10)",
    "Landscape fullscreen input (beta09 or beta10)",
    "Word suggestions (beta10+, new suggestion algorithm 0.3.15/16)",
];

pub const CLOSING_NOTE: &str = "Please do not file issues that these features do not work while \
     the current version is below the intended re-implementation version. Thank you!";

pub fn version_line(version: &str) -> String {
    format!("Current version: {}", version)
}
