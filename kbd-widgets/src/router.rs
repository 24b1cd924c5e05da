//! Routes and page routing for the settings shell
//!
//! A [`Route`] names a destination screen. Screens treat routes as opaque and
//! hand them to a [`Navigator`]; only the shell's [`PageRouter`] interprets
//! them.

use std::fmt;

/// Destination screens reachable from the settings shell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Localization,
    Theme,
    Keyboard,
    Smartbar,
    Typing,
    Spelling,
    Dictionary,
    Gestures,
    Clipboard,
    Advanced,
    About,
    Devtools,
}

impl Route {
    /// Every known route
    pub const ALL: [Route; 13] = [
        Route::Home,
        Route::Localization,
        Route::Theme,
        Route::Keyboard,
        Route::Smartbar,
        Route::Typing,
        Route::Spelling,
        Route::Dictionary,
        Route::Gestures,
        Route::Clipboard,
        Route::Advanced,
        Route::About,
        Route::Devtools,
    ];

    /// Stable path identifier
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "settings/home",
            Route::Localization => "settings/localization",
            Route::Theme => "settings/theme",
            Route::Keyboard => "settings/keyboard",
            Route::Smartbar => "settings/smartbar",
            Route::Typing => "settings/typing",
            Route::Spelling => "settings/spelling",
            Route::Dictionary => "settings/dictionary",
            Route::Gestures => "settings/gestures",
            Route::Clipboard => "settings/clipboard",
            Route::Advanced => "settings/advanced",
            Route::About => "settings/about",
            Route::Devtools => "devtools",
        }
    }

    /// Parse a route from its path
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|route| route.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Receives navigation requests; fire-and-forget
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}

/// Back-stack router for the settings shell
///
/// The stack always holds [`Route::Home`] at the bottom.
#[derive(Debug)]
pub struct PageRouter {
    stack: Vec<Route>,
}

impl PageRouter {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    /// Get the current active route
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Home)
    }

    /// Navigate to a route, returns true if the page changed
    ///
    /// Navigating to `Home` unwinds the stack instead of pushing.
    pub fn navigate_to(&mut self, route: Route) -> bool {
        if self.current() == route {
            return false;
        }
        if route == Route::Home {
            self.stack.truncate(1);
        } else {
            self.stack.push(route);
        }
        true
    }

    /// Pop the current page, returns true if the page changed
    ///
    /// Does nothing on the home page.
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn is_home(&self) -> bool {
        self.current() == Route::Home
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Default for PageRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for PageRouter {
    fn navigate(&mut self, route: Route) {
        if self.navigate_to(route) {
            log::info!("Navigated to {}", route);
        }
    }
}
