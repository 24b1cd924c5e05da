//! Input method status banner

use crate::command::HomeCommand;
use crate::strings::StringId;

/// Banner severity, drives the card colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Which status banner the home screen shows
///
/// An input method that is not enabled cannot be selected either, so the
/// error banner takes precedence and at most one banner is ever shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BannerState {
    #[default]
    NoBanner,
    /// Keyboard is not enabled in the system
    ErrorBanner,
    /// Keyboard is enabled but not the active input method
    WarningBanner,
}

impl BannerState {
    pub fn from_status(enabled: bool, selected: bool) -> Self {
        if !enabled {
            BannerState::ErrorBanner
        } else if !selected {
            BannerState::WarningBanner
        } else {
            BannerState::NoBanner
        }
    }

    pub fn is_visible(&self) -> bool {
        *self != BannerState::NoBanner
    }

    pub fn severity(&self) -> Option<Severity> {
        match self {
            BannerState::NoBanner => None,
            BannerState::ErrorBanner => Some(Severity::Error),
            BannerState::WarningBanner => Some(Severity::Warning),
        }
    }

    pub fn text_id(&self) -> Option<StringId> {
        match self {
            BannerState::NoBanner => None,
            BannerState::ErrorBanner => Some(StringId::ImeNotEnabled),
            BannerState::WarningBanner => Some(StringId::ImeNotSelected),
        }
    }

    /// Command issued when the banner is clicked
    pub fn action(&self) -> Option<HomeCommand> {
        match self {
            BannerState::NoBanner => None,
            BannerState::ErrorBanner => Some(HomeCommand::OpenImeEnabler),
            BannerState::WarningBanner => Some(HomeCommand::OpenImePicker),
        }
    }
}
