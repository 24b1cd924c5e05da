//! # Keyboard settings widgets
//!
//! Shared pieces for the settings shell and its pages:
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`theme`] | Color palette for `live_design!` blocks |
//! | [`app_trait`] | Page descriptors, registry and timer lifecycle |
//! | [`router`] | Routes, navigator trait and back-stack router |

pub mod app_trait;
pub mod router;
pub mod theme;

pub use app_trait::{AppInfo, AppRegistry, KbdApp, TimerControl};
pub use router::{Navigator, PageRouter, Route};

use makepad_widgets::Cx;

/// Register shared widgets and theme constants with Makepad.
///
/// Call before registering page widgets, which import `kbd_widgets::theme::*`.
pub fn live_design(cx: &mut Cx) {
    theme::live_design(cx);
}
