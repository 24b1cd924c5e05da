//! Static data for the home screen

pub mod info_panel;
pub mod menu;

pub use menu::{MenuEntry, MenuIcon, HOME_MENU};
