//! Static section menu shown on the home screen

use kbd_widgets::Route;

use crate::strings::StringId;

/// Icons available to menu rows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MenuIcon {
    Language,
    Palette,
    Keyboard,
    SettingsSuggest,
    Spellcheck,
    LibraryBooks,
    Gesture,
    Assignment,
    Adb,
    Build,
    Info,
}

impl MenuIcon {
    /// Icon resource name
    pub fn name(&self) -> &'static str {
        match self {
            MenuIcon::Language => "language",
            MenuIcon::Palette => "palette",
            MenuIcon::Keyboard => "keyboard",
            MenuIcon::SettingsSuggest => "settings_suggest",
            MenuIcon::Spellcheck => "spellcheck",
            MenuIcon::LibraryBooks => "library_books",
            MenuIcon::Gesture => "gesture",
            MenuIcon::Assignment => "assignment",
            MenuIcon::Adb => "adb",
            MenuIcon::Build => "build",
            MenuIcon::Info => "info",
        }
    }
}

/// One navigation row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuEntry {
    pub icon: Option<MenuIcon>,
    pub label: StringId,
    pub route: Route,
}

impl MenuEntry {
    pub const fn new(icon: Option<MenuIcon>, label: StringId, route: Route) -> Self {
        Self { icon, label, route }
    }
}

/// Home menu, in display order
pub const HOME_MENU: [MenuEntry; 12] = [
    MenuEntry::new(Some(MenuIcon::Language), StringId::LocalizationTitle, Route::Localization),
    MenuEntry::new(Some(MenuIcon::Palette), StringId::ThemeTitle, Route::Theme),
    MenuEntry::new(Some(MenuIcon::Keyboard), StringId::KeyboardTitle, Route::Keyboard),
    MenuEntry::new(None, StringId::SmartbarTitle, Route::Smartbar),
    MenuEntry::new(Some(MenuIcon::SettingsSuggest), StringId::TypingTitle, Route::Typing),
    MenuEntry::new(Some(MenuIcon::Spellcheck), StringId::SpellingTitle, Route::Spelling),
    MenuEntry::new(Some(MenuIcon::LibraryBooks), StringId::DictionaryTitle, Route::Dictionary),
    MenuEntry::new(Some(MenuIcon::Gesture), StringId::GesturesTitle, Route::Gestures),
    MenuEntry::new(Some(MenuIcon::Assignment), StringId::ClipboardTitle, Route::Clipboard),
    MenuEntry::new(Some(MenuIcon::Adb), StringId::DevtoolsTitle, Route::Devtools),
    MenuEntry::new(Some(MenuIcon::Build), StringId::AdvancedTitle, Route::Advanced),
    MenuEntry::new(Some(MenuIcon::Info), StringId::AboutTitle, Route::About),
];
