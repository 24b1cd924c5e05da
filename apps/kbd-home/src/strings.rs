//! String resources for the home screen

/// Identifiers of user-visible strings
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StringId {
    HomeTitle,
    ImeNotEnabled,
    ImeNotSelected,
    LocalizationTitle,
    ThemeTitle,
    KeyboardTitle,
    SmartbarTitle,
    TypingTitle,
    SpellingTitle,
    DictionaryTitle,
    GesturesTitle,
    ClipboardTitle,
    DevtoolsTitle,
    AdvancedTitle,
    AboutTitle,
}

/// Resolves string identifiers to display text. Pure and synchronous.
pub trait StringResolver: Send + Sync {
    fn resolve(&self, id: StringId) -> String;
}

/// Built-in English strings
#[derive(Clone, Copy, Debug, Default)]
pub struct EnglishStrings;

impl StringResolver for EnglishStrings {
    fn resolve(&self, id: StringId) -> String {
        let text = match id {
            StringId::HomeTitle => "Welcome!",
            StringId::ImeNotEnabled => {
                "The keyboard is not enabled in the system and thus won't be available as an \
                 input method. Click here to resolve this issue."
            }
            StringId::ImeNotSelected => {
                "The keyboard is not selected as the active input method. Click here to \
                 resolve this issue."
            }
            StringId::LocalizationTitle => "Languages & Layouts",
            StringId::ThemeTitle => "Theme",
            StringId::KeyboardTitle => "Keyboard",
            StringId::SmartbarTitle => "Smartbar",
            StringId::TypingTitle => "Typing",
            StringId::SpellingTitle => "Spelling",
            StringId::DictionaryTitle => "Dictionary",
            StringId::GesturesTitle => "Gestures",
            StringId::ClipboardTitle => "Clipboard",
            StringId::DevtoolsTitle => "Developer tools",
            StringId::AdvancedTitle => "Advanced",
            StringId::AboutTitle => "About",
        };
        text.to_string()
    }
}
