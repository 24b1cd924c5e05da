//! Shared color palette for the settings app
//!
//! Import with `use kbd_widgets::theme::*;` inside a `live_design!` block.
//! Light/dark pairs are blended in shaders through a `dark_mode` instance
//! variable (0.0 = light, 1.0 = dark).

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    // Surfaces
    pub DARK_BG = vec4(0.933, 0.941, 0.953, 1.0)
    pub DARK_BG_DARK = vec4(0.067, 0.090, 0.125, 1.0)
    pub PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)
    pub PANEL_BG_DARK = vec4(0.118, 0.161, 0.231, 1.0)
    pub HOVER_BG = vec4(0.0, 0.0, 0.0, 0.05)
    pub HOVER_BG_DARK = vec4(1.0, 1.0, 1.0, 0.06)

    // Text
    pub TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)
    pub TEXT_PRIMARY_DARK = vec4(0.945, 0.961, 0.976, 1.0)
    pub TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0)
    pub TEXT_SECONDARY_DARK = vec4(0.580, 0.639, 0.722, 1.0)

    // Neutrals
    pub SLATE_50 = vec4(0.976, 0.980, 0.984, 1.0)
    pub SLATE_200 = vec4(0.878, 0.906, 0.925, 1.0)
    pub SLATE_400 = vec4(0.580, 0.639, 0.702, 1.0)
    pub SLATE_500 = vec4(0.392, 0.455, 0.545, 1.0)
    pub SLATE_700 = vec4(0.204, 0.224, 0.275, 1.0)
    pub SLATE_800 = vec4(0.118, 0.161, 0.231, 1.0)
    pub BORDER = vec4(0.878, 0.906, 0.925, 1.0)
    pub BORDER_DARK = vec4(0.278, 0.337, 0.412, 1.0)

    // Accents
    pub ACCENT_BLUE = vec4(0.231, 0.510, 0.965, 1.0)
    pub ACCENT_BLUE_DARK = vec4(0.376, 0.647, 0.980, 1.0)

    // Status cards
    pub ERROR_BG = vec4(0.996, 0.886, 0.886, 1.0)
    pub ERROR_BG_DARK = vec4(0.498, 0.114, 0.114, 1.0)
    pub ERROR_TEXT = vec4(0.600, 0.106, 0.106, 1.0)
    pub ERROR_TEXT_DARK = vec4(0.996, 0.792, 0.792, 1.0)
    pub WARNING_BG = vec4(0.996, 0.953, 0.780, 1.0)
    pub WARNING_BG_DARK = vec4(0.471, 0.208, 0.059, 1.0)
    pub WARNING_TEXT = vec4(0.573, 0.251, 0.055, 1.0)
    pub WARNING_TEXT_DARK = vec4(0.992, 0.902, 0.541, 1.0)
}
