//! Home screen layout

use makepad_widgets::*;

use super::HomeScreen;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use kbd_widgets::theme::*;

    ICO_CHEVRON_DOWN = dep("crate://self/resources/icons/chevron_down.svg")
    ICO_CHEVRON_UP = dep("crate://self/resources/icons/chevron_up.svg")
    ICO_LANGUAGE = dep("crate://self/resources/icons/language.svg")
    ICO_PALETTE = dep("crate://self/resources/icons/palette.svg")
    ICO_KEYBOARD = dep("crate://self/resources/icons/keyboard.svg")
    ICO_SETTINGS_SUGGEST = dep("crate://self/resources/icons/settings_suggest.svg")
    ICO_SPELLCHECK = dep("crate://self/resources/icons/spellcheck.svg")
    ICO_LIBRARY_BOOKS = dep("crate://self/resources/icons/library_books.svg")
    ICO_GESTURE = dep("crate://self/resources/icons/gesture.svg")
    ICO_ASSIGNMENT = dep("crate://self/resources/icons/assignment.svg")
    ICO_ADB = dep("crate://self/resources/icons/adb.svg")
    ICO_BUILD = dep("crate://self/resources/icons/build.svg")
    ICO_INFO = dep("crate://self/resources/icons/info.svg")

    // Clickable status card; `severity` 0.0 = error, 1.0 = warning
    BannerCard = <Button> {
        width: Fill, height: Fit
        padding: {left: 16, right: 16, top: 14, bottom: 14}
        margin: {bottom: 12}
        align: {x: 0.0, y: 0.5}

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance dark_mode: 0.0
            instance severity: 0.0

            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 8.0);
                let light = mix((ERROR_BG), (WARNING_BG), self.severity);
                let dark = mix((ERROR_BG_DARK), (WARNING_BG_DARK), self.severity);
                let base = mix(light, dark, self.dark_mode);
                let shade = self.hover * 0.04 + self.pressed * 0.06;
                sdf.fill(mix(base, vec4(0.0, 0.0, 0.0, 1.0), shade));
                return sdf.result;
            }
        }

        draw_text: {
            instance dark_mode: 0.0
            instance severity: 0.0
            wrap: Word
            text_style: { font_size: 11.0 }
            fn get_color(self) -> vec4 {
                let light = mix((ERROR_TEXT), (WARNING_TEXT), self.severity);
                let dark = mix((ERROR_TEXT_DARK), (WARNING_TEXT_DARK), self.severity);
                return mix(light, dark, self.dark_mode);
            }
        }

        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
            pressed = {
                default: off,
                off = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {pressed: 0.0} } }
                on = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {pressed: 1.0} } }
            }
        }
    }

    // Rounded surface holding the info panel and the menu
    Card = <RoundedView> {
        width: Fill, height: Fit
        flow: Down
        margin: {bottom: 12}
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            border_radius: 8.0
            fn get_color(self) -> vec4 {
                return mix((PANEL_BG), (PANEL_BG_DARK), self.dark_mode);
            }
        }
    }

    BodyText = <Label> {
        width: Fill, height: Fit
        margin: {bottom: 8}
        draw_text: {
            instance dark_mode: 0.0
            wrap: Word
            text_style: { font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
            }
        }
    }

    ChevronButton = <Button> {
        width: 32, height: 32
        padding: 8
        text: ""
        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.circle(self.rect_size.x * 0.5, self.rect_size.y * 0.5, self.rect_size.x * 0.5);
                let hover = mix((HOVER_BG), (HOVER_BG_DARK), self.dark_mode);
                sdf.fill(mix(vec4(0.0, 0.0, 0.0, 0.0), hover, self.hover + self.pressed));
                return sdf.result;
            }
        }
        draw_icon: {
            instance dark_mode: 0.0
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }
        icon_walk: {width: 16, height: 16}
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
            pressed = {
                default: off,
                off = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {pressed: 0.0} } }
                on = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {pressed: 1.0} } }
            }
        }
    }

    LinkButton = <Button> {
        width: Fit, height: Fit
        padding: {left: 0, right: 0, top: 4, bottom: 12}
        draw_bg: {
            fn pixel(self) -> vec4 {
                return vec4(0.0, 0.0, 0.0, 0.0);
            }
        }
        draw_text: {
            instance hover: 0.0
            instance dark_mode: 0.0
            text_style: { font_size: 11.0 }
            fn get_color(self) -> vec4 {
                let base = mix((ACCENT_BLUE), (ACCENT_BLUE_DARK), self.dark_mode);
                return mix(base, (TEXT_PRIMARY), self.hover * 0.3);
            }
        }
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_text: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_text: {hover: 1.0} } }
            }
        }
    }

    // One navigation row: icon followed by the section title
    MenuRow = <Button> {
        width: Fill, height: 48
        padding: {left: 16, right: 16}
        spacing: 16
        align: {x: 0.0, y: 0.5}

        draw_bg: {
            instance hover: 0.0
            instance pressed: 0.0
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 0.0);
                let hover = mix((HOVER_BG), (HOVER_BG_DARK), self.dark_mode);
                sdf.fill(mix(vec4(0.0, 0.0, 0.0, 0.0), hover, self.hover + self.pressed * 0.5));
                return sdf.result;
            }
        }

        draw_icon: {
            instance dark_mode: 0.0
            fn get_color(self) -> vec4 {
                return mix((SLATE_500), (SLATE_400), self.dark_mode);
            }
        }
        icon_walk: {width: 20, height: 20}

        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 12.0 }
            fn get_color(self) -> vec4 {
                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
            }
        }

        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
            pressed = {
                default: off,
                off = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {pressed: 0.0} } }
                on = { from: {all: Forward {duration: 0.1}} apply: { draw_bg: {pressed: 1.0} } }
            }
        }
    }

    pub HomeScreen = {{HomeScreen}} {
        width: Fill, height: Fill
        flow: Down
        show_bg: true
        draw_bg: {
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                return mix((DARK_BG), (DARK_BG_DARK), self.dark_mode);
            }
        }

        header = <View> {
            width: Fill, height: Fit
            padding: {left: 24, right: 24, top: 20, bottom: 12}
            align: {x: 0.0, y: 0.5}

            title = <Label> {
                text: "Welcome!"
                draw_text: {
                    instance dark_mode: 0.0
                    text_style: { font_size: 20.0 }
                    fn get_color(self) -> vec4 {
                        return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                    }
                }
            }
        }

        content = <ScrollYView> {
            width: Fill, height: Fill
            flow: Down
            padding: {left: 24, right: 24, bottom: 24}

            error_banner = <BannerCard> {
                visible: false
                draw_bg: { severity: 0.0 }
                draw_text: { severity: 0.0 }
            }

            warning_banner = <BannerCard> {
                visible: false
                draw_bg: { severity: 1.0 }
                draw_text: { severity: 1.0 }
            }

            info_card = <Card> {
                info_header = <View> {
                    width: Fill, height: Fit
                    padding: {left: 16, right: 8, top: 8, bottom: 8}
                    align: {x: 0.0, y: 0.5}

                    info_title = <Label> {
                        width: Fill
                        draw_text: {
                            instance dark_mode: 0.0
                            text_style: { font_size: 13.0 }
                            fn get_color(self) -> vec4 {
                                return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                            }
                        }
                    }

                    expand_button = <ChevronButton> {
                        draw_icon: { svg_file: (ICO_CHEVRON_DOWN) }
                    }

                    collapse_button = <ChevronButton> {
                        visible: false
                        draw_icon: { svg_file: (ICO_CHEVRON_UP) }
                    }
                }

                info_body = <View> {
                    width: Fill, height: Fit
                    flow: Down
                    padding: {left: 16, right: 16, bottom: 12}
                    visible: false

                    intro_0 = <BodyText> {}
                    intro_1 = <BodyText> {}
                    intro_2 = <BodyText> {}
                    feedback_link = <LinkButton> {}
                    version_line = <BodyText> {}
                    unavailable_heading = <BodyText> {}
                    unavailable_list = <BodyText> {}
                    closing_note = <BodyText> {}
                }
            }

            menu_card = <Card> {
                // One template per icon; rows are filled from the composed menu
                menu_list = <PortalList> {
                    width: Fill, height: Fit
                    flow: Down

                    language = <MenuRow> { draw_icon: { svg_file: (ICO_LANGUAGE) } }
                    palette = <MenuRow> { draw_icon: { svg_file: (ICO_PALETTE) } }
                    keyboard = <MenuRow> { draw_icon: { svg_file: (ICO_KEYBOARD) } }
                    settings_suggest = <MenuRow> { draw_icon: { svg_file: (ICO_SETTINGS_SUGGEST) } }
                    spellcheck = <MenuRow> { draw_icon: { svg_file: (ICO_SPELLCHECK) } }
                    library_books = <MenuRow> { draw_icon: { svg_file: (ICO_LIBRARY_BOOKS) } }
                    gesture = <MenuRow> { draw_icon: { svg_file: (ICO_GESTURE) } }
                    assignment = <MenuRow> { draw_icon: { svg_file: (ICO_ASSIGNMENT) } }
                    adb = <MenuRow> { draw_icon: { svg_file: (ICO_ADB) } }
                    build = <MenuRow> { draw_icon: { svg_file: (ICO_BUILD) } }
                    info = <MenuRow> { draw_icon: { svg_file: (ICO_INFO) } }
                    no_icon = <MenuRow> { padding: {left: 52, right: 16} }
                }
            }
        }
    }
}
