//! Makepad application: window, page switching and the command pump

use crossbeam_channel::Receiver;
use makepad_widgets::*;
use once_cell::sync::OnceCell;
use std::sync::Arc;

use kbd_home::data::HOME_MENU;
use kbd_home::{
    command_channel, EnglishStrings, HomeCommand, HomeScreenWidgetRefExt, KbdHomeApp,
    StringResolver,
};
use kbd_prefs::PlatformStatusSource;
use kbd_settings_shell::{drain_commands, Args, Services, SystemUrlLauncher};
use kbd_widgets::{AppRegistry, KbdApp, Navigator, PageRouter, Route};

static CLI_ARGS: OnceCell<Args> = OnceCell::new();

/// Store parsed arguments for the app to pick up on startup
pub fn set_cli_args(args: Args) {
    if CLI_ARGS.set(args).is_err() {
        log::warn!("CLI args already set, ignoring");
    }
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use kbd_widgets::theme::*;
    use kbd_home::screen::design::HomeScreen;

    BackButton = <Button> {
        width: Fit, height: 32
        padding: {left: 12, right: 12}
        text: "Back"
        draw_text: {
            instance dark_mode: 0.0
            text_style: { font_size: 11.0 }
            fn get_color(self) -> vec4 {
                return mix((ACCENT_BLUE), (ACCENT_BLUE_DARK), self.dark_mode);
            }
        }
        draw_bg: {
            instance hover: 0.0
            instance dark_mode: 0.0
            fn pixel(self) -> vec4 {
                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, 4.0);
                let hover = mix((HOVER_BG), (HOVER_BG_DARK), self.dark_mode);
                sdf.fill(mix(vec4(0.0, 0.0, 0.0, 0.0), hover, self.hover));
                return sdf.result;
            }
        }
        animator: {
            hover = {
                default: off,
                off = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 0.0} } }
                on = { from: {all: Forward {duration: 0.15}} apply: { draw_bg: {hover: 1.0} } }
            }
        }
    }

    App = {{App}} {
        ui: <Window> {
            window: { inner_size: vec2(900, 700), title: "Keyboard Settings" }
            pass: { clear_color: (DARK_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Overlay

                home_page = <HomeScreen> {}

                // Sections are opaque routes; they open onto a placeholder
                route_page = <View> {
                    width: Fill, height: Fill
                    flow: Down
                    visible: false
                    show_bg: true
                    draw_bg: {
                        instance dark_mode: 0.0
                        fn pixel(self) -> vec4 {
                            return mix((DARK_BG), (DARK_BG_DARK), self.dark_mode);
                        }
                    }

                    route_header = <View> {
                        width: Fill, height: Fit
                        padding: {left: 16, right: 24, top: 16, bottom: 12}
                        flow: Right
                        spacing: 12
                        align: {y: 0.5}

                        back_button = <BackButton> {}

                        route_title = <Label> {
                            draw_text: {
                                instance dark_mode: 0.0
                                text_style: { font_size: 20.0 }
                                fn get_color(self) -> vec4 {
                                    return mix((TEXT_PRIMARY), (TEXT_PRIMARY_DARK), self.dark_mode);
                                }
                            }
                        }
                    }

                    route_path = <Label> {
                        margin: {left: 24}
                        draw_text: {
                            instance dark_mode: 0.0
                            text_style: { font_size: 11.0 }
                            fn get_color(self) -> vec4 {
                                return mix((TEXT_SECONDARY), (TEXT_SECONDARY_DARK), self.dark_mode);
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Live, LiveHook)]
pub struct App {
    #[live]
    ui: WidgetRef,

    #[rust]
    initialized: bool,

    #[rust]
    router: PageRouter,

    #[rust]
    registry: AppRegistry,

    #[rust]
    commands: Option<Receiver<HomeCommand>>,

    #[rust]
    status: Option<Arc<dyn PlatformStatusSource>>,

    #[rust]
    launcher: SystemUrlLauncher,
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        kbd_widgets::live_design(cx);
        <KbdHomeApp as KbdApp>::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        if !self.initialized {
            self.initialized = true;
            self.initialize(cx);
        }

        self.ui.handle_event(cx, event, &mut Scope::empty());

        // Commands may be queued by clicks or by the home screen's poll
        self.pump_commands(cx);

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        if self.ui.button(ids!(body.route_page.route_header.back_button)).clicked(actions) {
            if self.router.back() {
                self.show_current_page(cx);
            }
        }
    }
}

impl App {
    fn initialize(&mut self, cx: &mut Cx) {
        let args = cli_args();

        self.ui.apply_over(cx, live! {
            window: { inner_size: (dvec2(args.width as f64, args.height as f64)) }
        });

        self.registry.register(KbdHomeApp::info());
        log::debug!("Registered {} page(s)", self.registry.len());

        let services = Services::from_args(&args);
        let (tx, rx) = command_channel();
        let model = services.home_model(tx);

        let home = self.ui.home_screen(ids!(body.home_page));
        home.init(cx, model, Arc::clone(&services.probe));

        self.commands = Some(rx);
        self.status = Some(Arc::clone(&services.status));

        if args.dark_mode {
            self.apply_dark_mode(cx, 1.0);
        }

        if let Some(route) = args.start_route() {
            self.router.navigate(route);
        }

        self.show_current_page(cx);
        log::info!("Keyboard settings ready (ime engine: {})", args.ime);
    }

    fn pump_commands(&mut self, cx: &mut Cx) {
        let (Some(commands), Some(status)) = (&self.commands, &self.status) else {
            return;
        };
        let before = self.router.current();
        drain_commands(commands, &mut self.router, &self.launcher, status.as_ref());
        if self.router.current() != before {
            self.show_current_page(cx);
        }
    }

    fn show_current_page(&mut self, cx: &mut Cx) {
        let route = self.router.current();
        let on_home = route == Route::Home;

        let home = self.ui.home_screen(ids!(body.home_page));
        if on_home {
            home.resume(cx);
        } else {
            home.suspend(cx);
        }
        home.set_visible(cx, on_home);

        self.ui.view(ids!(body.route_page)).set_visible(cx, !on_home);
        if !on_home {
            self.ui
                .label(ids!(body.route_page.route_header.route_title))
                .set_text(cx, &route_title(route));
            self.ui
                .label(ids!(body.route_page.route_path))
                .set_text(cx, route.path());
        }

        self.ui.redraw(cx);
    }

    fn apply_dark_mode(&mut self, cx: &mut Cx, dm: f64) {
        self.ui.home_screen(ids!(body.home_page)).update_dark_mode(cx, dm);

        self.ui.view(ids!(body.route_page)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dm) }
        });
        self.ui.button(ids!(body.route_page.route_header.back_button)).apply_over(cx, live! {
            draw_bg: { dark_mode: (dm) }
            draw_text: { dark_mode: (dm) }
        });
        self.ui.label(ids!(body.route_page.route_header.route_title)).apply_over(cx, live! {
            draw_text: { dark_mode: (dm) }
        });
        self.ui.label(ids!(body.route_page.route_path)).apply_over(cx, live! {
            draw_text: { dark_mode: (dm) }
        });

        self.ui.redraw(cx);
    }
}

/// Title of the placeholder page for `route`, taken from its menu label
fn route_title(route: Route) -> String {
    HOME_MENU
        .iter()
        .find(|entry| entry.route == route)
        .map(|entry| EnglishStrings.resolve(entry.label))
        .unwrap_or_else(|| route.path().to_string())
}

app_main!(App);
