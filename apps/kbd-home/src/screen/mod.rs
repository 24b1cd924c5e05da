//! Home screen widget
//!
//! Split into:
//! - `design.rs` - UI layout and styling (live_design! DSL)
//! - this file - event handling and binding of [`HomeView`] to widgets
//!
//! All state lives in [`HomeScreenModel`]. The widget forwards clicks to the
//! model, polls the status probe on a timer and redraws whenever the model
//! reports a change. Menu rows are drawn by index from the composed
//! [`HomeView::menu`], one `PortalList` template per icon.

pub mod design;

use makepad_widgets::*;
use std::sync::Arc;

use kbd_prefs::StatusProbe;
use kbd_widgets::TimerControl;

use crate::banner::Severity;
use crate::composer::{HomeView, MenuItemView, ToggleIcon};
use crate::data::MenuIcon;
use crate::model::HomeScreenModel;

/// Seconds between status polls
const POLL_INTERVAL: f64 = 0.5;

/// `PortalList` template drawing a row with `icon`
///
/// Templates in `design.rs` are named after [`MenuIcon::name`].
fn row_template(icon: Option<MenuIcon>) -> LiveId {
    match icon {
        Some(icon) => LiveId::from_str(icon.name()),
        None => live_id!(no_icon),
    }
}

/// Register live design for this module
pub fn live_design(cx: &mut Cx) {
    design::live_design(cx);
}

#[derive(Live, LiveHook, Widget)]
pub struct HomeScreen {
    #[deref]
    view: View,

    #[rust]
    model: Option<HomeScreenModel>,

    #[rust]
    probe: Option<Arc<StatusProbe>>,

    #[rust]
    poll_timer: Timer,

    /// Rows of the last applied view
    #[rust]
    menu_items: Vec<MenuItemView>,

    #[rust]
    dark_mode: f64,
}

impl Widget for HomeScreen {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        self.view.handle_event(cx, event, scope);

        match event {
            Event::AppGotFocus => self.set_foreground(cx, true),
            Event::AppLostFocus => self.set_foreground(cx, false),
            _ => {}
        }

        if self.poll_timer.is_event(event).is_some() {
            self.poll(cx);
        }

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        let dirty = match &self.model {
            Some(model) => {
                if self.view.button(ids!(content.error_banner)).clicked(actions)
                    || self.view.button(ids!(content.warning_banner)).clicked(actions)
                {
                    model.activate_banner();
                }

                if self.view.button(ids!(content.info_card.info_header.expand_button)).clicked(actions)
                    || self.view.button(ids!(content.info_card.info_header.collapse_button)).clicked(actions)
                {
                    model.toggle_info_panel();
                }

                if self.view.button(ids!(content.info_card.info_body.feedback_link)).clicked(actions) {
                    model.open_feedback_thread();
                }

                let menu_list = self.view.portal_list(ids!(content.menu_card.menu_list));
                for (index, row) in menu_list.items_with_actions(actions) {
                    if row.as_button().clicked(actions) {
                        model.activate_menu_entry(index);
                    }
                }

                model.take_dirty()
            }
            None => false,
        };

        if dirty {
            self.apply_view(cx);
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        while let Some(item) = self.view.draw_walk(cx, scope, walk).step() {
            if let Some(mut list) = item.as_portal_list().borrow_mut() {
                list.set_item_range(cx, 0, self.menu_items.len());

                while let Some(item_id) = list.next_visible_item(cx) {
                    let Some(entry) = self.menu_items.get(item_id) else {
                        continue;
                    };
                    let row = list.item(cx, item_id, row_template(entry.icon));
                    row.set_text(cx, &entry.label);
                    let dm = self.dark_mode;
                    row.apply_over(cx, live! {
                        draw_bg: { dark_mode: (dm) }
                        draw_icon: { dark_mode: (dm) }
                        draw_text: { dark_mode: (dm) }
                    });
                    row.draw_all(cx, scope);
                }
            }
        }
        DrawStep::done()
    }
}

impl HomeScreen {
    fn poll(&mut self, cx: &mut Cx) {
        if let Some(probe) = &self.probe {
            probe.poll();
        }
        if self.model.as_ref().map_or(false, |m| m.take_dirty()) {
            self.apply_view(cx);
        }
    }

    fn set_foreground(&mut self, cx: &mut Cx, foreground: bool) {
        if let Some(probe) = &self.probe {
            probe.set_foreground(foreground);
        }
        if self.model.as_ref().map_or(false, |m| m.take_dirty()) {
            self.apply_view(cx);
        }
    }

    /// Push the model's current render output into the widget tree
    fn apply_view(&mut self, cx: &mut Cx) {
        let Some(home) = self.model.as_ref().map(|m| m.render()) else {
            return;
        };

        self.view.label(ids!(header.title)).set_text(cx, &home.title);
        self.apply_banner(cx, &home);
        self.apply_info_panel(cx, &home);

        // Drawn in draw_walk, one row per entry
        self.menu_items = home.menu;

        self.view.redraw(cx);
    }

    fn apply_banner(&mut self, cx: &mut Cx, home: &HomeView) {
        let error = self.view.button(ids!(content.error_banner));
        let warning = self.view.button(ids!(content.warning_banner));

        let severity = home.banner.as_ref().map(|b| b.severity);
        if let Some(banner) = &home.banner {
            match banner.severity {
                Severity::Error => error.set_text(cx, &banner.text),
                Severity::Warning => warning.set_text(cx, &banner.text),
            }
        }
        error.set_visible(cx, severity == Some(Severity::Error));
        warning.set_visible(cx, severity == Some(Severity::Warning));
    }

    fn apply_info_panel(&mut self, cx: &mut Cx, home: &HomeView) {
        let panel = &home.info_panel;
        self.view
            .label(ids!(content.info_card.info_header.info_title))
            .set_text(cx, &panel.title);
        self.view
            .button(ids!(content.info_card.info_header.expand_button))
            .set_visible(cx, panel.toggle_icon == ToggleIcon::ChevronDown);
        self.view
            .button(ids!(content.info_card.info_header.collapse_button))
            .set_visible(cx, panel.toggle_icon == ToggleIcon::ChevronUp);

        let body_view = self.view.view(ids!(content.info_card.info_body));
        let Some(body) = &panel.body else {
            body_view.set_visible(cx, false);
            return;
        };

        let intro = [
            self.view.label(ids!(content.info_card.info_body.intro_0)),
            self.view.label(ids!(content.info_card.info_body.intro_1)),
            self.view.label(ids!(content.info_card.info_body.intro_2)),
        ];
        for (label, text) in intro.iter().zip(&body.intro) {
            label.set_text(cx, text);
        }

        self.view
            .button(ids!(content.info_card.info_body.feedback_link))
            .set_text(cx, &body.feedback.label);
        self.view
            .label(ids!(content.info_card.info_body.version_line))
            .set_text(cx, &body.version_line);
        self.view
            .label(ids!(content.info_card.info_body.unavailable_heading))
            .set_text(cx, &body.unavailable_heading);

        let features: Vec<String> = body
            .unavailable_features
            .iter()
            .map(|f| format!("• {}", f))
            .collect();
        self.view
            .label(ids!(content.info_card.info_body.unavailable_list))
            .set_text(cx, &features.join("\n"));
        self.view
            .label(ids!(content.info_card.info_body.closing_note))
            .set_text(cx, &body.closing_note);

        body_view.set_visible(cx, true);
    }

    fn update_dark_mode(&mut self, cx: &mut Cx, dm: f64) {
        self.view.apply_over(cx, live! {
            draw_bg: { dark_mode: (dm) }
        });
        self.view.label(ids!(header.title)).apply_over(cx, live! {
            draw_text: { dark_mode: (dm) }
        });

        for id in [ids!(content.error_banner), ids!(content.warning_banner)] {
            self.view.button(id).apply_over(cx, live! {
                draw_bg: { dark_mode: (dm) }
                draw_text: { dark_mode: (dm) }
            });
        }

        for id in [ids!(content.info_card), ids!(content.menu_card)] {
            self.view.view(id).apply_over(cx, live! {
                draw_bg: { dark_mode: (dm) }
            });
        }
        self.view.label(ids!(content.info_card.info_header.info_title)).apply_over(cx, live! {
            draw_text: { dark_mode: (dm) }
        });
        for id in [
            ids!(content.info_card.info_header.expand_button),
            ids!(content.info_card.info_header.collapse_button),
        ] {
            self.view.button(id).apply_over(cx, live! {
                draw_bg: { dark_mode: (dm) }
                draw_icon: { dark_mode: (dm) }
            });
        }
        for id in [
            ids!(content.info_card.info_body.intro_0),
            ids!(content.info_card.info_body.intro_1),
            ids!(content.info_card.info_body.intro_2),
            ids!(content.info_card.info_body.version_line),
            ids!(content.info_card.info_body.unavailable_heading),
            ids!(content.info_card.info_body.unavailable_list),
            ids!(content.info_card.info_body.closing_note),
        ] {
            self.view.label(id).apply_over(cx, live! {
                draw_text: { dark_mode: (dm) }
            });
        }
        self.view
            .button(ids!(content.info_card.info_body.feedback_link))
            .apply_over(cx, live! {
                draw_text: { dark_mode: (dm) }
            });

        // Menu rows pick this up when drawn
        self.dark_mode = dm;

        self.view.redraw(cx);
    }
}

impl HomeScreenRef {
    /// Attach the model and start polling
    pub fn init(&self, cx: &mut Cx, model: HomeScreenModel, probe: Arc<StatusProbe>) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.model = Some(model);
            inner.probe = Some(probe);
            inner.poll_timer = cx.start_interval(POLL_INTERVAL);
            inner.apply_view(cx);
            ::log::info!("HomeScreen initialized");
        }
    }

    pub fn update_dark_mode(&self, cx: &mut Cx, dm: f64) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.update_dark_mode(cx, dm);
        }
    }

    /// Page shown: subscribe again and restart polling
    pub fn resume(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            if let Some(model) = inner.model.as_mut() {
                model.resume();
            }
        }
        self.start_timers(cx);
    }

    /// Page hidden: stop polling and release the model's subscriptions
    pub fn suspend(&self, cx: &mut Cx) {
        self.stop_timers(cx);
        if let Some(mut inner) = self.borrow_mut() {
            if let Some(model) = inner.model.as_mut() {
                model.suspend();
            }
        }
    }
}

impl TimerControl for HomeScreenRef {
    fn stop_timers(&self, cx: &mut Cx) {
        if let Some(inner) = self.borrow_mut() {
            cx.stop_timer(inner.poll_timer);
        }
    }

    fn start_timers(&self, cx: &mut Cx) {
        if let Some(mut inner) = self.borrow_mut() {
            cx.stop_timer(inner.poll_timer);
            inner.poll_timer = cx.start_interval(POLL_INTERVAL);
            inner.poll(cx);
        }
    }
}
