mod navigation;
mod status_bar;

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::event::EventDraft;
use crate::models::settings::CalendarConfig;
use crate::services::calendar::{Calendar, CalendarError};
use crate::services::surface::{SceneSurface, SurfaceMetrics};
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::{MonthView, MonthViewResponse};

const MIN_ROOT_WIDTH: f32 = 480.0;
const MIN_ROOT_HEIGHT: f32 = 400.0;

pub struct CalendarApp {
    calendar: Calendar<SceneSurface>,
    /// Currently applied theme colors
    theme: CalendarTheme,
    /// Event whose segment was under the pointer last frame
    hovered_event: Option<usize>,
    /// Written by calendar listeners, shown in the status bar
    status: Rc<RefCell<Option<String>>>,
    last_error: Option<String>,
}

impl CalendarApp {
    pub fn min_window_size() -> [f32; 2] {
        [MIN_ROOT_WIDTH, MIN_ROOT_HEIGHT]
    }

    /// Build the app around a calendar for `config`, adding every draft that
    /// validates. Invalid drafts are logged and skipped.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: CalendarConfig,
        drafts: Vec<EventDraft>,
    ) -> Result<Self, CalendarError> {
        let theme = CalendarTheme::from_mode(config.mode);
        theme.apply_to_context(&cc.egui_ctx);

        // Zero metrics until the first frame measures the real layout.
        let surface = SceneSurface::new(SurfaceMetrics::unmeasured());
        let mut calendar = Calendar::new(config, surface)?;

        let status: Rc<RefCell<Option<String>>> = Rc::default();
        let day_status = Rc::clone(&status);
        calendar
            .on_day_click(move |date, events| {
                log::info!("clicked {} ({} events)", date, events.len());
                let names: Vec<&str> = events.iter().map(|e| e.desc()).collect();
                *day_status.borrow_mut() = Some(if names.is_empty() {
                    format!("{}: no events", date.format("%a %-d %b %Y"))
                } else {
                    format!("{}: {}", date.format("%a %-d %b %Y"), names.join(", "))
                });
            })
            .on_month_changed(|month, year| {
                log::debug!("month changed to {}-{:02}", year, month);
            })
            .on_event_hover(|event| log::trace!("hover enter: {}", event.desc()))
            .on_event_hover_exit(|event| log::trace!("hover exit: {}", event.desc()));

        let valid: Vec<EventDraft> = drafts
            .into_iter()
            .filter(|draft| match draft.clone().validate() {
                Ok(_) => true,
                Err(err) => {
                    log::warn!("skipping event {:?}: {}", draft.desc, err);
                    false
                }
            })
            .collect();
        let added = calendar.add_events(valid)?;
        log::info!("loaded {} events", added.len());

        Ok(Self {
            calendar,
            theme,
            hovered_event: None,
            status,
            last_error: None,
        })
    }

    fn report(&mut self, result: Result<(), CalendarError>) {
        match result {
            Ok(()) => self.last_error = None,
            Err(err) => {
                log::error!("calendar update failed: {}", err);
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Redraw when the available space changed since the last draw.
    fn sync_metrics(&mut self, metrics: SurfaceMetrics) {
        if self.calendar.surface().metrics() == metrics {
            return;
        }
        self.calendar.surface_mut().set_metrics(metrics);
        let result = self.calendar.draw();
        self.report(result);
    }

    fn handle_view_response(&mut self, response: MonthViewResponse) {
        if let Some(day) = response.clicked_day {
            if self.calendar.day_clicked(day) {
                if let Some(date) = self.calendar.displayed_month().date(day) {
                    self.calendar.clear_selection();
                    self.calendar.select_date(date);
                }
            }
        }

        if response.hovered_event != self.hovered_event {
            if let Some(previous) = self.hovered_event {
                self.calendar.event_hover_exit(previous);
            }
            if let Some(current) = response.hovered_event {
                self.calendar.event_hover_enter(current);
            }
            self.hovered_event = response.hovered_event;
        }
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("month_header").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.show_status_bar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let metrics = MonthView::measure(ui, self.calendar.surface().weeks().len());
            self.sync_metrics(metrics);
            let response = MonthView::show(ui, &self.calendar, &self.theme);
            self.handle_view_response(response);
        });
    }
}
