//! Status bar showing the last clicked day's events, or the last error.

use egui::{Color32, RichText};

use super::CalendarApp;

impl CalendarApp {
    pub(super) fn show_status_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(error) = &self.last_error {
                ui.label(RichText::new(error).color(Color32::from_rgb(200, 60, 60)));
                return;
            }

            let status = self.status.borrow();
            match status.as_deref() {
                Some(text) => ui.label(text),
                None => ui.label(
                    RichText::new("Click a day to list its events")
                        .color(self.theme.text.gamma_multiply(0.6)),
                ),
            };

            let month = self.calendar.displayed_month();
            let count = match (month.date(1), month.date(month.last_day())) {
                (Some(first), Some(last)) => self.calendar.events_during(first, last).len(),
                _ => 0,
            };
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("{} events this month", count));
            });
        });
    }
}
