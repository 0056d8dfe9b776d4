use egui::RichText;

use super::CalendarApp;

impl CalendarApp {
    /// Title bar with previous/next month links.
    pub(super) fn show_header(&mut self, ui: &mut egui::Ui) {
        let Some(labels) = self.calendar.surface().labels().cloned() else {
            return;
        };

        ui.horizontal(|ui| {
            if ui.button(format!("◀ {}", labels.previous)).clicked() {
                self.navigate_previous();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(format!("{} ▶", labels.next)).clicked() {
                    self.navigate_next();
                }
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new(&labels.title).size(20.0).strong());
                });
            });
        });

        let input = ui.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft),
                i.key_pressed(egui::Key::ArrowRight),
            )
        });
        match input {
            (true, false) => self.navigate_previous(),
            (false, true) => self.navigate_next(),
            _ => {}
        }
    }

    pub(super) fn navigate_previous(&mut self) {
        let result = self.calendar.load_previous_month();
        self.report(result);
    }

    pub(super) fn navigate_next(&mut self) {
        let result = self.calendar.load_next_month();
        self.report(result);
    }
}
