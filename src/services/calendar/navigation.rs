use super::{Calendar, CalendarError};
use crate::models::calendar_month::CalendarMonth;
use crate::services::surface::PresentationSurface;

impl<S: PresentationSurface> Calendar<S> {
    /// Advance one month (December wraps to January of the next year) and redraw.
    pub fn load_next_month(&mut self) -> Result<(), CalendarError> {
        self.show_month(self.month.next())
    }

    /// Go back one month (January wraps to December of the previous year) and redraw.
    pub fn load_previous_month(&mut self) -> Result<(), CalendarError> {
        self.show_month(self.month.previous())
    }

    /// Jump to `month` and redraw.
    ///
    /// Month-changed listeners run only after a successful draw. On failure
    /// the calendar stays on its previous month.
    pub fn show_month(&mut self, month: CalendarMonth) -> Result<(), CalendarError> {
        let previous = self.month;
        self.month = month;
        if let Err(err) = self.draw() {
            self.month = previous;
            return Err(err);
        }

        log::info!("showing {}-{:02}", month.year, month.month1());
        for listener in &mut self.listeners.month_changed {
            listener(month.month1(), month.year);
        }
        Ok(())
    }
}
