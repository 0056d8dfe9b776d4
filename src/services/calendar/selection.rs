use chrono::{Datelike, NaiveDate};

use super::Calendar;
use crate::services::surface::PresentationSurface;

impl<S: PresentationSurface> Calendar<S> {
    /// Add `date` to the selection. Selecting twice keeps one entry, and a
    /// date outside the displayed month is ignored.
    ///
    /// Does not redraw; the drawn month's cell is marked directly.
    pub fn select_date(&mut self, date: NaiveDate) {
        if !self.month.contains(date) || self.selection.contains(&date) {
            return;
        }
        self.selection.push(date);
        self.mark_cell(date, true);
    }

    /// Select every date between the two dates (inclusive, either order).
    ///
    /// Does nothing unless both dates fall in the displayed month.
    pub fn select_date_range(&mut self, from: NaiveDate, to: NaiveDate) {
        if !self.month.contains(from) || !self.month.contains(to) {
            return;
        }
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        for date in from.iter_days().take_while(|date| *date <= to) {
            self.select_date(date);
        }
    }

    pub fn clear_selection(&mut self) {
        for date in std::mem::take(&mut self.selection) {
            self.mark_cell(date, false);
        }
    }

    /// Selected dates in the order they were selected.
    pub fn selection(&self) -> &[NaiveDate] {
        &self.selection
    }

    pub fn is_selected(&self, date: NaiveDate) -> bool {
        self.selection.contains(&date)
    }

    fn mark_cell(&mut self, date: NaiveDate, selected: bool) {
        if !self.month.contains(date) {
            return;
        }
        if self.layout.is_some() {
            self.surface.set_day_selected(date.day(), selected);
        }
        if let Some(cell) = self
            .layout
            .as_mut()
            .and_then(|layout| layout.skeleton.cell_mut(date.day()))
        {
            cell.selected = selected;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar_month::CalendarMonth;
    use crate::models::settings::CalendarConfig;
    use crate::services::surface::SceneSurface;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, m, d).unwrap()
    }

    fn drawn() -> Calendar<SceneSurface> {
        let mut cal = Calendar::with_month(
            CalendarConfig::default(),
            SceneSurface::default(),
            CalendarMonth::from_month1(2025, 3).unwrap(),
        )
        .unwrap();
        cal.draw().unwrap();
        cal
    }

    fn selected_cell(cal: &Calendar<SceneSurface>, day: u32) -> bool {
        cal.layout().unwrap().skeleton.cell(day).unwrap().selected
    }

    fn painted_selected(cal: &Calendar<SceneSurface>, day: u32) -> bool {
        cal.surface()
            .weeks()
            .iter()
            .flat_map(|week| week.cells.iter())
            .any(|cell| cell.day == Some(day) && cell.selected)
    }

    #[test]
    fn test_select_date_deduplicates() {
        let mut cal = drawn();
        cal.select_date(date(3, 7));
        cal.select_date(date(3, 2));
        cal.select_date(date(3, 7));
        assert_eq!(cal.selection(), &[date(3, 7), date(3, 2)]);
        assert!(selected_cell(&cal, 7));
    }

    #[test]
    fn test_select_range_leaving_month_ignored() {
        let mut cal = drawn();
        cal.select_date_range(date(3, 30), date(4, 2));
        assert!(cal.selection().is_empty());
        assert!(!selected_cell(&cal, 30));

        cal.select_date_range(date(2, 27), date(3, 2));
        assert!(cal.selection().is_empty());
    }

    #[test]
    fn test_select_range_inclusive() {
        let mut cal = drawn();
        cal.select_date_range(date(3, 29), date(3, 31));
        assert_eq!(cal.selection(), &[date(3, 29), date(3, 30), date(3, 31)]);
        assert!(selected_cell(&cal, 30));
    }

    #[test]
    fn test_select_outside_month_ignored() {
        let mut cal = drawn();
        cal.select_date(date(4, 1));
        cal.select_date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(cal.selection().is_empty());
    }

    #[test]
    fn test_reversed_range_is_ordered() {
        let mut cal = drawn();
        cal.select_date_range(date(3, 9), date(3, 8));
        assert_eq!(cal.selection(), &[date(3, 8), date(3, 9)]);
    }

    #[test]
    fn test_selection_reaches_surface_without_redraw() {
        let mut cal = drawn();
        cal.select_date(date(3, 5));
        assert!(painted_selected(&cal, 5));

        cal.clear_selection();
        assert!(!painted_selected(&cal, 5));
    }

    #[test]
    fn test_clear_selection_unmarks_cells() {
        let mut cal = drawn();
        cal.select_date(date(3, 5));
        cal.clear_selection();
        assert!(cal.selection().is_empty());
        assert!(!selected_cell(&cal, 5));
    }

    #[test]
    fn test_selection_survives_redraw() {
        let mut cal = drawn();
        cal.select_date(date(3, 5));
        cal.draw().unwrap();
        assert!(selected_cell(&cal, 5));
    }
}
