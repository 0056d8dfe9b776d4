use chrono::NaiveDate;

use crate::models::calendar_month::CalendarMonth;
use crate::models::event::Event;

pub type DayClickListener = Box<dyn FnMut(NaiveDate, &[&Event])>;
pub type EventHoverListener = Box<dyn FnMut(&Event)>;
/// Receives the 1-based month and the year.
pub type MonthChangedListener = Box<dyn FnMut(u32, i32)>;
pub type BeforeDrawHook = Box<dyn FnMut(CalendarMonth) -> anyhow::Result<()>>;

/// Registered callbacks, invoked in registration order.
#[derive(Default)]
pub struct CalendarListeners {
    pub(super) day_click: Vec<DayClickListener>,
    pub(super) event_hover: Vec<EventHoverListener>,
    pub(super) event_hover_exit: Vec<EventHoverListener>,
    pub(super) month_changed: Vec<MonthChangedListener>,
    pub(super) before_draw: Vec<BeforeDrawHook>,
}

impl std::fmt::Debug for CalendarListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarListeners")
            .field("day_click", &self.day_click.len())
            .field("event_hover", &self.event_hover.len())
            .field("event_hover_exit", &self.event_hover_exit.len())
            .field("month_changed", &self.month_changed.len())
            .field("before_draw", &self.before_draw.len())
            .finish()
    }
}
