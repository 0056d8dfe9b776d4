//! Calendar facade.
//! Owns the event list, the current month, the selection and the disabled
//! dates, and redraws the month onto a presentation surface after every change.

mod draw;
mod error;
mod listeners;
mod navigation;
mod selection;

pub use error::CalendarError;
pub use listeners::{
    BeforeDrawHook, CalendarListeners, DayClickListener, EventHoverListener, MonthChangedListener,
};

use chrono::NaiveDate;

use crate::models::calendar_month::CalendarMonth;
use crate::models::event::{Event, EventDraft};
use crate::models::settings::CalendarConfig;
use crate::services::layout::MonthLayout;
use crate::services::skeleton::DisabledDates;
use crate::services::surface::PresentationSurface;

pub struct Calendar<S> {
    config: CalendarConfig,
    surface: S,
    month: CalendarMonth,
    events: Vec<Event>,
    disabled: DisabledDates,
    selection: Vec<NaiveDate>,
    listeners: CalendarListeners,
    layout: Option<MonthLayout>,
}

impl<S: PresentationSurface> Calendar<S> {
    /// Create a calendar showing the configured month (or the current one).
    ///
    /// Nothing is drawn until the first [`Calendar::draw`] or mutation.
    pub fn new(config: CalendarConfig, surface: S) -> Result<Self, CalendarError> {
        let month = config.initial_month_now();
        Self::with_month(config, surface, month)
    }

    /// Create a calendar showing `month`, ignoring the configured month/year.
    pub fn with_month(
        config: CalendarConfig,
        surface: S,
        month: CalendarMonth,
    ) -> Result<Self, CalendarError> {
        config.validate().map_err(CalendarError::InvalidConfig)?;
        let disabled = config.disabled_dates.iter().copied().collect();

        log::debug!(
            "calendar created for {}-{:02}",
            month.year,
            month.month1()
        );

        Ok(Self {
            config,
            surface,
            month,
            events: Vec::new(),
            disabled,
            selection: Vec::new(),
            listeners: CalendarListeners::default(),
            layout: None,
        })
    }

    /// Validate and append an event, then redraw. Returns the event's index.
    pub fn add_event(&mut self, draft: EventDraft) -> Result<usize, CalendarError> {
        let event = draft.validate()?;
        self.events.push(event);
        self.draw()?;
        Ok(self.events.len() - 1)
    }

    /// Validate every draft first; on success append them in order and redraw once.
    pub fn add_events<I>(&mut self, drafts: I) -> Result<std::ops::Range<usize>, CalendarError>
    where
        I: IntoIterator<Item = EventDraft>,
    {
        let events = drafts
            .into_iter()
            .map(EventDraft::validate)
            .collect::<Result<Vec<_>, _>>()?;

        let first = self.events.len();
        self.events.extend(events);
        self.draw()?;
        Ok(first..self.events.len())
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn event(&self, index: usize) -> Option<&Event> {
        self.events.get(index)
    }

    /// Events touching any day between the two dates (inclusive, either
    /// order), in insertion order.
    pub fn events_during(&self, from: NaiveDate, to: NaiveDate) -> Vec<&Event> {
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        self.events
            .iter()
            .filter(|event| event.overlaps(from, to))
            .collect()
    }

    /// The displayed month as (1-based month, year).
    pub fn current_month(&self) -> (u32, i32) {
        (self.month.month1(), self.month.year)
    }

    pub fn displayed_month(&self) -> CalendarMonth {
        self.month
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Layout from the most recent successful draw.
    pub fn layout(&self) -> Option<&MonthLayout> {
        self.layout.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Add a date to the disabled set. Takes effect on the next draw.
    ///
    /// Returns `false` when the date was already disabled.
    pub fn disable_date(&mut self, date: NaiveDate) -> bool {
        let inserted = self.disabled.insert(date);
        if inserted {
            log::debug!("disabled {}", date);
        }
        inserted
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.disabled.contains(date)
    }

    pub fn disabled_dates(&self) -> &DisabledDates {
        &self.disabled
    }

    /// Notify hover listeners that the pointer entered the event's segment.
    pub fn event_hover_enter(&mut self, index: usize) {
        if let Some(event) = self.events.get(index) {
            for listener in &mut self.listeners.event_hover {
                listener(event);
            }
        }
    }

    /// Notify hover-exit listeners that the pointer left the event's segment.
    pub fn event_hover_exit(&mut self, index: usize) {
        if let Some(event) = self.events.get(index) {
            for listener in &mut self.listeners.event_hover_exit {
                listener(event);
            }
        }
    }

    /// Handle a click on `day` of the current month.
    ///
    /// Returns `false` when the day is outside the month, disabled, or the
    /// month has not been drawn yet; no listener runs in that case.
    pub fn day_clicked(&mut self, day: u32) -> bool {
        let Some(date) = self.month.date(day) else {
            return false;
        };
        let Some(cell) = self.layout.as_ref().and_then(|l| l.skeleton.cell(day)) else {
            return false;
        };
        if cell.disabled {
            return false;
        }

        let events: Vec<&Event> = cell
            .events
            .iter()
            .filter_map(|&index| self.events.get(index))
            .collect();
        for listener in &mut self.listeners.day_click {
            listener(date, &events);
        }
        true
    }

    pub fn on_day_click<F>(&mut self, listener: F) -> &mut Self
    where
        F: FnMut(NaiveDate, &[&Event]) + 'static,
    {
        self.listeners.day_click.push(Box::new(listener));
        self
    }

    pub fn on_event_hover<F>(&mut self, listener: F) -> &mut Self
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners.event_hover.push(Box::new(listener));
        self
    }

    pub fn on_event_hover_exit<F>(&mut self, listener: F) -> &mut Self
    where
        F: FnMut(&Event) + 'static,
    {
        self.listeners.event_hover_exit.push(Box::new(listener));
        self
    }

    /// `listener` receives the 1-based month and the year.
    pub fn on_month_changed<F>(&mut self, listener: F) -> &mut Self
    where
        F: FnMut(u32, i32) + 'static,
    {
        self.listeners.month_changed.push(Box::new(listener));
        self
    }

    /// Run `hook` before every draw. An error aborts that draw.
    pub fn before_draw<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(CalendarMonth) -> anyhow::Result<()> + 'static,
    {
        self.listeners.before_draw.push(Box::new(hook));
        self
    }
}

impl<S> std::fmt::Debug for Calendar<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calendar")
            .field("month", &self.month)
            .field("events", &self.events.len())
            .field("selection", &self.selection)
            .field("disabled", &self.disabled.len())
            .field("listeners", &self.listeners)
            .finish()
    }
}
