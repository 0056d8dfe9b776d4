mod app;
pub mod theme;
mod views;

pub use app::CalendarApp;
pub use views::{MonthView, MonthViewResponse};
