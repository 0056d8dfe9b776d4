pub mod month_view;
pub mod utils;

pub use month_view::{MonthView, MonthViewResponse};
