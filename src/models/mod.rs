// Module exports for models

pub mod calendar_month;
pub mod event;
pub mod grid;
pub mod settings;
