// Month Grid Library
// Month-grid calendar construction and event-lane layout, plus the egui front end

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;

pub use models::calendar_month::CalendarMonth;
pub use models::event::{Event, EventDraft, ValidationError};
pub use models::settings::{CalendarConfig, ThemeMode};
pub use services::calendar::{Calendar, CalendarError};
pub use services::surface::{MeasurementPort, PresentationSurface, SceneSurface, SurfaceMetrics};
