use thiserror::Error;

use crate::models::event::ValidationError;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid calendar configuration: {0}")]
    InvalidConfig(String),

    /// A before-draw hook failed; the previous rendering was left in place.
    #[error("before-draw hook failed: {0:#}")]
    PreDraw(anyhow::Error),
}
