//! Error types for schedule-grid operations.
//!
//! Only configuration and input decoding can fail. Placing events never
//! returns an error: collisions are resolved by opening overflow columns and
//! unresolvable events are dropped with a warning.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Invalid hour range: end hour {end} must be after start hour {start}")]
    InvalidHourRange { start: u32, end: u32 },

    #[error("Grid needs at least one day column")]
    NoDays,

    #[error("Duplicate day name: {0}")]
    DuplicateDay(String),

    #[error("Day name collides with the corner label: {0}")]
    CornerLabelClash(String),

    #[error("Input parse error: {0}")]
    Input(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
