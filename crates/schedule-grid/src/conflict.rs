//! Conflict records produced when two events claim the same grid cell.
//!
//! A conflict is informational: the incoming event is still placed, one
//! column to the right within the same day run.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the title line and metadata lines of a cell payload.
pub const LINE_SEPARATOR: char = '\n';

/// A collision between an already-placed event and an incoming one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Title of the event that already occupied the cell.
    pub existing: String,
    /// Title of the event being placed.
    pub new: String,
    /// Day name the collision happened on.
    pub day: String,
    /// Start hour requested by the incoming event.
    pub hour: u32,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} συμπίπτει με το {} την {} στις {}:00",
            self.new, self.existing, self.day, self.hour
        )
    }
}

/// The title of a cell payload: everything before the first line separator.
///
/// ```
/// use schedule_grid::conflict::title;
///
/// assert_eq!(title("Algebra\nDr. Smith\nA.101"), "Algebra");
/// assert_eq!(title(""), "");
/// ```
pub fn title(payload: &str) -> &str {
    payload.split(LINE_SEPARATOR).next().unwrap_or(payload)
}
