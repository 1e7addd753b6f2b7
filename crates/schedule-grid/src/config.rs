//! Grid configuration: hour range, day columns and labels.
//!
//! Defaults match a Greek university timetable: 08:00 to 22:00, Monday to
//! Saturday columns, with an empty Saturday column dropped on finish.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Label written into the top-left cell by default.
pub const DEFAULT_CORNER_LABEL: &str = "Ώρες \\ Ημέρες";

/// Monday through Sunday. The default columns are the first six.
pub const DEFAULT_WEEKDAY_NAMES: [&str; 7] = [
    "Δευτέρα",
    "Τρίτη",
    "Τετάρτη",
    "Πέμπτη",
    "Παρασκευή",
    "Σάββατο",
    "Κυριακή",
];

/// Configuration for a single grid. Fixed for the lifetime of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// First hour shown in the time column.
    pub start_hour: u32,
    /// Exclusive upper bound: the last row is labelled `end_hour - 1`.
    pub end_hour: u32,
    /// Ordered day column headers. Names must be unique.
    pub day_names: Vec<String>,
    /// Names for weekday numbers 1..=7 in source data (Monday first). When
    /// empty, the Greek weekday names are used if every day column is one of
    /// them; otherwise weekday N is the N-th entry of `day_names`.
    pub weekday_names: Vec<String>,
    /// Top-left cell text.
    pub corner_label: String,
    /// When the last day column carries this name and holds no events, it is
    /// dropped on finish. `None` disables the drop.
    pub end_of_week_day: Option<String>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 22,
            day_names: DEFAULT_WEEKDAY_NAMES[..6]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            weekday_names: Vec::new(),
            corner_label: DEFAULT_CORNER_LABEL.to_string(),
            end_of_week_day: Some(DEFAULT_WEEKDAY_NAMES[5].to_string()),
        }
    }
}

impl GridConfig {
    /// Build a config for the given hour range and days, keeping the default
    /// corner label and no end-of-week drop. Weekday numbers map onto `day_names`.
    pub fn new(start_hour: u32, end_hour: u32, day_names: &[&str]) -> Self {
        Self {
            start_hour,
            end_hour,
            day_names: day_names.iter().map(|d| d.to_string()).collect(),
            end_of_week_day: None,
            ..Self::default()
        }
    }

    /// Set the end-of-week day name that is dropped when empty.
    pub fn with_end_of_week_day(mut self, day: impl Into<String>) -> Self {
        self.end_of_week_day = Some(day.into());
        self
    }

    /// Number of hour rows below the header.
    pub fn hour_rows(&self) -> usize {
        self.end_hour.saturating_sub(self.start_hour) as usize
    }

    /// Resolve a weekday number (1 = Monday) to its configured name.
    ///
    /// ```
    /// use schedule_grid::GridConfig;
    ///
    /// let config = GridConfig::new(8, 12, &["Mon", "Tue"]);
    /// assert_eq!(config.weekday_name(2), Some("Tue"));
    /// assert_eq!(config.weekday_name(3), None);
    ///
    /// let config = GridConfig::new(8, 12, &["Δευτέρα", "Τετάρτη"]);
    /// assert_eq!(config.weekday_name(3), Some("Τετάρτη"));
    /// ```
    pub fn weekday_name(&self, number: i64) -> Option<&str> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        if !self.weekday_names.is_empty() {
            return self.weekday_names.get(index).map(String::as_str);
        }
        let greek_days = self
            .day_names
            .iter()
            .all(|day| DEFAULT_WEEKDAY_NAMES.contains(&day.as_str()));
        if greek_days {
            DEFAULT_WEEKDAY_NAMES.get(index).copied()
        } else {
            self.day_names.get(index).map(String::as_str)
        }
    }

    /// Check the invariants the grid relies on.
    ///
    /// # Errors
    /// Returns `GridError::InvalidHourRange` if `end_hour <= start_hour`,
    /// `GridError::NoDays` for an empty day list, `GridError::DuplicateDay`
    /// when a day name repeats (day runs would become ambiguous), and
    /// `GridError::CornerLabelClash` when a day equals the corner label.
    pub fn validate(&self) -> Result<()> {
        if self.end_hour <= self.start_hour {
            return Err(GridError::InvalidHourRange {
                start: self.start_hour,
                end: self.end_hour,
            });
        }
        if self.day_names.is_empty() {
            return Err(GridError::NoDays);
        }
        for (i, day) in self.day_names.iter().enumerate() {
            if self.day_names[..i].contains(day) {
                return Err(GridError::DuplicateDay(day.clone()));
            }
            if *day == self.corner_label {
                return Err(GridError::CornerLabelClash(day.clone()));
            }
        }
        Ok(())
    }
}
