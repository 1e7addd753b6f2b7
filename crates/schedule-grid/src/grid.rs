//! The time-by-day matrix and the builder that places events into it.
//!
//! Row 0 holds the corner label followed by one header per day column.
//! Column 0 holds zero-padded hour labels. Every other cell is either empty
//! or an event payload. A day may own several adjacent columns (its *day
//! run*) once collisions force overflow columns to be opened.

use std::ops::Range;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::config::GridConfig;
use crate::conflict::{title, Conflict};
use crate::error::Result;

/// A rectangular matrix of cell texts. The empty string marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Grid {
    cells: Vec<Vec<String>>,
}

impl Grid {
    /// Build the initial grid for a configuration: header row, time column,
    /// and empty body cells.
    pub fn new(config: &GridConfig) -> Self {
        let width = 1 + config.day_names.len();
        let mut header = Vec::with_capacity(width);
        header.push(config.corner_label.clone());
        header.extend(config.day_names.iter().cloned());

        let mut cells = Vec::with_capacity(1 + config.hour_rows());
        cells.push(header);
        for hour in config.start_hour..config.end_hour {
            let mut row = vec![String::new(); width];
            row[0] = format!("{:02}", hour);
            cells.push(row);
        }
        Self { cells }
    }

    /// Wrap existing rows. Short rows are padded with empty cells so the
    /// result is rectangular.
    pub fn from_rows(mut rows: Vec<Vec<String>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, String::new());
        }
        Self { cells: rows }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.cells
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.cells
    }

    /// The header row (corner label and day names).
    pub fn header(&self) -> &[String] {
        self.cells.first().map(Vec::as_slice).unwrap_or_default()
    }

    /// Cell text, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.cells.get(row)?.get(col).map(String::as_str)
    }

    pub fn is_empty_at(&self, row: usize, col: usize) -> bool {
        self.cell(row, col).is_none_or(str::is_empty)
    }

    /// First (primary) column whose header equals `day`.
    pub fn day_column(&self, day: &str) -> Option<usize> {
        self.header()
            .iter()
            .skip(1)
            .position(|h| h == day)
            .map(|i| i + 1)
    }

    /// Body row whose time label parses to `hour`.
    pub fn hour_row(&self, hour: u32) -> Option<usize> {
        (1..self.height()).find(|&row| self.hour_label(row) == Some(hour))
    }

    /// Numeric value of the time label on `row`.
    pub fn hour_label(&self, row: usize) -> Option<u32> {
        self.cell(row, 0)?.trim().parse().ok()
    }

    /// True when every event cell (columns 1..) of `row` is empty.
    pub fn is_body_row_empty(&self, row: usize) -> bool {
        self.cells
            .get(row)
            .is_none_or(|cells| cells.iter().skip(1).all(String::is_empty))
    }

    /// True when every body cell (rows 1..) of `col` is empty.
    pub fn is_body_column_empty(&self, col: usize) -> bool {
        (1..self.height()).all(|row| self.is_empty_at(row, col))
    }

    /// True when `col` exists and shares the header of `col - 1`.
    pub(crate) fn continues_day_run(&self, col: usize) -> bool {
        let header = self.header();
        col > 1 && col < header.len() && header[col] == header[col - 1]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, text: &str) {
        self.cells[row][col] = text.to_string();
    }

    /// Insert an overflow column after `col`: the header is copied, every
    /// body cell starts empty.
    pub(crate) fn insert_column_after(&mut self, col: usize) {
        let header = self.cells[0][col].clone();
        for (i, row) in self.cells.iter_mut().enumerate() {
            let value = if i == 0 { header.clone() } else { String::new() };
            row.insert(col + 1, value);
        }
    }

    pub(crate) fn remove_rows(&mut self, range: Range<usize>) {
        self.cells.drain(range);
    }

    pub(crate) fn remove_last_column(&mut self) {
        for row in &mut self.cells {
            row.pop();
        }
    }
}

/// Result of a [`GridBuilder::place`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Written into `column`, which may be an overflow column.
    Placed { column: usize },
    /// The day is not one of the grid's columns; nothing was written.
    UnknownDay,
    /// The start hour has no row; nothing was written.
    UnknownHour,
}

/// Outcome of one attempt to write an event into a single column.
enum WriteAttempt {
    Written,
    Collided,
}

/// Owns the grid for one request and places events into it.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    config: GridConfig,
    grid: Grid,
    conflicts: Vec<Conflict>,
}

impl GridBuilder {
    /// Create a builder with an empty grid for `config`.
    ///
    /// # Errors
    /// Returns the validation error from [`GridConfig::validate`].
    pub fn new(config: GridConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(&config);
        Ok(Self {
            config,
            grid,
            conflicts: Vec::new(),
        })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Conflicts recorded so far, in placement order.
    pub fn conflicts(&self) -> &[Conflict] {
        &self.conflicts
    }

    /// Place `text` on `day` starting at `start_hour` for `duration_hours`
    /// rows (at least one, clipped at the bottom of the grid).
    ///
    /// When any target cell is taken the event moves one column to the right
    /// within the same day run, opening an overflow column if the day has
    /// none there yet. Each collision with a named occupant is recorded as a
    /// [`Conflict`]. Events never overwrite each other.
    pub fn place(&mut self, text: &str, day: &str, start_hour: u32, duration_hours: u32) -> Placement {
        let day = day.trim();
        let Some(mut column) = self.grid.day_column(day) else {
            warn!("day '{}' is not a grid column, dropping '{}'", day, title(text));
            return Placement::UnknownDay;
        };
        let Some(row) = self.grid.hour_row(start_hour) else {
            warn!("hour {} is not a grid row, dropping '{}'", start_hour, title(text));
            return Placement::UnknownHour;
        };
        let end = (row + duration_hours.max(1) as usize).min(self.grid.height());

        loop {
            match self.try_write(row..end, column, text) {
                WriteAttempt::Written => return Placement::Placed { column },
                WriteAttempt::Collided => {
                    let existing = title(self.occupant(row, column)).to_string();
                    if !existing.is_empty() {
                        self.conflicts.push(Conflict {
                            existing,
                            new: title(text).to_string(),
                            day: day.to_string(),
                            hour: start_hour,
                        });
                    }
                    column = self.overflow_column(column);
                }
            }
        }
    }

    /// Write `text` into every row of `rows` in `column` if all are empty.
    fn try_write(&mut self, rows: Range<usize>, column: usize, text: &str) -> WriteAttempt {
        if rows.clone().any(|row| !self.grid.is_empty_at(row, column)) {
            return WriteAttempt::Collided;
        }
        for row in rows {
            self.grid.set(row, column, text);
        }
        WriteAttempt::Written
    }

    /// The payload occupying `column` at `row`. When the cell itself is empty
    /// the collision happened further down the span, so the nearest non-empty
    /// cell above (down to row 1) is reported instead. May be empty.
    fn occupant(&self, row: usize, column: usize) -> &str {
        (1..=row)
            .rev()
            .filter_map(|r| self.grid.cell(r, column))
            .find(|text| !text.is_empty())
            .unwrap_or("")
    }

    /// Column right of `column` in the same day run, created if missing.
    fn overflow_column(&mut self, column: usize) -> usize {
        let next = column + 1;
        if !self.grid.continues_day_run(next) {
            debug!(
                "opening overflow column {} for '{}'",
                next,
                self.grid.header()[column]
            );
            self.grid.insert_column_after(column);
        }
        next
    }

    pub(crate) fn into_parts(self) -> (GridConfig, Grid, Vec<Conflict>) {
        (self.config, self.grid, self.conflicts)
    }
}
