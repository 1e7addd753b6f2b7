//! # schedule-grid
//!
//! Lays out weekly lessons (or exam sittings) on a time-by-day grid and
//! compresses the result into merged regions for export.
//!
//! Overlapping lessons are never dropped: a collision opens an overflow
//! column for the same day and is recorded as a [`Conflict`] for display.
//!
//! ## Quick start
//!
//! ```rust
//! use schedule_grid::{GridBuilder, GridConfig, Placement};
//!
//! let mut builder = GridBuilder::new(GridConfig::new(8, 10, &["Monday"])).unwrap();
//! builder.place("A", "Monday", 8, 2);
//! assert_eq!(builder.place("B", "Monday", 8, 1), Placement::Placed { column: 2 });
//!
//! let layout = builder.finish();
//! assert_eq!(layout.grid.header(), ["Ώρες \\ Ημέρες", "Monday", "Monday"]);
//! assert_eq!(layout.conflicts[0].to_string(), "B συμπίπτει με το A την Monday στις 8:00");
//! ```
//!
//! ## Modules
//!
//! - [`config`] — hour range, day columns and labels
//! - [`grid`] — the matrix and the event placement builder
//! - [`conflict`] — conflict records and the title-line convention
//! - [`merge`] — merge-region compression of a finished grid
//! - [`trim`] — removal of empty edge rows and an empty end-of-week column
//! - [`layout`] — the finished grid, merges and conflicts
//! - [`source`] — lesson and classroom records, schedule generation
//! - [`exam`] — date-sorted exam tables
//! - [`sheet`] — styled sheet description for exporters
//! - [`preview`] — condensed text preview
//! - [`error`] — error types

pub mod config;
pub mod conflict;
pub mod error;
pub mod exam;
pub mod grid;
pub mod layout;
pub mod merge;
pub mod preview;
pub mod sheet;
pub mod source;
pub mod trim;

pub use config::GridConfig;
pub use conflict::Conflict;
pub use error::GridError;
pub use exam::{exam_table, ExamInput, ExamTable};
pub use grid::{Grid, GridBuilder, Placement};
pub use layout::Layout;
pub use merge::{compress, MergeRegion};
pub use sheet::Sheet;
pub use source::{generate_schedule, Schedule, ScheduleInput};
pub use trim::{drop_trailing_day_if_empty, trim_empty_rows};
