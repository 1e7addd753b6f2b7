//! Library-neutral description of the styled export sheet.
//!
//! A [`Sheet`] is what a spreadsheet or HTML exporter needs: cell values
//! with a fill class, merge regions, column widths and row height. Encoding
//! it into a concrete file format is left to the exporter.
//!
//! Lesson sheets put the calendar at the left, a narrow spacer column, then
//! a two-column table describing every classroom the calendar references.

use serde::{Deserialize, Serialize};

use crate::exam::ExamTable;
use crate::merge::MergeRegion;
use crate::source::{Classroom, Schedule};

/// Height of every sheet row, in pixels.
pub const ROW_HEIGHT: u32 = 40;

const CALENDAR_COLUMN_WIDTH: u32 = 25;
const SPACER_WIDTH: u32 = 5;
const ROOM_COLUMN_WIDTH: u32 = 25;
const DETAILS_COLUMN_WIDTH: u32 = 75;

const ROOM_HEADER: &str = "Αίθουσα";
const DETAILS_HEADER: &str = "Τοποθεσία";
const EXAM_HEADERS: [&str; 4] = ["Ημερομηνία", "Ώρα", "Μάθημα", "Αίθουσες"];

/// Background class of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    /// Top-left corner of the calendar.
    Corner,
    /// Header row, time column and table headings.
    Heading,
    /// Body cell holding text.
    Occupied,
    /// Empty calendar body cell.
    Vacant,
    /// Spacer and padding outside any table.
    Blank,
}

impl Fill {
    /// Hex RGB color of the fill.
    pub fn rgb(self) -> &'static str {
        match self {
            Fill::Corner => "BF8F00",
            Fill::Heading => "FFE699",
            Fill::Occupied => "FDE9D8",
            Fill::Vacant => "F4B084",
            Fill::Blank => "FFFFFF",
        }
    }

    /// Fill of calendar cell `(row, col)` holding `value`.
    pub fn for_calendar_cell(row: usize, col: usize, value: &str) -> Self {
        match (row, col) {
            (0, 0) => Fill::Corner,
            (0, _) | (_, 0) => Fill::Heading,
            _ if value.is_empty() => Fill::Vacant,
            _ => Fill::Occupied,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyledCell {
    pub value: String,
    pub fill: Fill,
    /// Hex RGB of `fill`, for exporters that only want the color.
    pub color: String,
}

impl StyledCell {
    pub fn new(value: impl Into<String>, fill: Fill) -> Self {
        Self {
            value: value.into(),
            fill,
            color: fill.rgb().to_string(),
        }
    }

    fn blank() -> Self {
        Self::new("", Fill::Blank)
    }
}

/// A styled, rectangular export sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub cells: Vec<Vec<StyledCell>>,
    pub merges: Vec<MergeRegion>,
    /// Width of each column, in characters.
    pub column_widths: Vec<u32>,
    pub row_height: u32,
}

/// Display text for an hour label: `8` becomes `8:00 - 9:00`.
///
/// ```
/// use schedule_grid::sheet::hour_range;
///
/// assert_eq!(hour_range("08"), "8:00 - 9:00");
/// assert_eq!(hour_range("late"), "late");
/// ```
pub fn hour_range(label: &str) -> String {
    match label.trim().parse::<u32>() {
        Ok(hour) => format!("{}:00 - {}:00", hour, hour + 1),
        Err(_) => label.to_string(),
    }
}

/// Classroom side-table cells for sheet row `row` (row 0 is the heading).
fn classroom_cells(classrooms: &[Classroom], row: usize) -> [StyledCell; 2] {
    if row == 0 {
        return [
            StyledCell::new(ROOM_HEADER, Fill::Heading),
            StyledCell::new(DETAILS_HEADER, Fill::Heading),
        ];
    }
    match classrooms.get(row - 1) {
        Some(room) => [
            StyledCell::new(room.room_name(), Fill::Occupied),
            StyledCell::new(room.details(), Fill::Occupied),
        ],
        None => [StyledCell::blank(), StyledCell::blank()],
    }
}

impl Sheet {
    /// Lay out a lesson timetable and its classroom table.
    pub fn from_schedule(schedule: &Schedule) -> Self {
        let grid = &schedule.layout.grid;
        let width = grid.width();
        let height = grid.height().max(schedule.classrooms.len() + 1);

        let cells = (0..height)
            .map(|r| {
                let mut row: Vec<StyledCell> = match grid.rows().get(r) {
                    Some(values) => values
                        .iter()
                        .enumerate()
                        .map(|(c, value)| {
                            let fill = Fill::for_calendar_cell(r, c, value);
                            if c == 0 && r > 0 {
                                StyledCell::new(hour_range(value), fill)
                            } else {
                                StyledCell::new(value.clone(), fill)
                            }
                        })
                        .collect(),
                    None => vec![StyledCell::blank(); width],
                };
                row.push(StyledCell::blank());
                row.extend(classroom_cells(&schedule.classrooms, r));
                row
            })
            .collect();

        let mut column_widths = vec![CALENDAR_COLUMN_WIDTH; width];
        column_widths.extend([SPACER_WIDTH, ROOM_COLUMN_WIDTH, DETAILS_COLUMN_WIDTH]);

        Self {
            cells,
            merges: schedule.layout.merges.clone(),
            column_widths,
            row_height: ROW_HEIGHT,
        }
    }

    /// Lay out an exam table next to its classroom table.
    pub fn from_exams(table: &ExamTable) -> Self {
        let mut header: Vec<StyledCell> = EXAM_HEADERS
            .iter()
            .map(|h| StyledCell::new(*h, Fill::Heading))
            .collect();
        header.push(StyledCell::blank());
        header.extend(classroom_cells(&table.classrooms, 0));

        let body_rows = table.rows.len().max(table.classrooms.len());
        let mut cells = Vec::with_capacity(1 + body_rows);
        cells.push(header);
        for i in 0..body_rows {
            let mut row: Vec<StyledCell> = match table.rows.get(i) {
                Some(exam) => [&exam.date, &exam.time, &exam.course, &exam.rooms]
                    .into_iter()
                    .map(|v| StyledCell::new(v.clone(), Fill::Occupied))
                    .collect(),
                None => vec![StyledCell::blank(); EXAM_HEADERS.len()],
            };
            row.push(StyledCell::blank());
            row.extend(classroom_cells(&table.classrooms, i + 1));
            cells.push(row);
        }

        Self {
            cells,
            merges: Vec::new(),
            column_widths: vec![25, 25, 50, 25, SPACER_WIDTH, ROOM_COLUMN_WIDTH, DETAILS_COLUMN_WIDTH],
            row_height: ROW_HEIGHT,
        }
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }
}
