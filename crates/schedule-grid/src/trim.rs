//! Remove unused space from a filled grid.

use log::debug;

use crate::grid::Grid;

/// Drop the run of empty body rows at the top, then the run at the bottom.
///
/// Each scan stops at the first row holding an event, so rows between the
/// first and last occupied rows are kept even when empty. On a grid with no
/// events the top scan removes every body row and the bottom scan finds
/// nothing left. The header row is never removed.
pub fn trim_empty_rows(grid: &mut Grid) {
    let leading = (1..grid.height())
        .take_while(|&row| grid.is_body_row_empty(row))
        .count();
    if leading > 0 {
        debug!("trimming {} leading empty rows", leading);
        grid.remove_rows(1..1 + leading);
    }

    let trailing = (1..grid.height())
        .rev()
        .take_while(|&row| grid.is_body_row_empty(row))
        .count();
    if trailing > 0 {
        debug!("trimming {} trailing empty rows", trailing);
        let height = grid.height();
        grid.remove_rows(height - trailing..height);
    }
}

/// Drop the last column when its header is `day` and it holds no events.
///
/// Only the single last column is considered, and the time column is never
/// dropped. Returns whether a column was removed.
pub fn drop_trailing_day_if_empty(grid: &mut Grid, day: &str) -> bool {
    let width = grid.width();
    if width < 2 || grid.header()[width - 1] != day {
        return false;
    }
    if !grid.is_body_column_empty(width - 1) {
        return false;
    }
    debug!("dropping empty trailing column '{}'", day);
    grid.remove_last_column();
    true
}
