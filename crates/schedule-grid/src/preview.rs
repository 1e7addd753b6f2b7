//! Condensed on-screen preview of a grid.
//!
//! Cells are cut down to their title line so the table stays one line per
//! hour.

use crate::conflict::title;
use crate::grid::Grid;

/// Every row of `grid` with each cell reduced to its title line.
pub fn preview(grid: &Grid) -> Vec<Vec<String>> {
    grid.rows()
        .iter()
        .map(|row| row.iter().map(|cell| title(cell).to_string()).collect())
        .collect()
}

/// Render preview rows as a plain-text table with padded columns.
///
/// ```
/// use schedule_grid::preview::render_text;
///
/// let rows = vec![
///     vec!["h".to_string(), "Monday".to_string()],
///     vec!["08".to_string(), "Algebra".to_string()],
/// ];
/// assert_eq!(render_text(&rows), "h  | Monday\n08 | Algebra\n");
/// ```
pub fn render_text(rows: &[Vec<String>]) -> String {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..width)
        .map(|c| {
            rows.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(c, cell)| {
                let pad = widths[c].saturating_sub(cell.chars().count());
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join(" | ").trim_end());
        out.push('\n');
    }
    out
}
