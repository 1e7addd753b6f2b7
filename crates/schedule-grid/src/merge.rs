//! Compress a finished grid into merged rectangular regions.
//!
//! Two passes over the grid:
//!
//! 1. **Header**: each maximal run of equal adjacent header cells longer
//!    than one becomes a region on row 0. This is what spans a day name
//!    across its overflow columns.
//! 2. **Body**: column by column, top to bottom, each unvisited non-empty
//!    cell grows a rectangle: down while the value repeats, then right while
//!    the next column is in the same day run and is empty for the full
//!    height. Only rectangles larger than 1×1 are emitted.
//!
//! The body pass is greedy, not a minimal tiling. Its scan order is fixed so
//! the output is reproducible for a given grid.

use serde::{Deserialize, Serialize};

use crate::grid::Grid;

/// A merged span with inclusive bounds, anchored at its top-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeRegion {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
    /// Text of the anchor cell.
    pub value: String,
}

impl MergeRegion {
    /// Whether `(row, col)` lies inside the region.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.start_row..=self.end_row).contains(&row)
            && (self.start_col..=self.end_col).contains(&col)
    }

    pub fn height(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }
}

/// Compute the merge regions of `grid`: header regions first, then body
/// regions in column-major scan order.
pub fn compress(grid: &Grid) -> Vec<MergeRegion> {
    let mut visited = Visited::new(grid.height(), grid.width());
    let mut regions = header_regions(grid, &mut visited);
    regions.extend(body_regions(grid, &mut visited));
    regions
}

/// Per-cell visited flags for one compression run.
struct Visited {
    width: usize,
    flags: Vec<bool>,
}

impl Visited {
    fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            flags: vec![false; height * width],
        }
    }

    fn get(&self, row: usize, col: usize) -> bool {
        self.flags[row * self.width + col]
    }

    fn mark(&mut self, rows: std::ops::Range<usize>, cols: std::ops::Range<usize>) {
        for row in rows {
            for col in cols.clone() {
                self.flags[row * self.width + col] = true;
            }
        }
    }
}

fn header_regions(grid: &Grid, visited: &mut Visited) -> Vec<MergeRegion> {
    let header = grid.header();
    let mut regions = Vec::new();
    let mut start = 0;

    while start < header.len() {
        let value = &header[start];
        let run = header[start..].iter().take_while(|h| *h == value).count();
        if run > 1 {
            regions.push(MergeRegion {
                start_row: 0,
                start_col: start,
                end_row: 0,
                end_col: start + run - 1,
                value: value.clone(),
            });
        }
        visited.mark(0..1, start..start + run);
        start += run;
    }

    regions
}

fn body_regions(grid: &Grid, visited: &mut Visited) -> Vec<MergeRegion> {
    let (height, width) = (grid.height(), grid.width());
    let header = grid.header();
    let mut regions = Vec::new();

    for col in 1..width {
        for row in 1..height {
            if visited.get(row, col) {
                continue;
            }
            let value = &grid.rows()[row][col];
            if value.is_empty() {
                visited.mark(row..row + 1, col..col + 1);
                continue;
            }

            let span = 1 + (row + 1..height)
                .take_while(|&r| grid.rows()[r][col] == *value)
                .count();

            let reach = 1 + (col + 1..width)
                .take_while(|&c| {
                    header[c] == header[col]
                        && (row..row + span).all(|r| grid.rows()[r][c].is_empty())
                })
                .count();

            visited.mark(row..row + span, col..col + reach);

            if span > 1 || reach > 1 {
                regions.push(MergeRegion {
                    start_row: row,
                    start_col: col,
                    end_row: row + span - 1,
                    end_col: col + reach - 1,
                    value: value.clone(),
                });
            }
        }
    }

    regions
}
