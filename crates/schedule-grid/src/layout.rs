//! The finished layout handed to renderers and exporters.

use serde::{Deserialize, Serialize};

use crate::conflict::Conflict;
use crate::grid::{Grid, GridBuilder};
use crate::merge::{compress, MergeRegion};
use crate::trim::{drop_trailing_day_if_empty, trim_empty_rows};

/// Trimmed grid, its merge regions, and the conflicts met while placing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub grid: Grid,
    pub merges: Vec<MergeRegion>,
    pub conflicts: Vec<Conflict>,
}

impl GridBuilder {
    /// Finish placement and produce the layout.
    ///
    /// Drops an empty end-of-week column (when configured), trims leading and
    /// trailing empty rows, then computes merge regions over the result.
    pub fn finish(self) -> Layout {
        let (config, mut grid, conflicts) = self.into_parts();
        if let Some(day) = &config.end_of_week_day {
            drop_trailing_day_if_empty(&mut grid, day);
        }
        trim_empty_rows(&mut grid);
        let merges = compress(&grid);
        Layout {
            grid,
            merges,
            conflicts,
        }
    }
}
