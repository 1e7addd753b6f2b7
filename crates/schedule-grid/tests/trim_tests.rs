//! Tests for trimming empty rows and the end-of-week column.

use schedule_grid::{
    drop_trailing_day_if_empty, trim_empty_rows, GridBuilder, GridConfig,
};

fn hour_labels(builder_grid: &schedule_grid::Grid) -> Vec<String> {
    builder_grid
        .rows()
        .iter()
        .skip(1)
        .map(|row| row[0].clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Rows
// ---------------------------------------------------------------------------

#[test]
fn empty_edges_trimmed_around_single_event() {
    let mut b = GridBuilder::new(GridConfig::new(8, 22, &["Monday", "Tuesday"])).unwrap();
    b.place("A", "Tuesday", 14, 1);
    let mut grid = b.grid().clone();

    trim_empty_rows(&mut grid);

    assert_eq!(hour_labels(&grid), vec!["14"]);
    assert_eq!(grid.rows()[1], vec!["14", "", "A"]);
}

#[test]
fn empty_rows_between_events_kept() {
    let mut b = GridBuilder::new(GridConfig::new(8, 22, &["Monday"])).unwrap();
    b.place("A", "Monday", 10, 1);
    b.place("B", "Monday", 14, 2);
    let mut grid = b.grid().clone();

    trim_empty_rows(&mut grid);

    assert_eq!(hour_labels(&grid), vec!["10", "11", "12", "13", "14", "15"]);
}

#[test]
fn fully_empty_grid_keeps_only_header() {
    let b = GridBuilder::new(GridConfig::new(8, 12, &["Monday"])).unwrap();
    let mut grid = b.grid().clone();

    trim_empty_rows(&mut grid);

    assert_eq!(grid.height(), 1);
    assert_eq!(grid.header(), ["Ώρες \\ Ημέρες", "Monday"]);
}

#[test]
fn grid_without_empty_edges_unchanged() {
    let mut b = GridBuilder::new(GridConfig::new(8, 10, &["Monday"])).unwrap();
    b.place("A", "Monday", 8, 2);
    let mut grid = b.grid().clone();

    trim_empty_rows(&mut grid);

    assert_eq!(&grid, b.grid());
}

#[test]
fn trimming_twice_equals_trimming_once() {
    let mut b = GridBuilder::new(GridConfig::new(8, 22, &["Monday", "Tuesday"])).unwrap();
    b.place("A", "Monday", 9, 1);
    b.place("B", "Tuesday", 17, 2);
    let mut once = b.grid().clone();
    trim_empty_rows(&mut once);
    let mut twice = once.clone();
    trim_empty_rows(&mut twice);

    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// End-of-week column
// ---------------------------------------------------------------------------

#[test]
fn empty_end_of_week_column_dropped() {
    let b = GridBuilder::new(GridConfig::new(8, 10, &["Friday", "Saturday"])).unwrap();
    let mut grid = b.grid().clone();

    assert!(drop_trailing_day_if_empty(&mut grid, "Saturday"));
    assert_eq!(grid.header(), ["Ώρες \\ Ημέρες", "Friday"]);
    assert!(grid.rows().iter().all(|row| row.len() == 2));
}

#[test]
fn occupied_end_of_week_column_kept() {
    let mut b = GridBuilder::new(GridConfig::new(8, 10, &["Friday", "Saturday"])).unwrap();
    b.place("A", "Saturday", 9, 1);
    let mut grid = b.grid().clone();

    assert!(!drop_trailing_day_if_empty(&mut grid, "Saturday"));
    assert_eq!(grid.width(), 3);
}

#[test]
fn other_trailing_day_not_dropped() {
    let b = GridBuilder::new(GridConfig::new(8, 10, &["Saturday", "Friday"])).unwrap();
    let mut grid = b.grid().clone();

    assert!(!drop_trailing_day_if_empty(&mut grid, "Saturday"));
    assert_eq!(grid.width(), 3);
}

// ---------------------------------------------------------------------------
// finish()
// ---------------------------------------------------------------------------

#[test]
fn finish_with_default_config_drops_empty_saturday() {
    let mut b = GridBuilder::new(GridConfig::default()).unwrap();
    b.place("Algebra", "Δευτέρα", 9, 2);
    let layout = b.finish();

    assert_eq!(layout.grid.width(), 6, "Saturday column removed");
    assert_eq!(layout.grid.height(), 3, "header plus 09 and 10");
    assert_eq!(layout.grid.rows()[1][0], "09");
}

#[test]
fn finish_keeps_saturday_with_events() {
    let mut b = GridBuilder::new(GridConfig::default()).unwrap();
    b.place("Lab", "Σάββατο", 10, 1);
    let layout = b.finish();

    assert_eq!(layout.grid.width(), 7);
    assert_eq!(layout.grid.header()[6], "Σάββατο");
}

#[test]
fn finish_computes_merges_on_trimmed_grid() {
    let mut b = GridBuilder::new(GridConfig::new(8, 22, &["Monday"])).unwrap();
    b.place("A", "Monday", 12, 2);
    let layout = b.finish();

    assert_eq!(layout.merges.len(), 1);
    let merge = &layout.merges[0];
    assert_eq!((merge.start_row, merge.end_row), (1, 2));
    assert_eq!(merge.value, "A");
}
