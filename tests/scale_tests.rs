use approx::assert_relative_eq;
use chrono::NaiveDate;
use sankey_vis::core::{
    Cell, CellValue, LinearScale, Row, extent, field_extent, field_zero_to_max,
};

fn row_with(field: &str, cell: Cell) -> Row {
    let mut row = Row::new();
    row.insert(field.to_owned(), cell);
    row
}

#[test]
fn vertical_scale_maps_onto_inverted_pixel_range() {
    let scale = LinearScale::new((0.0, 420.0), (200.0, 0.0));
    assert_eq!(scale.range(), (200.0, 0.0));
    assert_relative_eq!(scale.apply(0.0), 200.0);
    assert_relative_eq!(scale.apply(420.0), 0.0);
    assert_relative_eq!(scale.apply(210.0), 100.0);
}

#[test]
fn horizontal_scale_maps_onto_container_width() {
    let scale = LinearScale::new((2000.0, 2006.0), (0.0, 400.0));
    assert_relative_eq!(scale.apply(2000.0), 0.0);
    assert_relative_eq!(scale.apply(2006.0), 400.0);
    assert_relative_eq!(scale.apply(2003.0), 200.0);
}

#[test]
fn degenerate_domain_collapses_to_range_start() {
    let scale = LinearScale::new((0.0, 0.0), (200.0, 0.0));
    assert!(scale.is_degenerate());
    assert_relative_eq!(scale.apply(0.0), 200.0);
    assert_relative_eq!(scale.apply(123.0), 200.0);
    assert_eq!(scale.ticks(5), vec![0.0]);
}

#[test]
fn non_finite_input_degenerates_instead_of_failing() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert_relative_eq!(scale.apply(f64::NAN), 0.0);
    let poisoned = LinearScale::new((f64::NAN, 10.0), (0.0, 100.0));
    assert!(poisoned.is_degenerate());
}

#[test]
fn invert_round_trips_within_domain() {
    let scale = LinearScale::new((2000.0, 2006.0), (0.0, 400.0));
    for value in [2000.0, 2001.5, 2004.25, 2006.0] {
        assert_relative_eq!(scale.invert(scale.apply(value)), value, epsilon = 1e-9);
    }
}

#[test]
fn tick_counts_follow_request() {
    let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert!(scale.ticks(0).is_empty());
    assert_eq!(scale.ticks(1), vec![0.0]);

    let ticks = scale.ticks(6);
    assert_eq!(ticks.len(), 6);
    assert_relative_eq!(ticks[0], 0.0);
    assert_relative_eq!(ticks[5], 10.0);
    assert_relative_eq!(ticks[1], 2.0);
}

#[test]
fn extent_skips_non_finite_values() {
    assert_eq!(extent([3.0, f64::NAN, -1.0, 7.0]), Some((-1.0, 7.0)));
    assert_eq!(extent(std::iter::empty()), None);
}

#[test]
fn field_extent_scans_rows_and_degenerates_when_empty() {
    let rows = vec![
        row_with("year", Cell::number(2000.0)),
        row_with("year", Cell::number(2006.0)),
        row_with("year", Cell::null()),
        row_with("year", Cell::text("not a number")),
    ];
    assert_eq!(field_extent(&rows, "year"), (2000.0, 2006.0));
    assert_eq!(field_extent(&[], "year"), (0.0, 0.0));
    assert_eq!(field_extent(&rows, "missing"), (0.0, 0.0));
}

#[test]
fn numeric_text_cells_participate_in_domains() {
    let rows = vec![
        row_with("year", Cell::text("2001")),
        row_with("year", Cell::text("2005")),
    ];
    assert_eq!(field_extent(&rows, "year"), (2001.0, 2005.0));
}

#[test]
fn date_cells_map_to_increasing_ordinals() {
    let date = |y, m, d| CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"));
    let early = date(2006, 1, 15).as_f64().expect("ordinal");
    let late = date(2006, 3, 15).as_f64().expect("ordinal");
    assert!(late > early);
    assert_relative_eq!(late - early, 59.0);
}

#[test]
fn measure_domain_is_anchored_at_zero() {
    let rows = vec![
        row_with("popularity", Cell::number(50.0)),
        row_with("popularity", Cell::number(420.0)),
    ];
    assert_eq!(field_zero_to_max(&rows, "popularity"), (0.0, 420.0));
    assert_eq!(field_zero_to_max(&[], "popularity"), (0.0, 0.0));
}
