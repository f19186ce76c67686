use serde::{Deserialize, Serialize};

use crate::core::scale::LinearScale;
use crate::core::types::{Cell, DataPoint, Row};

/// Vertex in pixel coordinates used by deterministic area geometry output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AreaVertex {
    pub x: f64,
    pub y: f64,
}

/// Deterministic geometry for the placeholder area chart.
///
/// `line_points` follows the mapped data points.
/// `fill_polygon` is an explicitly closed polygon against the baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaGeometry {
    pub line_points: Vec<AreaVertex>,
    pub fill_polygon: Vec<AreaVertex>,
}

impl AreaGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            line_points: Vec::new(),
            fill_polygon: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_points.is_empty()
    }
}

/// Projects points into area-series geometry through the two scales.
///
/// The baseline sits at the vertical range start (the container bottom on an
/// inverted axis). Empty input produces empty geometry; this path never
/// fails, so an empty row set still renders as an empty drawing.
#[must_use]
pub fn project_area_geometry(
    points: &[DataPoint],
    x_scale: LinearScale,
    y_scale: LinearScale,
) -> AreaGeometry {
    if points.is_empty() {
        return AreaGeometry::empty();
    }

    let mut line_points = Vec::with_capacity(points.len());
    for point in points {
        line_points.push(AreaVertex {
            x: x_scale.apply(point.x),
            y: y_scale.apply(point.y),
        });
    }

    let baseline_y = y_scale.range().0;
    let first_x = line_points[0].x;
    let last_x = line_points[line_points.len() - 1].x;

    let mut fill_polygon = Vec::with_capacity(line_points.len() + 3);
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });
    fill_polygon.extend(line_points.iter().copied());
    fill_polygon.push(AreaVertex {
        x: last_x,
        y: baseline_y,
    });
    // Repeat the first baseline vertex so consumers can render the polygon
    // as closed without implicit closure rules.
    fill_polygon.push(AreaVertex {
        x: first_x,
        y: baseline_y,
    });

    AreaGeometry {
        line_points,
        fill_polygon,
    }
}

/// Extracts the (x, y) series for two named fields, skipping rows where
/// either cell has no numeric view.
#[must_use]
pub fn series_from_rows(rows: &[Row], x_field: &str, y_field: &str) -> Vec<DataPoint> {
    rows.iter()
        .filter_map(|row| {
            let x = row.get(x_field).and_then(Cell::value_as_f64)?;
            let y = row.get(y_field).and_then(Cell::value_as_f64)?;
            Some(DataPoint::new(x, y))
        })
        .collect()
}

/// Sum of a measure field over all rows, skipping non-numeric cells.
#[must_use]
pub fn measure_total(rows: &[Row], field: &str) -> f64 {
    rows.iter()
        .filter_map(|row| row.get(field))
        .filter_map(Cell::value_as_f64)
        .sum()
}

/// Bundled year/popularity table used by demos and tests; the series the
/// placeholder chart originally shipped with.
#[must_use]
pub fn sample_series() -> Vec<DataPoint> {
    vec![
        DataPoint::new(2000.0, 50.0),
        DataPoint::new(2001.0, 150.0),
        DataPoint::new(2002.0, 200.0),
        DataPoint::new(2003.0, 130.0),
        DataPoint::new(2004.0, 240.0),
        DataPoint::new(2005.0, 380.0),
        DataPoint::new(2006.0, 420.0),
    ]
}
