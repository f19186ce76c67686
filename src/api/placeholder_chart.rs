use crate::core::{
    LinearScale, QueryResponse, Row, field_extent, field_zero_to_max, format_number,
    measure_total, project_area_geometry, series_from_rows,
};
use crate::render::{
    AxisGroup, AxisOrientation, Color, GradientDef, PathFill, PathPrimitive, Scene, Stroke,
    path_data_from_vertices,
};

const STROKE_WIDTH_PX: f64 = 1.5;
const MARGIN_LEFT_PX: f64 = 30.0;
const GRADIENT_ID: &str = "area-gradient";
const GRADIENT_SPLIT: f64 = 0.5;
const Y_AXIS_TICK_COUNT: usize = 10;

/// Builds the active placeholder chart: a gradient-filled area series with
/// bottom and left axis groups.
///
/// The x domain scans the first dimension, the y domain the measure, so
/// scales always cover `[0, width]` and `[height, 0]` regardless of row
/// content; empty or non-numeric rows degenerate to axes over a `[0, 0]`
/// domain with no area path.
pub(crate) fn build_placeholder_chart(scene: &mut Scene, rows: &[Row], query: &QueryResponse) {
    let width = f64::from(scene.viewport.width);
    let height = f64::from(scene.viewport.height);

    let x_field = query.fields.dimension_like.first().map(|f| f.name.as_str());
    let y_field = query.fields.measure_like.first().map(|f| f.name.as_str());

    let (x_domain, y_domain, points) = match (x_field, y_field) {
        (Some(x_field), Some(y_field)) => (
            field_extent(rows, x_field),
            field_zero_to_max(rows, y_field),
            series_from_rows(rows, x_field, y_field),
        ),
        _ => ((0.0, 0.0), (0.0, 0.0), Vec::new()),
    };

    let x_scale = LinearScale::new(x_domain, (0.0, width));
    let y_scale = LinearScale::new(y_domain, (height, 0.0));

    scene.gradients.push(
        GradientDef::new(GRADIENT_ID)
            .with_stop(GRADIENT_SPLIT, Color::LIGHT_BLUE)
            .with_stop(GRADIENT_SPLIT, Color::DARK_BLUE)
            .with_opaque_stop(GRADIENT_SPLIT, Color::DARK_BLUE, 1.0)
            .with_stop(GRADIENT_SPLIT, Color::LIGHT_BLUE),
    );

    let geometry = project_area_geometry(&points, x_scale, y_scale);
    if !geometry.is_empty() {
        let vertices: Vec<(f64, f64)> = geometry
            .fill_polygon
            .iter()
            .map(|vertex| (vertex.x, vertex.y))
            .collect();
        scene.paths.push(
            PathPrimitive::new(
                path_data_from_vertices(&vertices, true),
                PathFill::Gradient(GRADIENT_ID.to_owned()),
            )
            .with_stroke(Stroke::new(Color::STEEL_BLUE, STROKE_WIDTH_PX, true))
            .with_class("area"),
        );
    }

    let mut x_axis = AxisGroup::new(AxisOrientation::Bottom, (MARGIN_LEFT_PX, height), width);
    for tick in x_scale.ticks(rows.len()) {
        x_axis = x_axis.with_tick(x_scale.apply(tick), format_number(tick));
    }
    scene.axes.push(x_axis);

    let mut y_axis = AxisGroup::new(AxisOrientation::Left, (MARGIN_LEFT_PX, 0.0), height);
    for tick in y_scale.ticks(Y_AXIS_TICK_COUNT) {
        y_axis = y_axis.with_tick(y_scale.apply(tick), format_number(tick));
    }
    scene.axes.push(y_axis);

    scene.measure_total = y_field.map(|field| measure_total(rows, field));
}
