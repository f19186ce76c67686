use approx::assert_relative_eq;
use sankey_vis::core::{
    Cell, DrillLink, FieldDescriptor, Row, SankeyLayoutOptions, Viewport, build_flow_graph,
    layout_flow_graph,
};

fn dims(names: &[&str]) -> Vec<FieldDescriptor> {
    names
        .iter()
        .map(|name| FieldDescriptor::new(*name, *name))
        .collect()
}

fn measure() -> FieldDescriptor {
    FieldDescriptor::new("orders.count", "Count")
}

fn row(path: &[Option<&str>], value: f64) -> Row {
    let mut row = Row::new();
    for (index, level) in path.iter().enumerate() {
        let cell = match level {
            Some(text) => Cell::text(*text),
            None => Cell::null(),
        };
        row.insert(format!("dim_{index}"), cell);
    }
    row.insert("orders.count".to_owned(), Cell::number(value));
    row
}

fn dim_names(count: usize) -> Vec<FieldDescriptor> {
    (0..count)
        .map(|index| FieldDescriptor::new(format!("dim_{index}"), format!("dim {index}")))
        .collect()
}

#[test]
fn link_weights_sum_over_rows_sharing_a_path() {
    let rows = vec![
        row(&[Some("us"), Some("web")], 50.0),
        row(&[Some("us"), Some("web")], 420.0),
    ];
    let graph = build_flow_graph(&rows, &dim_names(2), &measure(), true);

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.links.len(), 1);
    assert_relative_eq!(graph.links[0].value, 470.0);
    assert_relative_eq!(graph.total_flow(), 470.0);
}

#[test]
fn same_label_at_different_depths_stays_distinct() {
    let rows = vec![row(&[Some("direct"), Some("direct")], 10.0)];
    let graph = build_flow_graph(&rows, &dim_names(2), &measure(), true);

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[0].label, "direct");
    assert_eq!(graph.nodes[1].label, "direct");
    assert_ne!(graph.nodes[0].depth, graph.nodes[1].depth);
    assert_eq!(graph.links.len(), 1);
}

#[test]
fn three_level_paths_produce_chained_links() {
    let rows = vec![row(&[Some("us"), Some("web"), Some("paid")], 7.0)];
    let graph = build_flow_graph(&rows, &dim_names(3), &measure(), true);

    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.links.len(), 2);
    assert_eq!(graph.depth_count(), 3);
    assert_relative_eq!(graph.nodes[1].inflow, 7.0);
    assert_relative_eq!(graph.nodes[1].outflow, 7.0);
}

#[test]
fn null_truncates_path_when_null_points_disabled() {
    let rows = vec![
        row(&[Some("us"), None, Some("paid")], 5.0),
        row(&[Some("uk"), Some("web"), Some("paid")], 3.0),
    ];
    let graph = build_flow_graph(&rows, &dim_names(3), &measure(), false);

    // The truncated row contributes nothing: its path stops at one level.
    assert_eq!(graph.links.len(), 2);
    assert!(graph.nodes.iter().all(|node| node.label != "null"));
    assert_relative_eq!(graph.total_flow(), 6.0);
}

#[test]
fn null_keeps_its_place_when_null_points_enabled() {
    let rows = vec![row(&[Some("us"), None], 5.0)];
    let graph = build_flow_graph(&rows, &dim_names(2), &measure(), true);

    assert_eq!(graph.nodes.len(), 2);
    assert_eq!(graph.nodes[1].label, "null");
    assert_eq!(graph.links.len(), 1);
}

#[test]
fn rows_without_numeric_measure_are_skipped() {
    let mut no_measure = row(&[Some("us"), Some("web")], 0.0);
    no_measure.insert("orders.count".to_owned(), Cell::null());
    let rows = vec![no_measure, row(&[Some("us"), Some("web")], 9.0)];
    let graph = build_flow_graph(&rows, &dim_names(2), &measure(), true);

    assert_eq!(graph.links.len(), 1);
    assert_relative_eq!(graph.links[0].value, 9.0);
}

#[test]
fn drill_links_union_without_duplicates() {
    let link = DrillLink::new("Show detail", "/explore?row=1");
    let other = DrillLink::new("Show detail", "/explore?row=2");

    let mut first = row(&[Some("us"), Some("web")], 1.0);
    first["dim_0"] = Cell::text("us").with_link(link.clone());
    let mut second = row(&[Some("us"), Some("web")], 2.0);
    second["dim_0"] = Cell::text("us").with_link(link.clone()).with_link(other.clone());

    let graph = build_flow_graph(&[first, second], &dim_names(2), &measure(), true);
    assert_eq!(graph.links.len(), 1);
    assert_eq!(graph.links[0].drill_links, vec![link, other]);
}

#[test]
fn empty_rows_build_an_empty_graph() {
    let graph = build_flow_graph(&[], &dims(&["a", "b"]), &measure(), true);
    assert!(graph.is_empty());
    assert_eq!(graph.depth_count(), 0);
}

#[test]
fn layout_keeps_nodes_inside_the_viewport() {
    let rows = vec![
        row(&[Some("us"), Some("web")], 30.0),
        row(&[Some("uk"), Some("web")], 20.0),
        row(&[Some("us"), Some("mobile")], 10.0),
    ];
    let graph = build_flow_graph(&rows, &dim_names(2), &measure(), true);
    let viewport = Viewport::new(600, 300);
    let layout = layout_flow_graph(&graph, viewport, SankeyLayoutOptions::default());

    assert_eq!(layout.nodes.len(), graph.nodes.len());
    assert_eq!(layout.links.len(), graph.links.len());
    for rect in &layout.nodes {
        assert!(rect.x0 >= 0.0 && rect.x1 <= 600.0);
        assert!(rect.y0 >= 0.0 && rect.y1 <= 300.0 + 1e-9);
        assert!(rect.y1 >= rect.y0);
    }
}

#[test]
fn layout_ribbon_widths_are_proportional_to_link_values() {
    let rows = vec![
        row(&[Some("us"), Some("web")], 30.0),
        row(&[Some("us"), Some("mobile")], 10.0),
    ];
    let graph = build_flow_graph(&rows, &dim_names(2), &measure(), true);
    let layout = layout_flow_graph(
        &graph,
        Viewport::new(600, 300),
        SankeyLayoutOptions::default(),
    );

    let widths: Vec<f64> = layout.links.iter().map(|ribbon| ribbon.width).collect();
    assert_eq!(widths.len(), 2);
    assert_relative_eq!(widths[0] / widths[1], 3.0, epsilon = 1e-9);
}

#[test]
fn layout_of_empty_graph_is_empty() {
    let graph = build_flow_graph(&[], &dims(&["a", "b"]), &measure(), true);
    let layout = layout_flow_graph(
        &graph,
        Viewport::new(600, 300),
        SankeyLayoutOptions::default(),
    );
    assert!(layout.is_empty());
}
