use proptest::prelude::*;
use sankey_vis::core::{
    Cell, FieldDescriptor, Row, SankeyLayoutOptions, Viewport, build_flow_graph,
    layout_flow_graph,
};

fn dimensions() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("source", "Source"),
        FieldDescriptor::new("target", "Target"),
    ]
}

fn measure() -> FieldDescriptor {
    FieldDescriptor::new("value", "Value")
}

fn rows_from(entries: &[(u8, u8, f64)]) -> Vec<Row> {
    entries
        .iter()
        .map(|(source, target, value)| {
            let mut row = Row::new();
            row.insert("source".to_owned(), Cell::text(format!("s{source}")));
            row.insert("target".to_owned(), Cell::text(format!("t{target}")));
            row.insert("value".to_owned(), Cell::number(*value));
            row
        })
        .collect()
}

proptest! {
    #[test]
    fn total_flow_equals_the_measure_sum(
        entries in proptest::collection::vec((0u8..5, 0u8..5, 0.1f64..1_000.0), 0..64)
    ) {
        let rows = rows_from(&entries);
        let graph = build_flow_graph(&rows, &dimensions(), &measure(), true);

        let expected: f64 = entries.iter().map(|(_, _, value)| value).sum();
        prop_assert!((graph.total_flow() - expected).abs() <= expected * 1e-9 + 1e-9);
    }

    #[test]
    fn node_and_link_counts_are_bounded_by_distinct_labels(
        entries in proptest::collection::vec((0u8..5, 0u8..5, 0.1f64..1_000.0), 1..64)
    ) {
        let rows = rows_from(&entries);
        let graph = build_flow_graph(&rows, &dimensions(), &measure(), true);

        let distinct_sources = entries.iter().map(|(s, _, _)| s).collect::<std::collections::BTreeSet<_>>().len();
        let distinct_targets = entries.iter().map(|(_, t, _)| t).collect::<std::collections::BTreeSet<_>>().len();
        prop_assert_eq!(graph.nodes.len(), distinct_sources + distinct_targets);
        prop_assert!(graph.links.len() <= entries.len());
        prop_assert_eq!(graph.depth_count(), 2);
    }

    #[test]
    fn aggregation_is_additive_over_duplicate_paths(
        value_a in 0.1f64..1_000.0,
        value_b in 0.1f64..1_000.0,
        repeat in 1usize..8,
    ) {
        let mut entries = vec![(0u8, 0u8, value_a)];
        entries.extend(std::iter::repeat_n((0u8, 0u8, value_b), repeat));
        let rows = rows_from(&entries);
        let graph = build_flow_graph(&rows, &dimensions(), &measure(), true);

        prop_assert_eq!(graph.links.len(), 1);
        let expected = value_a + value_b * repeat as f64;
        prop_assert!((graph.links[0].value - expected).abs() <= expected * 1e-9);
    }

    #[test]
    fn layout_never_escapes_the_viewport(
        entries in proptest::collection::vec((0u8..5, 0u8..5, 0.1f64..1_000.0), 1..32),
        width in 50u32..2_000,
        height in 50u32..2_000,
    ) {
        let rows = rows_from(&entries);
        let graph = build_flow_graph(&rows, &dimensions(), &measure(), true);
        let layout = layout_flow_graph(&graph, Viewport::new(width, height), SankeyLayoutOptions::default());

        for rect in &layout.nodes {
            prop_assert!(rect.x0 >= -1e-9);
            prop_assert!(rect.x1 <= f64::from(width) + 1e-9);
            prop_assert!(rect.y0 >= -1e-9);
            prop_assert!(rect.y1 <= f64::from(height) + 1e-6);
        }
        for ribbon in &layout.links {
            prop_assert!(ribbon.width >= 0.0);
        }
    }
}
