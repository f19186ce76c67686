use criterion::{Criterion, criterion_group, criterion_main};
use sankey_vis::core::{
    Cell, FieldDescriptor, Row, SankeyLayoutOptions, Viewport, build_flow_graph,
    layout_flow_graph,
};
use std::hint::black_box;

fn synthetic_rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let mut row = Row::new();
            row.insert(
                "events.country".to_owned(),
                Cell::text(format!("country_{}", i % 23)),
            );
            row.insert(
                "events.channel".to_owned(),
                Cell::text(format!("channel_{}", i % 7)),
            );
            row.insert(
                "events.outcome".to_owned(),
                Cell::text(format!("outcome_{}", i % 3)),
            );
            row.insert("events.count".to_owned(), Cell::number((i % 97) as f64 + 1.0));
            row
        })
        .collect()
}

fn dimensions() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::new("events.country", "Country"),
        FieldDescriptor::new("events.channel", "Channel"),
        FieldDescriptor::new("events.outcome", "Outcome"),
    ]
}

fn bench_flow_graph_10k_rows(c: &mut Criterion) {
    let rows = synthetic_rows(10_000);
    let dimensions = dimensions();
    let measure = FieldDescriptor::new("events.count", "Count");

    c.bench_function("flow_graph_build_10k_rows", |b| {
        b.iter(|| {
            let graph = build_flow_graph(
                black_box(&rows),
                black_box(&dimensions),
                black_box(&measure),
                black_box(true),
            );
            black_box(graph.links.len())
        })
    });
}

fn bench_flow_graph_layout(c: &mut Criterion) {
    let rows = synthetic_rows(10_000);
    let measure = FieldDescriptor::new("events.count", "Count");
    let graph = build_flow_graph(&rows, &dimensions(), &measure, true);
    let viewport = Viewport::new(1920, 1080);

    c.bench_function("flow_graph_layout", |b| {
        b.iter(|| {
            let layout = layout_flow_graph(
                black_box(&graph),
                black_box(viewport),
                black_box(SankeyLayoutOptions::default()),
            );
            black_box(layout.nodes.len())
        })
    });
}

criterion_group!(benches, bench_flow_graph_10k_rows, bench_flow_graph_layout);
criterion_main!(benches);
