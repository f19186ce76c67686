use sankey_vis::api::{ShapeConstraints, check_shape};
use sankey_vis::core::{FieldDescriptor, QueryFields, QueryResponse};
use sankey_vis::error::VisError;

fn query(dimensions: usize, measures: usize, pivots: usize) -> QueryResponse {
    let field = |prefix: &str, index: usize| {
        FieldDescriptor::new(format!("{prefix}_{index}"), format!("{prefix} {index}"))
    };
    QueryResponse::new(QueryFields {
        dimension_like: (0..dimensions).map(|i| field("dim", i)).collect(),
        measure_like: (0..measures).map(|i| field("measure", i)).collect(),
        pivots: (0..pivots).map(|i| field("pivot", i)).collect(),
    })
}

fn sankey_constraints() -> ShapeConstraints {
    ShapeConstraints::unbounded()
        .with_pivots(0, Some(0))
        .with_dimensions(2, None)
        .with_measures(1, Some(1))
}

#[test]
fn accepts_matching_shape() {
    check_shape(&query(2, 1, 0), sankey_constraints()).expect("shape should pass");
    check_shape(&query(5, 1, 0), sankey_constraints()).expect("unbounded max dimensions");
}

#[test]
fn rejects_too_few_dimensions() {
    let err = check_shape(&query(1, 1, 0), sankey_constraints()).expect_err("must reject");
    match err {
        VisError::ShapeViolation(message) => {
            assert!(message.contains("dimension"), "message: {message}");
            assert!(message.contains("at least 2"), "message: {message}");
        }
        other => panic!("expected shape violation, got {other:?}"),
    }
}

#[test]
fn rejects_missing_measure() {
    let err = check_shape(&query(2, 0, 0), sankey_constraints()).expect_err("must reject");
    let message = err.to_string();
    assert!(message.contains("measure"), "message: {message}");
    assert!(message.contains("at least 1"), "message: {message}");
}

#[test]
fn rejects_extra_measures() {
    let err = check_shape(&query(2, 2, 0), sankey_constraints()).expect_err("must reject");
    let message = err.to_string();
    assert!(message.contains("measure"), "message: {message}");
    assert!(message.contains("at most 1"), "message: {message}");
}

#[test]
fn rejects_pivoted_queries() {
    let err = check_shape(&query(2, 1, 1), sankey_constraints()).expect_err("must reject");
    let message = err.to_string();
    assert!(message.contains("pivot"), "message: {message}");
}

#[test]
fn unbounded_constraints_accept_anything() {
    check_shape(&query(0, 0, 0), ShapeConstraints::unbounded()).expect("empty query");
    check_shape(&query(9, 9, 9), ShapeConstraints::unbounded()).expect("wide query");
}
