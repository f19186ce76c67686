use crate::core::QueryResponse;
use crate::error::{VisError, VisResult};

/// Declared bounds on the query shape a visualization can draw.
///
/// Each maximum is optional; `None` leaves that side unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeConstraints {
    pub min_pivots: usize,
    pub max_pivots: Option<usize>,
    pub min_dimensions: usize,
    pub max_dimensions: Option<usize>,
    pub min_measures: usize,
    pub max_measures: Option<usize>,
}

impl ShapeConstraints {
    /// Fully unbounded constraints; tighten with the builder methods.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            min_pivots: 0,
            max_pivots: None,
            min_dimensions: 0,
            max_dimensions: None,
            min_measures: 0,
            max_measures: None,
        }
    }

    #[must_use]
    pub const fn with_pivots(mut self, min: usize, max: Option<usize>) -> Self {
        self.min_pivots = min;
        self.max_pivots = max;
        self
    }

    #[must_use]
    pub const fn with_dimensions(mut self, min: usize, max: Option<usize>) -> Self {
        self.min_dimensions = min;
        self.max_dimensions = max;
        self
    }

    #[must_use]
    pub const fn with_measures(mut self, min: usize, max: Option<usize>) -> Self {
        self.min_measures = min;
        self.max_measures = max;
        self
    }
}

/// Compares the actual field counts against the declared bounds.
///
/// The first violated bound produces a host-facing message naming the field
/// kind and the bound; rendering must be skipped on error.
pub fn check_shape(query: &QueryResponse, constraints: ShapeConstraints) -> VisResult<()> {
    for (kind, actual, min, max) in [
        (
            "pivot",
            query.pivot_count(),
            constraints.min_pivots,
            constraints.max_pivots,
        ),
        (
            "dimension",
            query.dimension_count(),
            constraints.min_dimensions,
            constraints.max_dimensions,
        ),
        (
            "measure",
            query.measure_count(),
            constraints.min_measures,
            constraints.max_measures,
        ),
    ] {
        if actual < min {
            return Err(VisError::ShapeViolation(format!(
                "query has {actual} {kind} field(s); this chart requires at least {min}"
            )));
        }
        if let Some(max) = max {
            if actual > max {
                return Err(VisError::ShapeViolation(format!(
                    "query has {actual} {kind} field(s); this chart allows at most {max}"
                )));
            }
        }
    }

    Ok(())
}
