use crate::core::types::{Cell, Row};

/// Linear mapping from a value domain onto a pixel range.
///
/// Unlike a validating scale, this one is total: a degenerate domain (empty
/// row sets collapse to `[0, 0]`) maps every value onto the range start
/// instead of failing, because malformed or empty data must degenerate to an
/// empty drawing rather than abort the render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = if domain.0.is_finite() && domain.1.is_finite() {
            domain
        } else {
            (0.0, 0.0)
        };
        let range = if range.0.is_finite() && range.1.is_finite() {
            range
        } else {
            (0.0, 0.0)
        };
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain.0 == self.domain.1
    }

    /// Maps a domain value to its pixel coordinate.
    ///
    /// Non-finite input and degenerate domains resolve to the range start.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.range.0;
        }
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let normalized = (value - self.domain.0) / span;
        self.range.0 + normalized * (self.range.1 - self.range.0)
    }

    /// Maps a pixel coordinate back to its domain value.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        if !pixel.is_finite() {
            return self.domain.0;
        }
        let range_span = self.range.1 - self.range.0;
        if range_span == 0.0 {
            return self.domain.0;
        }
        let normalized = (pixel - self.range.0) / range_span;
        self.domain.0 + normalized * (self.domain.1 - self.domain.0)
    }

    /// Evenly spaced tick values across the domain, endpoints included.
    ///
    /// A degenerate domain yields a single tick at the collapsed value.
    #[must_use]
    pub fn ticks(self, tick_count: usize) -> Vec<f64> {
        if tick_count == 0 {
            return Vec::new();
        }
        if tick_count == 1 || self.is_degenerate() {
            return vec![self.domain.0];
        }

        let span = self.domain.1 - self.domain.0;
        let denominator = (tick_count - 1) as f64;
        (0..tick_count)
            .map(|index| self.domain.0 + span * (index as f64) / denominator)
            .collect()
    }
}

/// Minimum and maximum over an iterator of values; `None` when empty.
#[must_use]
pub fn extent(values: impl IntoIterator<Item = f64>) -> Option<(f64, f64)> {
    let mut bounds: Option<(f64, f64)> = None;
    for value in values {
        if !value.is_finite() {
            continue;
        }
        bounds = Some(match bounds {
            None => (value, value),
            Some((min, max)) => (min.min(value), max.max(value)),
        });
    }
    bounds
}

/// Scans rows for a field's numeric values, skipping cells that are null or
/// non-numeric.
#[must_use]
pub fn field_values<'a>(rows: &'a [Row], field: &'a str) -> impl Iterator<Item = f64> + 'a {
    rows.iter()
        .filter_map(move |row| row.get(field))
        .filter_map(Cell::value_as_f64)
}

/// Field min/max over all rows, degenerating to `[0, 0]` for empty input.
#[must_use]
pub fn field_extent(rows: &[Row], field: &str) -> (f64, f64) {
    extent(field_values(rows, field)).unwrap_or((0.0, 0.0))
}

/// Field maximum over all rows with a zero floor, the domain shape used for
/// a measure axis anchored at zero.
#[must_use]
pub fn field_zero_to_max(rows: &[Row], field: &str) -> (f64, f64) {
    let max = field_values(rows, field).fold(0.0_f64, f64::max);
    (0.0, max)
}
