use chrono::{Datelike, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// One point of plottable XY data extracted from rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Host-supplied drill-through metadata attached to a cell; clicking a data
/// point navigates to the underlying detail query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrillLink {
    pub label: String,
    pub url: String,
}

impl DrillLink {
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Typed cell value instead of an open dynamic object.
///
/// Date-typed dimension cells participate in numeric scale domains through
/// an ordinal day number, so a date axis behaves like any other linear axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Number(f64),
    Date(NaiveDate),
    Text(String),
}

impl CellValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric view of the value used for scale domains and measure sums.
    ///
    /// Text that parses as a number is coerced the way the host's own chart
    /// runtime coerces it; dates map to their ordinal day number. Returns
    /// `None` for nulls and non-numeric text so callers can skip the cell.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Null => None,
            Self::Number(value) => value.is_finite().then_some(*value),
            Self::Date(date) => Some(f64::from(date.num_days_from_ce())),
            Self::Text(text) => text.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Label text for nodes and axis output. Nulls render as the literal
    /// `null`, matching the host runtime's string coercion.
    #[must_use]
    pub fn display_label(&self) -> String {
        match self {
            Self::Null => "null".to_owned(),
            Self::Number(value) => format_number(*value),
            Self::Date(date) => date.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// One field's rendered value plus optional drill-through links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Cell {
    #[serde(default)]
    pub value: CellValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<DrillLink>,
}

impl Cell {
    #[must_use]
    pub fn number(value: f64) -> Self {
        Self {
            value: CellValue::Number(value),
            links: Vec::new(),
        }
    }

    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(value.into()),
            links: Vec::new(),
        }
    }

    #[must_use]
    pub fn null() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_link(mut self, link: DrillLink) -> Self {
        self.links.push(link);
        self
    }

    #[must_use]
    pub fn value_as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }
}

/// One query-result record: field name → cell, in the host's field order.
pub type Row = IndexMap<String, Cell>;

/// Plain number formatting without scientific notation or trailing zeros,
/// matching the axis label format the original chart used.
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    if value == value.trunc() && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let mut text = format!("{value:.6}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}
