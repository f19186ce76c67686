use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{VisError, VisResult};
use crate::render::Color;

/// Palette shipped with the plugin and used when the host sends no override.
pub const DEFAULT_COLOR_RANGE: [&str; 8] = [
    "#dd3333", "#80ce5d", "#f78131", "#369dc1", "#c572d3", "#36c1b3", "#b57052", "#ed69af",
];

/// Node label formatting for the flow-graph render path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LabelType {
    #[default]
    Name,
    NameValue,
}

/// Current option values, supplied fresh by the host on every render.
///
/// Serde defaults mirror the declared option defaults, so a partial config
/// payload (the host omits untouched options) deserializes into the same
/// values the settings panel displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_color_range")]
    pub color_range: Vec<String>,
    #[serde(default)]
    pub label_type: LabelType,
    #[serde(default = "default_show_null_points")]
    pub show_null_points: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            color_range: default_color_range(),
            label_type: LabelType::default(),
            show_null_points: default_show_null_points(),
        }
    }
}

impl RenderConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_color_range(mut self, color_range: Vec<String>) -> Self {
        self.color_range = color_range;
        self
    }

    #[must_use]
    pub fn with_label_type(mut self, label_type: LabelType) -> Self {
        self.label_type = label_type;
        self
    }

    #[must_use]
    pub fn with_show_null_points(mut self, show_null_points: bool) -> Self {
        self.show_null_points = show_null_points;
        self
    }

    /// Deserializes the config payload the host echoes back on each render.
    pub fn from_json_str(input: &str) -> VisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| VisError::InvalidData(format!("failed to parse render config: {e}")))
    }

    /// Parsed series palette.
    ///
    /// Unparseable entries are skipped with a warning rather than failing the
    /// render; if nothing survives, the bundled palette applies. The result
    /// is never empty, so cyclic indexing is always safe.
    #[must_use]
    pub fn palette(&self) -> Vec<Color> {
        let mut colors: Vec<Color> = Vec::with_capacity(self.color_range.len());
        for entry in &self.color_range {
            match Color::from_hex(entry) {
                Ok(color) => colors.push(color),
                Err(err) => warn!(color = %entry, error = %err, "skipping unparseable palette entry"),
            }
        }
        if colors.is_empty() {
            colors = DEFAULT_COLOR_RANGE
                .iter()
                .filter_map(|entry| Color::from_hex(entry).ok())
                .collect();
        }
        colors
    }
}

fn default_color_range() -> Vec<String> {
    DEFAULT_COLOR_RANGE.iter().map(|s| (*s).to_owned()).collect()
}

fn default_show_null_points() -> bool {
    true
}
