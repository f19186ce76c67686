use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{VisError, VisResult};

/// Widget kind the host settings panel renders for an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionDisplay {
    Colors,
    Select,
}

/// Declared value type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Array,
    String,
    Boolean,
}

/// One entry in the options schema the host renders as a settings panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionDescriptor {
    pub label: String,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<OptionDisplay>,
    pub default: Value,
    /// Allowed values for select options: display label → stored value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<IndexMap<String, String>>,
}

impl OptionDescriptor {
    #[must_use]
    pub fn new(label: impl Into<String>, option_type: OptionType, default: Value) -> Self {
        Self {
            label: label.into(),
            option_type,
            display: None,
            default,
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_display(mut self, display: OptionDisplay) -> Self {
        self.display = Some(display);
        self
    }

    #[must_use]
    pub fn with_value(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entry = IndexMap::new();
        entry.insert(label.into(), value.into());
        self.values.push(entry);
        self
    }
}

/// Static plugin metadata: identity plus the declared options schema.
///
/// Created once at registration and immutable afterwards; the mutable
/// drawing surface lives on the plugin value, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationDescriptor {
    pub id: String,
    pub label: String,
    pub options: IndexMap<String, OptionDescriptor>,
}

impl VisualizationDescriptor {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            options: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_option(mut self, name: impl Into<String>, descriptor: OptionDescriptor) -> Self {
        self.options.insert(name.into(), descriptor);
        self
    }

    /// Serializes the descriptor for the host's settings panel.
    pub fn to_json_pretty(&self) -> VisResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| VisError::InvalidData(format!("failed to serialize descriptor: {e}")))
    }
}
