use serde::{Deserialize, Serialize};

use crate::error::{VisError, VisResult};

/// One column descriptor from the host's query compiler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub label: String,
}

impl FieldDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Field lists in the order the host materialized them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryFields {
    #[serde(default)]
    pub dimension_like: Vec<FieldDescriptor>,
    #[serde(default)]
    pub measure_like: Vec<FieldDescriptor>,
    #[serde(default)]
    pub pivots: Vec<FieldDescriptor>,
}

/// Host-provided description of the result shape. Read-only per render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryResponse {
    pub fields: QueryFields,
}

impl QueryResponse {
    #[must_use]
    pub fn new(fields: QueryFields) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn dimension_count(&self) -> usize {
        self.fields.dimension_like.len()
    }

    #[must_use]
    pub fn measure_count(&self) -> usize {
        self.fields.measure_like.len()
    }

    #[must_use]
    pub fn pivot_count(&self) -> usize {
        self.fields.pivots.len()
    }

    /// Deserializes a query response from the host's JSON payload.
    pub fn from_json_str(input: &str) -> VisResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| VisError::InvalidData(format!("failed to parse query response: {e}")))
    }
}
