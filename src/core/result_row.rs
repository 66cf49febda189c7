use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

use crate::core::{FieldValue, LeaderboardRow};
use crate::error::{LeaderboardError, Result};

/// A JSON-backed result row as delivered by the data source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultRow {
    /// Participant username
    #[serde(default)]
    pub username: String,

    /// Every other field (scores, metadata), kept as raw JSON.
    /// Never holds a `username` key; the flattened encoding would repeat it.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ResultRow {
    /// Create a row with only a username
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style field setter.
    ///
    /// `username` is routed to the username itself: a string replaces it,
    /// anything else is dropped.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        let value = value.into();

        if name != "username" {
            self.fields.insert(name, value);
            return self;
        }

        match value {
            Value::String(username) => self.username = username,
            other => tracing::warn!(
                "Ignoring non-string username for '{}': {}",
                self.username,
                other
            ),
        }
        self
    }

    /// Deserialize and validate one row from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let row: Self = serde_json::from_str(json)?;
        row.validate(0)?;
        Ok(row)
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn validate(&self, index: usize) -> Result<()> {
        if self.username.is_empty() {
            return Err(LeaderboardError::InvalidRow {
                index,
                reason: "empty username".to_string(),
            });
        }
        Ok(())
    }
}

impl LeaderboardRow for ResultRow {
    fn username(&self) -> &str {
        &self.username
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        if name == "username" {
            return Some(FieldValue::Text(&self.username));
        }

        self.fields.get(name).map(|value| match value {
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Other),
            Value::String(s) => FieldValue::Text(s),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Null => FieldValue::Null,
            Value::Array(_) | Value::Object(_) => FieldValue::Other,
        })
    }
}

/// Decode a JSON array of rows.
///
/// A document that is not a JSON array is a [`LeaderboardError::Json`]. An
/// element that is not an object, does not decode, or has an empty username
/// is a [`LeaderboardError::InvalidRow`] carrying its index.
pub fn load_rows(json: &str) -> Result<Vec<ResultRow>> {
    let values: Vec<Value> = serde_json::from_str(json)?;

    let mut rows = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        if !value.is_object() {
            return Err(LeaderboardError::InvalidRow {
                index,
                reason: format!("expected an object, got {}", json_kind(&value)),
            });
        }

        let row: ResultRow = serde_json::from_value(value).map_err(|e| {
            LeaderboardError::InvalidRow {
                index,
                reason: e.to_string(),
            }
        })?;
        row.validate(index)?;
        rows.push(row);
    }

    tracing::debug!("Decoded {} leaderboard rows", rows.len());
    Ok(rows)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a bool",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Read and decode a JSON array of rows from a file
pub fn load_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<ResultRow>> {
    let json = std::fs::read_to_string(path.as_ref())?;
    load_rows(&json)
}
