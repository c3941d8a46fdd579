//! Entity row records and raw-value coercion.
//!
//! The ingest boundary (an external file parser) supplies each entity
//! collection as an ordered sequence of row records, where a record maps a
//! column name to the raw value parsed from the source file (string or
//! number). Nothing is typed beyond that until validation runs, so this
//! module also carries the coercion helpers the validators share: the
//! falsy test for required fields and the lenient numeric parse applied to
//! fields like `PriorityLevel` and `Duration`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// A single ingested row: column name to raw cell value.
pub type Row = serde_json::Map<String, Value>;

/// The three entity collections a dataset is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Clients,
    Workers,
    Tasks,
}

impl EntityType {
    /// All entity types, in dataset order.
    pub const ALL: [EntityType; 3] = [EntityType::Clients, EntityType::Workers, EntityType::Tasks];

    /// The type tag used in error messages and serialized reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Clients => "clients",
            EntityType::Workers => "workers",
            EntityType::Tasks => "tasks",
        }
    }

    /// The unique-identifier column for this entity type.
    pub fn id_column(&self) -> &'static str {
        match self {
            EntityType::Clients => "ClientID",
            EntityType::Workers => "WorkerID",
            EntityType::Tasks => "TaskID",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A full snapshot of the three entity collections.
///
/// Collections are replaced wholesale on ingest; validation is a pure pass
/// over a snapshot and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub clients: Vec<Row>,
    #[serde(default)]
    pub workers: Vec<Row>,
    #[serde(default)]
    pub tasks: Vec<Row>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow one collection by entity type.
    pub fn collection(&self, entity: EntityType) -> &[Row] {
        match entity {
            EntityType::Clients => &self.clients,
            EntityType::Workers => &self.workers,
            EntityType::Tasks => &self.tasks,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty() && self.workers.is_empty() && self.tasks.is_empty()
    }
}

/// Error converting an ingest-boundary JSON payload into row records.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("expected a JSON array of row objects")]
    NotAnArray,

    #[error("row {index} is not an object")]
    RowNotObject { index: usize },
}

/// Convert a parsed JSON payload from the ingest boundary into row records.
///
/// The file parser hands over whatever it produced; this only checks the
/// outermost shape (an array of objects). Content validation is the
/// validators' job.
pub fn rows_from_json(payload: Value) -> Result<Vec<Row>, IngestError> {
    let Value::Array(items) = payload else {
        return Err(IngestError::NotAnArray);
    };

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(row) => rows.push(row),
            _ => return Err(IngestError::RowNotObject { index }),
        }
    }
    Ok(rows)
}

/// Look up a cell value by column name.
pub fn field<'a>(row: &'a Row, column: &str) -> Option<&'a Value> {
    row.get(column)
}

/// Whether a raw cell value is present at all (not missing and not null).
pub fn is_present(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}

/// The falsy test applied to required fields: missing, null, empty string,
/// zero, or false.
pub fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Bool(b)) => !b,
        Some(_) => false,
    }
}

/// Lenient numeric coercion for raw cell values.
///
/// Numbers pass through; strings are trimmed and parsed, with the empty
/// string coercing to zero (which is how an empty `PriorityLevel` cell ends
/// up failing the 1-5 range check rather than being skipped). Anything else
/// fails the parse.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// The string form of a raw cell value, for list splitting and ID
/// comparison. Numbers render without a trailing `.0` when integral.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => format_number(f),
            None => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// The string form of a cell when the cell is truthy, `None` otherwise.
pub fn truthy_text(row: &Row, column: &str) -> Option<String> {
    let value = field(row, column);
    if is_falsy(value) {
        return None;
    }
    value.map(value_text)
}

/// Parse a cell that is expected to hold embedded JSON (for example
/// `AvailableSlots` or `AttributesJSON`). String cells are parsed; values
/// the file parser already structured pass through unchanged. `None` means
/// the text was not valid JSON.
pub fn parse_json_field(value: &Value) -> Option<Value> {
    match value {
        Value::String(s) => serde_json::from_str(s).ok(),
        other => Some(other.clone()),
    }
}

/// Render a coerced number the way it appeared in the source: integral
/// values without a decimal point.
pub fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
