//! Validation report types.
//!
//! A validation pass produces two kinds of defect: `CellError`, addressable
//! to exactly one row and column of one entity collection, and global error
//! strings for defects that name no single cell (missing columns, duplicate
//! IDs). Reports are regenerated in full on every pass, never patched.

use crate::entity::EntityType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One field-level defect, addressable to a single displayed cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CellError {
    /// Which entity collection the defect is in.
    pub entity_type: EntityType,
    /// Position of the row in the ingested sequence.
    pub row_index: usize,
    /// The offending column name.
    pub column_id: String,
    /// Human-readable description.
    pub message: String,
}

impl CellError {
    pub fn new(
        entity_type: EntityType,
        row_index: usize,
        column_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            entity_type,
            row_index,
            column_id: column_id.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}].{}: {}",
            self.entity_type, self.row_index, self.column_id, self.message
        )
    }
}

/// The aggregated outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Field-level defects, in check order.
    pub cell_errors: Vec<CellError>,
    /// Dataset-level defects, in check order.
    pub global_errors: Vec<String>,
    /// Derived: true iff both error lists are empty.
    pub is_valid: bool,
}

impl ValidationReport {
    /// Build a report from collected errors; `is_valid` is strictly derived.
    pub fn from_parts(cell_errors: Vec<CellError>, global_errors: Vec<String>) -> Self {
        let is_valid = cell_errors.is_empty() && global_errors.is_empty();
        Self {
            cell_errors,
            global_errors,
            is_valid,
        }
    }

    /// An empty, valid report.
    pub fn valid() -> Self {
        Self::from_parts(Vec::new(), Vec::new())
    }
}
