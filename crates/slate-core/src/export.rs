//! Export configuration shapes.
//!
//! The export boundary (an external file writer) downloads the cleaned
//! entity collections plus the rules-and-weights configuration. This
//! module's contract is the serialized shape only; the writer handles
//! CSV/file concerns. The shape is pinned by
//! `schemas/ExportConfig.schema.json`.

use crate::entity::Row;
use crate::rule::BusinessRule;
use crate::weights::PrioritizationWeights;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Everything the export boundary serializes into `rules_config.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    pub clients: Vec<Row>,
    pub workers: Vec<Row>,
    pub tasks: Vec<Row>,
    pub rules: Vec<BusinessRule>,
    pub weights: PrioritizationWeights,
}

/// Error serializing an export configuration.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportConfig {
    /// Pretty-printed JSON, as written to the configuration download.
    pub fn to_json(&self) -> Result<String, ExportError> {
        serde_json::to_string_pretty(self).map_err(ExportError::from)
    }
}
