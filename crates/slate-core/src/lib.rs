//! Core data model for the Slate allocation configurator.
//!
//! Defines the entity row records ingested from spreadsheet files, the schema
//! registry of required columns, the typed business-rule records, the
//! prioritization weights, and the in-process `DataStore` that owns all
//! mutable state. Validation lives in `slate-validate`; natural-language rule
//! interpretation lives in `slate-rules`.

pub mod entity;
pub mod export;
pub mod report;
pub mod rule;
pub mod schema;
pub mod store;
pub mod weights;

pub use entity::{
    coerce_number, field, format_number, is_falsy, is_present, parse_json_field, rows_from_json,
    truthy_text, value_text, Dataset, EntityType, IngestError, Row,
};
pub use export::{ExportConfig, ExportError};
pub use report::{CellError, ValidationReport};
pub use rule::{BusinessRule, GroupType, RuleConfig};
pub use schema::required_columns;
pub use store::DataStore;
pub use weights::{PrioritizationWeights, WeightKey, WeightPreset};
