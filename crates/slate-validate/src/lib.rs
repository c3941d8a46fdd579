//! Dataset validation for Slate.
//!
//! Validates the three related entity collections (clients, workers, tasks)
//! across several perimeters:
//!
//! 1. **Column presence** - required columns per the schema registry
//! 2. **Duplicate IDs** - unique identifier collisions per collection
//! 3. **Entity fields** - per-row required fields, numeric ranges, embedded
//!    JSON well-formedness
//! 4. **Cross-references** - task-ID references, skill coverage, declared
//!    capacity vs availability
//!
//! Validators never raise: every defect becomes a [`CellError`] or a global
//! error string in the aggregated [`ValidationReport`]. A pass is pure and
//! idempotent over a snapshot.
//!
//! [`CellError`]: slate_core::CellError
//! [`ValidationReport`]: slate_core::ValidationReport

pub mod columns;
pub mod cross;
pub mod entity;
pub mod ingest;
pub mod validator;

pub use ingest::ingest_entity;
pub use validator::{validate_dataset, validate_entity};
