//! Ingest gate for freshly parsed collections.
//!
//! A collection only replaces the store's current one when its isolated
//! validation passes. Rejected uploads are discarded wholesale; the caller
//! gets the report either way and decides how to surface it.

use crate::validator::validate_entity;
use slate_core::{DataStore, EntityType, Row, ValidationReport};

/// Validate `rows` in isolation and, if clean, install them as the store's
/// collection for `entity`.
///
/// The previous collection is left untouched on rejection. The returned
/// report covers only the single-entity checks; run
/// [`validate_dataset`](crate::validate_dataset) afterwards for the
/// cross-entity picture.
pub fn ingest_entity(
    store: &mut DataStore,
    entity: EntityType,
    rows: Vec<Row>,
) -> ValidationReport {
    let report = validate_entity(&rows, entity);

    if report.is_valid {
        tracing::info!(entity = %entity, rows = rows.len(), "collection accepted");
        store.set_collection(entity, rows);
    } else {
        tracing::info!(
            entity = %entity,
            rows = rows.len(),
            cell_errors = report.cell_errors.len(),
            global_errors = report.global_errors.len(),
            "collection rejected"
        );
    }

    report
}
