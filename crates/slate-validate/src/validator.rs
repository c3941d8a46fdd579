//! Validation orchestrator.
//!
//! Two entry points: [`validate_dataset`] for the full snapshot and
//! [`validate_entity`] for one freshly ingested collection. Both only
//! aggregate - the individual checks live in `columns`, `entity`, and
//! `cross` - and neither ever fails: every defect lands in the returned
//! report.

use crate::columns::{duplicate_id_error, missing_columns_error};
use crate::cross::{capacity_errors, skill_coverage_errors, task_reference_errors};
use crate::entity::{required_field_errors, validate_entity_rows};
use slate_core::{Dataset, EntityType, Row, ValidationReport};

/// Validate the full dataset snapshot.
///
/// Checks are merged in a fixed order:
///
/// 1. Missing required columns (global, per entity type)
/// 2. Duplicate IDs (global, per entity type)
/// 3. Per-entity field sweeps (clients, then workers, then tasks)
/// 4. Task-reference check (clients -> tasks)
/// 5. Skill-coverage check (tasks vs workers)
/// 6. Capacity check (workers)
///
/// Re-running on the same snapshot yields an identical report.
pub fn validate_dataset(dataset: &Dataset) -> ValidationReport {
    tracing::debug!(
        clients = dataset.clients.len(),
        workers = dataset.workers.len(),
        tasks = dataset.tasks.len(),
        "validating dataset snapshot"
    );

    let mut global_errors = Vec::new();
    let mut cell_errors = Vec::new();

    for entity in EntityType::ALL {
        if let Some(message) = missing_columns_error(dataset.collection(entity), entity) {
            global_errors.push(message);
        }
    }

    for entity in EntityType::ALL {
        if let Some(message) = duplicate_id_error(dataset.collection(entity), entity) {
            global_errors.push(message);
        }
    }

    for entity in EntityType::ALL {
        cell_errors.extend(validate_entity_rows(dataset.collection(entity), entity));
    }

    cell_errors.extend(task_reference_errors(&dataset.clients, &dataset.tasks));
    cell_errors.extend(skill_coverage_errors(&dataset.workers, &dataset.tasks));
    cell_errors.extend(capacity_errors(&dataset.workers));

    let report = ValidationReport::from_parts(cell_errors, global_errors);
    tracing::debug!(
        cell_errors = report.cell_errors.len(),
        global_errors = report.global_errors.len(),
        is_valid = report.is_valid,
        "dataset validation finished"
    );
    report
}

/// Validate one freshly parsed collection in isolation.
///
/// Runs the column-presence check and the required-field sweep only; the
/// other two collections are not consulted. An empty input is valid (there
/// is nothing to reject).
pub fn validate_entity(rows: &[Row], entity: EntityType) -> ValidationReport {
    if rows.is_empty() {
        return ValidationReport::valid();
    }

    let mut global_errors = Vec::new();
    if let Some(message) = missing_columns_error(rows, entity) {
        global_errors.push(message);
    }

    let cell_errors = required_field_errors(rows, entity);
    ValidationReport::from_parts(cell_errors, global_errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn row(pairs: &[(&str, Value)]) -> Row {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn client(id: &str) -> Row {
        row(&[
            ("ClientID", json!(id)),
            ("ClientName", json!("Acme")),
            ("PriorityLevel", json!(3)),
            ("RequestedTaskIDs", json!("T1")),
            ("GroupTag", json!("A")),
            ("AttributesJSON", json!("{}")),
        ])
    }

    fn worker(id: &str) -> Row {
        row(&[
            ("WorkerID", json!(id)),
            ("WorkerName", json!("Ann")),
            ("Skills", json!("cook, drive")),
            ("AvailableSlots", json!("[1,2,3]")),
            ("MaxLoadPerPhase", json!(2)),
            ("WorkerGroup", json!("Alpha")),
            ("QualificationLevel", json!("senior")),
        ])
    }

    fn task(id: &str) -> Row {
        row(&[
            ("TaskID", json!(id)),
            ("TaskName", json!("Cook")),
            ("Category", json!("kitchen")),
            ("Duration", json!(2)),
            ("RequiredSkills", json!("cook")),
            ("PreferredPhases", json!("1-3")),
            ("MaxConcurrent", json!(1)),
        ])
    }

    fn clean_dataset() -> Dataset {
        Dataset {
            clients: vec![client("C1"), client("C2")],
            workers: vec![worker("W1")],
            tasks: vec![task("T1")],
        }
    }

    #[test]
    fn clean_dataset_is_valid() {
        let report = validate_dataset(&clean_dataset());
        assert!(report.is_valid, "{report:?}");
        assert!(report.cell_errors.is_empty());
        assert!(report.global_errors.is_empty());
    }

    #[test]
    fn validation_is_deterministic() {
        let mut dataset = clean_dataset();
        dataset.clients.push(row(&[("ClientID", json!("C1"))]));
        dataset.workers[0].insert("AvailableSlots".into(), json!("[1]"));

        let first = validate_dataset(&dataset);
        let second = validate_dataset(&dataset);
        assert_eq!(first, second);
        assert!(!first.is_valid);
    }

    #[test]
    fn global_error_order_is_columns_then_duplicates() {
        let dataset = Dataset {
            clients: vec![
                row(&[("ClientID", json!("C1"))]),
                row(&[("ClientID", json!("C1"))]),
            ],
            workers: Vec::new(),
            tasks: Vec::new(),
        };
        let report = validate_dataset(&dataset);
        assert_eq!(report.global_errors.len(), 2);
        assert!(report.global_errors[0].contains("Missing required columns in clients data"));
        assert!(report.global_errors[1].contains("Duplicate ClientID found in clients"));
    }

    #[test]
    fn missing_columns_reported_once_per_entity_type() {
        let dataset = Dataset {
            clients: vec![row(&[("ClientID", json!("C1")), ("ClientName", json!("A"))])],
            workers: vec![row(&[("WorkerID", json!("W1")), ("WorkerName", json!("B"))])],
            tasks: Vec::new(),
        };
        let report = validate_dataset(&dataset);
        assert_eq!(report.global_errors.len(), 2);
        assert!(!report.is_valid);
    }

    #[test]
    fn cross_reference_errors_follow_field_sweeps() {
        let mut dataset = clean_dataset();
        dataset.clients[0].insert("RequestedTaskIDs".into(), json!("T9"));
        dataset.tasks[0].insert("RequiredSkills".into(), json!("paint"));
        dataset.workers[0].insert("AvailableSlots".into(), json!("[1]"));

        let report = validate_dataset(&dataset);
        let columns: Vec<&str> = report
            .cell_errors
            .iter()
            .map(|e| e.column_id.as_str())
            .collect();
        assert_eq!(columns, vec!["RequestedTaskIDs", "RequiredSkills", "MaxLoadPerPhase"]);
    }

    #[test]
    fn single_entity_validation_ignores_other_collections() {
        let rows = vec![client("C1"), row(&[("ClientName", json!("NoID"))])];
        let report = validate_entity(&rows, EntityType::Clients);
        // the second row is missing its ID (cell error) and triggers no
        // cross-reference checks
        assert_eq!(report.cell_errors.len(), 1);
        assert_eq!(report.cell_errors[0].column_id, "ClientID");
        // first row defines the column set, so no global error
        assert!(report.global_errors.is_empty());
    }

    #[test]
    fn single_entity_validation_accepts_empty_input() {
        assert!(validate_entity(&[], EntityType::Tasks).is_valid);
    }
}
