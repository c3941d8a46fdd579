//! Per-entity field validation.
//!
//! Each row is checked independently, in input order, so one bad row never
//! hides defects in another. Parse failures (malformed JSON, non-numeric
//! strings) are converted to cell errors on the spot, never propagated.

use slate_core::{coerce_number, field, is_falsy, is_present, parse_json_field, truthy_text};
use slate_core::{CellError, EntityType, Row};

/// Run the full field sweep for one collection.
pub fn validate_entity_rows(rows: &[Row], entity: EntityType) -> Vec<CellError> {
    match entity {
        EntityType::Clients => validate_clients(rows),
        EntityType::Workers => validate_workers(rows),
        EntityType::Tasks => validate_tasks(rows),
    }
}

/// Required ID/Name checks only, as used by the single-entity ingest gate.
pub fn required_field_errors(rows: &[Row], entity: EntityType) -> Vec<CellError> {
    let mut errors = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        push_required(&mut errors, entity, index, row);
    }
    errors
}

fn push_required(errors: &mut Vec<CellError>, entity: EntityType, index: usize, row: &Row) {
    let (id_column, id_message, name_column, name_message) = match entity {
        EntityType::Clients => (
            "ClientID",
            "Client ID is required",
            "ClientName",
            "Client Name is required",
        ),
        EntityType::Workers => (
            "WorkerID",
            "Worker ID is required",
            "WorkerName",
            "Worker Name is required",
        ),
        EntityType::Tasks => (
            "TaskID",
            "Task ID is required",
            "TaskName",
            "Task Name is required",
        ),
    };

    if is_falsy(field(row, id_column)) {
        errors.push(CellError::new(entity, index, id_column, id_message));
    }
    if is_falsy(field(row, name_column)) {
        errors.push(CellError::new(entity, index, name_column, name_message));
    }
}

fn validate_clients(clients: &[Row]) -> Vec<CellError> {
    let mut errors = Vec::new();

    for (index, client) in clients.iter().enumerate() {
        push_required(&mut errors, EntityType::Clients, index, client);

        // Priority level: present values must be in [1, 5]
        if let Some(value) = field(client, "PriorityLevel") {
            if is_present(Some(value)) {
                let in_range = coerce_number(value)
                    .map(|n| (1.0..=5.0).contains(&n))
                    .unwrap_or(false);
                if !in_range {
                    errors.push(CellError::new(
                        EntityType::Clients,
                        index,
                        "PriorityLevel",
                        "Priority Level must be between 1 and 5",
                    ));
                }
            }
        }

        // Attributes: non-empty values must parse as JSON
        if let Some(text) = truthy_text(client, "AttributesJSON") {
            if serde_json::from_str::<serde_json::Value>(&text).is_err() {
                errors.push(CellError::new(
                    EntityType::Clients,
                    index,
                    "AttributesJSON",
                    "Invalid JSON format",
                ));
            }
        }
    }

    errors
}

fn validate_workers(workers: &[Row]) -> Vec<CellError> {
    let mut errors = Vec::new();

    for (index, worker) in workers.iter().enumerate() {
        push_required(&mut errors, EntityType::Workers, index, worker);

        // AvailableSlots: truthy values must be a JSON array of positive
        // integers. Malformed JSON and wrong shape get distinct messages.
        if let Some(value) = field(worker, "AvailableSlots") {
            if !is_falsy(Some(value)) {
                match parse_json_field(value) {
                    None => errors.push(CellError::new(
                        EntityType::Workers,
                        index,
                        "AvailableSlots",
                        "AvailableSlots must be valid JSON array",
                    )),
                    Some(parsed) => {
                        let well_shaped = parsed
                            .as_array()
                            .map(|slots| {
                                slots
                                    .iter()
                                    .all(|slot| slot.as_i64().map(|n| n > 0).unwrap_or(false))
                            })
                            .unwrap_or(false);
                        if !well_shaped {
                            errors.push(CellError::new(
                                EntityType::Workers,
                                index,
                                "AvailableSlots",
                                "AvailableSlots must be an array of positive integers",
                            ));
                        }
                    }
                }
            }
        }

        // MaxLoadPerPhase: present values must be >= 1
        if let Some(value) = field(worker, "MaxLoadPerPhase") {
            if is_present(Some(value)) {
                let ok = coerce_number(value).map(|n| n >= 1.0).unwrap_or(false);
                if !ok {
                    errors.push(CellError::new(
                        EntityType::Workers,
                        index,
                        "MaxLoadPerPhase",
                        "Max Load Per Phase must be a positive number",
                    ));
                }
            }
        }
    }

    errors
}

fn validate_tasks(tasks: &[Row]) -> Vec<CellError> {
    let mut errors = Vec::new();

    for (index, task) in tasks.iter().enumerate() {
        push_required(&mut errors, EntityType::Tasks, index, task);

        if let Some(value) = field(task, "Duration") {
            if is_present(Some(value)) {
                let ok = coerce_number(value).map(|n| n >= 1.0).unwrap_or(false);
                if !ok {
                    errors.push(CellError::new(
                        EntityType::Tasks,
                        index,
                        "Duration",
                        "Duration must be at least 1",
                    ));
                }
            }
        }

        if let Some(value) = field(task, "MaxConcurrent") {
            if is_present(Some(value)) {
                let ok = coerce_number(value).map(|n| n >= 1.0).unwrap_or(false);
                if !ok {
                    errors.push(CellError::new(
                        EntityType::Tasks,
                        index,
                        "MaxConcurrent",
                        "Max Concurrent must be a positive number",
                    ));
                }
            }
        }
    }

    errors
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

    fn client(id: &str, name: &str) -> Row {
        row(&[("ClientID", json!(id)), ("ClientName", json!(name))])
    }

    #[test]
    fn required_fields_flagged_iff_falsy() {
        let rows = vec![
            client("C1", "Acme"),
            client("", "Globex"),
            row(&[("ClientName", json!("Initech"))]),
        ];
        let errors = validate_entity_rows(&rows, EntityType::Clients);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].row_index, 1);
        assert_eq!(errors[0].column_id, "ClientID");
        assert_eq!(errors[0].message, "Client ID is required");
        assert_eq!(errors[1].row_index, 2);
        assert_eq!(errors[1].column_id, "ClientID");
    }

    #[test]
    fn rows_validated_independently() {
        // a defect in row 0 must not suppress the defect in row 2
        let rows = vec![
            row(&[("ClientName", json!("A"))]),
            client("C2", "B"),
            row(&[("ClientID", json!("C3"))]),
        ];
        let errors = validate_entity_rows(&rows, EntityType::Clients);
        let rows_with_errors: Vec<usize> = errors.iter().map(|e| e.row_index).collect();
        assert_eq!(rows_with_errors, vec![0, 2]);
    }

    #[test]
    fn priority_level_range() {
        let mut ok = client("C1", "Acme");
        ok.insert("PriorityLevel".into(), json!(3));
        let mut high = client("C2", "Globex");
        high.insert("PriorityLevel".into(), json!("6"));
        let mut junk = client("C3", "Initech");
        junk.insert("PriorityLevel".into(), json!("high"));
        // empty string coerces to zero, which is out of range
        let mut empty = client("C4", "Umbrella");
        empty.insert("PriorityLevel".into(), json!(""));

        let errors = validate_entity_rows(&vec![ok, high, junk, empty], EntityType::Clients);
        let flagged: Vec<usize> = errors.iter().map(|e| e.row_index).collect();
        assert_eq!(flagged, vec![1, 2, 3]);
        for e in &errors {
            assert_eq!(e.message, "Priority Level must be between 1 and 5");
        }
    }

    #[test]
    fn bad_attributes_json_is_one_error_and_does_not_abort() {
        let mut bad = client("C1", "Acme");
        bad.insert("AttributesJSON".into(), json!("{bad json"));
        let mut also_bad = client("", "Globex");
        also_bad.insert("AttributesJSON".into(), json!("{}"));

        let errors = validate_entity_rows(&vec![bad, also_bad], EntityType::Clients);
        let json_errors: Vec<&CellError> = errors
            .iter()
            .filter(|e| e.column_id == "AttributesJSON")
            .collect();
        assert_eq!(json_errors.len(), 1);
        assert_eq!(json_errors[0].row_index, 0);
        assert_eq!(json_errors[0].message, "Invalid JSON format");
        // the second row's own defect is still reported
        assert!(errors.iter().any(|e| e.row_index == 1 && e.column_id == "ClientID"));
    }

    #[test]
    fn available_slots_messages_distinguish_parse_from_shape() {
        let mut malformed = row(&[("WorkerID", json!("W1")), ("WorkerName", json!("Ann"))]);
        malformed.insert("AvailableSlots".into(), json!("[1,2"));
        let mut wrong_shape = row(&[("WorkerID", json!("W2")), ("WorkerName", json!("Bob"))]);
        wrong_shape.insert("AvailableSlots".into(), json!("[1, -2]"));
        let mut not_array = row(&[("WorkerID", json!("W3")), ("WorkerName", json!("Cyd"))]);
        not_array.insert("AvailableSlots".into(), json!("{\"a\": 1}"));
        let mut fine = row(&[("WorkerID", json!("W4")), ("WorkerName", json!("Dee"))]);
        fine.insert("AvailableSlots".into(), json!("[1, 2, 3]"));

        let errors =
            validate_entity_rows(&vec![malformed, wrong_shape, not_array, fine], EntityType::Workers);
        assert_eq!(errors.len(), 3);
        assert_eq!(errors[0].message, "AvailableSlots must be valid JSON array");
        assert_eq!(
            errors[1].message,
            "AvailableSlots must be an array of positive integers"
        );
        assert_eq!(
            errors[2].message,
            "AvailableSlots must be an array of positive integers"
        );
    }

    #[test]
    fn worker_load_and_task_numeric_checks() {
        let mut worker = row(&[("WorkerID", json!("W1")), ("WorkerName", json!("Ann"))]);
        worker.insert("MaxLoadPerPhase".into(), json!("0"));
        let errors = validate_entity_rows(&vec![worker], EntityType::Workers);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "Max Load Per Phase must be a positive number");

        let mut task = row(&[("TaskID", json!("T1")), ("TaskName", json!("Paint"))]);
        task.insert("Duration".into(), json!("0.5"));
        task.insert("MaxConcurrent".into(), json!("many"));
        let errors = validate_entity_rows(&vec![task], EntityType::Tasks);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "Duration must be at least 1");
        assert_eq!(errors[1].message, "Max Concurrent must be a positive number");
    }

    #[test]
    fn absent_optional_fields_are_not_flagged() {
        let rows = vec![client("C1", "Acme")];
        assert!(validate_entity_rows(&rows, EntityType::Clients).is_empty());
    }
}
