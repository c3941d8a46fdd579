//! Cross-entity reference checks.
//!
//! Each check runs only when both sides of the relationship have data:
//! there is nothing to cross-reference against an empty collection, and an
//! empty upload should not drown the user in spurious errors.

use slate_core::{coerce_number, field, format_number, parse_json_field, truthy_text, value_text};
use slate_core::{CellError, EntityType, Row};
use std::collections::HashSet;

/// Every `RequestedTaskIDs` entry must name a known TaskID.
pub fn task_reference_errors(clients: &[Row], tasks: &[Row]) -> Vec<CellError> {
    if clients.is_empty() || tasks.is_empty() {
        return Vec::new();
    }

    let known: HashSet<String> = tasks
        .iter()
        .filter_map(|task| field(task, "TaskID").map(value_text))
        .collect();

    let mut errors = Vec::new();
    for (index, client) in clients.iter().enumerate() {
        let Some(requested) = truthy_text(client, "RequestedTaskIDs") else {
            continue;
        };
        let invalid: Vec<&str> = requested
            .split(',')
            .map(str::trim)
            .filter(|id| !known.contains(*id))
            .collect();
        if !invalid.is_empty() {
            errors.push(CellError::new(
                EntityType::Clients,
                index,
                "RequestedTaskIDs",
                format!("Invalid task IDs: {}", invalid.join(", ")),
            ));
        }
    }
    errors
}

/// Every `RequiredSkills` token must be covered by some worker's `Skills`.
/// Tokens are compared trimmed and lower-cased.
pub fn skill_coverage_errors(workers: &[Row], tasks: &[Row]) -> Vec<CellError> {
    if workers.is_empty() || tasks.is_empty() {
        return Vec::new();
    }

    let mut available: HashSet<String> = HashSet::new();
    for worker in workers {
        if let Some(skills) = truthy_text(worker, "Skills") {
            for skill in skills.split(',') {
                available.insert(skill.trim().to_lowercase());
            }
        }
    }

    let mut errors = Vec::new();
    for (index, task) in tasks.iter().enumerate() {
        let Some(required) = truthy_text(task, "RequiredSkills") else {
            continue;
        };
        let missing: Vec<String> = required
            .split(',')
            .map(|skill| skill.trim().to_lowercase())
            .filter(|skill| !available.contains(skill))
            .collect();
        if !missing.is_empty() {
            errors.push(CellError::new(
                EntityType::Tasks,
                index,
                "RequiredSkills",
                format!("No workers available with skills: {}", missing.join(", ")),
            ));
        }
    }
    errors
}

/// A worker's declared slot count must cover its declared max load.
///
/// Rows whose `AvailableSlots` fail to parse are skipped here - the entity
/// validator already reported them.
pub fn capacity_errors(workers: &[Row]) -> Vec<CellError> {
    let mut errors = Vec::new();

    for (index, worker) in workers.iter().enumerate() {
        if truthy_text(worker, "AvailableSlots").is_none()
            || truthy_text(worker, "MaxLoadPerPhase").is_none()
        {
            continue;
        }
        let Some(slots_value) = field(worker, "AvailableSlots") else {
            continue;
        };

        let Some(parsed) = parse_json_field(slots_value) else {
            continue;
        };
        let Some(slots) = parsed.as_array() else {
            continue;
        };
        let Some(max_load) = field(worker, "MaxLoadPerPhase").and_then(coerce_number) else {
            continue;
        };

        if (slots.len() as f64) < max_load {
            errors.push(CellError::new(
                EntityType::Workers,
                index,
                "MaxLoadPerPhase",
                format!(
                    "Max load ({}) exceeds available slots ({})",
                    format_number(max_load),
                    slots.len()
                ),
            ));
        }
    }
    errors
}
