//! Structural checks: column presence and duplicate identifiers.
//!
//! Both produce global errors (one per entity type), not cell errors - a
//! missing column or a colliding ID set is not attributable to a single
//! cell.

use slate_core::{field, is_falsy, required_columns, value_text, EntityType, Row};

/// Compare the first row's key set against the schema registry.
///
/// Returns one message listing every missing column, or a dedicated message
/// when the collection claims rows but the first row is empty. `None` for an
/// empty collection (nothing was uploaded) or a conforming one.
pub fn missing_columns_error(rows: &[Row], entity: EntityType) -> Option<String> {
    let first = rows.first()?;

    if first.is_empty() {
        return Some(format!(
            "Error: No rows found in {entity} data. Please upload a non-empty file."
        ));
    }

    let missing: Vec<&str> = required_columns(entity)
        .iter()
        .filter(|column| !first.contains_key(**column))
        .copied()
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!(
            "Missing required columns in {entity} data: {}. Please upload a file with these columns.",
            missing.join(", ")
        ))
    }
}

/// Flag identifier values that occur after their first occurrence.
///
/// Falsy IDs are dropped before comparison. The message lists duplicate
/// occurrences, not distinct offending IDs: an ID appearing three times is
/// named twice. That occurrence semantic is deliberate and pinned by tests.
pub fn duplicate_id_error(rows: &[Row], entity: EntityType) -> Option<String> {
    let id_field = entity.id_column();

    let ids: Vec<String> = rows
        .iter()
        .filter_map(|row| {
            let value = field(row, id_field);
            if is_falsy(value) {
                None
            } else {
                value.map(value_text)
            }
        })
        .collect();

    let duplicates: Vec<&str> = ids
        .iter()
        .enumerate()
        .filter(|(index, id)| ids.iter().position(|x| x == *id) != Some(*index))
        .map(|(_, id)| id.as_str())
        .collect();

    if duplicates.is_empty() {
        None
    } else {
        Some(format!(
            "Duplicate {id_field} found in {entity}: {}",
            duplicates.join(", ")
        ))
    }
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

    fn full_client() -> Row {
        row(&[
            ("ClientID", json!("C1")),
            ("ClientName", json!("Acme")),
            ("PriorityLevel", json!(3)),
            ("RequestedTaskIDs", json!("T1")),
            ("GroupTag", json!("A")),
            ("AttributesJSON", json!("{}")),
        ])
    }

    #[test]
    fn missing_columns_listed_in_one_message() {
        let rows = vec![row(&[("ClientID", json!("C1")), ("ClientName", json!("Acme"))])];
        let message = missing_columns_error(&rows, EntityType::Clients).unwrap();
        assert!(message.contains("Missing required columns in clients data"));
        assert!(message.contains("PriorityLevel"));
        assert!(message.contains("RequestedTaskIDs"));
        assert!(message.contains("GroupTag"));
        assert!(message.contains("AttributesJSON"));
    }

    #[test]
    fn conforming_first_row_passes() {
        assert!(missing_columns_error(&vec![full_client()], EntityType::Clients).is_none());
        assert!(missing_columns_error(&Vec::new(), EntityType::Clients).is_none());
    }

    #[test]
    fn empty_first_row_is_no_rows_error() {
        let rows = vec![Row::new()];
        let message = missing_columns_error(&rows, EntityType::Workers).unwrap();
        assert!(message.contains("No rows found in workers data"));
    }

    #[test]
    fn duplicate_ids_flag_every_later_occurrence() {
        let rows: Vec<Row> = ["C1", "C2", "C1", "C1"]
            .iter()
            .map(|id| row(&[("ClientID", json!(id))]))
            .collect();
        let message = duplicate_id_error(&rows, EntityType::Clients).unwrap();
        // occurrences at index 2 and 3 are both listed
        assert_eq!(message, "Duplicate ClientID found in clients: C1, C1");
    }

    #[test]
    fn falsy_ids_ignored_for_duplicates() {
        let rows: Vec<Row> = vec![
            row(&[("ClientID", json!(""))]),
            row(&[("ClientID", json!(""))]),
            row(&[("ClientID", json!("C1"))]),
        ];
        assert!(duplicate_id_error(&rows, EntityType::Clients).is_none());
    }
}
