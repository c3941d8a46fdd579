//! Schema registry: the required columns for each entity type.
//!
//! Pure lookup over static definitions. The column-presence check in
//! `slate-validate` compares an uploaded file's first row against these
//! lists.

use crate::entity::EntityType;

const CLIENT_COLUMNS: [&str; 6] = [
    "ClientID",
    "ClientName",
    "PriorityLevel",
    "RequestedTaskIDs",
    "GroupTag",
    "AttributesJSON",
];

const WORKER_COLUMNS: [&str; 7] = [
    "WorkerID",
    "WorkerName",
    "Skills",
    "AvailableSlots",
    "MaxLoadPerPhase",
    "WorkerGroup",
    "QualificationLevel",
];

const TASK_COLUMNS: [&str; 7] = [
    "TaskID",
    "TaskName",
    "Category",
    "Duration",
    "RequiredSkills",
    "PreferredPhases",
    "MaxConcurrent",
];

/// The ordered list of required columns for an entity type.
pub fn required_columns(entity: EntityType) -> &'static [&'static str] {
    match entity {
        EntityType::Clients => &CLIENT_COLUMNS,
        EntityType::Workers => &WORKER_COLUMNS,
        EntityType::Tasks => &TASK_COLUMNS,
    }
}
