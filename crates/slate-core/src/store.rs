//! The in-process data store.
//!
//! An explicit context object owning all mutable state: the three entity
//! collections, the latest validation errors, the business-rule list, and
//! the prioritization weights. Every collection mutation replaces the
//! collection wholesale or maps over it to produce a new one; rows are never
//! mutated in place. There is exactly one writer, so no locking.

use crate::entity::{Dataset, EntityType, Row};
use crate::export::ExportConfig;
use crate::report::CellError;
use crate::rule::BusinessRule;
use crate::weights::{PrioritizationWeights, WeightKey};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct DataStore {
    dataset: Dataset,
    rules: Vec<BusinessRule>,
    weights: PrioritizationWeights,
    errors: Vec<String>,
    cell_errors: Vec<CellError>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ----- entity collections -----

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn clients(&self) -> &[Row] {
        &self.dataset.clients
    }

    pub fn workers(&self) -> &[Row] {
        &self.dataset.workers
    }

    pub fn tasks(&self) -> &[Row] {
        &self.dataset.tasks
    }

    /// Replace one entity collection wholesale.
    pub fn set_collection(&mut self, entity: EntityType, rows: Vec<Row>) {
        match entity {
            EntityType::Clients => self.dataset.clients = rows,
            EntityType::Workers => self.dataset.workers = rows,
            EntityType::Tasks => self.dataset.tasks = rows,
        }
    }

    pub fn clear_collection(&mut self, entity: EntityType) {
        self.set_collection(entity, Vec::new());
    }

    /// Edit a single cell by mapping the collection into a new one. Rows
    /// other than the target are carried over unchanged; an out-of-range
    /// index leaves the collection as it was.
    pub fn update_cell(&mut self, entity: EntityType, row_index: usize, column: &str, value: Value) {
        let rows = self
            .dataset
            .collection(entity)
            .iter()
            .enumerate()
            .map(|(index, row)| {
                if index == row_index {
                    let mut edited = row.clone();
                    edited.insert(column.to_string(), value.clone());
                    edited
                } else {
                    row.clone()
                }
            })
            .collect();
        self.set_collection(entity, rows);
    }

    // ----- validation error bookkeeping -----

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn set_errors(&mut self, errors: Vec<String>) {
        self.errors = errors;
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn cell_errors(&self) -> &[CellError] {
        &self.cell_errors
    }

    pub fn set_cell_errors(&mut self, cell_errors: Vec<CellError>) {
        self.cell_errors = cell_errors;
    }

    pub fn clear_cell_errors(&mut self) {
        self.cell_errors.clear();
    }

    // ----- business rules -----

    pub fn rules(&self) -> &[BusinessRule] {
        &self.rules
    }

    pub fn add_rule(&mut self, rule: BusinessRule) {
        self.rules.push(rule);
    }

    /// Apply an edit to the rule with the given id. Returns false when no
    /// rule matches.
    pub fn update_rule(&mut self, id: &str, edit: impl FnOnce(&mut BusinessRule)) -> bool {
        match self.rules.iter_mut().find(|rule| rule.id == id) {
            Some(rule) => {
                edit(rule);
                true
            }
            None => false,
        }
    }

    /// Toggle or set a rule's enabled flag. Returns false when no rule
    /// matches.
    pub fn set_rule_enabled(&mut self, id: &str, enabled: bool) -> bool {
        self.update_rule(id, |rule| rule.enabled = enabled)
    }

    /// Remove the rule with the given id. Returns false when no rule
    /// matches.
    pub fn remove_rule(&mut self, id: &str) -> bool {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.id != id);
        self.rules.len() != before
    }

    pub fn set_rules(&mut self, rules: Vec<BusinessRule>) {
        self.rules = rules;
    }

    // ----- prioritization weights -----

    pub fn weights(&self) -> &PrioritizationWeights {
        &self.weights
    }

    pub fn set_weights(&mut self, weights: PrioritizationWeights) {
        self.weights = weights;
    }

    pub fn update_weight(&mut self, key: WeightKey, value: f64) {
        self.weights.set(key, value);
    }

    // ----- export -----

    /// Snapshot everything the export boundary serializes.
    pub fn export_config(&self) -> ExportConfig {
        ExportConfig {
            clients: self.dataset.clients.clone(),
            workers: self.dataset.workers.clone(),
            tasks: self.dataset.tasks.clone(),
            rules: self.rules.clone(),
            weights: self.weights.clone(),
        }
    }
}
