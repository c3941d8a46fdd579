//! Typed business-rule records.
//!
//! Rules are user-authored (form input) or derived from natural language by
//! `slate-rules`. They are configuration only: nothing in this system
//! executes them. The `RuleConfig` payload is a sum type so downstream
//! consumers (an eventual solver) get compile-time exhaustiveness instead of
//! an untyped map.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Whether a group-scoped rule names a client group or a worker group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupType {
    Client,
    Worker,
}

impl fmt::Display for GroupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GroupType::Client => f.write_str("client"),
            GroupType::Worker => f.write_str("worker"),
        }
    }
}

/// The type-dependent rule payload, serialized adjacently as
/// `{"type": ..., "config": {...}}` to match the exported configuration
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config")]
pub enum RuleConfig {
    /// The listed tasks must be scheduled together.
    #[serde(rename = "coRun")]
    CoRun {
        #[serde(rename = "taskIDs")]
        task_ids: Vec<String>,
    },

    /// A client or worker group requires a minimum number of common slots.
    #[serde(rename = "slotRestriction", rename_all = "camelCase")]
    SlotRestriction {
        group_type: GroupType,
        group_name: String,
        min_common_slots: u32,
    },

    /// Cap the per-phase load of a worker group.
    #[serde(rename = "loadLimit", rename_all = "camelCase")]
    LoadLimit {
        worker_group: String,
        max_slots_per_phase: u32,
    },

    /// Restrict a task to an explicit set of phases.
    #[serde(rename = "phaseWindow", rename_all = "camelCase")]
    PhaseWindow {
        #[serde(rename = "taskID")]
        task_id: String,
        allowed_phases: Vec<u32>,
    },

    /// Apply a regex-driven rule template.
    #[serde(rename = "patternMatch", rename_all = "camelCase")]
    PatternMatch {
        regex: String,
        rule_template: String,
        parameters: serde_json::Map<String, Value>,
    },

    /// Override rule precedence with explicit global/specific orderings.
    #[serde(rename = "precedenceOverride", rename_all = "camelCase")]
    PrecedenceOverride {
        global_rules: Vec<String>,
        specific_rules: Vec<String>,
    },
}

impl RuleConfig {
    /// The serialized type tag for this variant.
    pub fn rule_type(&self) -> &'static str {
        match self {
            RuleConfig::CoRun { .. } => "coRun",
            RuleConfig::SlotRestriction { .. } => "slotRestriction",
            RuleConfig::LoadLimit { .. } => "loadLimit",
            RuleConfig::PhaseWindow { .. } => "phaseWindow",
            RuleConfig::PatternMatch { .. } => "patternMatch",
            RuleConfig::PrecedenceOverride { .. } => "precedenceOverride",
        }
    }

    /// The default urgency assigned when a rule of this type is generated.
    /// Numerically lower values are less urgent.
    pub fn default_priority(&self) -> u32 {
        match self {
            RuleConfig::CoRun { .. } => 5,
            RuleConfig::LoadLimit { .. } => 4,
            RuleConfig::SlotRestriction { .. } => 4,
            RuleConfig::PhaseWindow { .. } => 3,
            RuleConfig::PatternMatch { .. } => 2,
            RuleConfig::PrecedenceOverride { .. } => 1,
        }
    }
}

/// One business rule: identity and display metadata plus the typed payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessRule {
    pub id: String,
    pub name: String,
    pub description: String,
    pub enabled: bool,
    pub priority: u32,
    #[serde(flatten)]
    pub config: RuleConfig,
}

impl BusinessRule {
    /// Build a rule with the type's default priority, enabled.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        config: RuleConfig,
    ) -> Self {
        let priority = config.default_priority();
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            enabled: true,
            priority,
            config,
        }
    }
}
