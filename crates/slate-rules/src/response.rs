//! Response envelope for the rule-generation boundary.

use serde::{Deserialize, Serialize};
use slate_core::BusinessRule;

pub const MATCH_MESSAGE: &str = "Rule generated successfully";

pub const NO_MATCH_MESSAGE: &str =
    "Could not parse rule from natural language. Please try a different format.";

/// Example phrasings returned alongside a no-match outcome.
pub const SUGGESTIONS: [&str; 4] = [
    "Try: 'Tasks T1 and T2 must run together'",
    "Try: 'Limit Senior workers to 3 slots per phase'",
    "Try: 'Task T3 can only run in phases 1-3'",
    "Try: 'VIP clients need minimum 2 common slots'",
];

/// Outcome of one interpretation call: exactly one rule or one failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<BusinessRule>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

impl RuleResponse {
    pub fn matched(rule: BusinessRule) -> Self {
        Self {
            success: true,
            rule: Some(rule),
            message: MATCH_MESSAGE.to_string(),
            suggestions: Vec::new(),
        }
    }

    pub fn unmatched() -> Self {
        Self {
            success: false,
            rule: None,
            message: NO_MATCH_MESSAGE.to_string(),
            suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
