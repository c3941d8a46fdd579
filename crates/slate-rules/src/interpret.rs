//! Prompt classification and parameter extraction.
//!
//! The six rule categories are tried in a fixed priority order as
//! (predicate, extractor) pairs; the first category whose keyword predicate
//! accepts the lower-cased prompt wins. A winning category whose extractor
//! finds no usable parameters yields no rule at all - later categories are
//! not consulted, keeping the dispatch order auditable.

use crate::response::RuleResponse;
use regex::Regex;
use slate_core::{BusinessRule, Dataset, GroupType, RuleConfig};

struct Draft {
    name: String,
    description: String,
    config: RuleConfig,
}

type Predicate = fn(&str) -> bool;
type Extractor = fn(&str, &str) -> Option<Draft>;

const CATEGORIES: [(Predicate, Extractor); 6] = [
    (is_co_run, extract_co_run),
    (is_load_limit, extract_load_limit),
    (is_phase_window, extract_phase_window),
    (is_slot_restriction, extract_slot_restriction),
    (is_pattern_match, extract_pattern_match),
    (is_precedence_override, extract_precedence_override),
];

/// Derive one rule from a free-text instruction, or nothing.
///
/// Every generated rule is enabled, carries its category's default
/// priority, and gets a fresh wall-clock identifier.
pub fn derive_rule(prompt: &str) -> Option<BusinessRule> {
    let lower = prompt.to_lowercase();
    for (accepts, extract) in CATEGORIES {
        if accepts(&lower) {
            let draft = extract(prompt, &lower)?;
            return Some(BusinessRule::new(
                next_rule_id(),
                draft.name,
                draft.description,
                draft.config,
            ));
        }
    }
    None
}

/// Interpret a prompt against the current dataset snapshot.
///
/// The collections are context only; nothing in the extraction consults
/// them.
pub fn interpret(prompt: &str, dataset: &Dataset) -> RuleResponse {
    tracing::debug!(
        prompt,
        clients = dataset.clients.len(),
        workers = dataset.workers.len(),
        tasks = dataset.tasks.len(),
        "natural language rule request"
    );

    match derive_rule(prompt) {
        Some(rule) => {
            tracing::debug!(id = %rule.id, rule_type = rule.config.rule_type(), "rule generated");
            RuleResponse::matched(rule)
        }
        None => RuleResponse::unmatched(),
    }
}

fn next_rule_id() -> String {
    chrono::Utc::now().timestamp_millis().to_string()
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(error) => {
            tracing::warn!(%pattern, %error, "invalid extraction pattern");
            None
        }
    }
}

fn capture(pattern: &str, text: &str) -> Option<String> {
    compile(pattern)?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn is_co_run(lower: &str) -> bool {
    lower.contains("run together") || lower.contains("co-run") || lower.contains("concurrent")
}

fn extract_co_run(prompt: &str, _lower: &str) -> Option<Draft> {
    if !compile(r"(?i)\btasks?\b")?.is_match(prompt) {
        return None;
    }
    let task_ids: Vec<String> = compile(r"\b[A-Za-z]+\d+\b")?
        .find_iter(prompt)
        .map(|m| m.as_str().to_uppercase())
        .collect();
    if task_ids.is_empty() {
        return None;
    }

    let joined = task_ids.join(", ");
    Some(Draft {
        name: format!("Co-run {joined}"),
        description: format!("Tasks {joined} must run together"),
        config: RuleConfig::CoRun { task_ids },
    })
}

fn is_load_limit(lower: &str) -> bool {
    lower.contains("load limit") || lower.contains("max load") || lower.contains("workload")
}

fn extract_load_limit(prompt: &str, _lower: &str) -> Option<Draft> {
    let worker_group = capture(r"(?i)(?:worker group|group)\s+([A-Za-z]+)", prompt)?;
    let max_load: u32 = capture(r"(?i)(\d+)\s*(?:slots?|tasks?|load)", prompt)?
        .parse()
        .ok()?;

    Some(Draft {
        name: format!("Load Limit for {worker_group}"),
        description: format!("Limit {worker_group} workers to {max_load} slots per phase"),
        config: RuleConfig::LoadLimit {
            worker_group,
            max_slots_per_phase: max_load,
        },
    })
}

fn is_phase_window(lower: &str) -> bool {
    lower.contains("phase")
        && (lower.contains("window")
            || lower.contains("allowed")
            || lower.contains("restrict")
            || lower.contains("only"))
}

fn extract_phase_window(prompt: &str, _lower: &str) -> Option<Draft> {
    let task_id = capture(r"(?i)tasks?\s+([A-Za-z0-9]+)", prompt)?.to_uppercase();
    let phase_text = capture(r"(?i)phases?\s*([0-9,\-\s]+)", prompt)?;
    let allowed_phases = parse_phases(&phase_text);
    if allowed_phases.is_empty() {
        return None;
    }

    let joined = allowed_phases
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    Some(Draft {
        name: format!("Phase Window for {task_id}"),
        description: format!("Task {task_id} can only run in phases {joined}"),
        config: RuleConfig::PhaseWindow {
            task_id,
            allowed_phases,
        },
    })
}

/// Expand "N-M" to every integer in the inclusive range, or parse a
/// comma/space-separated list discarding non-numeric tokens. An inverted
/// range yields nothing.
fn parse_phases(text: &str) -> Vec<u32> {
    if text.contains('-') {
        let mut parts = text.split('-');
        let start = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
        let end = parts.next().and_then(|p| p.trim().parse::<u32>().ok());
        return match (start, end) {
            (Some(start), Some(end)) if start <= end => (start..=end).collect(),
            _ => Vec::new(),
        };
    }

    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse().ok())
        .collect()
}

fn is_slot_restriction(lower: &str) -> bool {
    lower.contains("slot")
        && (lower.contains("restriction")
            || lower.contains("common")
            || lower.contains("minimum"))
}

fn extract_slot_restriction(prompt: &str, lower: &str) -> Option<Draft> {
    let group_name = capture(r"(?i)(?:group|client group|worker group)\s+([A-Za-z]+)", prompt)?;
    let min_slots: u32 = capture(r"(?i)(\d+)\s*(?:common slots?|minimum)", prompt)?
        .parse()
        .ok()?;
    let group_type = if lower.contains("client") {
        GroupType::Client
    } else {
        GroupType::Worker
    };

    Some(Draft {
        name: format!("Slot Restriction for {group_name}"),
        description: format!(
            "{group_type} group {group_name} requires minimum {min_slots} common slots"
        ),
        config: RuleConfig::SlotRestriction {
            group_type,
            group_name,
            min_common_slots: min_slots,
        },
    })
}

fn is_pattern_match(lower: &str) -> bool {
    lower.contains("pattern") || lower.contains("regex") || lower.contains("match")
}

fn extract_pattern_match(prompt: &str, _lower: &str) -> Option<Draft> {
    let regex = capture(r"(?i)(?:regex|pattern)\s+(\S+)", prompt)?;
    let rule_template = capture(r"(?i)(?:template|rule)\s+([A-Za-z]+)", prompt)
        .unwrap_or_else(|| "default".to_string());

    Some(Draft {
        name: format!("Pattern Match: {regex}"),
        description: format!("Apply pattern matching with regex {regex}"),
        config: RuleConfig::PatternMatch {
            regex,
            rule_template,
            parameters: serde_json::Map::new(),
        },
    })
}

fn is_precedence_override(lower: &str) -> bool {
    lower.contains("precedence") || lower.contains("priority") || lower.contains("override")
}

fn extract_precedence_override(prompt: &str, _lower: &str) -> Option<Draft> {
    let listed = capture(r"(?i)(?:global rules?|rules?)\s+([A-Za-z,\s]+)", prompt)?;
    let global_rules: Vec<String> = listed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect();
    if global_rules.is_empty() {
        return None;
    }

    Some(Draft {
        name: "Precedence Override".to_string(),
        description: format!(
            "Override precedence with global rules: {}",
            global_rules.join(", ")
        ),
        config: RuleConfig::PrecedenceOverride {
            global_rules,
            specific_rules: Vec::new(),
        },
    })
}
