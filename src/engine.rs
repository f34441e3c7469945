//! Matching engine for claude-bash-sentry
//!
//! Pure evaluation of command text against the taxonomy. Every rule is
//! checked independently; nothing short-circuits, so a blocked response can
//! report every concern a command triggers.

use crate::taxonomy::{Category, Severity, Taxonomy};

/// A firing of one rule against a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Identifier of the rule that fired
    pub rule_id: &'static str,

    /// Category of the rule
    pub category: Category,

    /// Severity of the rule
    pub severity: Severity,

    /// Human-readable reason
    pub message: &'static str,
}

/// Evaluate a command against every rule in the taxonomy
///
/// Returns matches in taxonomy order. Pure and deterministic: identical
/// input always yields identical, identically ordered output. Matching is
/// case-insensitive and line-anchored, so a dangerous command on any line
/// of a multi-line payload is found.
pub fn evaluate(command: &str, taxonomy: &Taxonomy) -> Vec<RuleMatch> {
    let command = command.trim();

    taxonomy
        .iter()
        .filter(|compiled| compiled.is_match(command))
        .map(|compiled| {
            let rule = compiled.rule();
            RuleMatch {
                rule_id: rule.id,
                category: rule.category,
                severity: rule.severity,
                message: rule.message,
            }
        })
        .collect()
}
