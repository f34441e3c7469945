//! Decision layer for claude-bash-sentry
//!
//! The single point of policy: block iff the match set is non-empty. Free
//! of I/O so it stays trivially unit-testable.

use crate::engine::RuleMatch;

/// Allow/block outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allow,
    Block,
}

/// The decision plus the complete ordered list of reasons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub outcome: Outcome,
    pub reasons: Vec<String>,
}

impl Verdict {
    /// Check if this verdict blocks the command
    pub fn is_block(&self) -> bool {
        self.outcome == Outcome::Block
    }
}

/// Derive a verdict from a match set
///
/// Block iff `matches` is non-empty. Severity is informational only:
/// CRITICAL and WARNING matches both block. Reasons keep match order with
/// no deduplication or truncation, so an operator sees every triggered
/// concern at once.
pub fn decide(matches: &[RuleMatch]) -> Verdict {
    let outcome = if matches.is_empty() {
        Outcome::Allow
    } else {
        Outcome::Block
    };

    let reasons = matches
        .iter()
        .map(|m| format!("{}: {}", m.severity, m.message))
        .collect();

    Verdict { outcome, reasons }
}
