//! Dangerous-command taxonomy for claude-bash-sentry
//!
//! An immutable, categorized catalog of detection rules. The taxonomy is
//! compiled once per process and never mutated afterward, so concurrent
//! evaluations can share it without locking.

pub mod destructive;
pub mod matcher;
pub mod network;
pub mod privilege;
pub mod resource;

use once_cell::sync::Lazy;
use serde::Serialize;
use std::fmt;

use self::matcher::Matcher;

/// Category of danger a rule detects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Destructive filesystem operations (rm -rf /, mkfs, raw disk writes)
    Destructive,

    /// Resource exhaustion (fork bombs, unbounded loops)
    ResourceExhaustion,

    /// Network attacks and exfiltration (reverse shells, curl | sh)
    Network,

    /// Privilege escalation (auth file writes, dangerous chmod)
    Privilege,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Destructive => "destructive",
            Category::ResourceExhaustion => "resource-exhaustion",
            Category::Network => "network",
            Category::Privilege => "privilege",
        };
        f.write_str(name)
    }
}

/// Severity of a matched rule
///
/// Informational only: CRITICAL and WARNING matches both block. Do not
/// introduce a severity threshold without a product decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Critical,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Critical => "CRITICAL",
            Severity::Warning => "WARNING",
        };
        f.write_str(name)
    }
}

/// One detection rule: category, severity, text pattern, message
#[derive(Debug)]
pub struct Rule {
    /// Unique identifier for this rule
    pub id: &'static str,

    /// Category of danger this rule detects
    pub category: Category,

    /// Severity reported when the rule fires
    pub severity: Severity,

    /// Regex pattern, applied case-insensitively with per-line anchoring
    pub pattern: &'static str,

    /// Human-readable reason for blocking
    pub message: &'static str,
}

impl Rule {
    /// Create a new rule
    pub const fn new(
        id: &'static str,
        category: Category,
        severity: Severity,
        pattern: &'static str,
        message: &'static str,
    ) -> Self {
        Self {
            id,
            category,
            severity,
            pattern,
            message,
        }
    }
}

/// All rule tables, in report order
fn rule_tables() -> impl Iterator<Item = &'static Rule> {
    destructive::RULES
        .iter()
        .chain(resource::RULES.iter())
        .chain(network::RULES.iter())
        .chain(privilege::RULES.iter())
}

/// A rule paired with its compiled matcher
pub struct CompiledRule {
    rule: &'static Rule,
    matcher: Matcher,
}

impl CompiledRule {
    /// The underlying rule definition
    pub fn rule(&self) -> &'static Rule {
        self.rule
    }

    /// Check the rule against command text
    pub fn is_match(&self, command: &str) -> bool {
        self.matcher.is_match(command)
    }
}

/// The compiled, immutable rule catalog
pub struct Taxonomy {
    rules: Vec<CompiledRule>,
}

impl Taxonomy {
    /// Compile the built-in rule tables
    ///
    /// A rule whose pattern fails to compile is skipped; all other rules
    /// remain active.
    pub fn builtin() -> Self {
        let rules = rule_tables()
            .filter_map(|rule| {
                Matcher::compile(rule.pattern)
                    .ok()
                    .map(|matcher| CompiledRule { rule, matcher })
            })
            .collect();

        Self { rules }
    }

    /// Iterate over compiled rules in report order
    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// Number of active (successfully compiled) rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no rules compiled
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Process-wide taxonomy, compiled on first use
pub fn shared() -> &'static Taxonomy {
    static TAXONOMY: Lazy<Taxonomy> = Lazy::new(Taxonomy::builtin);
    &TAXONOMY
}
