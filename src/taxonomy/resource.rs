//! Resource-exhaustion rules
//!
//! Fork bombs (classic and generalized over any function name) and
//! unbounded loops piping into resource-consuming commands.

use crate::taxonomy::{Category, Rule, Severity};

pub const RULES: &[Rule] = &[
    Rule::new(
        "fork-bomb",
        Category::ResourceExhaustion,
        Severity::Critical,
        r":\(\)\s*\{\s*:\s*\|\s*:\s*&\s*\}\s*;?\s*:",
        "Fork bomb detected",
    ),
    // Self-referential function definition with any single-token name:
    // name(){ name|name& };name. The backreferences force the backtracking
    // engine.
    Rule::new(
        "fork-bomb-generic",
        Category::ResourceExhaustion,
        Severity::Critical,
        r"\b(\w+)\(\)\s*\{\s*\1\s*\|\s*\1\s*&\s*\}\s*;?\s*\1\b",
        "Fork bomb detected (generic pattern)",
    ),
    Rule::new(
        "infinite-loop",
        Category::ResourceExhaustion,
        Severity::Warning,
        r"while\s*(true|1|:)\s*;\s*do\s*(cat|yes|dd)",
        "Infinite resource consumption loop",
    ),
];
