//! Privilege-escalation rules
//!
//! Redirection and tee writes into auth files, plus world-writable
//! permission changes on absolute system paths. Relative-path chmod is not
//! matched.

use crate::taxonomy::{Category, Rule, Severity};

pub const RULES: &[Rule] = &[
    Rule::new(
        "auth-file-overwrite",
        Category::Privilege,
        Severity::Critical,
        r">\s*/etc/(passwd|shadow|sudoers)",
        "Attempt to overwrite auth files",
    ),
    Rule::new(
        "auth-file-append",
        Category::Privilege,
        Severity::Critical,
        r">>\s*/etc/(passwd|shadow|sudoers)",
        "Attempt to append to auth files",
    ),
    Rule::new(
        "auth-file-tee",
        Category::Privilege,
        Severity::Critical,
        r"\btee\s+(-[a-zA-Z]+\s+)*(/etc/(passwd|shadow|sudoers)|/etc/sudoers\.d/)",
        "Attempt to write to auth files via tee",
    ),
    Rule::new(
        "chmod-777-root",
        Category::Privilege,
        Severity::Critical,
        r"chmod\s+(-[a-zA-Z]+\s+)*777\s+/",
        "Dangerous permission change",
    ),
];
