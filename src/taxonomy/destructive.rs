//! Destructive filesystem rules
//!
//! Covers recursive deletion of `/` and the enumerated system roots (any
//! flag order, any line terminator), filesystem formats, raw disk writes,
//! and disk-wipe utilities. Subdirectories of system roots and relative
//! paths are intentionally not matched.

use crate::taxonomy::{Category, Rule, Severity};

pub const RULES: &[Rule] = &[
    Rule::new(
        "rm-root",
        Category::Destructive,
        Severity::Critical,
        r"rm\s+(-[a-zA-Z]*[rf][a-zA-Z]*\s+)*(/\s*$|/\s*[;&|]|/\s*\n)",
        "Recursive deletion of root filesystem",
    ),
    Rule::new(
        "rm-root-glob",
        Category::Destructive,
        Severity::Critical,
        r"rm\s+.*-[a-zA-Z]*r[a-zA-Z]*.*\s+/\*",
        "Recursive deletion of all root contents",
    ),
    // Requires at least one flag containing `r`; interleaved unrelated
    // flags before or after are tolerated. The target must be an exact
    // system root followed by whitespace, end-of-line, or a separator, so
    // /etc/myapp and relative paths fall through.
    Rule::new(
        "rm-system-dir",
        Category::Destructive,
        Severity::Critical,
        r"rm\s+(-[a-zA-Z]+\s+)*-[a-zA-Z]*r[a-zA-Z]*(\s+-[a-zA-Z]+)*\s+(/|/bin|/boot|/dev|/etc|/home|/lib|/opt|/root|/sbin|/sys|/usr|/var)(\s|$|[;&|])",
        "Attempted recursive deletion of system directory",
    ),
    Rule::new(
        "rm-no-preserve-root",
        Category::Destructive,
        Severity::Critical,
        r"rm\s+.*--no-preserve-root",
        "Attempt to bypass root filesystem protection",
    ),
    Rule::new(
        "mkfs",
        Category::Destructive,
        Severity::Critical,
        r"mkfs\.",
        "Filesystem format operation",
    ),
    Rule::new(
        "dd-disk-device",
        Category::Destructive,
        Severity::Critical,
        r"dd\s+.*of=/dev/(sd[a-z]|nvme|hd[a-z]|vd[a-z])",
        "Direct disk write",
    ),
    Rule::new(
        "shred-device",
        Category::Destructive,
        Severity::Critical,
        r"\bshred\s+.*(/dev/(sd[a-z]|nvme|hd[a-z]|vd[a-z])|/dev/[a-z]+[0-9]*)",
        "Disk shredding operation",
    ),
    Rule::new(
        "wipefs",
        Category::Destructive,
        Severity::Critical,
        r"\bwipefs\s+",
        "Filesystem signature wiping",
    ),
];
