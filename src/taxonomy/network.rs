//! Network and remote-execution rules
//!
//! Reverse shells and "fetch remote script, pipe into an interpreter"
//! idioms. Piping into a privilege-elevation command is flagged CRITICAL;
//! the plain interpreter cases are WARNING. Reverse shells written in
//! languages outside this list are a documented gap.

use crate::taxonomy::{Category, Rule, Severity};

pub const RULES: &[Rule] = &[
    Rule::new(
        "nc-reverse-shell",
        Category::Network,
        Severity::Critical,
        r"(nc|ncat|netcat)\s+.*-e\s*/bin/(ba)?sh",
        "Reverse shell attempt",
    ),
    Rule::new(
        "bash-dev-tcp",
        Category::Network,
        Severity::Critical,
        r"bash\s+-i\s+>&\s*/dev/tcp/",
        "Bash reverse shell",
    ),
    Rule::new(
        "fetch-pipe-shell",
        Category::Network,
        Severity::Warning,
        r"(curl|wget)\s+.*\|\s*(ba)?sh",
        "Remote script execution via pipe to shell",
    ),
    Rule::new(
        "fetch-pipe-python",
        Category::Network,
        Severity::Warning,
        r"(curl|wget)\s+.*\|\s*python[23]?",
        "Remote script execution via pipe to python",
    ),
    Rule::new(
        "fetch-pipe-sudo",
        Category::Network,
        Severity::Critical,
        r"(curl|wget)\s+.*\|\s*sudo",
        "Remote script with sudo",
    ),
];
