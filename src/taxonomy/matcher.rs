//! Pattern matcher with automatic engine selection
//!
//! Most taxonomy patterns compile on the linear-time `regex` crate, which
//! guarantees O(n) matching even on adversarial input. Patterns that use
//! backreferences (the generalized fork-bomb rule) need the backtracking
//! `fancy_regex` engine instead.

/// Inline flags applied to every pattern: case-insensitive, and `$` matches
/// end-of-line so multi-line command payloads are fully scanned.
const FLAGS: &str = "(?im)";

/// A compiled pattern, on whichever engine supports it
#[derive(Debug)]
pub enum Matcher {
    /// Linear-time regex (O(n) guaranteed, no backtracking)
    Linear(regex::Regex),

    /// Backtracking regex (supports backreferences)
    Backtracking(fancy_regex::Regex),
}

impl Matcher {
    /// Compile a pattern, auto-selecting the engine
    pub fn compile(pattern: &str) -> Result<Self, String> {
        let flagged = format!("{FLAGS}{pattern}");
        if has_backreference(pattern) {
            fancy_regex::Regex::new(&flagged)
                .map(Self::Backtracking)
                .map_err(|e| format!("fancy_regex compile error: {e}"))
        } else {
            regex::Regex::new(&flagged)
                .map(Self::Linear)
                .map_err(|e| format!("regex compile error: {e}"))
        }
    }

    /// Check if the pattern matches the text
    ///
    /// Backtracking execution errors count as no-match, so a faulty rule can
    /// never propagate a failure out of evaluation.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Linear(re) => re.is_match(text),
            Self::Backtracking(re) => re.is_match(text).unwrap_or(false),
        }
    }
}

/// Check for `\1`..`\9` backreferences, which the linear engine rejects
fn has_backreference(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i + 1 < bytes.len() {
        if bytes[i] == b'\\' {
            let next = bytes[i + 1];
            if next.is_ascii_digit() && next != b'0' {
                return true;
            }
            // Skip the escaped character so `\\1` is not misread
            i += 2;
            continue;
        }
        i += 1;
    }
    false
}
