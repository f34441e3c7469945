//! Protocol adapter for the PreToolUse hook
//!
//! One terminal outcome per invocation: the request either fails to parse
//! (errored), names a non-Bash tool or a safe command (allowed), or trips
//! the taxonomy (blocked). The audit sink is invoked only on block, after
//! the verdict is final, and its failures never change the outcome.

use crate::audit::AuditSink;
use crate::decision::{decide, Verdict};
use crate::engine::evaluate;
use crate::input::{HookInput, ToolInput};
use crate::taxonomy::Taxonomy;

/// Terminal outcome of one hook invocation
#[derive(Debug)]
pub enum HookOutcome {
    /// Command is safe, tool is not Bash, or there is nothing to check
    Allowed,

    /// Command tripped at least one rule
    Blocked { verdict: Verdict },

    /// The request could not be parsed
    Errored { error: String },
}

impl HookOutcome {
    /// Process exit status: 0 = allowed, 2 = blocked, 1 = errored
    pub fn exit_code(&self) -> i32 {
        match self {
            HookOutcome::Allowed => 0,
            HookOutcome::Blocked { .. } => 2,
            HookOutcome::Errored { .. } => 1,
        }
    }
}

/// Run one hook invocation over a raw JSON request
pub fn process(raw: &str, taxonomy: &Taxonomy, audit: &mut AuditSink) -> HookOutcome {
    let input = match HookInput::from_json(raw) {
        Ok(input) => input,
        Err(e) => {
            return HookOutcome::Errored {
                error: e.to_string(),
            }
        }
    };

    // Only shell execution is validated; every other tool passes through
    if input.tool_name != "Bash" {
        return HookOutcome::Allowed;
    }

    let command = match &input.tool_input {
        ToolInput::Bash { command } => command,
        _ => return HookOutcome::Allowed,
    };

    if command.trim().is_empty() {
        return HookOutcome::Allowed;
    }

    let matches = evaluate(command, taxonomy);
    let verdict = decide(&matches);

    if verdict.is_block() {
        // Verdict is final; a failing sink must not change it
        let _ = audit.record(command, &matches, input.session_id.as_deref());
        return HookOutcome::Blocked { verdict };
    }

    HookOutcome::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;

    fn run(raw: &str) -> HookOutcome {
        let mut audit = AuditSink::default();
        process(raw, taxonomy::shared(), &mut audit)
    }

    #[test]
    fn test_safe_bash_allowed() {
        let outcome = run(r#"{"tool_name":"Bash","tool_input":{"command":"ls -la"}}"#);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_dangerous_bash_blocked() {
        let outcome = run(r#"{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}"#);
        assert_eq!(outcome.exit_code(), 2);
        match outcome {
            HookOutcome::Blocked { verdict } => assert!(!verdict.reasons.is_empty()),
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn test_non_bash_tool_bypasses_evaluation() {
        // A dangerous-looking file path is not a command
        let outcome = run(r#"{"tool_name":"Read","tool_input":{"file_path":"/etc/passwd"}}"#);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_non_bash_tool_with_command_field_allowed() {
        // tool_name gates evaluation even when a command field is present
        let outcome = run(r#"{"tool_name":"Task","tool_input":{"command":"rm -rf /"}}"#);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_empty_command_allowed() {
        let outcome = run(r#"{"tool_name":"Bash","tool_input":{"command":""}}"#);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_missing_command_allowed() {
        let outcome = run(r#"{"tool_name":"Bash","tool_input":{}}"#);
        assert_eq!(outcome.exit_code(), 0);

        // tool_input itself may be absent entirely
        let outcome = run(r#"{"tool_name":"Bash"}"#);
        assert_eq!(outcome.exit_code(), 0);
    }

    #[test]
    fn test_malformed_request_errors() {
        let outcome = run("not valid json");
        assert_eq!(outcome.exit_code(), 1);
        assert!(matches!(outcome, HookOutcome::Errored { .. }));
    }
}
