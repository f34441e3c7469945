//! claude-bash-sentry - Bash command safety hook for Claude Code
//!
//! This library validates shell commands proposed by an automated coding
//! agent against a curated taxonomy of dangerous-command patterns, and
//! decides whether to allow or block them.
//!
//! # Design
//!
//! - **Pattern taxonomy**: immutable, categorized rule catalog, compiled
//!   once per process
//! - **Matching engine**: pure function, evaluates every rule and reports
//!   every matched concern (never just the first)
//! - **Decision layer**: block iff any rule matched; severity is
//!   informational only
//! - **Protocol adapter**: parses one hook request per invocation and maps
//!   the outcome to an exit status (0 = allow, 2 = block, 1 = error)
//! - **Audit sink**: best-effort JSONL record of blocked commands
//!
//! # Example
//!
//! ```
//! use claude_bash_sentry::{decide, evaluate, taxonomy};
//!
//! let matches = evaluate("rm -rf /", taxonomy::shared());
//! let verdict = decide(&matches);
//! assert!(verdict.is_block());
//! ```

pub mod audit;
pub mod config;
pub mod decision;
pub mod engine;
pub mod hook;
pub mod input;
pub mod taxonomy;

// Re-exports for convenience
pub use audit::AuditSink;
pub use config::Config;
pub use decision::{decide, Outcome, Verdict};
pub use engine::{evaluate, RuleMatch};
pub use hook::{process, HookOutcome};
pub use input::{HookInput, ToolInput};
pub use taxonomy::{Category, Severity, Taxonomy};
