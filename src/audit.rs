//! JSONL audit sink for blocked commands
//!
//! Durable append-only record of every blocked command and its reasons,
//! keyed by wall-clock time. Writes are best-effort: the allow/block
//! decision is already final when the sink is invoked, and a failing sink
//! never changes or delays it.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::engine::RuleMatch;
use crate::taxonomy::{Category, Severity};

/// One reason within a block entry
#[derive(Debug, Serialize)]
pub struct BlockReason {
    pub rule_id: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub message: &'static str,
}

/// An audit log entry for one blocked command
#[derive(Debug, Serialize)]
pub struct AuditEntry {
    /// Timestamp of the decision
    pub timestamp: DateTime<Utc>,

    /// Event tag, always "command_blocked"
    pub event: &'static str,

    /// The command that was blocked
    pub command: String,

    /// Every matched concern, in report order
    pub reasons: Vec<BlockReason>,

    /// Session ID (if provided)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl AuditEntry {
    /// Build an entry from a blocked command and its matches
    pub fn new(command: &str, matches: &[RuleMatch], session_id: Option<&str>) -> Self {
        let reasons = matches
            .iter()
            .map(|m| BlockReason {
                rule_id: m.rule_id,
                category: m.category,
                severity: m.severity,
                message: m.message,
            })
            .collect();

        Self {
            timestamp: Utc::now(),
            event: "command_blocked",
            command: command.to_string(),
            reasons,
            session_id: session_id.map(String::from),
        }
    }
}

/// Append-only audit sink
pub struct AuditSink {
    writer: Option<BufWriter<File>>,
}

impl AuditSink {
    /// Open a sink at the given path, creating parent directories
    ///
    /// A path of `None`, or any open failure, yields a disabled sink that
    /// accepts records as no-ops.
    pub fn new(path: Option<&Path>) -> Self {
        let writer = path.and_then(|p| {
            if let Some(parent) = p.parent() {
                let _ = std::fs::create_dir_all(parent);
            }

            OpenOptions::new()
                .create(true)
                .append(true)
                .open(p)
                .ok()
                .map(BufWriter::new)
        });

        Self { writer }
    }

    /// Append one block entry
    pub fn record(
        &mut self,
        command: &str,
        matches: &[RuleMatch],
        session_id: Option<&str>,
    ) -> Result<(), std::io::Error> {
        if let Some(ref mut writer) = self.writer {
            let entry = AuditEntry::new(command, matches, session_id);
            let json = serde_json::to_string(&entry)?;
            writeln!(writer, "{}", json)?;
            writer.flush()?;
        }
        Ok(())
    }

    /// Check if the sink has an open target
    pub fn is_enabled(&self) -> bool {
        self.writer.is_some()
    }
}

/// A disabled sink (for when audit logging is off)
impl Default for AuditSink {
    fn default() -> Self {
        Self { writer: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::decide;
    use crate::engine::evaluate;
    use crate::taxonomy;
    use tempfile::NamedTempFile;

    #[test]
    fn test_entry_carries_every_reason() {
        let matches = evaluate("rm -rf / && cat x >> /etc/shadow", taxonomy::shared());
        let entry = AuditEntry::new("rm -rf / && cat x >> /etc/shadow", &matches, None);
        assert_eq!(entry.event, "command_blocked");
        assert_eq!(entry.reasons.len(), decide(&matches).reasons.len());
    }

    #[test]
    fn test_sink_appends_jsonl() {
        let temp = NamedTempFile::new().unwrap();
        let path = temp.path();

        let mut sink = AuditSink::new(Some(path));
        assert!(sink.is_enabled());

        let matches = evaluate("rm -rf /", taxonomy::shared());
        sink.record("rm -rf /", &matches, Some("test-session"))
            .unwrap();
        sink.record("rm -rf /", &matches, None).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains("command_blocked"));
        assert!(content.contains("rm-root"));
        assert!(content.contains("test-session"));
    }

    #[test]
    fn test_disabled_sink_is_noop() {
        let mut sink = AuditSink::default();
        assert!(!sink.is_enabled());

        let matches = evaluate("rm -rf /", taxonomy::shared());
        // Should not error when disabled
        sink.record("rm -rf /", &matches, None).unwrap();
    }

    #[test]
    fn test_sink_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("bash-safety.jsonl");

        let mut sink = AuditSink::new(Some(&path));
        assert!(sink.is_enabled());

        let matches = evaluate("wipefs -a /dev/sda", taxonomy::shared());
        sink.record("wipefs -a /dev/sda", &matches, None).unwrap();
        assert!(path.exists());
    }
}
