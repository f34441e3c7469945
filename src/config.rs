//! Configuration loading for claude-bash-sentry
//!
//! TOML configuration with embedded defaults. The audit log defaults to
//! `.claude/logs/bash-safety.jsonl` under the project directory
//! (`CLAUDE_PROJECT_DIR`, falling back to the working directory).

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// General configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable audit logging of blocked commands
    pub audit_log: bool,

    /// Path to the audit log file; default is derived from the project dir
    pub audit_path: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            audit_log: true,
            audit_path: None,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
}

impl Config {
    /// Load configuration from the standard locations or use defaults
    pub fn load() -> Self {
        let config_paths = [
            Some(project_dir().join(".claude/bash-sentry.toml")),
            dirs::home_dir().map(|p| p.join(".claude/bash-sentry/config.toml")),
        ];

        for path in config_paths.into_iter().flatten() {
            if path.exists() {
                if let Ok(content) = std::fs::read_to_string(&path) {
                    match toml::from_str(&content) {
                        Ok(config) => return config,
                        Err(e) => {
                            eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        // No config file found; the embedded TOML carries the defaults
        toml::from_str(DEFAULT_CONFIG_TOML).unwrap_or_default()
    }

    /// Load from a specific path
    pub fn load_from(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Expand `~` in path strings
    pub fn expand_path(path: &str) -> PathBuf {
        if path.starts_with("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(&path[2..]);
            }
        }
        PathBuf::from(path)
    }

    /// Resolve the audit log path, or `None` when logging is disabled
    pub fn audit_path(&self) -> Option<PathBuf> {
        if !self.general.audit_log {
            return None;
        }

        Some(match self.general.audit_path {
            Some(ref p) => Self::expand_path(p),
            None => project_dir().join(".claude/logs/bash-safety.jsonl"),
        })
    }
}

/// The project directory the hook runs against
pub fn project_dir() -> PathBuf {
    env::var_os("CLAUDE_PROJECT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Embedded default configuration
pub const DEFAULT_CONFIG_TOML: &str = r#"
[general]
audit_log = true
# audit_path = "~/.claude/bash-sentry/audit.jsonl"
"#;
