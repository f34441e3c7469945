//! Input parsing for the Claude Code hook JSON format
//!
//! One structured request per invocation, read from stdin.

use serde::Deserialize;

/// Main input structure from Claude Code hooks
#[derive(Debug, Deserialize)]
pub struct HookInput {
    /// Name of the tool being invoked (e.g., "Bash", "Read", "Write")
    pub tool_name: String,

    /// Tool-specific input parameters; hook events without a tool payload
    /// omit this entirely
    #[serde(default)]
    pub tool_input: ToolInput,

    /// Optional session identifier
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Tool-specific input variants
#[derive(Debug, Clone)]
pub enum ToolInput {
    /// Bash command execution
    Bash { command: String },

    /// File operation (Read/Edit/Write)
    File { file_path: String },

    /// Any other tool - passed through unexamined
    Other { raw: serde_json::Value },
}

impl Default for ToolInput {
    fn default() -> Self {
        ToolInput::Other {
            raw: serde_json::Value::Null,
        }
    }
}

impl<'de> Deserialize<'de> for ToolInput {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;

        if let Some(obj) = value.as_object() {
            if let Some(command) = obj.get("command").and_then(|v| v.as_str()) {
                return Ok(ToolInput::Bash {
                    command: command.to_string(),
                });
            }

            if let Some(file_path) = obj.get("file_path").and_then(|v| v.as_str()) {
                return Ok(ToolInput::File {
                    file_path: file_path.to_string(),
                });
            }
        }

        Ok(ToolInput::Other { raw: value })
    }
}

impl HookInput {
    /// Parse input from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
