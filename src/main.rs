//! claude-bash-sentry - Bash command safety hook for Claude Code
//!
//! Reads one PreToolUse request as JSON from stdin and exits with
//! 0 (allowed), 2 (blocked), or 1 (malformed request). On block, every
//! matched concern is written to stderr, one line per reason.
//!
//! # Usage
//!
//! ```bash
//! echo '{"tool_name":"Bash","tool_input":{"command":"rm -rf /"}}' | claude-bash-sentry
//! ```

use std::env;
use std::io::{self, Read};
use std::process::ExitCode;

use claude_bash_sentry::{
    audit::AuditSink, config::Config, hook::HookOutcome, taxonomy,
};

/// Print version information
fn print_version() {
    println!("claude-bash-sentry {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"claude-bash-sentry - Bash command safety hook for Claude Code

USAGE:
    claude-bash-sentry [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file
        --no-audit          Disable audit logging for this invocation

EXIT STATUS:
    0   command allowed
    1   malformed request
    2   command blocked (reasons on stderr)

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "type": "command",
          "command": "~/.claude/hooks/claude-bash-sentry",
          "tools": ["Bash"]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    no_audit: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            no_audit: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "--no-audit" => result.no_audit = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if args.version {
        print_version();
        return ExitCode::SUCCESS;
    }

    let config = if let Some(ref path) = args.config_path {
        Config::load_from(std::path::Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    let audit_path = if args.no_audit {
        None
    } else {
        config.audit_path()
    };
    let mut audit = AuditSink::new(audit_path.as_deref());

    // Read one request from stdin
    let mut input_json = String::new();
    if io::stdin().read_to_string(&mut input_json).is_err() {
        return ExitCode::from(1);
    }

    let outcome = claude_bash_sentry::process(&input_json, taxonomy::shared(), &mut audit);

    match &outcome {
        HookOutcome::Allowed => {}
        HookOutcome::Blocked { verdict } => {
            eprintln!("BLOCKED: Dangerous command detected!");
            for reason in &verdict.reasons {
                eprintln!("  - {}", reason);
            }
        }
        // Malformed requests exit 1 with no output; the parse error is
        // nothing the hook runner can act on
        HookOutcome::Errored { .. } => {}
    }

    ExitCode::from(outcome.exit_code() as u8)
}
