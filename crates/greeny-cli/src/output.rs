//! Shared output layer for human/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and renders either
//! human-readable text or a stable JSON envelope. Errors carry the same
//! duality: a message for people, `{"error": ...}` for machines.

use serde::Serialize;
use std::io::{self, Write};

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Human,
    /// Machine-readable JSON, one object per invocation.
    Json,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// A serializable error envelope.
#[derive(Debug, Serialize)]
pub struct CliError {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl CliError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }

    pub fn with_details(error: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            error: error.into(),
            details,
        }
    }
}

/// Render a success value: JSON serialization in JSON mode, a caller-built
/// human line otherwise.
pub fn render<T: Serialize>(
    mode: OutputMode,
    value: &T,
    human: impl FnOnce(&T, &mut dyn Write) -> io::Result<()>,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    if mode.is_json() {
        serde_json::to_writer_pretty(&mut stdout, value)?;
        writeln!(stdout)?;
    } else {
        human(value, &mut stdout)?;
    }
    Ok(())
}

/// Render an error envelope to stderr.
pub fn render_error(mode: OutputMode, err: &CliError) -> anyhow::Result<()> {
    let mut stderr = io::stderr().lock();
    if mode.is_json() {
        serde_json::to_writer_pretty(&mut stderr, err)?;
        writeln!(stderr)?;
    } else {
        writeln!(stderr, "Error: {}", err.error)?;
        for detail in &err.details {
            writeln!(stderr, "  - {detail}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{CliError, OutputMode};

    #[test]
    fn json_mode_detection() {
        assert!(OutputMode::Json.is_json());
        assert!(!OutputMode::Human.is_json());
    }

    #[test]
    fn error_envelope_skips_empty_details() {
        let json = serde_json::to_value(CliError::new("bad")).unwrap();
        assert_eq!(json["error"], "bad");
        assert!(json.get("details").is_none());

        let json = serde_json::to_value(CliError::with_details(
            "bad",
            vec!["field".to_string()],
        ))
        .unwrap();
        assert_eq!(json["details"][0], "field");
    }
}
