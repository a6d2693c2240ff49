//! Log entry type for JSONL-based logging.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single log entry, written as one JSON object per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonLogEntry {
    /// ISO 8601 timestamp (e.g., "2026-01-21T14:30:45.123Z")
    pub ts: String,

    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Module path / target (e.g., "guidedir_core::parser")
    pub target: String,

    /// Human-readable message
    pub msg: String,

    /// Structured fields recorded with the event
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,

    /// Enclosing spans, root first, joined with " > "
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl JsonLogEntry {
    /// Create a new log entry with the current timestamp.
    pub fn new(level: impl Into<String>, target: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize to a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_serialization() {
        let entry = JsonLogEntry::new("warn", "guidedir_core::parser", "Skipping malformed line");

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"level\":\"warn\""));
        assert!(json.contains("\"msg\":\"Skipping malformed line\""));
        assert!(!json.contains("\"fields\""));

        let parsed = JsonLogEntry::from_json_line(&json).unwrap();
        assert_eq!(parsed.target, "guidedir_core::parser");
    }

    #[test]
    fn test_log_entry_with_fields() {
        let entry = JsonLogEntry::new("info", "guidedir_core::loader", "Guide list loaded")
            .with_fields(serde_json::json!({ "records": 12 }));

        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"records\":12"));
    }
}
