//! Tracing layer that mirrors events into the JSONL log, and the builder
//! that installs it next to console output.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::JsonLogEntry;
use super::writer::LogWriter;
use crate::error::{GuideError, GuideResult};

/// A tracing Layer that writes every event to a JSONL file.
pub struct JsonlLayer {
    writer: Arc<LogWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        Ok(Self {
            writer: Arc::new(LogWriter::new(logs_dir)?),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level().as_str().to_lowercase();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = JsonLogEntry::new(
            level,
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // Logging must never take the process down
        let _ = self.writer.write(&entry);
    }
}

/// Visitor that extracts the message and fields from tracing events.
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, serde_json::Value::Number(n));
        }
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.insert(field, serde_json::Value::String(value.to_string()));
    }
}

/// Installs the global subscriber: an env filter, console output on stderr,
/// and optionally the JSONL layer.
pub struct LoggingBuilder {
    verbosity: u8,
    logs_dir: Option<PathBuf>,
}

impl LoggingBuilder {
    pub fn new(verbosity: u8) -> Self {
        Self {
            verbosity,
            logs_dir: None,
        }
    }

    /// Also write JSONL logs into `logs_dir`.
    pub fn with_logs_dir(mut self, logs_dir: Option<PathBuf>) -> Self {
        self.logs_dir = logs_dir;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the subscriber. Returns the JSONL log path when one was requested.
    pub fn init(self) -> GuideResult<Option<PathBuf>> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()));

        let jsonl = self.logs_dir.as_ref().map(JsonlLayer::new).transpose()?;
        let log_path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());

        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(jsonl)
            .try_init()
            .map_err(|e| GuideError::Config(format!("logging already initialized: {e}")))?;

        Ok(log_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::writer::read_entries;
    use tempfile::TempDir;

    #[test]
    fn test_jsonl_layer_captures_events() {
        let temp = TempDir::new().unwrap();
        let layer = JsonlLayer::new(temp.path()).unwrap();

        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Guide list loaded");
            tracing::warn!(line_number = 3, "Skipping malformed line");
        });

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "Guide list loaded");
        assert_eq!(entries[0].level, "info");
        assert_eq!(entries[1].level, "warn");
        assert_eq!(
            entries[1].fields.as_ref().and_then(|f| f.get("line_number")),
            Some(&serde_json::json!(3))
        );
    }

    #[test]
    fn test_verbosity_directives() {
        assert_eq!(LoggingBuilder::new(0).default_directive(), "warn");
        assert_eq!(LoggingBuilder::new(1).default_directive(), "info");
        assert_eq!(LoggingBuilder::new(2).default_directive(), "debug");
        assert_eq!(LoggingBuilder::new(9).default_directive(), "trace");
    }
}
