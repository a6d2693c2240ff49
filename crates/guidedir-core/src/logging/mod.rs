//! Structured logging for the command-line tools.
//!
//! Console output goes to stderr through `tracing_subscriber::fmt`. With a
//! log directory configured, every event is also appended as one JSON
//! object per line to `<logs_dir>/guidedir.jsonl`.
//!
//! ```ignore
//! use guidedir_core::logging::LoggingBuilder;
//!
//! let log_path = LoggingBuilder::new(verbosity)
//!     .with_logs_dir(Some("./logs".into()))
//!     .init()?;
//! ```
//!
//! ```bash
//! # Every malformed guide line seen so far
//! jq 'select(.level == "warn")' logs/guidedir.jsonl
//! ```

pub mod entry;
pub mod layer;
pub mod writer;

pub use entry::JsonLogEntry;
pub use layer::{JsonlLayer, LoggingBuilder};
pub use writer::{read_entries, LogWriter, LOG_FILE_NAME};
