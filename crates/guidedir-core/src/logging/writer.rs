//! Append-only JSONL log file.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::entry::JsonLogEntry;

pub const LOG_FILE_NAME: &str = "guidedir.jsonl";

/// Writer that appends log entries to `<logs_dir>/guidedir.jsonl`.
pub struct LogWriter {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl LogWriter {
    /// Open (or create) the log file, creating `logs_dir` if needed.
    pub fn new(logs_dir: impl AsRef<Path>) -> io::Result<Self> {
        let logs_dir = logs_dir.as_ref();
        fs::create_dir_all(logs_dir)?;

        let path = logs_dir.join(LOG_FILE_NAME);
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write one entry as a single line and flush it.
    pub fn write(&self, entry: &JsonLogEntry) -> io::Result<()> {
        let json = entry
            .to_json_line()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer poisoned"))?;
        writeln!(writer, "{}", json)?;
        writer.flush()
    }
}

/// Read back every entry of the log file in `logs_dir`, skipping unparsable lines.
pub fn read_entries(logs_dir: impl AsRef<Path>) -> io::Result<Vec<JsonLogEntry>> {
    let path = logs_dir.as_ref().join(LOG_FILE_NAME);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(&path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| JsonLogEntry::from_json_line(line).ok())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writer_creates_directory() {
        let temp = TempDir::new().unwrap();
        let logs_dir = temp.path().join("logs");

        let writer = LogWriter::new(&logs_dir).unwrap();

        assert!(logs_dir.exists());
        assert!(writer.path().ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_writer_appends_entries() {
        let temp = TempDir::new().unwrap();
        let writer = LogWriter::new(temp.path()).unwrap();

        writer.write(&JsonLogEntry::new("info", "t", "First message")).unwrap();
        writer.write(&JsonLogEntry::new("debug", "t", "Second message")).unwrap();

        let entries = read_entries(temp.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "First message");
        assert_eq!(entries[1].level, "debug");
    }

    #[test]
    fn test_read_entries_without_file() {
        let temp = TempDir::new().unwrap();
        assert!(read_entries(temp.path()).unwrap().is_empty());
    }
}
