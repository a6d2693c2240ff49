//! Parser for the `guides.txt` line format.
//!
//! ```text
//! <folder>;<name>;<field3>;<field4>[;...]
//! ```
//!
//! Only the first two fields are consumed. The remaining ones are reserved,
//! but a line must still carry at least four fields to be accepted.

use tracing::warn;

use crate::model::GuideRecord;

pub const FIELD_DELIMITER: char = ';';

/// Minimum number of `;`-separated fields a line needs to be accepted.
pub const MIN_FIELDS: usize = 4;

/// A line that was skipped because it carried too few fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number in the source text
    pub line_number: usize,
    /// The trimmed line content
    pub line: String,
}

/// Records parsed from a guide list, plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGuides {
    pub records: Vec<GuideRecord>,
    pub warnings: Vec<MalformedLine>,
}

/// Parse the full text of a guide list.
///
/// Blank lines are ignored. Malformed lines are logged and collected in
/// [`ParsedGuides::warnings`]; they never abort the parse.
pub fn parse_guides(text: &str) -> ParsedGuides {
    let mut parsed = ParsedGuides::default();

    for (idx, raw) in text.split('\n').enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(record) => parsed.records.push(record),
            None => {
                warn!(line_number = idx + 1, "Skipping malformed line in guides.txt: {}", line);
                parsed.warnings.push(MalformedLine {
                    line_number: idx + 1,
                    line: line.to_string(),
                });
            }
        }
    }

    parsed
}

/// Parse one already-trimmed, non-empty line.
///
/// Returns `None` when the line has fewer than [`MIN_FIELDS`] fields or when
/// the folder or name is blank.
pub fn parse_line(line: &str) -> Option<GuideRecord> {
    let parts: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if parts.len() < MIN_FIELDS {
        return None;
    }
    let (folder, name) = (parts[0].trim(), parts[1].trim());
    if folder.is_empty() || name.is_empty() {
        return None;
    }
    Some(GuideRecord::new(folder, name))
}

/// Format the line appended to `guides.txt` when a guide is published.
///
/// The title fills the name and both reserved fields.
pub fn format_guide_line(folder: &str, title: &str) -> String {
    format!("{folder};{title};{title};{title}")
}
