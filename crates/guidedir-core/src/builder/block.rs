//! Content blocks and the editable guide draft.

use serde::{Deserialize, Serialize};

use crate::error::{GuideError, GuideResult};
use crate::parser::FIELD_DELIMITER;

/// One piece of guide content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    /// Starts a new section and gets a sidebar link
    Header { text: String, id: String },
    Paragraph { text: String },
    Code { language: String, code: String },
    /// `level` becomes the CSS class, e.g. `important` or `warning`
    Alert { level: String, text: String },
    /// Newline-separated items
    List { items: String },
}

impl Block {
    pub fn header() -> Self {
        Self::Header {
            text: "New Section".to_string(),
            id: "new-section".to_string(),
        }
    }

    pub fn paragraph() -> Self {
        Self::Paragraph {
            text: "Enter content here...".to_string(),
        }
    }

    pub fn code() -> Self {
        Self::Code {
            language: "bash".to_string(),
            code: "# Command here".to_string(),
        }
    }

    pub fn alert() -> Self {
        Self::Alert {
            level: "important".to_string(),
            text: "Crucial info".to_string(),
        }
    }

    pub fn list() -> Self {
        Self::List {
            items: "Item 1\nItem 2\nItem 3".to_string(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Header { .. } => "header",
            Self::Paragraph { .. } => "paragraph",
            Self::Code { .. } => "code",
            Self::Alert { .. } => "alert",
            Self::List { .. } => "list",
        }
    }

    /// Short label for a block overview.
    pub fn preview(&self) -> String {
        let detail = match self {
            Self::Header { text, .. } => text.clone(),
            Self::Paragraph { text } => {
                let head: String = text.chars().take(30).collect();
                format!("{head}...")
            }
            Self::Code { .. } => "Code Block".to_string(),
            Self::Alert { .. } | Self::List { .. } => String::new(),
        };
        format!("{}: {}", self.kind().to_uppercase(), detail)
    }
}

/// Direction for [`GuideDraft::move_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// A guide page being authored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideDraft {
    pub title: String,
    pub folder: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl GuideDraft {
    pub fn new(title: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            folder: folder.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a block and return its index.
    pub fn add(&mut self, block: Block) -> usize {
        self.blocks.push(block);
        self.blocks.len() - 1
    }

    /// Swap the block at `index` with its neighbour. Returns the new index.
    pub fn move_block(&mut self, index: usize, direction: Direction) -> GuideResult<usize> {
        let target = match direction {
            Direction::Up => index.checked_sub(1),
            Direction::Down => index.checked_add(1).filter(|&i| i < self.blocks.len()),
        };
        match target {
            Some(target) if index < self.blocks.len() => {
                self.blocks.swap(index, target);
                Ok(target)
            }
            _ => Err(GuideError::InvalidGuide(format!(
                "cannot move block {index} {direction:?}"
            ))),
        }
    }

    pub fn remove(&mut self, index: usize) -> GuideResult<Block> {
        if index >= self.blocks.len() {
            return Err(GuideError::InvalidGuide(format!("no block at index {index}")));
        }
        Ok(self.blocks.remove(index))
    }

    /// Title and folder are required to publish, and both must fit on one
    /// guide list line. The folder must be a single plain path component.
    pub fn validate(&self) -> GuideResult<()> {
        let title = self.title.trim();
        let folder = self.folder.trim();
        if title.is_empty() || folder.is_empty() {
            return Err(GuideError::InvalidGuide(
                "Title and Folder Name are required!".to_string(),
            ));
        }

        for (field, value) in [("Title", title), ("Folder Name", folder)] {
            if value.contains([FIELD_DELIMITER, '\n', '\r']) {
                return Err(GuideError::InvalidGuide(format!(
                    "{field} must not contain '{FIELD_DELIMITER}' or line breaks"
                )));
            }
        }

        if !is_plain_folder(folder) {
            return Err(GuideError::InvalidGuide(format!(
                "Folder Name must be a single folder, got '{folder}'"
            )));
        }
        Ok(())
    }
}

fn is_plain_folder(folder: &str) -> bool {
    folder != "."
        && folder != ".."
        && !folder.contains(['/', '\\', ':'])
        && !folder.chars().any(char::is_control)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_previews() {
        assert_eq!(Block::header().preview(), "HEADER: New Section");
        assert_eq!(Block::code().preview(), "CODE: Code Block");
        assert_eq!(Block::alert().preview(), "ALERT: ");

        let long = Block::Paragraph {
            text: "abcdefghijklmnopqrstuvwxyz0123456789".to_string(),
        };
        assert_eq!(long.preview(), "PARAGRAPH: abcdefghijklmnopqrstuvwxyz0123...");
    }

    #[test]
    fn test_move_and_remove() {
        let mut draft = GuideDraft::new("T", "t");
        draft.add(Block::header());
        draft.add(Block::paragraph());
        draft.add(Block::code());

        assert_eq!(draft.move_block(2, Direction::Up).unwrap(), 1);
        assert_eq!(draft.blocks[1], Block::code());
        assert!(draft.move_block(0, Direction::Up).is_err());
        assert!(draft.move_block(2, Direction::Down).is_err());
        assert!(draft.move_block(7, Direction::Up).is_err());

        assert_eq!(draft.remove(0).unwrap(), Block::header());
        assert_eq!(draft.blocks.len(), 2);
        assert!(draft.remove(5).is_err());
    }

    #[test]
    fn test_validate_requires_title_and_folder() {
        assert!(GuideDraft::new("Title", "folder").validate().is_ok());
        assert!(GuideDraft::new("", "folder").validate().is_err());
        assert!(GuideDraft::new("Title", "  ").validate().is_err());
    }

    #[test]
    fn test_validate_folder_is_single_component() {
        assert!(GuideDraft::new("T", "docker-basics").validate().is_ok());
        for folder in ["..", ".", "../x", "a/b", "a\\b", "/etc", "c:"] {
            assert!(
                GuideDraft::new("T", folder).validate().is_err(),
                "folder {folder:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_blocks_from_json() {
        let json = r#"[
            { "type": "header", "text": "Setup", "id": "setup" },
            { "type": "code", "language": "sh", "code": "ls" }
        ]"#;
        let blocks: Vec<Block> = serde_json::from_str(json).unwrap();
        assert_eq!(
            blocks[0],
            Block::Header {
                text: "Setup".to_string(),
                id: "setup".to_string()
            }
        );
        assert_eq!(blocks[1].kind(), "code");
    }
}
