//! Core types for the Guide Directory

use serde::{Deserialize, Serialize};

/// One guide listed in `guides.txt`.
///
/// `folder` is the relative path segment the entry links to, `name` is the
/// label shown in the list and matched by search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuideRecord {
    pub folder: String,
    pub name: String,
}

impl GuideRecord {
    pub fn new(folder: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            folder: folder.into(),
            name: name.into(),
        }
    }

    /// Navigation target, relative to the directory page.
    pub fn href(&self) -> String {
        format!("./{}/", self.folder)
    }
}

impl std::fmt::Display for GuideRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.folder)
    }
}

/// Where the hosting page was loaded from.
///
/// Browsers refuse to fetch sibling files for pages opened straight from
/// disk, so a failed load on a `file:` page gets an extra hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageOrigin {
    #[default]
    Served,
    File,
}

impl PageOrigin {
    /// Classify a `window.location.protocol` value such as `"https:"`.
    pub fn from_protocol(protocol: &str) -> Self {
        if protocol.eq_ignore_ascii_case("file:") {
            Self::File
        } else {
            Self::Served
        }
    }
}
