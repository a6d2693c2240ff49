//! Site configuration.
//!
//! Read from an optional `guidedir.json` at the site root. Every field has a
//! default, so a missing file or a partial one is fine.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{GuideError, GuideResult};
use crate::source::DEFAULT_GUIDES_FILE;

pub const CONFIG_FILE_NAME: &str = "guidedir.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuideDirConfig {
    /// Guide list file, relative to the site root
    pub guides_file: String,
    pub site: SiteConfig,
}

impl Default for GuideDirConfig {
    fn default() -> Self {
        Self {
            guides_file: DEFAULT_GUIDES_FILE.to_string(),
            site: SiteConfig::default(),
        }
    }
}

impl GuideDirConfig {
    /// Load the config at `path`, falling back to defaults if it does not exist.
    pub fn load(path: &Path) -> GuideResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| GuideError::Config(format!("{}: {e}", path.display())))
    }
}

/// Shared chrome of generated guide pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub stylesheet: String,
    pub font_stylesheet: Option<String>,
    /// Extra `<script defer>` sources for the page head
    pub head_scripts: Vec<String>,
    /// Script loaded at the end of the body for the page effects
    pub body_script: String,
    pub back_link_label: String,
    pub footer_href: Option<String>,
    pub footer_text: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            stylesheet: "../style.css".to_string(),
            font_stylesheet: Some(
                "https://fonts.googleapis.com/css2?family=Outfit:wght@300;400;500;700&display=swap"
                    .to_string(),
            ),
            head_scripts: Vec::new(),
            body_script: "../script.js".to_string(),
            back_link_label: "\u{2190} Back to Home".to_string(),
            footer_href: None,
            footer_text: "Legal Notice".to_string(),
        }
    }
}
