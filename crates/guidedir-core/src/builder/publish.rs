//! Writes a generated guide into the site tree.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use super::block::GuideDraft;
use super::html::render_page;
use crate::config::GuideDirConfig;
use crate::error::GuideResult;
use crate::parser::format_guide_line;

/// Paths touched by [`publish`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishReport {
    pub page: PathBuf,
    pub guides_file: PathBuf,
    pub line: String,
}

/// Write `<root>/<folder>/index.html` and register the guide in the guide list.
///
/// The guide list gets a new line appended; existing entries are untouched.
pub fn publish(draft: &GuideDraft, root: &Path, config: &GuideDirConfig) -> GuideResult<PublishReport> {
    draft.validate()?;

    let folder = draft.folder.trim();
    let title = draft.title.trim();

    let target_dir = root.join(folder);
    fs::create_dir_all(&target_dir)?;

    let page = target_dir.join("index.html");
    fs::write(&page, render_page(draft, &config.site))?;

    let guides_file = root.join(&config.guides_file);
    let line = format_guide_line(folder, title);
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&guides_file)?;
    write!(file, "\n{line}")?;

    info!(folder, title, page = %page.display(), "Guide published");

    Ok(PublishReport {
        page,
        guides_file,
        line,
    })
}
