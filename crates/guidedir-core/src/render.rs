//! Projects guide records onto a list surface.
//!
//! ## Surfaces
//!
//! A [`ListSurface`] is whatever hosts the list: the Dioxus signals behind
//! the directory page, or a [`MemorySurface`] for the CLI and tests. The
//! renderer only ever replaces the surface's entries wholesale and sets the
//! single status line.

use std::time::Duration;

use crate::effects::list_stagger;
use crate::model::GuideRecord;

pub const NO_MATCHING_GUIDES: &str = "No matching guides found.";
pub const NO_GUIDES_AVAILABLE: &str = "No guides available.";
pub const NO_GUIDES_IN_FILE: &str = "No guides found in the file.";
pub const GUIDES_NOT_LOADED: &str = "Guides are not loaded yet.";

/// One navigable row in the rendered list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuideEntry {
    pub href: String,
    pub label: String,
    /// Entrance animation delay for this row
    pub stagger: Duration,
}

impl GuideEntry {
    pub fn new(record: &GuideRecord, index: usize) -> Self {
        Self {
            href: record.href(),
            label: record.name.clone(),
            stagger: list_stagger(index),
        }
    }
}

/// The container, status text and status visibility the renderer drives.
pub trait ListSurface {
    /// Remove every rendered entry.
    fn clear(&mut self);

    /// Append an entry after the existing ones.
    fn append(&mut self, entry: GuideEntry);

    /// Replace the status text (and drop any note).
    fn set_status(&mut self, text: &str);

    /// Add a secondary note under the status text.
    fn append_note(&mut self, note: &str);

    fn set_status_visible(&mut self, visible: bool);

    fn status_text(&self) -> String;
}

/// Draw `records` onto `surface`, replacing whatever was there.
///
/// `is_filtered` says whether a search term is active and `total_loaded` is
/// the size of the unfiltered list; together they pick the empty-state text.
pub fn render<S: ListSurface + ?Sized>(
    surface: &mut S,
    records: &[GuideRecord],
    is_filtered: bool,
    total_loaded: usize,
) {
    surface.clear();

    if records.is_empty() {
        if is_filtered {
            surface.set_status(NO_MATCHING_GUIDES);
            surface.set_status_visible(true);
            return;
        }
        if total_loaded > 0 {
            surface.set_status(NO_GUIDES_AVAILABLE);
            surface.set_status_visible(true);
            return;
        }
    }

    surface.set_status_visible(false);

    for (index, record) in records.iter().enumerate() {
        surface.append(GuideEntry::new(record, index));
    }
}

/// In-memory surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    pub entries: Vec<GuideEntry>,
    pub status: String,
    pub note: Option<String>,
    pub status_visible: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            status_visible: true,
            ..Self::default()
        }
    }

    /// Status text as it would be read on screen, or `None` when hidden or empty.
    pub fn visible_status(&self) -> Option<String> {
        if !self.status_visible || (self.status.is_empty() && self.note.is_none()) {
            return None;
        }
        Some(match &self.note {
            Some(note) => format!("{}\n{}", self.status, note),
            None => self.status.clone(),
        })
    }
}

impl ListSurface for MemorySurface {
    fn clear(&mut self) {
        self.entries.clear();
    }

    fn append(&mut self, entry: GuideEntry) {
        self.entries.push(entry);
    }

    fn set_status(&mut self, text: &str) {
        self.status = text.to_string();
        self.note = None;
    }

    fn append_note(&mut self, note: &str) {
        self.note = Some(note.to_string());
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.status_visible = visible;
    }

    fn status_text(&self) -> String {
        self.status.clone()
    }
}
