//! Directory context for the Guide Directory page.
//!
//! Provides the [`GuideDirectory`] controller and the signals it renders
//! into to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let directory = use_directory();
//! let mut surface = use_list_surface();
//! directory.read().search("docker", &mut surface);
//! ```

use dioxus::prelude::*;
use guidedir_core::{GuideDirectory, GuideEntry, ListSurface};

/// The single status line under the search box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusLine {
    pub text: String,
    pub note: Option<String>,
    pub visible: bool,
}

/// Signal-backed [`ListSurface`]: the rendered rows and the status line.
#[derive(Clone, Copy, PartialEq)]
pub struct ListSignals {
    pub entries: Signal<Vec<GuideEntry>>,
    pub status: Signal<StatusLine>,
}

impl ListSurface for ListSignals {
    fn clear(&mut self) {
        self.entries.write().clear();
    }

    fn append(&mut self, entry: GuideEntry) {
        self.entries.write().push(entry);
    }

    fn set_status(&mut self, text: &str) {
        let mut status = self.status.write();
        status.text = text.to_string();
        status.note = None;
    }

    fn append_note(&mut self, note: &str) {
        self.status.write().note = Some(note.to_string());
    }

    fn set_status_visible(&mut self, visible: bool) {
        self.status.write().visible = visible;
    }

    fn status_text(&self) -> String {
        self.status.peek().text.clone()
    }
}

/// Hook to access the directory controller from context.
///
/// Written once when the guide list finishes loading, read on every search.
pub fn use_directory() -> Signal<GuideDirectory> {
    use_context::<Signal<GuideDirectory>>()
}

/// Hook to access the list surface from context.
pub fn use_list_surface() -> ListSignals {
    use_context::<ListSignals>()
}
