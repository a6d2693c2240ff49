//! The Guide Directory controller.
//!
//! Owns the loaded guides and ties the loader, the search filter and the
//! renderer together.
//!
//! ## Lifecycle
//!
//! ```text
//! new() ──► finish_load(result) ──► search(query) ──► search(query) ...
//!           (written once)          (read only)
//! ```

use tracing::{debug, warn};

use crate::error::LoadError;
use crate::filter::filter;
use crate::model::{GuideRecord, PageOrigin};
use crate::render::{render, ListSurface, GUIDES_NOT_LOADED, NO_GUIDES_IN_FILE};

/// Shown under a load error when the page was opened straight from disk.
pub const FILE_ORIGIN_NOTE: &str = "Note: Browsers block fetching local files via AJAX (CORS). \
Please run this via a local server (e.g., VS Code Live Server, Python http.server, etc.) \
or check your browser console.";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
enum LoadState {
    #[default]
    Pending,
    Loaded(Vec<GuideRecord>),
    Failed(LoadError),
}

/// Single-writer state for one directory page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuideDirectory {
    state: LoadState,
    origin: PageOrigin,
}

impl GuideDirectory {
    pub fn new(origin: PageOrigin) -> Self {
        Self {
            state: LoadState::Pending,
            origin,
        }
    }

    /// The full list as loaded; empty until a load succeeds.
    pub fn guides(&self) -> &[GuideRecord] {
        match &self.state {
            LoadState::Loaded(guides) => guides,
            _ => &[],
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match &self.state {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.state == LoadState::Pending
    }

    /// Store the outcome of the startup load and draw it.
    ///
    /// The state is written once; a second call is ignored.
    pub fn finish_load<S: ListSurface + ?Sized>(
        &mut self,
        result: Result<Vec<GuideRecord>, LoadError>,
        surface: &mut S,
    ) {
        if !self.is_pending() {
            warn!("Guide list already loaded, ignoring second load result");
            return;
        }

        match result {
            Ok(guides) if !guides.is_empty() => {
                render(surface, &guides, false, guides.len());
                surface.set_status("");
                self.state = LoadState::Loaded(guides);
            }
            Ok(guides) => {
                surface.clear();
                surface.set_status(NO_GUIDES_IN_FILE);
                surface.set_status_visible(true);
                self.state = LoadState::Loaded(guides);
            }
            Err(err) => {
                surface.clear();
                surface.set_status(&format!("Error loading guides: {}", err.message));
                if self.origin == PageOrigin::File {
                    surface.append_note(FILE_ORIGIN_NOTE);
                }
                surface.set_status_visible(true);
                self.state = LoadState::Failed(err);
            }
        }
    }

    /// Re-render for the current search input.
    pub fn search<S: ListSurface + ?Sized>(&self, query: &str, surface: &mut S) {
        let all = self.guides();
        if all.is_empty() {
            if surface.status_text().is_empty() {
                surface.set_status(GUIDES_NOT_LOADED);
                surface.set_status_visible(true);
            }
            return;
        }

        let matches = filter(all, query);
        debug!(query, matches = matches.len(), "Search");
        render(surface, &matches, !query.trim().is_empty(), all.len());
    }
}
