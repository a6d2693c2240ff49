//! Loads the guide list once at startup.

use tracing::{debug, error, info};

use crate::error::{GuideError, GuideResult, LoadError};
use crate::model::GuideRecord;
use crate::parser::{parse_guides, ParsedGuides};
use crate::source::GuideSource;

/// Fetches and parses the guide list from a fixed source.
///
/// One request per [`Loader::load`] call, no retry, no timeout.
#[derive(Debug, Clone)]
pub struct Loader<S> {
    source: S,
}

impl<S: GuideSource> Loader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the list and return its records in source order.
    pub async fn load(&self) -> Result<Vec<GuideRecord>, LoadError> {
        self.load_parsed().await.map(|parsed| parsed.records)
    }

    /// Like [`Loader::load`], but keeps the skipped lines as well.
    pub async fn load_parsed(&self) -> Result<ParsedGuides, LoadError> {
        match self.try_load().await {
            Ok(parsed) => {
                info!(
                    records = parsed.records.len(),
                    skipped = parsed.warnings.len(),
                    "Guide list loaded"
                );
                Ok(parsed)
            }
            Err(err) => {
                error!(error = %err, "Error fetching or parsing guides.txt");
                Err(err.into())
            }
        }
    }

    async fn try_load(&self) -> GuideResult<ParsedGuides> {
        let response = self.source.fetch().await?;
        debug!(status = response.status, bytes = response.body.len(), "Guide list fetched");

        if !response.is_success() {
            return Err(GuideError::Fetch {
                status: response.status,
            });
        }

        Ok(parse_guides(&response.body))
    }
}
