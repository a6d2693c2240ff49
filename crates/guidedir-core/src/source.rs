//! Where the guide list text comes from.
//!
//! The web front-end implements [`GuideSource`] over an HTTP GET of the
//! sibling `guides.txt`; the CLI reads the same file from disk with
//! [`FileSource`].

use std::future::Future;

use crate::error::GuideResult;

/// Well-known name of the guide list, next to the directory page.
pub const DEFAULT_GUIDES_FILE: &str = "guides.txt";

/// Status and body of one fetch of the guide list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceResponse {
    pub status: u16,
    pub body: String,
}

impl SourceResponse {
    /// A 200 response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// A failed response with an empty body.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A single GET of the guide list.
///
/// Transport failures are errors; a served-but-failed response is returned
/// as a [`SourceResponse`] so the loader can report its status.
pub trait GuideSource {
    fn fetch(&self) -> impl Future<Output = GuideResult<SourceResponse>>;
}

#[cfg(feature = "fs")]
pub use file::FileSource;

#[cfg(feature = "fs")]
mod file {
    use std::io::ErrorKind;
    use std::path::{Path, PathBuf};

    use super::{GuideSource, SourceResponse};
    use crate::error::GuideResult;

    /// Reads the guide list from the local filesystem.
    ///
    /// A missing file maps to a 404 response, the way a static file server
    /// would answer.
    #[derive(Debug, Clone)]
    pub struct FileSource {
        path: PathBuf,
    }

    impl FileSource {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl GuideSource for FileSource {
        async fn fetch(&self) -> GuideResult<SourceResponse> {
            match tokio::fs::read_to_string(&self.path).await {
                Ok(body) => Ok(SourceResponse::ok(body)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(SourceResponse::status(404)),
                Err(e) => Err(e.into()),
            }
        }
    }
}
