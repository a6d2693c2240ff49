//! Error types for the Guide Directory

use thiserror::Error;

/// Main error type for Guide Directory operations
#[derive(Error, Debug)]
pub enum GuideError {
    /// The guide list was served with a non-success status
    #[error("HTTP error! status: {status} - Could not load guides.txt")]
    Fetch { status: u16 },

    /// The request could not be issued or its body could not be read
    #[error("Request failed: {0}")]
    Request(String),

    /// Configuration file could not be parsed
    #[error("Config error: {0}")]
    Config(String),

    /// A guide draft is missing required data or was edited out of range
    #[error("Invalid guide: {0}")]
    InvalidGuide(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using GuideError
pub type GuideResult<T> = Result<T, GuideError>;

/// The single error surfaced by a failed load.
///
/// Whatever went wrong underneath (transport, status, decoding) is flattened
/// into the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct LoadError {
    pub message: String,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<GuideError> for LoadError {
    fn from(err: GuideError) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_names_status() {
        let err = GuideError::Fetch { status: 404 };
        assert_eq!(
            format!("{}", err),
            "HTTP error! status: 404 - Could not load guides.txt"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let guide_err: GuideError = io_err.into();
        assert!(matches!(guide_err, GuideError::Io(_)));
    }

    #[test]
    fn test_load_error_keeps_message() {
        let load: LoadError = GuideError::Request("connection refused".to_string()).into();
        assert_eq!(load.message, "Request failed: connection refused");
        assert_eq!(load.to_string(), load.message);
    }
}
