//! Error types for the remote directory.

use thiserror::Error;

/// Errors surfaced by a [`Directory`](super::Directory) call.
///
/// Every transport failure is converted into one of these at the client boundary. The store
/// keeps only the rendered message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The service could not be reached or the connection broke.
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-2xx status.
    #[error("Server error: {status} {body}")]
    Server { status: u16, body: String },

    /// The response body was not what we expected.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// The configured base URL is unusable.
    #[error("Invalid base URL: {0}")]
    InvalidUrl(String),
}

impl DirectoryError {
    /// Classifies a reqwest failure.
    pub fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DirectoryError::Timeout
        } else if e.is_decode() {
            DirectoryError::Decode(e.to_string())
        } else {
            DirectoryError::Network(e.to_string())
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(e: serde_json::Error) -> Self {
        DirectoryError::Decode(e.to_string())
    }
}
