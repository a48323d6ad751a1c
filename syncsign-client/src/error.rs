//! Client error types.

use syncsign_core::{DirectoryError, LayoutError, RouterError};
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur when talking to the SyncSign cloud or a hub.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A base URL from configuration, or one derived from it, is invalid.
    #[error("invalid SyncSign URL: {0}")]
    InvalidUrl(String),
    /// HTTP layer failed (connection, timeout, etc.).
    #[error("SyncSign HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON parsing failed.
    #[error("failed to parse SyncSign payload: {0}")]
    Json(#[from] serde_json::Error),
    /// The service answered with a non-success status.
    #[error("SyncSign API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the service.
        body: String,
    },
    /// The response did not have the expected shape.
    #[error("unexpected SyncSign response: {0}")]
    UnexpectedResponse(String),
    /// The template could not be compiled.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A node or hub could not be resolved.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    /// Configuration could not be read.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns true for transport failures that may succeed on retry.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<RouterError> for ClientError {
    fn from(err: RouterError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}
