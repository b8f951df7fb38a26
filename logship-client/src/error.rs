//! Error types for the logship client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when posting logs
#[derive(Debug, Error)]
pub enum ClientError {
    /// The endpoint address failed to parse as a URL
    #[error("unable to build client using the URL '{0}'")]
    BuildingClient(String),

    /// A record was not a structured object, or JSON encoding of it failed
    #[error("error parsing logs: {0}")]
    ParsingLogs(String),

    /// The HTTP exchange failed or the endpoint answered with a non-200 status
    #[error("error posting logs: {0}")]
    PostingLogs(String),

    /// Transport-level failure from the underlying HTTP client
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

impl ClientError {
    /// Create a posting error for a response with an unexpected status code
    pub(crate) fn unexpected_status(expected: StatusCode, got: StatusCode) -> Self {
        Self::PostingLogs(format!(
            "unexpected status code when posting logs, expected: {}, got: {}",
            expected.as_u16(),
            got.as_u16()
        ))
    }

    /// Check if this error came from the transport layer rather than the endpoint
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_))
    }
}
