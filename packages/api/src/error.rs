//! Error taxonomy for the HTTP client layer.

use thiserror::Error;

/// Everything that can go wrong talking to the server.
///
/// Facades propagate these untouched; the session manager turns them into
/// the human-readable `error` field via `Display`. For [`ApiError::Status`]
/// the message is the server's `detail` payload when one was provided, so
/// validation messages reach the page verbatim.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or timeout before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
