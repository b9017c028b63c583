//! Client error type

use thiserror::Error;

/// Everything a client call can fail with
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure or an unreadable response body
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-success status. `message` is the
    /// server's own text, meant to be shown to the user as-is.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The call needs a signed-in session
    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Session encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status for `Api` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
