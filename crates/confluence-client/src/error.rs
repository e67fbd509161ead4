//! Error types for the REST client.

use thiserror::Error;

/// REST client error types.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Non-2xx response. The message starts with the numeric status code and
    /// reason phrase so callers (and operators reading logs) see the remote
    /// status line first, followed by the offending request.
    #[error("{status} {reason} ({method} {path})")]
    Status {
        status: u16,
        reason: String,
        method: String,
        path: String,
    },

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_status(&self, code: u16) -> bool {
        matches!(self, Self::Status { status, .. } if *status == code)
    }

    pub fn is_not_found(&self) -> bool {
        self.is_status(404)
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
