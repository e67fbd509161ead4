//! Error types for resource lifecycle operations.

use confluence_client::ClientError;
use thiserror::Error;

/// Provider error types.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Operation string is not of the form `verb:target`. Detected before
    /// any remote call is made.
    #[error("invalid operation {0:?}: expected \"verb:target\"")]
    InvalidOperationFormat(String),

    /// Operation string parses but is not a permission the API accepts.
    #[error("unknown operation {0:?}")]
    UnknownOperation(String),

    /// The resource type has no in-place update; destroy and recreate.
    #[error("{type_name} does not support in-place update; destroy and recreate the resource")]
    UnsupportedUpdate { type_name: &'static str },

    /// A batch creation aborted partway. Everything created before the
    /// failure exists remotely and is left for the next refresh to pick up.
    #[error("aborted after creating {created} of {requested} permissions: {source}")]
    PartialApply {
        created: usize,
        requested: usize,
        #[source]
        source: ClientError,
    },

    #[error("invalid resource payload: {0}")]
    Payload(#[from] serde_json::Error),

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Result type alias for provider operations.
pub type Result<T> = std::result::Result<T, ProviderError>;
