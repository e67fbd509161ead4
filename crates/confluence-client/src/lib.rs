//! Authenticated REST client for a Confluence site.
//!
//! [`Client`] owns the transport: basic-auth'd JSON requests against the
//! configured base URL, with non-2xx statuses surfaced as [`ClientError`].
//! The entity modules add one typed wrapper per wire endpoint; none of them
//! retry, cache, or parallelize anything.

mod config;
mod error;
mod group;
mod http;
mod space;
mod space_permission;

pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use http::Client;
