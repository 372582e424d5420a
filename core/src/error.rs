//! Error types for the booleans.io client.
//!
//! # Design
//! Remote not-found is not an error in this API: `read` reports it as `None`
//! and `update`/`delete` as `false`, because a missing resource is an
//! ordinary outcome the caller is expected to check. `ApiError` is reserved
//! for the cases where no meaningful answer exists: the round trip itself
//! failed, the create status was unexpected, or the resource document could
//! not be decoded.

use std::fmt;

/// Errors returned by client operations.
#[derive(Debug)]
pub enum ApiError {
    /// The HTTP round trip failed before a status was available.
    Transport(String),

    /// Create returned a non-2xx status.
    HttpError { status: u16, body: String },

    /// The response body could not be decoded as a resource document.
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport failed: {msg}"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
