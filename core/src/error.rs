//! Error types for the Digemart Client SDK.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the Digemart Client SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-2xx status.
    #[error("{context}: {status}")]
    Http {
        /// HTTP status code returned by the server.
        status: u16,
        /// Which call failed, e.g. "Gift API error".
        context: String,
    },

    /// The API answered 2xx but the envelope failed a shape or flag check.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Caller input was rejected before any request was sent.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Network/transport error.
    #[error("Network error: {0}")]
    Network(String),

    /// Response body could not be decoded.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn http(status: u16, context: impl Into<String>) -> Self {
        Error::Http {
            status,
            context: context.into(),
        }
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
