//! Error types for the Quill client.
//!
//! Uses `thiserror` for ergonomic error definitions. The transport boundary
//! has its own error enum; the top-level `Error` wraps it for callers that
//! want a single type.

use thiserror::Error;

/// The top-level error type for all Quill operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("REST error: {0}")]
    Rest(#[from] RestError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the transport boundary.
///
/// The remote's rejection statuses are not interpreted here — a 404, a 403
/// and a 429 all come back as [`RestError::Api`] and it is the caller's job
/// to inspect the status code. The retry decorator is the one exception: it
/// peeks at the status to decide whether an attempt is worth repeating.
#[derive(Debug, Clone, Error)]
pub enum RestError {
    #[error("API request failed: {message} (status: {status})")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl RestError {
    /// Whether a retry could plausibly change the outcome: transient network
    /// failures, rate limiting (429), and server-side errors (5xx).
    pub fn is_transient(&self) -> bool {
        match self {
            RestError::Network(_) => true,
            RestError::Api { status, .. } => *status == 429 || *status >= 500,
            RestError::Decode(_) => false,
        }
    }
}
