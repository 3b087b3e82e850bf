//! Error taxonomy for the layout-storage client.
//!
//! A timeout, a missing document, and a permission refusal must each be
//! distinguishable at the UI boundary, since they carry different messages
//! and different retry affordances.

use thiserror::Error;

/// Errors talking to the external layout store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The request exceeded the abort timeout ("Request timed out").
    #[error("Request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The layout does not exist (HTTP 404).
    #[error("Layout not found: {id}")]
    NotFound {
        /// The requested layout id.
        id: String,
    },

    /// The caller is not allowed to access this layout (HTTP 401/403).
    #[error("Permission denied by the layout store")]
    PermissionDenied,

    /// Any other non-success response from the store.
    #[error("Layout store returned {status}: {message}")]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The response body, if readable.
        message: String,
    },

    /// Transport-level failure (connection refused, DNS, TLS).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the document contract.
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client configuration could not be loaded.
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong.
        message: String,
    },
}

/// Result type alias using [`StorageError`].
pub type StorageResult<T> = std::result::Result<T, StorageError>;
