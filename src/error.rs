//! Error types for the Bandcamp API client.

use thiserror::Error;

/// Errors that can occur when interacting with the Bandcamp API.
#[derive(Debug, Error)]
pub enum BandcampError {
    /// HTTP transport error (connection refused, timeout, TLS failure, etc.).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned `"error": true` in its JSON response body.
    ///
    /// Bandcamp signals failures inside the body rather than via HTTP
    /// status codes.
    #[error("API error: {message}")]
    Api {
        /// Human-readable `error_message` from the API.
        message: String,
    },

    /// The API reported a missing resource ("No such album", "not found", ...).
    #[error("not found: {message}")]
    NotFound {
        /// Human-readable `error_message` from the API.
        message: String,
    },

    /// An empty search query was rejected before any request was made.
    #[error("search query must not be empty")]
    BadQuery,

    /// A collection method was called without an identity token configured.
    #[error("identity token required")]
    AuthRequired,

    /// Failed to parse JSON from the API.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for `Result<T, BandcampError>`.
pub type Result<T> = std::result::Result<T, BandcampError>;
