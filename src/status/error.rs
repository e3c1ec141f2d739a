//! Status retrieval errors.

use thiserror::Error;

/// Failure to obtain a usable status document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, DNS or protocol failure.
    #[error("failed to fetch {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Endpoint answered with a non-success status code.
    #[error("status endpoint {url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Response body could not be read.
    #[error("failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Body is not JSON or lacks the expected structure.
    #[error("malformed status document: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for status retrieval.
pub type FetchResult<T> = Result<T, FetchError>;
