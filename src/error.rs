//! Error types for Tripwise
//!
//! This module defines the error types used throughout the application,
//! using `thiserror` for ergonomic error handling.
//!
//! The API layer has exactly one failure kind, [`TransportError`]. It covers
//! network failures, non-success HTTP statuses and malformed response bodies,
//! and is passed unchanged from the API operations to the page controllers.

use thiserror::Error;

/// Maximum number of response body characters kept in a status error
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Failure of a single request/response round trip with the backend
///
/// Every API operation fails with this type and nothing else. Callers must
/// not assume partial success: when a `TransportError` is returned, no part
/// of the response payload was accepted.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never produced an HTTP response (DNS, refused, reset, ...)
    #[error("Network error calling {url}: {source}")]
    Network {
        /// Full request URL
        url: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status
    #[error("Backend returned HTTP {status} for {url}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Full request URL
        url: String,
        /// Response body, truncated
        body: String,
    },

    /// The backend answered 2xx but the body did not match the expected shape
    #[error("Malformed response from {url}: {source}")]
    Decode {
        /// Full request URL
        url: String,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    /// Build a status error, truncating the body to a readable size
    pub fn status(status: u16, url: impl Into<String>, body: &str) -> Self {
        Self::Status {
            status,
            url: url.into(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        }
    }

    /// HTTP status code, when the backend produced one
    ///
    /// # Examples
    ///
    /// ```
    /// use tripwise::error::TransportError;
    ///
    /// let error = TransportError::status(500, "http://localhost:8000/api/book", "boom");
    /// assert_eq!(error.http_status(), Some(500));
    /// ```
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => url,
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = std::result::Result<T, TransportError>;

/// Main error type for the Tripwise application layer
///
/// Covers everything outside the API contract: configuration loading,
/// terminal IO and client construction.
#[derive(Error, Debug)]
pub enum TripwiseError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend round trip failed
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Interactive line editor errors
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for Tripwise command handlers
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
