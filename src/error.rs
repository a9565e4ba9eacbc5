//! Error types for feedtop
//!
//! Every failure is local to the feed-reporter task that hit it: errors are
//! logged and surfaced as events, never propagated across sibling tasks.

use thiserror::Error;

/// Result type alias for feedtop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for feedtop
///
/// Each variant carries enough context to identify the failing feed request
/// without consulting surrounding state.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "http.user_agent")
        key: Option<String>,
    },

    /// HTTP response carried a non-success status code
    #[error("unexpected HTTP status {status} for {url}")]
    UnexpectedStatus {
        /// The status code the server returned
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// Response body is not valid UTF-8 text
    #[error("decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Decoded text is not valid JSON or lacks the expected listing shape
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Network-level failure before a response status was available
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The built feed URL is not a valid absolute URL
    #[error("invalid feed URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// I/O error while writing report output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
