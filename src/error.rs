// src/error.rs
// =============================================================================
// Typed errors for the parts of the crawler that can fail.
//
// Only configuration and document errors ever reach main(). Fetch errors are
// always handled inside the traversal loop: they are logged and the crawl
// moves on to the next page.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from attributes
// - #[from]: lets the ? operator convert one error type into another
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Why a single page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request did not finish within the configured timeout
    #[error("request timed out")]
    Timeout,

    /// Connection refused, DNS failure, TLS handshake failure, ...
    #[error("connection failed: {0}")]
    Connect(String),

    /// Any other transport-level failure reported by reqwest
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with something other than 200 OK
    #[error("HTTP status {0}")]
    Status(u16),

    /// The response headers arrived but reading the body failed
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if error.is_connect() {
            FetchError::Connect(error.to_string())
        } else {
            FetchError::Transport(error)
        }
    }
}

/// Problems with the crawl settings, detected before any request is made.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("URL '{0}' must use http or https")]
    UnsupportedScheme(String),

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Failure while writing the output document.
#[derive(Debug, Error)]
#[error("failed to write document {path}: {source}")]
pub struct DocumentError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}
