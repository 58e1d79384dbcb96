//! Error types for the PokeAPI client.

use thiserror::Error;

/// Result type for PokeAPI client operations.
pub type Result<T> = std::result::Result<T, PokeApiError>;

/// PokeAPI client errors.
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// Network error (connection refused, DNS, TLS)
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request exceeded the configured timeout
    #[error("timed out requesting {url}")]
    Timeout { url: String },

    /// Non-2xx response
    #[error("API error ({status}) for {url}")]
    Api { status: u16, url: String },

    /// Body was not the JSON shape we expected
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Base URL or resource name could not form a valid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for PokeApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            Self::Network(err)
        }
    }
}
