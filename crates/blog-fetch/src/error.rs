//! Error types for blog-fetch.

use thiserror::Error;

pub type Result<T, E = FetchError> = std::result::Result<T, E>;

/// Failures that can occur while fetching.
///
/// No variant covers JSON: the body is returned as text and decoded one
/// layer above this crate.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("request timeout")]
    Timeout,

    #[error("redirect loop detected (more than {limit} redirects)")]
    TooManyRedirects { limit: u32 },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Returns `true` for transport-level failures, timeouts included.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Timeout)
    }
}

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else if err.is_builder() {
            FetchError::Client(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            FetchError::TooManyRedirects { limit: 5 }.to_string(),
            "redirect loop detected (more than 5 redirects)"
        );
        assert_eq!(FetchError::Timeout.to_string(), "request timeout");
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
    }

    #[test]
    fn test_is_network() {
        assert!(FetchError::Network("dns".to_string()).is_network());
        assert!(FetchError::Timeout.is_network());
        assert!(!FetchError::TooManyRedirects { limit: 5 }.is_network());
        assert!(!FetchError::InvalidUrl("x".to_string()).is_network());
    }
}
