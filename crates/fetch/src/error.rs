//! Fetch Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A fetch error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for fetch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request never got a response (DNS, connection, timeout, body read).
    #[display("network error: {_0}")]
    Network(#[error(not(source))] String),
    /// The server answered with a non-2xx status.
    #[display("unexpected status {status} from {url}")]
    Status {
        /// URL of the failed request.
        url: String,
        /// HTTP status code of the response.
        status: u16,
    },
    /// The HTTP client could not be constructed from its configuration.
    #[display("invalid HTTP client configuration")]
    Client,
    /// No page is registered for the request (mock fetcher only).
    #[display("no page registered for {_0}")]
    NotFound(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Client | Self::NotFound(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ErrorKind::Network("http://example.test".to_string()), true)]
    #[case(ErrorKind::Status { url: String::new(), status: 503 }, true)]
    #[case(ErrorKind::Status { url: String::new(), status: 429 }, true)]
    #[case(ErrorKind::Status { url: String::new(), status: 404 }, false)]
    #[case(ErrorKind::Client, false)]
    #[case(ErrorKind::NotFound(String::new()), false)]
    fn test_is_retryable(#[case] kind: ErrorKind, #[case] expected: bool) {
        assert_eq!(kind.is_retryable(), expected);
    }
}
