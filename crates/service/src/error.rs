//! Service Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A service error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for service operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
///
/// ### Expected outcomes
/// - [`ErrorKind::NotFound`]
/// - [`ErrorKind::AmbiguousOrNotFound`]
///
/// Both mean "no subtitles here"; [`query`](crate::TvSubtitles::query)
/// turns them into an empty result.
///
/// ### Failures
/// - [`ErrorKind::Fetch`]
/// - [`ErrorKind::Download`]
/// - [`ErrorKind::InvalidVideo`]
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The episode does not appear on its season page.
    #[display("not found: {_0}")]
    NotFound(#[error(not(source))] String),
    /// The series search returned no usable result.
    #[display("no series matching '{_0}'")]
    AmbiguousOrNotFound(#[error(not(source))] String),
    /// A catalog page could not be fetched.
    #[display("failed to fetch catalog page")]
    Fetch,
    /// A subtitle archive could not be fetched or unpacked.
    #[display("failed to download subtitle")]
    Download,
    /// The video lacks what this service needs to search for it.
    #[display("unsupported video: {_0}")]
    InvalidVideo(#[error(not(source))] String),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch | Self::Download)
    }

    /// Returns `true` for outcomes that just mean "nothing to list".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::AmbiguousOrNotFound(_))
    }
}
