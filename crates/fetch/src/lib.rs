//! Page fetching for catalog scraping.
//!
//! The resolver never talks HTTP directly; it asks a [`Fetcher`] for the raw
//! bytes of a page. Timeouts, retries and TLS live behind this trait, in
//! whichever implementation the host wires in.

pub mod error;
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "mock")]
mod mock;
mod request;

#[cfg(feature = "http")]
pub use crate::http::HttpFetcher;
#[cfg(feature = "mock")]
pub use crate::mock::MockFetcher;
pub use crate::request::{Method, Request};
use crate::error::Result;
use std::sync::Arc;

/// Anything able to turn a [`Request`] into a page body.
///
/// Failures (network errors, non-2xx statuses) are returned as-is; callers
/// do not retry.
///
/// # Examples
///
/// ```
/// use tvsub_fetch::{Fetcher, Request, error::Result};
///
/// fn page_length(fetcher: &dyn Fetcher, url: &str) -> Result<usize> {
///     Ok(fetcher.fetch(&Request::get(url))?.len())
/// }
/// ```
pub trait Fetcher: Send + Sync {
    /// Name of the fetcher, used for logging only.
    fn name(&self) -> &str;

    /// Performs the request and returns the response body.
    fn fetch(&self, request: &Request) -> Result<Vec<u8>>;
}

pub type FetcherHandle = Arc<dyn Fetcher + Send + Sync>;
