//! In-memory fetcher for testing.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::error::{ErrorKind, Result};
use crate::{Fetcher, Request};

#[derive(Debug, Clone)]
enum Response {
    Body(Vec<u8>),
    Status(u16),
}

/// In-memory fetcher for testing.
///
/// Serves canned pages keyed by the exact [`Request`] (method, URL and
/// parameters). Pages can be replaced between calls to simulate new uploads,
/// and every request is counted so tests can assert how often a page was
/// fetched.
///
/// # Examples
///
/// ```
/// use tvsub_fetch::{Fetcher, MockFetcher, Request};
///
/// let fetcher = MockFetcher::with_pages([(Request::get("http://example.test/a.html"), "<html></html>")]);
/// assert_eq!(fetcher.fetch(&Request::get("http://example.test/a.html")).unwrap(), b"<html></html>");
/// assert_eq!(fetcher.requests("http://example.test/a.html"), 1);
/// assert!(fetcher.fetch(&Request::get("http://example.test/b.html")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockFetcher {
    pages: RwLock<HashMap<Request, Response>>,
    counts: RwLock<HashMap<String, usize>>,
}

impl MockFetcher {
    /// Create a mock fetcher pre-populated with pages.
    pub fn with_pages(pages: impl IntoIterator<Item = (Request, impl Into<Vec<u8>>)>) -> Self {
        let pages = pages.into_iter().map(|(request, body)| (request, Response::Body(body.into()))).collect();
        Self {
            pages: RwLock::new(pages),
            counts: RwLock::default(),
        }
    }

    /// Registers (or replaces) the page served for `request`.
    pub fn insert(&self, request: Request, body: impl Into<Vec<u8>>) {
        self.pages.write().unwrap_or_else(PoisonError::into_inner).insert(request, Response::Body(body.into()));
    }

    /// Makes `request` fail with a non-2xx `status`.
    pub fn fail(&self, request: Request, status: u16) {
        self.pages.write().unwrap_or_else(PoisonError::into_inner).insert(request, Response::Status(status));
    }

    /// Number of requests made for `url`, whatever their method or parameters.
    pub fn requests(&self, url: &str) -> usize {
        self.counts.read().unwrap_or_else(PoisonError::into_inner).get(url).copied().unwrap_or(0)
    }

    /// Number of requests made in total.
    pub fn total_requests(&self) -> usize {
        self.counts.read().unwrap_or_else(PoisonError::into_inner).values().sum()
    }
}

impl Fetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch(&self, request: &Request) -> Result<Vec<u8>> {
        *self.counts.write().unwrap_or_else(PoisonError::into_inner).entry(request.url.clone()).or_default() += 1;
        let response = self.pages.read().unwrap_or_else(PoisonError::into_inner).get(request).cloned();
        match response {
            Some(Response::Body(body)) => Ok(body),
            Some(Response::Status(status)) => exn::bail!(ErrorKind::Status {
                url: request.url.clone(),
                status,
            }),
            None => exn::bail!(ErrorKind::NotFound(request.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_keyed_by_params() {
        let fetcher = MockFetcher::with_pages([
            (Request::post("http://example.test/search.php").param("q", "foo"), "foo results"),
            (Request::post("http://example.test/search.php").param("q", "bar"), "bar results"),
        ]);
        let foo = fetcher.fetch(&Request::post("http://example.test/search.php").param("q", "foo")).unwrap();
        assert_eq!(foo, b"foo results");
        let err = fetcher.fetch(&Request::get("http://example.test/search.php")).unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
        assert_eq!(fetcher.requests("http://example.test/search.php"), 2);
    }

    #[test]
    fn test_replace_page() {
        let request = Request::get("http://example.test/episode-1.html");
        let fetcher = MockFetcher::with_pages([(request.clone(), "before")]);
        assert_eq!(fetcher.fetch(&request).unwrap(), b"before");
        fetcher.insert(request.clone(), "after");
        assert_eq!(fetcher.fetch(&request).unwrap(), b"after");
        assert_eq!(fetcher.total_requests(), 2);
    }

    #[test]
    fn test_fail() {
        let request = Request::get("http://example.test/down.html");
        let fetcher = MockFetcher::default();
        fetcher.fail(request.clone(), 503);
        let err = fetcher.fetch(&request).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Status { status: 503, .. }));
        assert!(err.is_retryable());
    }
}
