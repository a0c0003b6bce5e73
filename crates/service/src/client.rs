//! Uncached page operations against the catalog.

use exn::ResultExt;
use tracing::instrument;
use tvsub_extract::models::{EpisodeId, EpisodeRow, SeriesHit, SeriesId, SubtitleEntry};
use tvsub_fetch::{FetcherHandle, Request};

use crate::endpoints::Catalog;
use crate::error::{ErrorKind, Result};

/// Fetches catalog pages and extracts them; no caching happens here.
#[derive(Clone)]
pub struct CatalogClient {
    fetcher: FetcherHandle,
    catalog: Catalog,
}
impl CatalogClient {
    pub fn new(fetcher: FetcherHandle, catalog: Catalog) -> Self {
        Self { fetcher, catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    fn fetch(&self, request: &Request) -> Result<Vec<u8>> {
        self.fetcher.fetch(request).or_raise(|| ErrorKind::Fetch)
    }

    /// Series search results for `name`, in page order.
    #[instrument(skip(self))]
    pub fn search(&self, name: &str) -> Result<Vec<SeriesHit>> {
        let page = self.fetch(&self.catalog.search(name))?;
        Ok(tvsub_extract::series_hits(page))
    }

    /// Every well-formed episode row of one season, in page order.
    #[instrument(skip(self), fields(series = %series))]
    pub fn season(&self, series: SeriesId, season: u32) -> Result<Vec<EpisodeRow>> {
        let page = self.fetch(&self.catalog.season(series, season))?;
        Ok(tvsub_extract::episodes(page))
    }

    /// Subtitle uploads listed on an episode page.
    ///
    /// Always fetched live: new uploads appear between calls, so the result
    /// is never cached.
    #[instrument(skip(self), fields(episode = %episode))]
    pub fn list_subtitles(&self, episode: EpisodeId) -> Result<Vec<SubtitleEntry>> {
        let page = self.fetch(&self.catalog.episode(episode))?;
        let entries = tvsub_extract::subtitles(page);
        tracing::debug!(count = entries.len(), "Listed subtitle uploads");
        Ok(entries)
    }
}

impl std::fmt::Debug for CatalogClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogClient")
            .field("fetcher", &self.fetcher.name())
            .field("catalog", &self.catalog)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{self, CATALOG};
    use std::sync::Arc;
    use tvsub_extract::models::SubtitleId;
    use tvsub_fetch::MockFetcher;

    #[test]
    fn test_list_subtitles_is_never_cached() {
        let catalog = Catalog::new(CATALOG);
        let request = catalog.episode(EpisodeId(101));
        let fetcher = Arc::new(MockFetcher::with_pages([(
            request.clone(),
            testing::episode_page(&[(5001, "English", Some("HDTV"), Some("LOL"))]),
        )]));
        let client = CatalogClient::new(fetcher.clone(), catalog);

        let first = client.list_subtitles(EpisodeId(101)).unwrap();
        assert_eq!(first.len(), 1);

        fetcher.insert(
            request.clone(),
            testing::episode_page(&[(5001, "English", Some("HDTV"), Some("LOL")), (5002, "French", None, None)]),
        );
        let second = client.list_subtitles(EpisodeId(101)).unwrap();
        assert_eq!(second.iter().map(|entry| entry.id).collect::<Vec<_>>(), vec![SubtitleId(5001), SubtitleId(5002)]);
        assert_eq!(fetcher.requests(&request.url), 2);
    }

    #[test]
    fn test_fetch_failure_surfaces() {
        let catalog = Catalog::new(CATALOG);
        let fetcher = Arc::new(MockFetcher::default());
        fetcher.fail(catalog.episode(EpisodeId(1)), 500);
        let client = CatalogClient::new(fetcher, catalog);
        let err = client.list_subtitles(EpisodeId(1)).unwrap_err();
        assert_eq!(&*err, &ErrorKind::Fetch);
        assert!(err.is_retryable());
    }
}
