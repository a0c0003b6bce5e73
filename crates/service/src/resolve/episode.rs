use std::collections::BTreeMap;

use exn::ResultExt;
use tracing::instrument;
use tvsub_extract::models::{EpisodeId, SeriesId};

use super::{EpisodeKey, EpisodeLookup, Resolver};
use crate::error::{ErrorKind, Result};

impl Resolver {
    /// Returns the catalog identifier of one episode.
    ///
    /// A season page lists the whole season, so a cache miss fetches it once
    /// and caches every episode found on it (see [`discover_season`]), then
    /// answers from the cache. Resolving any other episode of the same season
    /// afterwards costs no request.
    ///
    /// [`discover_season`]: Self::discover_season
    ///
    /// # Errors
    /// - [`ErrorKind::NotFound`] if the episode is not on its season page
    ///   (not aired yet, numbering mismatch, layout change). Nothing is cached
    ///   for it.
    /// - [`ErrorKind::Fetch`] if the season page could not be fetched.
    #[instrument(skip(self), fields(series = %series))]
    pub fn resolve_episode(&mut self, series: SeriesId, season: u32, episode: u32) -> Result<EpisodeId> {
        let key = EpisodeKey { series, season, episode };
        if let Some(id) = self.cache.get::<EpisodeLookup>(&key) {
            return Ok(*id);
        }
        let discovered = self.discover_season(series, season)?;
        let written = self.cache.populate_many::<EpisodeLookup>(
            discovered.into_iter().map(|(episode, id)| (EpisodeKey { series, season, episode }, id)),
        );
        tracing::debug!(episodes = written, "Cached season listing");
        self.cache
            .retrieve::<EpisodeLookup>(&key)
            .or_raise(|| ErrorKind::NotFound(format!("series {series} season {season} episode {episode}")))
    }

    /// Fetches a season page and returns every episode number found on it
    /// with its identifier. The cache is left untouched.
    ///
    /// Rows without an episode marker are skipped. If the page lists the
    /// same episode number twice, the later row wins.
    #[instrument(skip(self), fields(series = %series))]
    pub fn discover_season(&self, series: SeriesId, season: u32) -> Result<BTreeMap<u32, EpisodeId>> {
        Ok(self.client.season(series, season)?.into_iter().map(|row| (row.number, row.id)).collect())
    }
}
