//! Cached translation of human-meaningful keys into catalog identifiers.
//!
//! - [`Resolver::resolve_series`]: series name to [`SeriesId`]
//! - [`Resolver::resolve_episode`]: (series, season, episode) to [`EpisodeId`]
//!
//! Both answers are stored in the resolver's [`LookupCache`] for the lifetime
//! of the resolver. Subtitle listings are deliberately not resolved here;
//! see [`CatalogClient::list_subtitles`].

mod episode;
mod series;

use tvsub_cache::{LookupCache, Method};
use tvsub_extract::models::{EpisodeId, SeriesId, SubtitleEntry};

use crate::client::CatalogClient;
use crate::error::Result;

/// Identity of one episode in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeKey {
    pub series: SeriesId,
    pub season: u32,
    pub episode: u32,
}

/// Cache scope of [`Resolver::resolve_series`], keyed by case-folded name.
pub struct SeriesLookup;
impl Method for SeriesLookup {
    const NAME: &'static str = "resolve_series";
    type Args = String;
    type Value = SeriesId;
}

/// Cache scope of [`Resolver::resolve_episode`].
pub struct EpisodeLookup;
impl Method for EpisodeLookup {
    const NAME: &'static str = "resolve_episode";
    type Args = EpisodeKey;
    type Value = EpisodeId;
}

/// Owns the lookup cache; the only state shared between queries.
#[derive(Debug)]
pub struct Resolver {
    client: CatalogClient,
    cache: LookupCache,
}
impl Resolver {
    pub fn new(client: CatalogClient) -> Self {
        Self {
            client,
            cache: LookupCache::new(),
        }
    }

    pub fn client(&self) -> &CatalogClient {
        &self.client
    }

    pub fn cache(&self) -> &LookupCache {
        &self.cache
    }

    /// Lists the subtitle uploads of an episode, always live.
    pub fn list_subtitles(&self, episode: EpisodeId) -> Result<Vec<SubtitleEntry>> {
        self.client.list_subtitles(episode)
    }
}
