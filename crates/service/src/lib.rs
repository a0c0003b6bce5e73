//! Episode subtitle resolution against the TvSubtitles catalog.
//!
//! Finding the subtitles of an episode takes three catalog pages:
//!
//! 1. the series search, giving a [`SeriesId`](tvsub_extract::models::SeriesId),
//! 2. the season listing, giving the [`EpisodeId`](tvsub_extract::models::EpisodeId)
//!    of every episode in that season at once,
//! 3. the episode page, listing the subtitle uploads.
//!
//! [`Resolver`] caches the first two for the life of the process; the third
//! is fetched on every query. [`TvSubtitles`] puts them together, filters by
//! language and produces [`ResultSubtitle`]s the host can download.

mod client;
pub mod download;
mod endpoints;
pub mod error;
pub mod models;
pub mod naming;
mod resolve;
mod service;
#[cfg(test)]
mod testing;

pub use crate::client::CatalogClient;
pub use crate::endpoints::Catalog;
pub use crate::models::{EpisodeVideo, MovieVideo, ResultSubtitle, Video};
pub use crate::resolve::{EpisodeKey, EpisodeLookup, Resolver, SeriesLookup};
pub use crate::service::{Service, TvSubtitles};
