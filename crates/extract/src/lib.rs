//! HTML extraction for the TvSubtitles catalog.
//!
//! The catalog has no API; its pages are the contract. This crate turns the
//! three pages the resolver needs (series search results, a season listing
//! and an episode page) into typed models, and maps the catalog's language
//! labels onto canonical [`LanguageCode`](models::LanguageCode)s.
//!
//! Extraction never fails at the page level. A layout change shows up as
//! empty results, which the caller turns into a not-found outcome.

mod consts;
mod extract;
pub mod models;

pub use crate::extract::Extractor;
use crate::models::{EpisodeRow, SeriesHit, SubtitleEntry};
use tracing::instrument;

/// Series search results from raw page bytes.
#[instrument(skip(html), fields(html_size = html.as_ref().len()))]
pub fn series_hits(html: impl AsRef<[u8]>) -> Vec<SeriesHit> {
    Extractor::from_bytes(html).series_hits()
}

/// Episode rows of a season listing from raw page bytes.
#[instrument(skip(html), fields(html_size = html.as_ref().len()))]
pub fn episodes(html: impl AsRef<[u8]>) -> Vec<EpisodeRow> {
    Extractor::from_bytes(html).episodes()
}

/// Subtitle uploads of an episode page from raw page bytes.
#[instrument(skip(html), fields(html_size = html.as_ref().len()))]
pub fn subtitles(html: impl AsRef<[u8]>) -> Vec<SubtitleEntry> {
    Extractor::from_bytes(html).subtitles()
}
