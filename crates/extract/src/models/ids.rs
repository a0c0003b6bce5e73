//! Catalog-assigned identifiers.
//!
//! The catalog numbers series, episodes and subtitles independently, so each
//! gets its own newtype to stop an episode ID being passed where a series ID
//! is expected.

use derive_more::{Display, From};

/// Identifier of a series (`tvshow-{id}.html`).
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(pub u64);

/// Identifier of a single episode (`episode-{id}.html`).
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EpisodeId(pub u64);

/// Identifier of an uploaded subtitle (`download-{id}.html`).
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubtitleId(pub u64);
