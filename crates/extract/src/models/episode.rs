use super::EpisodeId;

/// A well-formed row of a season listing: the episode number within the
/// season and the catalog's identifier for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpisodeRow {
    pub number: u32,
    pub id: EpisodeId,
}
