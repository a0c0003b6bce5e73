use super::SeriesId;

/// A single entry of the catalog's series search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesHit {
    /// Display name, without the trailing year range (e.g. "Foo Show").
    pub name: String,
    pub id: SeriesId,
}
