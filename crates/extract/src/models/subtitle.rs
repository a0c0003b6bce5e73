use super::SubtitleId;

/// A subtitle upload listed on an episode page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub id: SubtitleId,
    /// Raw language label in catalog vocabulary (e.g. "English", "Brazilian").
    pub language: String,
    /// Source encode the subtitle was synced to (e.g. "HDTV").
    pub rip: Option<String>,
    /// Release group the subtitle was synced to (e.g. "LOL").
    pub release: Option<String>,
}
