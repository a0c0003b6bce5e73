//! URLs of the catalog pages.

use tvsub_extract::models::{EpisodeId, SeriesId, SubtitleId};
use tvsub_fetch::Request;

/// Catalog location; builds the requests for every page the service reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    server_url: String,
}
impl Catalog {
    pub fn new(server_url: impl Into<String>) -> Self {
        let server_url = server_url.into().trim_end_matches('/').to_string();
        Self { server_url }
    }

    /// Series search; the name travels as the `q` form field.
    pub fn search(&self, name: &str) -> Request {
        Request::post(format!("{}/search.php", self.server_url)).param("q", name)
    }

    /// Listing of every episode in one season.
    pub fn season(&self, series: SeriesId, season: u32) -> Request {
        Request::get(format!("{}/tvshow-{}-{}.html", self.server_url, series, season))
    }

    /// Episode page listing the subtitle uploads.
    pub fn episode(&self, episode: EpisodeId) -> Request {
        Request::get(format!("{}/episode-{}.html", self.server_url, episode))
    }

    /// Download reference of one subtitle upload.
    pub fn download(&self, subtitle: SubtitleId) -> String {
        format!("{}/download-{}.html", self.server_url, subtitle)
    }
}
