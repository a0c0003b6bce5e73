//! What the host hands in and what it gets back.

use std::path::PathBuf;

use tvsub_extract::models::LanguageCode;

/// A video the host wants subtitles for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Video {
    Episode(EpisodeVideo),
    Movie(MovieVideo),
}
impl From<EpisodeVideo> for Video {
    fn from(episode: EpisodeVideo) -> Self {
        Self::Episode(episode)
    }
}
impl From<MovieVideo> for Video {
    fn from(movie: MovieVideo) -> Self {
        Self::Movie(movie)
    }
}

/// An episode of a television series, as identified by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeVideo {
    /// Local video file.
    pub path: Option<PathBuf>,
    /// Release name, used in place of the path for videos not on disk.
    pub release: Option<String>,
    pub series: String,
    pub season: u32,
    pub episode: u32,
}
impl EpisodeVideo {
    pub fn new(series: impl Into<String>, season: u32, episode: u32) -> Self {
        Self {
            path: None,
            release: None,
            series: series.into(),
            season,
            episode,
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_release(mut self, release: impl Into<String>) -> Self {
        self.release = Some(release.into());
        self
    }

    /// Base for subtitle file names: the video path, else the release name,
    /// else a name derived from the episode identity.
    pub fn filepath(&self) -> PathBuf {
        match (&self.path, &self.release) {
            (Some(path), _) => path.clone(),
            (None, Some(release)) => PathBuf::from(release),
            (None, None) => PathBuf::from(format!("{} S{:02}E{:02}", self.series, self.season, self.episode)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieVideo {
    pub path: Option<PathBuf>,
    pub title: String,
    pub year: Option<u16>,
}

/// A downloadable subtitle matching one of the requested languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSubtitle {
    /// Where the subtitle should be written.
    pub path: PathBuf,
    pub language: LanguageCode,
    /// Name of the service that found it.
    pub service: String,
    /// Download reference on the catalog.
    pub link: String,
    /// Rip and release descriptors, split into keywords.
    pub keywords: Vec<String>,
}
