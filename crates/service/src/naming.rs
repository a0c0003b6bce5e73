//! Keyword and file naming helpers for subtitle results.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tvsub_extract::models::LanguageCode;

use crate::models::EpisodeVideo;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Extensions treated as the video's own, replaced rather than kept.
const VIDEO_EXTENSIONS: &[&str] = &[
    "3g2", "3gp", "asf", "avi", "divx", "flv", "m2ts", "m4v", "mkv", "mov", "mp4", "mpeg", "mpg", "ogm", "ogv", "ts",
    "vob", "webm", "wmv",
];

/// Splits free text on non-word characters into lowercase keywords.
///
/// Keeps first-seen order and drops duplicates and empty pieces.
pub fn split_keywords(text: &str) -> Vec<String> {
    let mut seen = BTreeSet::new();
    NON_WORD
        .split(text)
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .filter(|word| seen.insert(word.clone()))
        .collect()
}

/// Keywords describing a video: its release name, or its file stem.
pub fn guess_keywords(video: &EpisodeVideo) -> BTreeSet<String> {
    let source = match (&video.release, &video.path) {
        (Some(release), _) => release.clone(),
        (None, Some(path)) => path.file_stem().map(|stem| stem.to_string_lossy().into_owned()).unwrap_or_default(),
        (None, None) => String::new(),
    };
    split_keywords(&source).into_iter().collect()
}

/// Decides where a subtitle for a video gets written.
pub trait SubtitlePathBuilder: Send + Sync {
    /// `multi` asks for a language-qualified name so that several subtitles
    /// can sit next to the same video.
    fn build(&self, video: &Path, language: LanguageCode, multi: bool) -> PathBuf;
}

/// `<video>.srt`, or `<video>.<lang>.srt` in multi mode.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPathBuilder;
impl SubtitlePathBuilder for DefaultPathBuilder {
    fn build(&self, video: &Path, language: LanguageCode, multi: bool) -> PathBuf {
        let has_video_extension = video
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| VIDEO_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
        let base = if has_video_extension { video.with_extension("") } else { video.to_path_buf() };
        let suffix = if multi { format!(".{language}.srt") } else { ".srt".to_string() };
        let mut name = base.into_os_string();
        name.push(suffix);
        PathBuf::from(name)
    }
}
