//! Fetching subtitle archives onto disk.

use std::io::Cursor;
use std::path::Path;

use exn::ResultExt;
use tempfile::NamedTempFile;
use tracing::instrument;
use tvsub_fetch::{FetcherHandle, Request};
use zip::ZipArchive;

use crate::error::{ErrorKind, Result};

/// Archive entries with these extensions are taken as the subtitle.
const SUBTITLE_EXTENSIONS: &[&str] = &["srt", "sub", "ass", "ssa", "txt"];

/// Retrieves the subtitle behind a download reference and writes it to disk.
pub trait Downloader: Send + Sync {
    fn download(&self, link: &str, target: &Path) -> Result<()>;
}

/// The catalog serves every subtitle as a zip archive holding one file.
#[derive(Clone)]
pub struct ZipDownloader {
    fetcher: FetcherHandle,
}
impl ZipDownloader {
    pub fn new(fetcher: FetcherHandle) -> Self {
        Self { fetcher }
    }
}

impl Downloader for ZipDownloader {
    /// Writes the first subtitle-looking entry of the archive to `target`.
    ///
    /// The entry is staged in a temporary file next to `target` and renamed
    /// into place, so a failed extraction leaves `target` untouched.
    ///
    /// # Errors
    /// [`ErrorKind::Download`] if the archive cannot be fetched or read, holds
    /// no subtitle entry, or `target` cannot be written.
    #[instrument(skip(self), fields(target = %target.display()))]
    fn download(&self, link: &str, target: &Path) -> Result<()> {
        let body = self.fetcher.fetch(&Request::get(link)).or_raise(|| ErrorKind::Download)?;
        let mut archive = ZipArchive::new(Cursor::new(body)).or_raise(|| ErrorKind::Download)?;
        for index in 0..archive.len() {
            let mut entry = archive.by_index(index).or_raise(|| ErrorKind::Download)?;
            if entry.is_dir() || !is_subtitle(entry.name()) {
                tracing::trace!(entry = entry.name(), "Skipping archive entry");
                continue;
            }
            let mut staged = NamedTempFile::new_in(parent_dir(target)).or_raise(|| ErrorKind::Download)?;
            let written = std::io::copy(&mut entry, &mut staged).or_raise(|| ErrorKind::Download)?;
            staged.persist(target).or_raise(|| ErrorKind::Download)?;
            tracing::debug!(entry = entry.name(), bytes = written, "Extracted subtitle");
            return Ok(());
        }
        tracing::debug!(entries = archive.len(), "Archive holds no subtitle");
        exn::bail!(ErrorKind::Download)
    }
}

impl std::fmt::Debug for ZipDownloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZipDownloader").field("fetcher", &self.fetcher.name()).finish()
    }
}

fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn is_subtitle(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUBTITLE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}
