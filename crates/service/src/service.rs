//! The TvSubtitles service as seen by the host.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::instrument;
use tvsub_config::Config;
use tvsub_extract::models::{EpisodeId, LanguageCode, SubtitleEntry, catalog_languages, normalize};
use tvsub_fetch::FetcherHandle;

use crate::client::CatalogClient;
use crate::download::{Downloader, ZipDownloader};
use crate::endpoints::Catalog;
use crate::error::{ErrorKind, Result};
use crate::models::{ResultSubtitle, Video};
use crate::naming::{DefaultPathBuilder, SubtitlePathBuilder, guess_keywords, split_keywords};
use crate::resolve::Resolver;

/// A subtitle source the host can query.
pub trait Service {
    /// Lowercase identifier, recorded on every result.
    fn name(&self) -> &str;

    /// Languages the service can ever return.
    fn languages(&self) -> &[LanguageCode];

    /// Fails with [`ErrorKind::InvalidVideo`] when the service cannot search
    /// for `video` in any of `languages`.
    fn check_validity(&self, video: &Video, languages: &[String]) -> Result<()>;

    /// Subtitles for `video` in `languages`; empty for unsupported videos.
    fn list(&mut self, video: &Video, languages: &[String]) -> Result<Vec<ResultSubtitle>>;

    fn download(&self, subtitle: &ResultSubtitle) -> Result<()>;
}

/// Episode subtitles from the TvSubtitles catalog.
///
/// Series and episode lookups are cached for the lifetime of the value;
/// subtitle listings are always fetched live. Queries take `&mut self`, so a
/// service shared between threads goes behind a `Mutex`.
///
/// # Examples
///
/// ```no_run
/// use tvsub_fetch::FetcherHandle;
/// use tvsub_service::{Catalog, EpisodeVideo, Service, TvSubtitles, Video, error::Result};
///
/// fn fetch_english(fetcher: FetcherHandle) -> Result<()> {
///     let mut service = TvSubtitles::new(fetcher, Catalog::new("http://www.tvsubtitles.net"));
///     let video: Video = EpisodeVideo::new("Foo Show", 1, 2).with_path("/tv/Foo.Show.S01E02.mkv").into();
///     for subtitle in service.list(&video, &["en".to_string()])? {
///         service.download(&subtitle)?;
///     }
///     Ok(())
/// }
/// ```
pub struct TvSubtitles {
    resolver: Resolver,
    paths: Box<dyn SubtitlePathBuilder>,
    downloader: Box<dyn Downloader>,
    multi: bool,
    languages: Vec<LanguageCode>,
}

impl TvSubtitles {
    pub const NAME: &'static str = "tvsubtitles";

    pub fn new(fetcher: FetcherHandle, catalog: Catalog) -> Self {
        Self {
            resolver: Resolver::new(CatalogClient::new(fetcher.clone(), catalog)),
            paths: Box::new(DefaultPathBuilder),
            downloader: Box::new(ZipDownloader::new(fetcher)),
            multi: false,
            languages: catalog_languages(),
        }
    }

    pub fn from_config(fetcher: FetcherHandle, config: &Config) -> Self {
        Self::new(fetcher, Catalog::new(config.catalog.server_url.as_str())).with_multi(config.subtitles.multi)
    }

    /// Name subtitle files after their language as well as the video.
    pub fn with_multi(mut self, multi: bool) -> Self {
        self.multi = multi;
        self
    }

    pub fn with_path_builder(mut self, paths: impl SubtitlePathBuilder + 'static) -> Self {
        self.paths = Box::new(paths);
        self
    }

    pub fn with_downloader(mut self, downloader: impl Downloader + 'static) -> Self {
        self.downloader = Box::new(downloader);
        self
    }

    pub fn resolver(&self) -> &Resolver {
        &self.resolver
    }

    /// Subtitles of one episode in the requested languages, in the order the
    /// catalog lists them.
    ///
    /// An unknown series or an episode missing from its season page yields
    /// an empty list. Requested languages that are not language identifiers
    /// are ignored.
    ///
    /// # Errors
    /// [`ErrorKind::Fetch`] if a catalog page could not be fetched.
    #[instrument(skip(self, filepath, languages, keywords), fields(keyword_count = keywords.len()))]
    pub fn query<L: AsRef<str>>(
        &mut self,
        filepath: &Path,
        languages: &[L],
        keywords: &BTreeSet<String>,
        series: &str,
        season: u32,
        episode: u32,
    ) -> Result<Vec<ResultSubtitle>> {
        let episode_id = match self.resolve(series, season, episode) {
            Ok(id) => id,
            Err(err) if err.is_not_found() => {
                tracing::debug!(error = %*err, "No catalog episode, nothing to list");
                return Ok(Vec::new());
            },
            Err(err) => return Err(err),
        };
        let entries = self.resolver.list_subtitles(episode_id)?;
        let requested = requested_languages(languages);
        Ok(self.select_subtitles(filepath, &requested, &entries))
    }

    fn resolve(&mut self, series: &str, season: u32, episode: u32) -> Result<EpisodeId> {
        let series_id = self.resolver.resolve_series(series)?;
        self.resolver.resolve_episode(series_id, season, episode)
    }

    /// Turns the entries whose language is requested into results, keeping
    /// page order.
    fn select_subtitles(
        &self,
        filepath: &Path,
        requested: &BTreeSet<LanguageCode>,
        entries: &[SubtitleEntry],
    ) -> Vec<ResultSubtitle> {
        let catalog = self.resolver.client().catalog();
        entries
            .iter()
            .filter_map(|entry| {
                let Some(language) = normalize(&entry.language) else {
                    tracing::debug!(label = %entry.language, id = %entry.id, "Unknown language label");
                    return None;
                };
                if !requested.contains(&language) {
                    tracing::trace!(%language, id = %entry.id, "Language not requested");
                    return None;
                }
                let descriptors: Vec<&str> = [entry.rip.as_deref(), entry.release.as_deref()].into_iter().flatten().collect();
                Some(ResultSubtitle {
                    path: self.paths.build(filepath, language, self.multi),
                    language,
                    service: Self::NAME.to_string(),
                    link: catalog.download(entry.id),
                    keywords: split_keywords(&descriptors.join(" ")),
                })
            })
            .collect()
    }
}

impl Service for TvSubtitles {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn languages(&self) -> &[LanguageCode] {
        &self.languages
    }

    fn check_validity(&self, video: &Video, languages: &[String]) -> Result<()> {
        let Video::Episode(episode) = video else {
            exn::bail!(ErrorKind::InvalidVideo("not an episode".to_string()));
        };
        if episode.series.trim().is_empty() {
            exn::bail!(ErrorKind::InvalidVideo("missing series name".to_string()));
        }
        if episode.episode == 0 {
            exn::bail!(ErrorKind::InvalidVideo("missing episode number".to_string()));
        }
        if requested_languages(languages).is_disjoint(&self.languages.iter().copied().collect()) {
            exn::bail!(ErrorKind::InvalidVideo(format!("no supported language in {languages:?}")));
        }
        Ok(())
    }

    #[instrument(skip(self, video))]
    fn list(&mut self, video: &Video, languages: &[String]) -> Result<Vec<ResultSubtitle>> {
        if let Err(err) = self.check_validity(video, languages) {
            tracing::debug!(error = %*err, "Skipping video");
            return Ok(Vec::new());
        }
        let Video::Episode(episode) = video else {
            return Ok(Vec::new());
        };
        self.query(
            &episode.filepath(),
            languages,
            &guess_keywords(episode),
            &episode.series,
            episode.season,
            episode.episode,
        )
    }

    #[instrument(skip(self, subtitle), fields(link = %subtitle.link))]
    fn download(&self, subtitle: &ResultSubtitle) -> Result<()> {
        self.downloader.download(&subtitle.link, &subtitle.path)
    }
}

impl std::fmt::Debug for TvSubtitles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TvSubtitles")
            .field("resolver", &self.resolver)
            .field("multi", &self.multi)
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}

/// Requested languages may be codes, English names or catalog labels.
fn requested_languages<L: AsRef<str>>(languages: &[L]) -> BTreeSet<LanguageCode> {
    languages.iter().filter_map(|language| normalize(language.as_ref())).collect()
}
