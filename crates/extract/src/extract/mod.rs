//! Extraction of catalog data from the three page types the resolver reads.
//!
//! Every per-element parse is a `try_*` function returning an [`Option`]; the
//! page-level functions decide to skip on `None` (logged at debug level) so
//! that one malformed row or link never aborts the rest of the page.

mod episode;
mod search;
mod season;

use regex::Regex;
use scraper::Html;
use std::convert::Infallible;
use std::str::FromStr;
use tracing::instrument;

use crate::models::{EpisodeRow, SeriesHit, SubtitleEntry};

/// A parsed catalog page.
///
/// The same type serves all page kinds; calling the extraction method for
/// the wrong kind of page yields an empty result rather than an error, as
/// does a page whose layout has changed.
#[derive(Debug)]
pub struct Extractor {
    document: Html,
}
impl Extractor {
    pub fn from_document(document: Html) -> Self {
        Self { document }
    }

    pub fn from_html(html: &str) -> Self {
        Self::from_document(Html::parse_document(html))
    }

    /// Accepts raw response bytes; invalid UTF-8 sequences are replaced with
    /// U+FFFD before parsing.
    pub fn from_bytes(html: impl AsRef<[u8]>) -> Self {
        Self::from_html(&String::from_utf8_lossy(html.as_ref()))
    }

    /// Series search results, in page order.
    #[instrument(level = "trace", skip(self))]
    pub fn series_hits(&self) -> Vec<SeriesHit> {
        search::series_hits(&self.document)
    }

    /// Every well-formed episode row of a season listing, in page order.
    #[instrument(level = "trace", skip(self))]
    pub fn episodes(&self) -> Vec<EpisodeRow> {
        season::episodes(&self.document)
    }

    /// Every subtitle upload linked from an episode page, in page order.
    #[instrument(level = "trace", skip(self))]
    pub fn subtitles(&self) -> Vec<SubtitleEntry> {
        episode::subtitles(&self.document)
    }
}
impl FromStr for Extractor {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_html(s))
    }
}
impl From<Html> for Extractor {
    fn from(document: Html) -> Self {
        Self::from_document(document)
    }
}

/// Returns the first capture group of `regex` in `haystack`.
pub(crate) fn try_capture<'h>(regex: &Regex, haystack: &'h str) -> Option<&'h str> {
    match regex.captures(haystack).and_then(|captures| captures.get(1)) {
        Some(m) => Some(m.as_str()),
        None => {
            tracing::debug!(pattern = regex.as_str(), haystack, "Could not match pattern");
            None
        },
    }
}

/// Returns the first capture group of `regex` in `haystack`, parsed as a number.
pub(crate) fn try_capture_number<T: FromStr>(regex: &Regex, haystack: &str) -> Option<T> {
    let digits = try_capture(regex, haystack)?;
    match digits.parse::<T>() {
        Ok(number) => Some(number),
        Err(_) => {
            tracing::debug!(value = digits, "Captured value is not a valid number");
            None
        },
    }
}

/// Collapses the text content of an element into a trimmed string.
pub(crate) fn text_of(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts;
    use rstest::rstest;

    #[rstest]
    #[case("1x01", Some(1))]
    #[case("2x13 ", Some(13))]
    #[case("Season 2", None)]
    #[case("x99999999999999999999", None)]
    fn test_try_capture_number(#[case] haystack: &str, #[case] expected: Option<u32>) {
        assert_eq!(try_capture_number::<u32>(&consts::EPISODE_NUMBER_REGEX, haystack), expected);
    }

    #[test]
    fn test_from_bytes_tolerates_invalid_utf8() {
        let mut html = b"<div class=\"left\"><ul><li><a href=\"tvshow-7.html\">Caf".to_vec();
        html.push(0xE9);
        html.extend_from_slice(b" (2001)</a></li></ul></div>");
        let hits = Extractor::from_bytes(html).series_hits();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Caf\u{FFFD}");
    }

    #[test]
    fn test_wrong_page_kind_is_empty() {
        let extractor: Extractor = "<html><body><p>Nothing here</p></body></html>".parse().unwrap();
        assert!(extractor.series_hits().is_empty());
        assert!(extractor.episodes().is_empty());
        assert!(extractor.subtitles().is_empty());
    }
}
