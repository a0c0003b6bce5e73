use scraper::{ElementRef, Html};

use super::{text_of, try_capture, try_capture_number};
use crate::consts;
use crate::models::{SeriesHit, SeriesId};

/// Results are read from the first `div.left` block only; later blocks are
/// not part of the result list.
pub(super) fn series_hits(document: &Html) -> Vec<SeriesHit> {
    let Some(block) = document.select(&consts::SEARCH_BLOCK_SELECTOR).next() else {
        tracing::debug!("Search page has no result block");
        return Vec::new();
    };
    block.select(&consts::SEARCH_RESULT_SELECTOR).filter_map(try_series_hit).collect()
}

/// Parses one search result link, e.g. `<a href="/tvshow-42.html">Foo Show (2005-2010)</a>`.
fn try_series_hit(anchor: ElementRef<'_>) -> Option<SeriesHit> {
    let href = anchor.value().attr("href")?;
    let id = try_capture_number::<u64>(&consts::SERIES_URL_REGEX, href)?;
    let text = text_of(anchor);
    // Shows without a year range in the label are still valid results.
    let name = try_capture(&consts::SERIES_NAME_REGEX, &text).map(str::to_string).unwrap_or_else(|| text.clone());
    Some(SeriesHit { name, id: SeriesId(id) })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
        <div class="left">
            <ul>
                <li><a href="/tvshow-42.html">Foo Show (2005-2010)</a></li>
                <li><a href="/tvshow-7.html">Foo Show: The Return (2015)</a></li>
                <li><a href="/somewhere-else.html">Not a show</a></li>
                <li><a>No link at all</a></li>
                <li><a href="/tvshow-99.html">Untitled</a></li>
            </ul>
        </div>
        <div class="right"><ul><li><a href="/tvshow-1.html">Sidebar (2000)</a></li></ul></div>
        </body></html>
    "#;

    #[test]
    fn test_series_hits_in_page_order() {
        let hits = series_hits(&Html::parse_document(SEARCH_PAGE));
        assert_eq!(
            hits,
            vec![
                SeriesHit { name: "Foo Show".to_string(), id: SeriesId(42) },
                SeriesHit { name: "Foo Show: The Return".to_string(), id: SeriesId(7) },
                SeriesHit { name: "Untitled".to_string(), id: SeriesId(99) },
            ]
        );
    }

    #[test]
    fn test_only_first_result_block() {
        let html = r#"
            <div class="left"><ul><li><a href="/tvshow-42.html">Foo Show (2005)</a></li></ul></div>
            <div class="left"><ul><li><a href="/tvshow-7.html">Popular Show (2001)</a></li></ul></div>
        "#;
        let hits = series_hits(&Html::parse_document(html));
        assert_eq!(hits, vec![SeriesHit { name: "Foo Show".to_string(), id: SeriesId(42) }]);
    }

    #[test]
    fn test_no_results() {
        let html = r#"<div class="left"><p>Nothing found</p></div>"#;
        assert!(series_hits(&Html::parse_document(html)).is_empty());
    }
}
