use scraper::{ElementRef, Html};

use super::{text_of, try_capture_number};
use crate::consts;
use crate::models::{EpisodeId, EpisodeRow};

pub(super) fn episodes(document: &Html) -> Vec<EpisodeRow> {
    let mut rows = Vec::new();
    for row in document.select(&consts::SEASON_ROW_SELECTOR) {
        match try_episode_row(row) {
            Some(episode) => rows.push(episode),
            None => tracing::debug!(row = %text_of(row), "Skipping season table row without an episode"),
        }
    }
    rows
}

/// Parses one row of `table#table5`. The first cell holds the `SxEE` marker,
/// the second links to the episode page. Header and filler rows return `None`.
fn try_episode_row(row: ElementRef<'_>) -> Option<EpisodeRow> {
    let mut cells = row.select(&consts::CELL_SELECTOR);
    let marker = text_of(cells.next()?);
    let number = try_capture_number::<u32>(&consts::EPISODE_NUMBER_REGEX, &marker)?;
    let href = cells.next()?.select(&consts::ANCHOR_SELECTOR).next()?.value().attr("href")?;
    let id = try_capture_number::<u64>(&consts::EPISODE_URL_REGEX, href)?;
    Some(EpisodeRow { number, id: EpisodeId(id) })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEASON_PAGE: &str = r#"
        <html><body>
        <table id="table5">
            <tr><th>Episode</th><th>Title</th></tr>
            <tr><td>1x01</td><td><a href="episode-100.html">Pilot</a></td><td>3</td></tr>
            <tr><td>1x02</td><td><a href="episode-101.html">Second</a></td><td>1</td></tr>
            <tr><td colspan="3">Specials</td></tr>
            <tr><td>1x03</td><td>No link yet</td></tr>
            <tr><td>1x04</td><td><a href="episode-103.html">Fourth</a></td></tr>
        </table>
        <table id="other"><tr><td>1x05</td><td><a href="episode-999.html">Wrong table</a></td></tr></table>
        </body></html>
    "#;

    #[test]
    fn test_episodes_skip_malformed_rows() {
        let rows = episodes(&Html::parse_document(SEASON_PAGE));
        assert_eq!(
            rows,
            vec![
                EpisodeRow { number: 1, id: EpisodeId(100) },
                EpisodeRow { number: 2, id: EpisodeId(101) },
                EpisodeRow { number: 4, id: EpisodeId(103) },
            ]
        );
    }

    #[test]
    fn test_missing_table() {
        assert!(episodes(&Html::parse_document("<p>Season not found</p>")).is_empty());
    }
}
