//! Catalog page fixtures for tests.

pub(crate) const CATALOG: &str = "http://catalog.test";

/// Search results page listing `(series id, label)` pairs.
pub(crate) fn search_page(results: &[(u64, &str)]) -> String {
    let items: String = results
        .iter()
        .map(|(id, label)| format!(r#"<li><a href="/tvshow-{id}.html">{label}</a></li>"#))
        .collect();
    format!(r#"<html><body><div class="left"><ul>{items}</ul></div></body></html>"#)
}

/// Season listing with `(episode number, episode id)` rows plus a header row
/// and a filler row, as the catalog renders them.
pub(crate) fn season_page(season: u32, rows: &[(u32, u64)]) -> String {
    let rows: String = rows
        .iter()
        .map(|(number, id)| {
            format!(r#"<tr><td>{season}x{number:02}</td><td><a href="episode-{id}.html">Episode {number}</a></td></tr>"#)
        })
        .collect();
    format!(
        r#"<html><body><table id="table5"><tr><th>Episode</th><th>Title</th></tr>{rows}<tr><td colspan="2">&nbsp;</td></tr></table></body></html>"#
    )
}

/// Episode page with `(subtitle id, language label, rip, release)` uploads.
pub(crate) fn episode_page(uploads: &[(u64, &str, Option<&str>, Option<&str>)]) -> String {
    let links: String = uploads
        .iter()
        .map(|(id, label, rip, release)| {
            let rip = rip.map(|rip| format!(r#"<p alt="rip">{rip}</p>"#)).unwrap_or_default();
            let release = release.map(|release| format!(r#"<p alt="release">{release}</p>"#)).unwrap_or_default();
            format!(r#"<a href="/subtitle-{id}.html"><div class="subtitlen" title="flag {label}">{rip}{release}</div></a>"#)
        })
        .collect();
    format!(r#"<html><body><a href="/index.html">Home</a>{links}</body></html>"#)
}
