use scraper::{ElementRef, Html, Selector};

use super::{text_of, try_capture_number};
use crate::consts;
use crate::models::{SubtitleEntry, SubtitleId};

pub(super) fn subtitles(document: &Html) -> Vec<SubtitleEntry> {
    let mut entries = Vec::new();
    for link in document.select(&consts::LINK_SELECTOR) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.starts_with(consts::SUBTITLE_LINK_PREFIX) {
            continue;
        }
        match try_subtitle_entry(link, href) {
            Some(entry) => entries.push(entry),
            None => tracing::debug!(href, "Skipping subtitle link that could not be parsed"),
        }
    }
    entries
}

/// Parses one `/subtitle-{id}.html` link. The language is the second word of
/// the nested flag's `title` attribute (e.g. `title="flag English"`).
fn try_subtitle_entry(link: ElementRef<'_>, href: &str) -> Option<SubtitleEntry> {
    let id = try_capture_number::<u64>(&consts::SUBTITLE_ID_REGEX, href)?;
    let title = link.select(&consts::TITLED_DIV_SELECTOR).next()?.value().attr("title")?;
    let language = title.split_whitespace().nth(1)?.to_string();
    Some(SubtitleEntry {
        id: SubtitleId(id),
        language,
        rip: descriptor(link, &consts::RIP_SELECTOR),
        release: descriptor(link, &consts::RELEASE_SELECTOR),
    })
}

fn descriptor(link: ElementRef<'_>, selector: &Selector) -> Option<String> {
    link.select(selector).map(text_of).find(|text| !text.is_empty())
}
