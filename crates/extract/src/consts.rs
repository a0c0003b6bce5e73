use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

/// Links to subtitle detail pages all start with this path.
pub(crate) const SUBTITLE_LINK_PREFIX: &str = "/subtitle";

// Search results page.
selector!(SEARCH_BLOCK_SELECTOR, "div.left");
selector!(SEARCH_RESULT_SELECTOR, "li a[href]");
regex!(SERIES_URL_REGEX, r"tvshow-([0-9]+)\.html");
regex!(SERIES_NAME_REGEX, r"^(.*) \(");

// Season listing page.
selector!(SEASON_ROW_SELECTOR, "table#table5 tr");
selector!(CELL_SELECTOR, "td");
selector!(ANCHOR_SELECTOR, "a[href]");
regex!(EPISODE_NUMBER_REGEX, r"x([0-9]+)");
regex!(EPISODE_URL_REGEX, r"episode-([0-9]+)");

// Episode detail page.
selector!(LINK_SELECTOR, "a[href]");
selector!(TITLED_DIV_SELECTOR, "div[title]");
selector!(RIP_SELECTOR, "p[alt='rip']");
selector!(RELEASE_SELECTOR, "p[alt='release']");
regex!(SUBTITLE_ID_REGEX, r"([0-9]+)");
