//! Catalog language labels to canonical language codes.
//!
//! The catalog labels subtitles with free-text language names in its own
//! vocabulary ("English (US)", "Español (España)", "Brazilian"). These are
//! mapped to a [`LanguageCode`], which is the ISO 639-1 code of the language
//! (plus `pb` for Brazilian Portuguese, which the catalog lists separately).
//!
//! Lookup order for a catalog label:
//! 1. the override table, for labels whose family would otherwise map to
//!    the wrong code (Brazilian Portuguese is not Portuguese),
//! 2. the general catalog table,
//! 3. the label itself, read as a language code or English language name.

use std::collections::HashMap;
use std::sync::LazyLock;

use derive_more::Display;

/// Canonical language identifier (ISO 639-1, lowercase).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LanguageCode(&'static str);
impl LanguageCode {
    /// Reads a language identifier: ISO 639-1, ISO 639-2 (bibliographic or
    /// terminologic) or the English name, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use tvsub_extract::models::LanguageCode;
    /// assert_eq!(LanguageCode::parse("English").map(|c| c.as_str()), Some("en"));
    /// assert_eq!(LanguageCode::parse("fre").map(|c| c.as_str()), Some("fr"));
    /// assert_eq!(LanguageCode::parse("Klingon"), None);
    /// ```
    pub fn parse(identifier: &str) -> Option<Self> {
        INDEX.get(identifier.trim().to_lowercase().as_str()).map(|info| Self(info.alpha2))
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }

    /// English name of the language.
    pub fn name(&self) -> &'static str {
        INDEX.get(self.0).map(|info| info.name).unwrap_or(self.0)
    }
}
impl AsRef<str> for LanguageCode {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Maps a catalog language label to its canonical code.
///
/// Returns `None` when the label matches nothing; that is not an error, the
/// subtitle simply never matches a requested language.
///
/// # Examples
///
/// ```
/// use tvsub_extract::models::normalize;
/// assert_eq!(normalize("English (US)").map(|c| c.as_str()), Some("en"));
/// assert_eq!(normalize("Brazilian").map(|c| c.as_str()), Some("pb"));
/// assert_eq!(normalize("Portuguese").map(|c| c.as_str()), Some("pt"));
/// ```
pub fn normalize(label: &str) -> Option<LanguageCode> {
    let label = label.trim();
    OVERRIDES
        .get(label)
        .or_else(|| GENERAL.get(label))
        .and_then(|code| LanguageCode::parse(code))
        .or_else(|| LanguageCode::parse(label))
}

/// Every code the catalog tables can produce, sorted and deduplicated.
pub fn catalog_languages() -> Vec<LanguageCode> {
    let mut codes: Vec<_> =
        OVERRIDES.values().chain(GENERAL.values()).filter_map(|code| LanguageCode::parse(code)).collect();
    codes.sort();
    codes.dedup();
    codes
}

/// Labels whose code differs from the one their language family maps to.
static OVERRIDES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| HashMap::from([("Brazilian", "pb"), ("Portuguese(br)", "pb"), ("Greek", "el")]));

/// Labels used by the catalog's language flags.
static GENERAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("English (US)", "en"),
        ("English (UK)", "en"),
        ("English", "en"),
        ("French", "fr"),
        ("Portuguese", "pt"),
        ("Español (Latinoamérica)", "es"),
        ("Español (España)", "es"),
        ("Español", "es"),
        ("Italian", "it"),
        ("Català", "ca"),
    ])
});

struct LanguageInfo {
    alpha2: &'static str,
    alpha3b: &'static str,
    alpha3t: &'static str,
    name: &'static str,
}

macro_rules! languages {
    ($(($alpha2:literal, $alpha3b:literal, $alpha3t:literal, $name:literal)),* $(,)?) => {
        &[$(LanguageInfo { alpha2: $alpha2, alpha3b: $alpha3b, alpha3t: $alpha3t, name: $name }),*]
    };
}

static LANGUAGES: &[LanguageInfo] = languages![
    ("sq", "alb", "sqi", "Albanian"),
    ("ar", "ara", "ara", "Arabic"),
    ("hy", "arm", "hye", "Armenian"),
    ("eu", "baq", "eus", "Basque"),
    ("bs", "bos", "bos", "Bosnian"),
    ("pb", "pob", "pob", "Brazilian Portuguese"),
    ("bg", "bul", "bul", "Bulgarian"),
    ("ca", "cat", "cat", "Catalan"),
    ("zh", "chi", "zho", "Chinese"),
    ("hr", "hrv", "hrv", "Croatian"),
    ("cs", "cze", "ces", "Czech"),
    ("da", "dan", "dan", "Danish"),
    ("nl", "dut", "nld", "Dutch"),
    ("en", "eng", "eng", "English"),
    ("et", "est", "est", "Estonian"),
    ("fi", "fin", "fin", "Finnish"),
    ("fr", "fre", "fra", "French"),
    ("gl", "glg", "glg", "Galician"),
    ("ka", "geo", "kat", "Georgian"),
    ("de", "ger", "deu", "German"),
    ("el", "gre", "ell", "Greek"),
    ("he", "heb", "heb", "Hebrew"),
    ("hi", "hin", "hin", "Hindi"),
    ("hu", "hun", "hun", "Hungarian"),
    ("is", "ice", "isl", "Icelandic"),
    ("id", "ind", "ind", "Indonesian"),
    ("it", "ita", "ita", "Italian"),
    ("ja", "jpn", "jpn", "Japanese"),
    ("ko", "kor", "kor", "Korean"),
    ("lv", "lav", "lav", "Latvian"),
    ("lt", "lit", "lit", "Lithuanian"),
    ("mk", "mac", "mkd", "Macedonian"),
    ("ms", "may", "msa", "Malay"),
    ("no", "nor", "nor", "Norwegian"),
    ("fa", "per", "fas", "Persian"),
    ("pl", "pol", "pol", "Polish"),
    ("pt", "por", "por", "Portuguese"),
    ("ro", "rum", "ron", "Romanian"),
    ("ru", "rus", "rus", "Russian"),
    ("sr", "srp", "srp", "Serbian"),
    ("sk", "slo", "slk", "Slovak"),
    ("sl", "slv", "slv", "Slovenian"),
    ("es", "spa", "spa", "Spanish"),
    ("sv", "swe", "swe", "Swedish"),
    ("th", "tha", "tha", "Thai"),
    ("tr", "tur", "tur", "Turkish"),
    ("uk", "ukr", "ukr", "Ukrainian"),
    ("vi", "vie", "vie", "Vietnamese"),
];

/// Every accepted spelling (lowercased) of every known language.
static INDEX: LazyLock<HashMap<String, &'static LanguageInfo>> = LazyLock::new(|| {
    LANGUAGES
        .iter()
        .flat_map(|info| {
            [info.alpha2, info.alpha3b, info.alpha3t, info.name].into_iter().map(move |key| (key.to_lowercase(), info))
        })
        .collect()
});
