mod episode;
mod ids;
mod lang;
mod series;
mod subtitle;

pub use self::episode::EpisodeRow;
pub use self::ids::{EpisodeId, SeriesId, SubtitleId};
pub use self::lang::{LanguageCode, catalog_languages, normalize};
pub use self::series::SeriesHit;
pub use self::subtitle::SubtitleEntry;
