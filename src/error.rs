//! CLI Error Types

use derive_more::{Display, Error};

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("could not load configuration")]
    Config,
    #[display("could not set up the HTTP client")]
    Client,
    #[display("no languages requested; pass --language or set subtitles.languages")]
    NoLanguages,
    #[display("subtitle search failed")]
    Query,
    #[display("no subtitles found")]
    NoResults,
    #[display("subtitle download failed")]
    Download,
}
