//! Configuration for tvsub.
//!
//! Values are layered, later layers overriding earlier ones:
//!
//! 1. built-in defaults ([`Config::default`]),
//! 2. a configuration file: the one given explicitly, or `config.toml` in the
//!    platform configuration directory when it exists; TOML, YAML or JSON,
//!    chosen by file extension,
//! 3. environment variables prefixed with `TVSUB_`, nested keys separated by
//!    a double underscore (`TVSUB_HTTP__TIMEOUT_SECS=10`).
//!
//! # Example
//!
//! ```toml
//! [catalog]
//! server_url = "http://www.tvsubtitles.net"
//!
//! [http]
//! user_agent = "tvsub"
//! timeout_secs = 30
//!
//! [subtitles]
//! multi = true
//! languages = ["en", "fr"]
//! ```

pub mod error;

use crate::error::{ErrorKind, Result};
use directories::ProjectDirs;
use exn::ResultExt;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::instrument;

const ENV_PREFIX: &str = "TVSUB_";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub http: HttpConfig,
    pub subtitles: SubtitleConfig,
}

/// Where the catalog lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Scheme and host of the catalog, without a trailing slash.
    pub server_url: String,
}
impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            server_url: "http://www.tvsubtitles.net".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    pub timeout_secs: u64,
}
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("tvsub/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 30,
        }
    }
}
impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubtitleConfig {
    /// Name subtitle files `<video>.<lang>.srt` instead of `<video>.srt`, so
    /// several languages can sit next to the same video.
    pub multi: bool,
    /// Languages to search for when none are given on the command line.
    pub languages: Vec<String>,
}

impl Config {
    /// Default configuration file location for the current platform.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("net", "tvsubtitles", "tvsub").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Builds the layered [`Figment`] without extracting it.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = file {
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                _ => figment.merge(Toml::file(path)),
            };
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads and validates the configuration.
    ///
    /// An explicit `file` must exist; without one, the default location is
    /// used when a file is present there.
    #[instrument]
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file = match file {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::MissingFile(path.to_path_buf())),
            Some(path) => Some(path.to_path_buf()),
            None => Self::default_path().filter(|path| path.is_file()),
        };
        if let Some(path) = &file {
            tracing::debug!(path = %path.display(), "Loading configuration file");
        }
        let config: Config = Self::figment(file.as_deref()).extract().or_raise(|| ErrorKind::Malformed)?;
        config.validated()
    }

    /// Checks values the type system cannot, normalizing where harmless.
    pub fn validated(mut self) -> Result<Self> {
        let url = self.catalog.server_url.trim().trim_end_matches('/').to_string();
        let host = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"));
        if !host.is_some_and(|host| !host.is_empty()) {
            exn::bail!(ErrorKind::InvalidValue {
                field: "catalog.server_url",
                value: self.catalog.server_url,
            });
        }
        self.catalog.server_url = url;
        if self.http.timeout_secs == 0 {
            exn::bail!(ErrorKind::InvalidValue {
                field: "http.timeout_secs",
                value: self.http.timeout_secs.to_string(),
            });
        }
        if self.http.user_agent.trim().is_empty() {
            exn::bail!(ErrorKind::InvalidValue {
                field: "http.user_agent",
                value: self.http.user_agent,
            });
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rstest::rstest;
    use std::io::Write;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default().validated().unwrap();
        assert_eq!(config.catalog.server_url, "http://www.tvsubtitles.net");
        assert_eq!(config.http.timeout(), Duration::from_secs(30));
        assert!(!config.subtitles.multi);
    }

    #[rstest]
    #[case("http://www.tvsubtitles.net/", "http://www.tvsubtitles.net")]
    #[case(" https://mirror.example.test// ", "https://mirror.example.test")]
    fn test_server_url_normalized(#[case] input: &str, #[case] expected: &str) {
        let mut config = Config::default();
        config.catalog.server_url = input.to_string();
        assert_eq!(config.validated().unwrap().catalog.server_url, expected);
    }

    #[rstest]
    #[case("ftp://www.tvsubtitles.net", "catalog.server_url")]
    #[case("www.tvsubtitles.net", "catalog.server_url")]
    #[case("https://", "catalog.server_url")]
    fn test_server_url_rejected(#[case] input: &str, #[case] expected_field: &str) {
        let mut config = Config::default();
        config.catalog.server_url = input.to_string();
        let err = config.validated().unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidValue { field, .. } if *field == expected_field));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        let err = config.validated().unwrap_err();
        assert!(matches!(&*err, ErrorKind::InvalidValue { field: "http.timeout_secs", .. }));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(&*err, &ErrorKind::MissingFile(path));
    }

    #[rstest]
    #[case("config.toml", "[subtitles]\nmulti = true\nlanguages = [\"en\", \"fr\"]\n")]
    #[case("config.yaml", "subtitles:\n  multi: true\n  languages: [en, fr]\n")]
    #[case("config.json", r#"{"subtitles": {"multi": true, "languages": ["en", "fr"]}}"#)]
    fn test_load_file_formats(#[case] name: &str, #[case] contents: &str) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        std::fs::File::create(&path).unwrap().write_all(contents.as_bytes()).unwrap();
        let config = Config::load(Some(&path)).unwrap();
        assert!(config.subtitles.multi);
        assert_eq!(config.subtitles.languages, vec!["en".to_string(), "fr".to_string()]);
        // Untouched sections keep their defaults.
        assert_eq!(config.catalog, CatalogConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("tvsub.toml", "[http]\ntimeout_secs = 5\nuser_agent = \"from-file\"\n")?;
            jail.set_env("TVSUB_HTTP__TIMEOUT_SECS", "12");
            jail.set_env("TVSUB_CATALOG__SERVER_URL", "https://mirror.example.test/");
            let config = Config::load(Some(Path::new("tvsub.toml"))).unwrap();
            assert_eq!(config.http.timeout_secs, 12);
            assert_eq!(config.http.user_agent, "from-file");
            assert_eq!(config.catalog.server_url, "https://mirror.example.test");
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file() {
        Jail::expect_with(|jail| {
            jail.create_file("tvsub.toml", "[http]\ntimeout_secs = \"soon\"\n")?;
            let err = Config::load(Some(Path::new("tvsub.toml"))).unwrap_err();
            assert_eq!(&*err, &ErrorKind::Malformed);
            Ok(())
        });
    }
}
