use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Find and download episode subtitles from TvSubtitles.
#[derive(Debug, Parser)]
#[command(name = "tvsub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (TOML, YAML or JSON).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// More output; repeat for trace logging.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List matching subtitles, one per line.
    List(EpisodeArgs),
    /// Download the first matching subtitle next to the video.
    Download(EpisodeArgs),
}

#[derive(Debug, Args)]
pub struct EpisodeArgs {
    #[arg(long)]
    pub series: String,
    #[arg(long)]
    pub season: u32,
    #[arg(long)]
    pub episode: u32,
    /// Language code or name; defaults to `subtitles.languages`.
    #[arg(short, long = "language")]
    pub languages: Vec<String>,
    /// Video file the subtitles are named after.
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    #[test]
    fn test_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list() {
        let cli = Cli::try_parse_from([
            "tvsub", "list", "--series", "Foo Show", "--season", "1", "--episode", "2", "-l", "en", "-l", "fr",
        ])
        .unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.series, "Foo Show");
        assert_eq!((args.season, args.episode), (1, 2));
        assert_eq!(args.languages, vec!["en", "fr"]);
        assert!(args.file.is_none());
    }

    #[rstest]
    #[case(&[], "info")]
    #[case(&["-v"], "debug")]
    #[case(&["-vv"], "trace")]
    #[case(&["-vvvv"], "trace")]
    fn test_verbosity(#[case] flags: &[&str], #[case] expected: &str) {
        let args = ["tvsub", "download", "--series", "Foo", "--season", "1", "--episode", "1"];
        let cli = Cli::try_parse_from(args.iter().chain(flags).copied()).unwrap();
        assert_eq!(cli.log_filter(), expected);
    }

    #[test]
    fn test_episode_required() {
        assert!(Cli::try_parse_from(["tvsub", "list", "--series", "Foo", "--season", "1"]).is_err());
    }
}
