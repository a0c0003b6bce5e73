mod cli;
mod error;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use exn::ResultExt;
use tracing_subscriber::EnvFilter;
use tvsub_config::Config;
use tvsub_extract::models::LanguageCode;
use tvsub_fetch::HttpFetcher;
use tvsub_service::{EpisodeVideo, ResultSubtitle, Service, TvSubtitles, Video};

use crate::cli::{Cli, Command, EpisodeArgs};
use crate::error::{ErrorKind, Result};

fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_filter().into()))
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        },
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref()).or_raise(|| ErrorKind::Config)?;
    let fetcher = HttpFetcher::new(&config.http.user_agent, config.http.timeout()).or_raise(|| ErrorKind::Client)?;
    let mut service = TvSubtitles::from_config(Arc::new(fetcher), &config);

    match cli.command {
        Command::List(args) => {
            for subtitle in search(&mut service, &config, args)? {
                println!(
                    "{}\t{}\t{}\t{}",
                    subtitle.language,
                    subtitle.link,
                    subtitle.path.display(),
                    subtitle.keywords.join(",")
                );
            }
        },
        Command::Download(args) => {
            let results = search(&mut service, &config, args)?;
            let Some(first) = results.first() else {
                exn::bail!(ErrorKind::NoResults);
            };
            service.download(first).or_raise(|| ErrorKind::Download)?;
            println!("{}", first.path.display());
        },
    }
    Ok(())
}

fn search(service: &mut TvSubtitles, config: &Config, args: EpisodeArgs) -> Result<Vec<ResultSubtitle>> {
    let languages = if args.languages.is_empty() { config.subtitles.languages.clone() } else { args.languages };
    if languages.is_empty() {
        exn::bail!(ErrorKind::NoLanguages);
    }
    for language in languages.iter().filter(|language| LanguageCode::parse(language).is_none()) {
        tracing::warn!(%language, "Ignoring unknown language");
    }

    let mut video = EpisodeVideo::new(args.series, args.season, args.episode);
    if let Some(file) = args.file {
        video = video.with_path(file);
    }
    let video = Video::Episode(video);
    if let Err(err) = service.check_validity(&video, &languages) {
        tracing::warn!(error = %*err, "Video cannot be searched");
    }
    service.list(&video, &languages).or_raise(|| ErrorKind::Query)
}
