//! # MediCat Updater
//!
//! ## Usage
//!
//! ```sh,ignore
//! cargo run --release -p medicat-updater -- --config /etc/medicat-updater/config.json
//! ```
//!
//! Exits with 0 when the client is up to date or the new release was added and announced, and
//! with 1 when the thread did not contain a version or magnet link.

use std::process::ExitCode;

use clap::Parser;
use html_escape as _;
use lettre as _;
use regex as _;
use reqwest as _;
use scraper as _;
use serde as _;
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use test_log as _;
use thiserror as _;
use tracing::info;
use tracing_subscriber::EnvFilter;

use medicat_torrent_controller::QBittorrentClient;
use medicat_torrent_types::TorrentClient;
use medicat_updater::{
    Config, Error, FileThreadSource, HttpThreadSource, SmtpNotifier, Updater, notify::Notifier,
    thread::ThreadSource, updater::exit_status,
};

mod cli;

use cli::Cli;

/// Initializes the tracing subscriber.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the updater against `source` and maps the result to an exit code.
async fn check<S, C, N>(
    source: &S,
    client: &C,
    notifier: &N,
    config: &Config,
    dry_run: bool,
) -> Result<ExitCode, Error>
where
    S: ThreadSource,
    C: TorrentClient,
    N: Notifier,
{
    let result = Updater::new(source, client, notifier)
        .distribution(&config.distribution)
        .dry_run(dry_run)
        .run()
        .await;

    exit_status(result).map(ExitCode::from)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    init_tracing();

    let cli = Cli::parse();
    let config = Config::load(&cli.config)?;
    info!("Loaded config from {}", cli.config.display());

    let client = QBittorrentClient::try_new(
        &config.qbittorrent_host,
        config.qbittorrent_port,
        &config.qbittorrent_username,
        &config.qbittorrent_password,
    )
    .await?;
    let notifier = SmtpNotifier::new(config.mail_settings())?;

    let code = if let Some(path) = &cli.thread_file {
        let source = FileThreadSource::new(path);
        check(&source, &client, &notifier, &config, cli.dry_run).await?
    } else {
        let url = cli.thread_url.as_deref().unwrap_or(&config.thread_url);
        let mut source = HttpThreadSource::new(url)?;
        if let Some(path) = &cli.dump_thread {
            source = source.dump_to(path);
        }
        check(&source, &client, &notifier, &config, cli.dry_run).await?
    };

    Ok(code)
}
