use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI struct for the binary.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// Path of the JSON config file.
    #[arg(
        short,
        long,
        env = "MEDICAT_UPDATER_CONFIG",
        default_value = "./config.json"
    )]
    pub config: PathBuf,

    /// Forum thread to check instead of the configured one.
    #[arg(long)]
    pub thread_url: Option<String>,

    /// Read the thread from a saved HTML file instead of fetching it.
    #[arg(long, conflicts_with_all = ["thread_url", "dump_thread"])]
    pub thread_file: Option<PathBuf>,

    /// Write the fetched thread HTML to this file.
    #[arg(long)]
    pub dump_thread: Option<PathBuf>,

    /// Decide and report, but neither add the torrent nor send mail.
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}
