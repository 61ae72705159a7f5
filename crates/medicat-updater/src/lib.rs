//! # MediCat Updater
//!
//! Watches the MediCat USB forum thread, adds a release that qBittorrent does not have yet and
//! mails a status report about it.
//!
//! ## Example
//!
//! ```rust,ignore
//! use medicat_torrent_controller::QBittorrentClient;
//! use medicat_updater::{Config, HttpThreadSource, SmtpNotifier, Updater};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.json")?;
//!     let client = QBittorrentClient::try_new(
//!         &config.qbittorrent_host,
//!         config.qbittorrent_port,
//!         &config.qbittorrent_username,
//!         &config.qbittorrent_password,
//!     )
//!     .await?;
//!     let source = HttpThreadSource::new(&config.thread_url)?;
//!     let notifier = SmtpNotifier::new(config.mail_settings())?;
//!
//!     let outcome = Updater::new(&source, &client, &notifier).run().await?;
//!     println!("{outcome:?}");
//!     Ok(())
//! }
//! ```

use clap as _;
use dotenvy as _;
use medicat_torrent_controller as _;
use tokio as _;
use tracing_subscriber as _;

pub mod config;
pub mod decision;
mod error;
pub mod extract;
pub mod inventory;
pub mod notify;
pub mod report;
pub mod size;
pub mod thread;
pub mod updater;
mod version;

#[cfg(test)]
mod testutil;

pub use config::Config;
pub use error::Error;
pub use notify::SmtpNotifier;
pub use thread::{FileThreadSource, HttpThreadSource};
pub use updater::{Outcome, Updater};
pub use version::VersionToken;
