//! # Torrent controller using the qBittorrent Web API.
//!
//! usage:
//!
//! ```rust,ignore
//! use medicat_torrent_controller::QBittorrentClient;
//! use medicat_torrent_types::TorrentClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = QBittorrentClient::try_new("localhost", 8080, "admin", "adminadmin").await?;
//!     let response = client.add_magnet("magnet:?xt=urn:btih:...").await?;
//!     println!("qBittorrent answered: {response}");
//!     Ok(())
//! }
//! ```
//!

mod api;
mod client;
mod conversions;
mod models;
mod ops;
#[cfg(test)]
mod testutil;

pub use api::WebApiClient;
pub use client::QBittorrentClient;

#[cfg(test)]
use test_log as _;
#[cfg(test)]
use tracing_subscriber as _;
