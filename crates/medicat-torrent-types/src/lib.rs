//! # Medicat Torrent Types
//!
//! This crate defines the client-neutral torrent record and the [`TorrentClient`] trait used by
//! the MediCat updater. The updater only ever lists torrents and adds magnet links, so the trait
//! stays that small.

use thiserror::Error;

/// Error type for torrent client operations.
#[derive(Error, Debug)]
pub enum TorrentClientError {
    /// Network-related errors (connection failures, timeouts, etc.)
    #[error("network error: {0}")]
    Network(String),

    /// Authentication errors
    #[error("authentication required")]
    Unauthorized,

    /// Server returned an error response
    #[error("server error: {0}")]
    ServerError(String),

    /// The client refused the torrent or magnet link
    #[error("invalid torrent: {0}")]
    InvalidTorrent(String),

    /// Other unexpected errors
    #[error("unexpected error: {0}")]
    Other(String),
}

/// TorrentClient defines the operations the updater needs from a BitTorrent client.
#[allow(async_fn_in_trait)]
pub trait TorrentClient {
    /// List all torrents known to the client.
    async fn list(&self) -> Result<Vec<Torrent>, TorrentClientError>;
    /// Add a torrent by magnet URI. The torrent starts downloading immediately.
    ///
    /// Returns the confirmation payload of the client untouched.
    async fn add_magnet(&self, magnet_uri: &str) -> Result<String, TorrentClientError>;
}

// Field names follow the qBittorrent Web API, which is the only implementation so far.

/// Torrent information as reported by the client.
#[derive(Debug, Clone, Default, PartialEq)]
#[allow(missing_docs)]
pub struct Torrent {
    pub hash: String,

    pub name: String,

    /// Selected size in bytes.
    pub size: i64,

    pub state: String,

    pub ratio: f64,

    /// Uploaded bytes over the torrent's lifetime.
    pub uploaded: i64,

    /// Seeds connected to.
    pub num_seeds: i64,

    /// Seeds in the swarm.
    pub num_complete: i64,

    /// Leechers connected to.
    pub num_leechs: i64,

    /// Leechers in the swarm.
    pub num_incomplete: i64,
}

impl Torrent {
    /// Returns true if the torrent name contains `needle`, ignoring case.
    pub fn name_contains_ignore_case(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
