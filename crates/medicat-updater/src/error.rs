use std::path::PathBuf;

use medicat_torrent_types::TorrentClientError;
use thiserror::Error;

/// Error variants for an updater run.
#[derive(Error, Debug)]
pub enum Error {
    /// The config file could not be read.
    #[error("failed to read config {}: {source}", path.display())]
    ConfigRead {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The config file is not valid JSON or misses required keys.
    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Fetching the forum thread failed, including non-2xx responses.
    #[error("failed to fetch thread: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Represents a generic I/O error.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// No text node of the thread starts with a version token.
    #[error("no version found in thread")]
    MissingVersion,

    /// No text node of the thread starts with a magnet link.
    #[error("no magnet link found in thread")]
    MissingMagnet,

    /// The torrent client call failed.
    #[error("torrent client: {0}")]
    Client(#[from] TorrentClientError),

    /// A mail address in the config could not be parsed.
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The notification mail could not be built.
    #[error("failed to build mail: {0}")]
    Message(#[from] lettre::error::Error),

    /// The SMTP transport failed.
    #[error("smtp: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
}

impl Error {
    /// Returns true if the thread did not contain a version or a magnet link.
    pub fn is_extraction_failure(&self) -> bool {
        matches!(self, Self::MissingVersion | Self::MissingMagnet)
    }
}
