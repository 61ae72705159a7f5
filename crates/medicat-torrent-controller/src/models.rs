//! Wire types of the qBittorrent Web API.

use serde::Deserialize;

/// One entry of `GET /api/v2/torrents/info`.
///
/// Only the fields the updater reads are declared; the rest of the payload is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct TorrentInfo {
    pub(crate) hash: String,
    pub(crate) name: String,
    pub(crate) size: i64,
    pub(crate) state: String,
    pub(crate) ratio: f64,
    pub(crate) uploaded: i64,
    pub(crate) num_seeds: i64,
    pub(crate) num_complete: i64,
    pub(crate) num_leechs: i64,
    pub(crate) num_incomplete: i64,
}
