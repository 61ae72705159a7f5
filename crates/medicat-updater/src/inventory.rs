//! Versions already registered in the torrent client.

use medicat_torrent_types::{Torrent, TorrentClient, TorrentClientError};
use tracing::debug;

use crate::VersionToken;

/// Returns the version embedded in each torrent name, in input order.
///
/// Names without a version are skipped. Duplicates are kept.
pub fn inventory_versions(torrents: &[Torrent]) -> Vec<VersionToken> {
    torrents
        .iter()
        .filter_map(|torrent| VersionToken::embedded(&torrent.name))
        .collect()
}

/// Lists all torrents of `client` and returns their versions sorted ascending.
pub async fn read_inventory<C: TorrentClient>(
    client: &C,
) -> Result<Vec<VersionToken>, TorrentClientError> {
    let torrents = client.list().await?;
    let mut versions = inventory_versions(&torrents);
    versions.sort();
    debug!(
        "{} of {} torrents carry a version",
        versions.len(),
        torrents.len()
    );
    Ok(versions)
}
