//! Integration test for QBittorrentClient against a live qBittorrent Web UI.
//! Ignored by default; run with `cargo test -- --ignored` and these variables:
//! - QBITTORRENT_HOST (default: localhost)
//! - QBITTORRENT_PORT (default: 8080)
//! - QBITTORRENT_USERNAME (default: admin)
//! - QBITTORRENT_PASSWORD (default: adminadmin)
//!
//! The test adds a magnet for a small public torrent and checks that it shows up in the list.

#![allow(unused_crate_dependencies)]

use std::{env, time::Duration};

use medicat_torrent_controller::QBittorrentClient;
use medicat_torrent_types::{TorrentClient, TorrentClientError};

const SAMPLE_HASH: &str = "dd8255ecdc7ca55fb0bbf81323d87062db1f6d1c";
const SAMPLE_MAGNET: &str =
    "magnet:?xt=urn:btih:dd8255ecdc7ca55fb0bbf81323d87062db1f6d1c&dn=Big+Buck+Bunny";

fn var_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.into())
}

fn port() -> u16 {
    env::var("QBITTORRENT_PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(8080)
}

async fn connect() -> Result<QBittorrentClient, TorrentClientError> {
    QBittorrentClient::try_new(
        &var_or("QBITTORRENT_HOST", "localhost"),
        port(),
        &var_or("QBITTORRENT_USERNAME", "admin"),
        &var_or("QBITTORRENT_PASSWORD", "adminadmin"),
    )
    .await
}

#[test_log::test(tokio::test)]
#[ignore = "requires a running qBittorrent Web UI"]
async fn qbittorrent_add_then_list() {
    let client = connect().await.expect("failed to log in to qBittorrent");

    let response = client
        .add_magnet(SAMPLE_MAGNET)
        .await
        .expect("failed to add magnet");
    assert_eq!(response, "Ok.");

    // qBittorrent registers magnets asynchronously.
    let mut found = false;
    for _ in 0..20 {
        let list = client.list().await.expect("failed to list torrents");
        if list.iter().any(|t| t.hash == SAMPLE_HASH) {
            found = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(250)).await;
    }
    assert!(found, "added magnet not found in list");
}

#[test_log::test(tokio::test)]
#[ignore = "requires a running qBittorrent Web UI"]
async fn qbittorrent_rejects_bad_password() {
    let result = QBittorrentClient::try_new(
        &var_or("QBITTORRENT_HOST", "localhost"),
        port(),
        &var_or("QBITTORRENT_USERNAME", "admin"),
        "definitely-not-the-password",
    )
    .await;

    assert!(matches!(result, Err(TorrentClientError::Unauthorized)));
}
