//! Shared test utilities and fixtures.

use crate::models::TorrentInfo;

pub(crate) fn make_test_info(name: &str, hash: &str) -> TorrentInfo {
    TorrentInfo {
        hash: hash.to_string(),
        name: name.to_string(),
        size: 22_548_578_304,
        state: "uploading".to_string(),
        ratio: 1.25,
        uploaded: 28_185_722_880,
        num_seeds: 3,
        num_complete: 41,
        num_leechs: 1,
        num_incomplete: 7,
    }
}
