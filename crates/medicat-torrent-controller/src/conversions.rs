//! Conversion from the qBittorrent wire type to the client-neutral [`Torrent`].

use medicat_torrent_types::Torrent;

use crate::models::TorrentInfo;

impl From<TorrentInfo> for Torrent {
    fn from(value: TorrentInfo) -> Self {
        Self {
            hash: value.hash,
            name: value.name,
            size: value.size,
            state: value.state,
            ratio: value.ratio,
            uploaded: value.uploaded,
            num_seeds: value.num_seeds,
            num_complete: value.num_complete,
            num_leechs: value.num_leechs,
            num_incomplete: value.num_incomplete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_info;

    #[test]
    fn test_torrent_conversion() {
        let info = make_test_info("MediCat USB v21.12", "0123456789abcdef");
        let torrent: Torrent = info.into();

        assert_eq!(torrent.name, "MediCat USB v21.12");
        assert_eq!(torrent.hash, "0123456789abcdef");
        assert_eq!(torrent.size, 22_548_578_304);
        assert_eq!(torrent.state, "uploading");
        assert_eq!(torrent.num_complete, 41);
        assert_eq!(torrent.num_incomplete, 7);
    }

    #[test]
    fn test_info_payload_conversion() {
        // Trimmed response of GET /api/v2/torrents/info.
        let payload = r#"[
            {
                "added_on": 1640000000,
                "category": "",
                "hash": "8c4adbf9ebe66f1d804fb6a4fb9b74966c3ab609",
                "name": "MediCat.USB.v21.12",
                "num_complete": 120,
                "num_incomplete": 14,
                "num_leechs": 2,
                "num_seeds": 9,
                "ratio": 3.5,
                "size": 23622320128,
                "state": "stalledUP",
                "uploaded": 82678120448
            },
            {
                "hash": "deadbeef",
                "name": "unrelated"
            }
        ]"#;

        let infos: Vec<TorrentInfo> = serde_json::from_str(payload).unwrap();
        let torrents: Vec<Torrent> = infos.into_iter().map(Torrent::from).collect();

        assert_eq!(torrents.len(), 2);
        assert_eq!(torrents[0].name, "MediCat.USB.v21.12");
        assert_eq!(torrents[0].ratio, 3.5);
        assert_eq!(torrents[0].uploaded, 82_678_120_448);
        assert_eq!(torrents[0].num_leechs, 2);
        assert_eq!(torrents[0].num_seeds, 9);
        assert_eq!(torrents[1].name, "unrelated");
        assert_eq!(torrents[1].size, 0);
        assert_eq!(torrents[1].state, "");
    }
}
