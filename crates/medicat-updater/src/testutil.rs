//! Shared test utilities and fakes.

use std::cell::RefCell;

use medicat_torrent_types::{Torrent, TorrentClient, TorrentClientError};

use crate::{
    Error,
    notify::{Notifier, UpdateNotice},
    thread::ThreadSource,
};

pub(crate) fn torrent(name: &str) -> Torrent {
    Torrent {
        hash: format!("{:040x}", name.len()),
        name: name.to_string(),
        state: "stalledUP".to_string(),
        ..Default::default()
    }
}

/// Thread source serving fixed HTML.
pub(crate) struct StaticThread(pub(crate) String);

impl ThreadSource for StaticThread {
    async fn fetch(&self) -> Result<String, Error> {
        Ok(self.0.clone())
    }
}

pub(crate) fn thread_html(version: &str, magnet: &str) -> StaticThread {
    let magnet = magnet.replace('&', "&amp;");
    StaticThread(format!(
        "<html><body><div class=\"bbWrapper\"><b>{version}</b> released<br><pre>{magnet}</pre></div></body></html>"
    ))
}

/// In-memory torrent client recording added magnets.
#[derive(Default)]
pub(crate) struct FakeClient {
    pub(crate) torrents: RefCell<Vec<Torrent>>,
    pub(crate) added: RefCell<Vec<String>>,
    pub(crate) fail_add: bool,
}

impl FakeClient {
    pub(crate) fn with_names(names: &[&str]) -> Self {
        Self {
            torrents: RefCell::new(names.iter().map(|name| torrent(name)).collect()),
            ..Default::default()
        }
    }
}

impl TorrentClient for FakeClient {
    async fn list(&self) -> Result<Vec<Torrent>, TorrentClientError> {
        Ok(self.torrents.borrow().clone())
    }

    async fn add_magnet(&self, magnet_uri: &str) -> Result<String, TorrentClientError> {
        if self.fail_add {
            return Err(TorrentClientError::Network("connection reset".into()));
        }
        self.added.borrow_mut().push(magnet_uri.to_string());
        let name = magnet_uri
            .split("dn=")
            .nth(1)
            .unwrap_or(magnet_uri)
            .to_string();
        self.torrents.borrow_mut().push(torrent(&name));
        Ok("Ok.".to_string())
    }
}

/// Notifier recording every notice.
#[derive(Default)]
pub(crate) struct RecordingNotifier {
    pub(crate) notices: RefCell<Vec<UpdateNotice>>,
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, notice: &UpdateNotice) -> Result<(), Error> {
        self.notices.borrow_mut().push(notice.clone());
        Ok(())
    }
}
