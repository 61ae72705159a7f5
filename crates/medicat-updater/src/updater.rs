//! One check-and-update run.

use medicat_torrent_types::TorrentClient;
use tracing::{error, info, instrument};

use crate::{
    Error, VersionToken,
    config::DEFAULT_DISTRIBUTION,
    decision::{Decision, decide},
    extract::{self, Release},
    inventory::read_inventory,
    notify::{Notifier, UpdateNotice},
    report::status_table,
    thread::ThreadSource,
    version::join_versions,
};

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The announced version is already in the client.
    UpToDate {
        /// Announced version.
        version: VersionToken,
    },
    /// The announced version is missing, but nothing was changed.
    WouldAdd {
        /// Announced version.
        version: VersionToken,
    },
    /// The announced version was added and the recipients were notified.
    Added {
        /// Added version.
        version: VersionToken,
        /// Latest version in the client before the run.
        previous: Option<VersionToken>,
        /// Confirmation payload of the client.
        response: String,
    },
}

/// Exit status of a run that found the release in the thread.
pub const SUCCESS_STATUS: u8 = 0;

/// Exit status of a run whose thread lacked a version or magnet link.
pub const EXTRACTION_FAILURE_STATUS: u8 = 1;

/// Maps the result of [`Updater::run`] to a process exit status.
///
/// Extraction failures are logged and become [`EXTRACTION_FAILURE_STATUS`]; every other error is
/// handed back to the caller.
pub fn exit_status(result: Result<Outcome, Error>) -> Result<u8, Error> {
    match result {
        Ok(Outcome::Added { version, .. }) => {
            info!("Version {} added and announced", version);
            Ok(SUCCESS_STATUS)
        }
        Ok(_) => Ok(SUCCESS_STATUS),
        Err(e) if e.is_extraction_failure() => {
            error!("Could not extract current version or magnet link: {e}. Exiting.");
            Ok(EXTRACTION_FAILURE_STATUS)
        }
        Err(e) => Err(e),
    }
}

/// Wires the thread source, torrent client and notifier of one run together.
#[derive(Debug)]
pub struct Updater<'a, S, C, N> {
    source: &'a S,
    client: &'a C,
    notifier: &'a N,
    distribution: String,
    dry_run: bool,
}

impl<'a, S, C, N> Updater<'a, S, C, N>
where
    S: ThreadSource,
    C: TorrentClient,
    N: Notifier,
{
    /// Returns a new [`Updater`] for the default distribution.
    pub fn new(source: &'a S, client: &'a C, notifier: &'a N) -> Self {
        Self {
            source,
            client,
            notifier,
            distribution: DEFAULT_DISTRIBUTION.to_string(),
            dry_run: false,
        }
    }

    /// Sets the distribution whose torrents appear in the status table.
    pub fn distribution(mut self, distribution: impl Into<String>) -> Self {
        self.distribution = distribution.into();
        self
    }

    /// Stops after the decision when set.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Fetches the thread, compares the announced version with the client and adds and
    /// announces it if it is missing.
    ///
    /// Nothing is retried. If the notification fails after the torrent was added, the torrent
    /// stays added.
    #[instrument(skip(self), fields(distribution = %self.distribution))]
    pub async fn run(&self) -> Result<Outcome, Error> {
        let release = self.announced_release().await?;
        info!("Thread announces version {}", release.version);

        let inventory = read_inventory(self.client).await?;
        let listed = join_versions(&inventory);

        if decide(&release.version, &inventory) == Decision::Skip {
            info!(
                "Skip: Version {} is already in qBittorrent ({})!",
                release.version, listed
            );
            return Ok(Outcome::UpToDate {
                version: release.version,
            });
        }

        info!(
            "Version {} is not yet in qBittorrent ({})!",
            release.version, listed
        );
        if self.dry_run {
            info!("Dry run, leaving qBittorrent untouched");
            return Ok(Outcome::WouldAdd {
                version: release.version,
            });
        }

        info!("Adding now...");
        let response = self.client.add_magnet(&release.magnet).await?;
        info!("qBittorrent answered: {}", response);

        let torrents = self.client.list().await?;
        let previous = inventory.last().cloned();
        let notice = UpdateNotice {
            new_version: release.version.clone(),
            old_version: previous.clone(),
            status_table: status_table(&torrents, &self.distribution),
        };
        self.notifier.notify(&notice).await?;

        Ok(Outcome::Added {
            version: release.version,
            previous,
            response,
        })
    }

    async fn announced_release(&self) -> Result<Release, Error> {
        let html = self.source.fetch().await?;
        let document = extract::parse_thread(&html);
        extract::release(&document)
    }
}
