//! qBittorrent Web API client implementation.

use tracing::debug;
use url::Url;

use medicat_torrent_types::{Torrent, TorrentClient, TorrentClientError};

use crate::api::{ApiError, WebApiClient};
use crate::ops::QBittorrentOps;


/// QBittorrentClient is a torrent client that talks to the qBittorrent Web UI.
#[allow(missing_debug_implementations, private_bounds)]
pub struct QBittorrentClient<T: QBittorrentOps = WebApiClient> {
    client: T,
}

impl QBittorrentClient {
    /// Create a new QBittorrentClient and log in.
    ///
    /// `host` may carry a scheme (`https://nas.local`); plain host names default to `http`.
    /// This method is async as the login happens on creation.
    pub async fn try_new(
        host: &str,
        port: u16,
        username: &str,
        password: &str,
    ) -> Result<Self, TorrentClientError> {
        let url = web_ui_url(host, port)?;

        debug!("Connecting to qBittorrent Web UI at {}", url);
        let client = WebApiClient::new(url).map_err(map_client_error)?;
        client
            .login(username, password)
            .await
            .map_err(map_client_error)?;

        debug!("Connected to qBittorrent");
        Ok(Self { client })
    }
}

#[allow(private_bounds)]
impl<T: QBittorrentOps> QBittorrentClient<T> {
    /// Create a QBittorrentClient with a custom client implementation.
    /// This is primarily useful for testing with mocks.
    #[cfg(test)]
    pub(crate) fn with_client(client: T) -> Self {
        Self { client }
    }
}

#[allow(private_bounds)]
impl<T: QBittorrentOps> TorrentClient for QBittorrentClient<T> {
    async fn list(&self) -> Result<Vec<Torrent>, TorrentClientError> {
        debug!("Listing torrents");
        let torrents: Vec<Torrent> = self
            .client
            .torrents_info()
            .await
            .map_err(map_client_error)?
            .into_iter()
            .map(Torrent::from)
            .collect();
        debug!("qBittorrent reported {} torrents", torrents.len());

        Ok(torrents)
    }

    async fn add_magnet(&self, magnet_uri: &str) -> Result<String, TorrentClientError> {
        debug!("Adding torrent from magnet link: {}", magnet_uri);
        let response = self
            .client
            .torrents_add(magnet_uri)
            .await
            .map_err(map_client_error)?;
        debug!("Add command answered with {response:?}");

        Ok(response)
    }
}

/// Builds the Web UI base URL from the configured host and port.
fn web_ui_url(host: &str, port: u16) -> Result<Url, TorrentClientError> {
    let base = if host.contains("://") {
        host.to_string()
    } else {
        format!("http://{host}")
    };

    let mut url = Url::parse(&base)
        .map_err(|e| TorrentClientError::Other(format!("Invalid Web UI URL: {}", e)))?;
    url.set_port(Some(port))
        .map_err(|_| TorrentClientError::Other(format!("Cannot set port {port} on {base}")))?;

    Ok(url)
}

/// Maps Web API errors to torrent client errors.
fn map_client_error(err: ApiError) -> TorrentClientError {
    match err {
        ApiError::Request(e) if e.is_decode() => TorrentClientError::Other(e.to_string()),
        ApiError::Request(e) => TorrentClientError::Network(e.to_string()),
        ApiError::Auth(msg) => {
            debug!("Login rejected: {msg}");
            TorrentClientError::Unauthorized
        }
        ApiError::Forbidden => TorrentClientError::Unauthorized,
        ApiError::InvalidTorrent(msg) => TorrentClientError::InvalidTorrent(msg),
        ApiError::Api {
            status_code,
            message,
        } => TorrentClientError::ServerError(format!("{status_code}: {message}")),
    }
}
