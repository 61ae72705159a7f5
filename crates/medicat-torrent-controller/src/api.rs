//! Minimal qBittorrent Web API v2 client.
//!
//! Only the three endpoints the updater needs are covered: login, torrent list and add. The
//! session cookie (`SID`) returned by the login call is kept in the reqwest cookie store and sent
//! with every following request.

use reqwest::{StatusCode, multipart::Form};
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::models::TorrentInfo;

/// Errors returned by the Web API endpoints.
#[derive(Error, Debug)]
pub(crate) enum ApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("login rejected: {0}")]
    Auth(String),

    #[error("forbidden, login first")]
    Forbidden,

    #[error("invalid torrent: {0}")]
    InvalidTorrent(String),

    #[error("API error {status_code}: {message}")]
    Api { status_code: u16, message: String },
}

/// HTTP client for a single qBittorrent Web UI.
#[derive(Debug, Clone)]
pub struct WebApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl WebApiClient {
    pub(crate) fn new(base_url: Url) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/api/v2{}",
            self.base_url.as_str().trim_end_matches('/'),
            path
        )
    }

    /// Login to qBittorrent WebUI
    /// POST /api/v2/auth/login
    pub(crate) async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        let params = [("username", username), ("password", password)];
        let response = self
            .http
            .post(self.url("/auth/login"))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status.is_success() && body == "Ok." {
            debug!("Logged in to qBittorrent as {}", username);
            Ok(())
        } else if body == "Fails." {
            Err(ApiError::Auth("Invalid username or password".into()))
        } else if status == StatusCode::FORBIDDEN {
            Err(ApiError::Auth(
                "IP is banned for too many failed login attempts".into(),
            ))
        } else {
            Err(ApiError::Auth(format!(
                "Login failed: {} - {}",
                status.as_u16(),
                body
            )))
        }
    }

    /// Get the full torrent list
    /// GET /api/v2/torrents/info
    pub(crate) async fn torrents_info(&self) -> Result<Vec<TorrentInfo>, ApiError> {
        let response = self.http.get(self.url("/torrents/info")).send().await?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            return Err(ApiError::Forbidden);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Api {
                status_code: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<Vec<TorrentInfo>>().await?)
    }

    /// Add new torrent(s) via URLs, one per line
    /// POST /api/v2/torrents/add
    pub(crate) async fn torrents_add(&self, urls: &str) -> Result<String, ApiError> {
        let form = Form::new().text("urls", urls.to_string());
        let response = self
            .http
            .post(self.url("/torrents/add"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::FORBIDDEN => return Err(ApiError::Forbidden),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => {
                return Err(ApiError::InvalidTorrent(
                    "Invalid torrent URL or file".into(),
                ));
            }
            _ => {}
        }

        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            return Err(ApiError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        Ok(body)
    }
}
