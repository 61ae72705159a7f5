//! Internal trait abstracting qBittorrent Web API operations.
//!
//! This module provides the [`QBittorrentOps`] trait which abstracts the underlying
//! HTTP client, enabling mocking in tests.

use crate::api::{ApiError, WebApiClient};
use crate::models::TorrentInfo;

/// Internal trait that abstracts the Web API calls.
/// This allows for mocking in tests.
#[cfg_attr(test, mockall::automock)]
#[allow(async_fn_in_trait)]
pub(crate) trait QBittorrentOps {
    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError>;
    async fn torrents_info(&self) -> Result<Vec<TorrentInfo>, ApiError>;
    async fn torrents_add(&self, urls: &str) -> Result<String, ApiError>;
}

impl QBittorrentOps for WebApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<(), ApiError> {
        WebApiClient::login(self, username, password).await
    }

    async fn torrents_info(&self) -> Result<Vec<TorrentInfo>, ApiError> {
        WebApiClient::torrents_info(self).await
    }

    async fn torrents_add(&self, urls: &str) -> Result<String, ApiError> {
        WebApiClient::torrents_add(self, urls).await
    }
}
