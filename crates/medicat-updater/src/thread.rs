//! Sources of the forum thread HTML.

use std::path::PathBuf;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tokio::fs;
use tracing::{debug, info};

use crate::Error;

/// Thread announcing MediCat USB releases.
pub const MEDICAT_THREAD_URL: &str =
    "https://gbatemp.net/threads/medicat-usb-a-multiboot-linux-usb-for-pc-repair.361577/";

/// The forum sits behind a bot filter that turns away non-browser clients.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

/// Somewhere the thread HTML can be read from.
#[allow(async_fn_in_trait)]
pub trait ThreadSource {
    /// Returns the thread HTML.
    async fn fetch(&self) -> Result<String, Error>;
}

/// Fetches the thread over HTTP(S) with a single GET.
#[derive(Debug)]
pub struct HttpThreadSource {
    client: reqwest::Client,
    url: String,
    dump_path: Option<PathBuf>,
}

impl HttpThreadSource {
    /// Returns a new [`HttpThreadSource`] for `url` using browser-like request headers.
    pub fn new(url: impl Into<String>) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));

        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            url: url.into(),
            dump_path: None,
        })
    }

    /// Also writes every fetched page to `path`, for inspecting what the extractor saw.
    pub fn dump_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.dump_path = Some(path.into());
        self
    }
}

impl ThreadSource for HttpThreadSource {
    async fn fetch(&self) -> Result<String, Error> {
        debug!("Requesting {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;
        let html = response.text().await?;
        info!("Fetched thread {} ({} bytes)", self.url, html.len());

        if let Some(path) = &self.dump_path {
            fs::write(path, &html).await?;
            debug!("Wrote thread HTML to {}", path.display());
        }

        Ok(html)
    }
}

/// Reads a previously saved thread from disk.
#[derive(Debug, Clone)]
pub struct FileThreadSource {
    path: PathBuf,
}

impl FileThreadSource {
    /// Returns a new [`FileThreadSource`] reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ThreadSource for FileThreadSource {
    async fn fetch(&self) -> Result<String, Error> {
        let html = fs::read_to_string(&self.path).await?;
        info!(
            "Read thread from {} ({} bytes)",
            self.path.display(),
            html.len()
        );
        Ok(html)
    }
}
