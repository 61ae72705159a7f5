//! JSON configuration file.

use std::{fmt, fs, path::Path};

use serde::{Deserialize, Deserializer};

use crate::{Error, notify::MailSettings, thread::MEDICAT_THREAD_URL};

/// Display name used when `sender_displayname` is not configured.
pub const DEFAULT_SENDER_DISPLAYNAME: &str = "MediCat Torrent Updater";

/// Distribution name used in the mail subject and to select torrents for the status table.
pub const DEFAULT_DISTRIBUTION: &str = "Medicat";

/// SMTP submission port.
pub const DEFAULT_SMTP_PORT: u16 = 587;

/// Settings for one updater run, read from `config.json`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// qBittorrent Web UI host, with or without scheme.
    pub qbittorrent_host: String,
    /// qBittorrent Web UI port. Accepts a number or a numeric string.
    #[serde(deserialize_with = "port_from_number_or_string")]
    pub qbittorrent_port: u16,
    /// qBittorrent Web UI user.
    pub qbittorrent_username: String,
    /// qBittorrent Web UI password.
    pub qbittorrent_password: String,
    /// SMTP relay host.
    pub smtp_server: String,
    /// SMTP port, STARTTLS is required.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP login.
    pub smtp_username: String,
    /// SMTP password.
    pub smtp_password: String,
    /// Who receives the update mail.
    pub recipient_addresses: Vec<String>,
    /// Envelope and header sender.
    pub sender_address: String,
    /// Display name of the sender.
    #[serde(default)]
    pub sender_displayname: Option<String>,
    /// Forum thread to watch.
    #[serde(default = "default_thread_url")]
    pub thread_url: String,
    /// Distribution name.
    #[serde(default = "default_distribution")]
    pub distribution: String,
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

fn default_thread_url() -> String {
    MEDICAT_THREAD_URL.to_string()
}

fn default_distribution() -> String {
    DEFAULT_DISTRIBUTION.to_string()
}

fn port_from_number_or_string<'de, D>(deserializer: D) -> Result<u16, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Port {
        Number(u16),
        Text(String),
    }

    match Port::deserialize(deserializer)? {
        Port::Number(port) => Ok(port),
        Port::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid port {text:?}"))),
    }
}

impl Config {
    /// Reads and parses the config file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Parses a config from JSON text.
    pub fn from_json(raw: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Display name of the sender, falling back to [`DEFAULT_SENDER_DISPLAYNAME`].
    pub fn sender_displayname(&self) -> &str {
        self.sender_displayname
            .as_deref()
            .unwrap_or(DEFAULT_SENDER_DISPLAYNAME)
    }

    /// Everything the notifier needs.
    pub fn mail_settings(&self) -> MailSettings {
        MailSettings {
            server: self.smtp_server.clone(),
            port: self.smtp_port,
            username: self.smtp_username.clone(),
            password: self.smtp_password.clone(),
            recipients: self.recipient_addresses.clone(),
            sender_address: self.sender_address.clone(),
            sender_displayname: self.sender_displayname().to_string(),
            distribution: self.distribution.clone(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print credentials.
        f.debug_struct("Config")
            .field("qbittorrent_host", &self.qbittorrent_host)
            .field("qbittorrent_port", &self.qbittorrent_port)
            .field("qbittorrent_username", &self.qbittorrent_username)
            .field("qbittorrent_password", &"<redacted>")
            .field("smtp_server", &self.smtp_server)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"<redacted>")
            .field("recipient_addresses", &self.recipient_addresses)
            .field("sender_address", &self.sender_address)
            .field("sender_displayname", &self.sender_displayname)
            .field("thread_url", &self.thread_url)
            .field("distribution", &self.distribution)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "qbittorrent_host": "localhost",
        "qbittorrent_port": 8080,
        "qbittorrent_username": "admin",
        "qbittorrent_password": "adminadmin",
        "smtp_server": "smtp.example.org",
        "smtp_username": "updater@example.org",
        "smtp_password": "hunter2",
        "recipient_addresses": ["alice@example.org", "bob@example.org"],
        "sender_address": "updater@example.org"
    }"#;

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_json(MINIMAL).unwrap();

        assert_eq!(config.qbittorrent_port, 8080);
        assert_eq!(config.smtp_port, DEFAULT_SMTP_PORT);
        assert_eq!(config.sender_displayname, None);
        assert_eq!(config.sender_displayname(), DEFAULT_SENDER_DISPLAYNAME);
        assert_eq!(config.thread_url, MEDICAT_THREAD_URL);
        assert_eq!(config.distribution, DEFAULT_DISTRIBUTION);
        assert_eq!(config.recipient_addresses.len(), 2);
    }

    #[test]
    fn port_as_string() {
        let raw = MINIMAL.replace("8080", "\"8081\"");
        let config = Config::from_json(&raw).unwrap();
        assert_eq!(config.qbittorrent_port, 8081);

        let raw = MINIMAL.replace("8080", "\"web\"");
        assert!(matches!(
            Config::from_json(&raw),
            Err(Error::ConfigParse(_))
        ));
    }

    #[test]
    fn missing_required_key() {
        let raw = MINIMAL.replace("\"sender_address\"", "\"sender\"");
        let err = Config::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("sender_address"));
    }

    #[test]
    fn mail_settings_carry_display_name() {
        let raw = MINIMAL.replace(
            "\"sender_address\"",
            "\"sender_displayname\": \"Seedbox\", \"sender_address\"",
        );
        let settings = Config::from_json(&raw).unwrap().mail_settings();

        assert_eq!(settings.sender_displayname, "Seedbox");
        assert_eq!(settings.port, 587);
        assert_eq!(settings.distribution, "Medicat");
    }

    #[test]
    fn debug_hides_passwords() {
        let config = Config::from_json(MINIMAL).unwrap();
        let printed = format!("{config:?}");

        assert!(!printed.contains("adminadmin"));
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("smtp.example.org"));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, MINIMAL).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.qbittorrent_host, "localhost");

        let err = Config::load(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }
}
