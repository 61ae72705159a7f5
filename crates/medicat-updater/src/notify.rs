//! Update notification mail.

use std::fmt;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, info};

use crate::{Error, VersionToken};

/// Shown in place of the previous version when the client had none.
const NO_PREVIOUS_VERSION: &str = "none";

/// What to tell the recipients about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateNotice {
    /// The version that was just added.
    pub new_version: VersionToken,
    /// Latest version the client had before, if any.
    pub old_version: Option<VersionToken>,
    /// HTML status table, embedded as is.
    pub status_table: String,
}

impl UpdateNotice {
    fn old_version(&self) -> &str {
        self.old_version
            .as_ref()
            .map_or(NO_PREVIOUS_VERSION, VersionToken::as_str)
    }
}

/// Sends update notifications.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    /// Delivers `notice` to all recipients in one attempt.
    async fn notify(&self, notice: &UpdateNotice) -> Result<(), Error>;
}

/// Mail delivery settings.
#[derive(Clone, PartialEq, Eq)]
pub struct MailSettings {
    /// SMTP relay host.
    pub server: String,
    /// SMTP port.
    pub port: u16,
    /// SMTP login.
    pub username: String,
    /// SMTP password.
    pub password: String,
    /// Recipient addresses.
    pub recipients: Vec<String>,
    /// Sender address.
    pub sender_address: String,
    /// Sender display name.
    pub sender_displayname: String,
    /// Distribution name for the subject and body.
    pub distribution: String,
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Mail(server=\"{}:{}\", username=\"{}\", password=<{}>, from=\"{}\" <{}>, to={:?})",
            self.server,
            self.port,
            self.username,
            if self.password.is_empty() {
                "unset ⚠️"
            } else {
                "set"
            },
            self.sender_displayname,
            self.sender_address,
            self.recipients,
        )
    }
}

/// Subject line, e.g. `Medicat Update v20.12 -> v21.08`.
pub fn subject(distribution: &str, notice: &UpdateNotice) -> String {
    format!(
        "{distribution} Update {} -> {}",
        notice.old_version(),
        notice.new_version
    )
}

/// HTML body of the notification.
pub fn render_body(settings: &MailSettings, notice: &UpdateNotice) -> String {
    format!(
        r#"<!doctype html>
<html>
<head></head>
<body>
<p><b>Hello!</b></p>
<p>
{distribution} was updated from <code>{old}</code> to version <code>{new}</code>!<br/>
The new version has been added to qBittorrent, is downloading now and will be seeded shortly.
</p>
<p>
qBittorrent now holds the following versions:
</p>

<div>
{table}
</div>

<p>Regards,<br/>
~ {sender}</p>
</body>
</html>"#,
        distribution = settings.distribution,
        old = notice.old_version(),
        new = notice.new_version,
        table = notice.status_table,
        sender = settings.sender_displayname,
    )
}

/// Builds the notification message for all recipients.
pub fn compose(settings: &MailSettings, notice: &UpdateNotice) -> Result<Message, Error> {
    let from = Mailbox::new(
        Some(settings.sender_displayname.clone()),
        settings.sender_address.parse()?,
    );

    let mut builder = Message::builder()
        .from(from)
        .subject(subject(&settings.distribution, notice))
        .header(ContentType::TEXT_HTML);
    for recipient in &settings.recipients {
        builder = builder.to(recipient.parse::<Mailbox>()?);
    }

    Ok(builder.body(render_body(settings, notice))?)
}

/// Sends notifications through an SMTP relay with STARTTLS and password login.
pub struct SmtpNotifier {
    settings: MailSettings,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl fmt::Debug for SmtpNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpNotifier")
            .field("settings", &self.settings)
            .field("transport", &"...")
            .finish()
    }
}

impl SmtpNotifier {
    /// Returns a new [`SmtpNotifier`]. No connection is made until a notice is sent.
    pub fn new(settings: MailSettings) -> Result<Self, Error> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)?
            .port(settings.port)
            .credentials(Credentials::new(
                settings.username.clone(),
                settings.password.clone(),
            ))
            .build();

        Ok(Self {
            settings,
            transport,
        })
    }
}

impl Notifier for SmtpNotifier {
    async fn notify(&self, notice: &UpdateNotice) -> Result<(), Error> {
        let message = compose(&self.settings, notice)?;

        debug!(
            "Sending update mail via {}:{}",
            self.settings.server, self.settings.port
        );
        self.transport.send(message).await?;
        info!(
            "Mail successfully sent to {}",
            self.settings.recipients.join(", ")
        );

        Ok(())
    }
}
