use async_trait::async_trait;
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, AsyncSmtpTransport};
use lettre::{AsyncTransport, Tokio1Executor};
use tracing::{info, warn};

use crate::config::SmtpSettings;
use crate::notify::{Notifier, NotifyError};

struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

/// STARTTLS relay sender. Without credentials every send reports
/// `NotConfigured` so the workflow can log it and move on.
pub struct SmtpNotifier {
    mailer: Option<Mailer>,
}

impl SmtpNotifier {
    pub fn new(settings: &SmtpSettings) -> Result<Self, NotifyError> {
        let (Some(address), Some(password)) = (&settings.address, &settings.password) else {
            warn!("EMAIL_ADDRESS/EMAIL_PASSWORD not set; candidate emails disabled");
            return Ok(Self { mailer: None });
        };

        let from: Mailbox = address
            .parse()
            .map_err(|_| NotifyError::InvalidAddress(address.clone()))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.server)?
            .port(settings.port)
            .credentials(Credentials::new(address.clone(), password.clone()))
            .build();

        info!(
            "SMTP notifier ready ({}:{} as {address})",
            settings.server, settings.port
        );
        Ok(Self {
            mailer: Some(Mailer { transport, from }),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let mailer = self.mailer.as_ref().ok_or(NotifyError::NotConfigured)?;

        let to: Mailbox = recipient
            .parse()
            .map_err(|_| NotifyError::InvalidAddress(recipient.to_string()))?;

        let msg = Message::builder()
            .from(mailer.from.clone())
            .to(to)
            .subject(subject)
            .header(header::ContentType::TEXT_PLAIN)
            .body(body.to_string())?;

        mailer.transport.send(msg).await?;
        info!("Email sent to {recipient}: {subject}");
        Ok(())
    }
}
