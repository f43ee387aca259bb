//! Candidate email notifications.

#[cfg(test)]
pub mod recording;
pub mod smtp;
pub mod templates;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("email delivery is not configured")]
    NotConfigured,

    #[error("invalid email address '{0}'")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound email channel. Plain-text bodies only.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError>;
}
