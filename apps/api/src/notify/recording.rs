use std::sync::Mutex;

use async_trait::async_trait;

use crate::notify::{Notifier, NotifyError};

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Captures outgoing mail; optionally fails every send.
#[derive(Default)]
pub struct RecordingNotifier {
    pub fail: bool,
    sent: Mutex<Vec<SentEmail>>,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError::NotConfigured);
        }
        self.sent.lock().unwrap().push(SentEmail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
