use async_trait::async_trait;

use super::{Notification, Notifier};
use crate::error::Result;

/// Notifier used when no email API is configured. Logs and succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, notification: &Notification) -> Result<()> {
        tracing::info!(
            to = %notification.to,
            subject = %notification.subject,
            "email delivery not configured, notification logged only"
        );
        Ok(())
    }
}
