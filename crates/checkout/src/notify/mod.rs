//! Email notifications.

pub mod email;
pub mod log;
pub mod templates;

pub use email::{EmailConfig, EmailNotifier};
pub use log::LogNotifier;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use tokio::task::JoinHandle;

use crate::error::Result;

/// A rendered email ready to send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub to: String,
    pub subject: String,
    pub html_body: String,
}

impl Notification {
    pub fn new(
        to: impl Into<String>,
        subject: impl Into<String>,
        html_body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            html_body: html_body.into(),
        }
    }
}

/// Trait for sending notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends a single notification.
    async fn send(&self, notification: &Notification) -> Result<()>;
}

/// Sends a notification on a background task.
///
/// Failures are logged and counted but never reach the caller. The handle
/// is returned for tests; production callers drop it.
pub fn dispatch(notifier: Arc<dyn Notifier>, notification: Notification) -> JoinHandle<()> {
    tokio::spawn(async move {
        match notifier.send(&notification).await {
            Ok(()) => {
                tracing::debug!(to = %notification.to, subject = %notification.subject, "notification sent");
            }
            Err(e) => {
                metrics::counter!("notifications_failed_total").increment(1);
                tracing::warn!(
                    to = %notification.to,
                    subject = %notification.subject,
                    error = %e,
                    "failed to send notification"
                );
            }
        }
    })
}
