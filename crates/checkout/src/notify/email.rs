//! Transactional email API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use super::{Notification, Notifier};
use crate::error::{CheckoutError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Connection details for the email API.
#[derive(Clone)]
pub struct EmailConfig {
    /// Endpoint that accepts `POST` with a JSON message.
    pub api_url: String,
    pub api_key: String,
    /// `From` address, e.g. `Healing Studio <hello@example.com>`.
    pub sender: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("sender", &self.sender)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct OutgoingEmail<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

/// Sends one HTTPS request per notification. No queueing, no retries.
#[derive(Debug, Clone)]
pub struct EmailNotifier {
    config: EmailConfig,
    http: Client,
}

impl EmailNotifier {
    pub fn new(config: EmailConfig) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { config, http })
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    #[tracing::instrument(skip(self, notification), fields(to = %notification.to))]
    async fn send(&self, notification: &Notification) -> Result<()> {
        let body = OutgoingEmail {
            from: &self.config.sender,
            to: [notification.to.as_str()],
            subject: &notification.subject,
            html: &notification.html_body,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(CheckoutError::Notification(format!(
                "email API returned {status}: {text}"
            )));
        }

        tracing::info!("email sent");
        Ok(())
    }
}
