//! Razorpay-compatible gateway client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{GatewayOrder, GatewayOrderRequest, PaymentGateway};
use crate::error::{CheckoutError, Result};
use crate::signature;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.razorpay.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials for the Razorpay API.
#[derive(Clone)]
pub struct RazorpayConfig {
    pub key_id: String,
    pub key_secret: String,
    /// Secret used to sign webhook bodies; webhook checks are skipped without it.
    pub webhook_secret: Option<String>,
    pub base_url: String,
}

impl RazorpayConfig {
    /// Creates a config against the default API base URL.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            webhook_secret: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Sets the webhook secret.
    pub fn with_webhook_secret(mut self, secret: impl Into<String>) -> Self {
        self.webhook_secret = Some(secret.into());
        self
    }
}

impl std::fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"<redacted>")
            .field(
                "webhook_secret",
                &self.webhook_secret.as_ref().map(|_| "<redacted>"),
            )
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// HTTP client for the Razorpay orders API and its signature scheme.
#[derive(Debug, Clone)]
pub struct RazorpayGateway {
    config: RazorpayConfig,
    http: Client,
}

impl RazorpayGateway {
    /// Creates a new client from the given configuration.
    pub fn new(config: RazorpayConfig) -> Result<Self> {
        let http = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { config, http })
    }

    /// Returns the configured key id.
    pub fn key_id(&self) -> &str {
        &self.config.key_id
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    fn name(&self) -> &'static str {
        "razorpay"
    }

    #[tracing::instrument(skip(self, request), fields(amount = request.amount.minor_units(), currency = %request.currency))]
    async fn create_order(&self, request: &GatewayOrderRequest) -> Result<GatewayOrder> {
        let url = format!("{}/v1/orders", self.config.base_url.trim_end_matches('/'));

        let body = serde_json::json!({
            "amount": request.amount.minor_units(),
            "currency": request.currency,
            "receipt": request.receipt,
            "payment_capture": 1,
        });

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(CheckoutError::Gateway(format!(
                "order creation failed with status {status}: {text}"
            )));
        }

        Ok(response.json().await?)
    }

    fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<()> {
        let payload = signature::payment_payload(order_id, payment_id);
        if signature::verify(
            self.config.key_secret.as_bytes(),
            payload.as_bytes(),
            signature,
        )? {
            Ok(())
        } else {
            Err(CheckoutError::Verification {
                order_id: order_id.to_string(),
            })
        }
    }

    fn verify_webhook_signature(&self, body: &[u8], signature: Option<&str>) -> Result<()> {
        let Some(secret) = &self.config.webhook_secret else {
            return Ok(());
        };
        let signature = signature.ok_or(CheckoutError::Signature)?;

        if signature::verify(secret.as_bytes(), body, signature)? {
            Ok(())
        } else {
            Err(CheckoutError::Signature)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(webhook_secret: Option<&str>) -> RazorpayGateway {
        let mut config = RazorpayConfig::new("rzp_test_key", "key_secret");
        if let Some(secret) = webhook_secret {
            config = config.with_webhook_secret(secret);
        }
        RazorpayGateway::new(config).unwrap()
    }

    #[test]
    fn payment_signature_matches_key_secret_hmac() {
        let gateway = gateway(None);
        let signature = signature::sign(b"key_secret", b"order_1|pay_1").unwrap();

        assert!(
            gateway
                .verify_payment_signature("order_1", "pay_1", &signature)
                .is_ok()
        );
    }

    #[test]
    fn payment_signature_mismatch_is_a_verification_error() {
        let gateway = gateway(None);
        let signature = signature::sign(b"key_secret", b"order_1|pay_1").unwrap();

        let result = gateway.verify_payment_signature("order_1", "pay_other", &signature);
        assert!(matches!(
            result,
            Err(CheckoutError::Verification { ref order_id }) if order_id == "order_1"
        ));
    }

    #[test]
    fn webhook_without_secret_is_accepted() {
        assert!(gateway(None).verify_webhook_signature(b"{}", None).is_ok());
    }

    #[test]
    fn webhook_with_secret_requires_matching_header() {
        let gateway = gateway(Some("hook_secret"));
        let body = br#"{"event":"payment.captured"}"#;
        let good = signature::sign(b"hook_secret", body).unwrap();

        assert!(gateway.verify_webhook_signature(body, Some(&good)).is_ok());
        assert!(matches!(
            gateway.verify_webhook_signature(body, None),
            Err(CheckoutError::Signature)
        ));
        assert!(matches!(
            gateway.verify_webhook_signature(b"tampered", Some(&good)),
            Err(CheckoutError::Signature)
        ));
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = RazorpayConfig::new("rzp_test_key", "super-secret")
            .with_webhook_secret("hook-secret-value");
        let debug = format!("{config:?}");
        assert!(debug.contains("rzp_test_key"));
        assert!(!debug.contains("super-secret"));
        assert!(!debug.contains("hook-secret-value"));
    }
}
