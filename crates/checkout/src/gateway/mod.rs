//! Payment gateway trait and implementations.

pub mod demo;
pub mod razorpay;

pub use demo::DemoGateway;
pub use razorpay::{RazorpayConfig, RazorpayGateway};

use async_trait::async_trait;
use domain::Money;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Order creation request sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GatewayOrderRequest {
    /// Amount in minor currency units.
    pub amount: Money,
    pub currency: String,
    /// Merchant-side reference, at most 40 characters.
    pub receipt: String,
}

/// The gateway's representation of an order.
///
/// Fields this crate does not interpret are kept in `extra` so the
/// representation can be handed back to the client verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Trait for payment gateway operations.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Short name used in logs and metrics.
    fn name(&self) -> &'static str;

    /// Creates an order at the gateway.
    async fn create_order(&self, request: &GatewayOrderRequest) -> Result<GatewayOrder>;

    /// Checks the signature returned to the client after checkout.
    ///
    /// Fails with `Verification` on mismatch.
    fn verify_payment_signature(
        &self,
        order_id: &str,
        payment_id: &str,
        signature: &str,
    ) -> Result<()>;

    /// Checks a webhook body against its signature header.
    ///
    /// Fails with `Signature` on mismatch. Gateways without a webhook
    /// secret accept every body.
    fn verify_webhook_signature(&self, body: &[u8], signature: Option<&str>) -> Result<()>;
}
