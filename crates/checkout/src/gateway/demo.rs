//! Credential-free gateway used when no payment credentials are configured.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

use super::{GatewayOrder, GatewayOrderRequest, PaymentGateway};
use crate::error::Result;

/// Demo-mode gateway.
///
/// Synthesizes gateway-shaped orders with ids of the form
/// `order_demo_<32 hex>` and accepts every signature.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoGateway;

impl DemoGateway {
    /// Prefix of every synthesized order id.
    pub const ORDER_ID_PREFIX: &'static str = "order_demo_";

    pub fn new() -> Self {
        Self
    }

    /// Returns true for ids produced by this gateway.
    pub fn is_demo_order_id(order_id: &str) -> bool {
        order_id.starts_with(Self::ORDER_ID_PREFIX)
    }
}

#[async_trait]
impl PaymentGateway for DemoGateway {
    fn name(&self) -> &'static str {
        "demo"
    }

    async fn create_order(&self, request: &GatewayOrderRequest) -> Result<GatewayOrder> {
        let id = format!("{}{}", Self::ORDER_ID_PREFIX, Uuid::new_v4().simple());
        let amount = request.amount.minor_units();

        let mut extra = Map::new();
        extra.insert("entity".into(), Value::from("order"));
        extra.insert("amount_paid".into(), Value::from(0));
        extra.insert("amount_due".into(), Value::from(amount));
        extra.insert("attempts".into(), Value::from(0));
        extra.insert("created_at".into(), Value::from(Utc::now().timestamp()));

        tracing::info!(order_id = %id, "demo mode: synthesized gateway order");

        Ok(GatewayOrder {
            id,
            amount,
            currency: request.currency.clone(),
            receipt: Some(request.receipt.clone()),
            status: "created".to_string(),
            extra,
        })
    }

    fn verify_payment_signature(
        &self,
        order_id: &str,
        _payment_id: &str,
        _signature: &str,
    ) -> Result<()> {
        tracing::debug!(order_id, "demo mode: payment signature accepted");
        Ok(())
    }

    fn verify_webhook_signature(&self, _body: &[u8], _signature: Option<&str>) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::Money;

    use super::*;

    fn request() -> GatewayOrderRequest {
        GatewayOrderRequest {
            amount: Money::from_minor_units(150_000),
            currency: "INR".into(),
            receipt: "receipt_1".into(),
        }
    }

    #[tokio::test]
    async fn synthesizes_unique_demo_ids() {
        let gateway = DemoGateway::new();
        let a = gateway.create_order(&request()).await.unwrap();
        let b = gateway.create_order(&request()).await.unwrap();

        assert!(DemoGateway::is_demo_order_id(&a.id));
        assert_eq!(a.id.len(), DemoGateway::ORDER_ID_PREFIX.len() + 32);
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn echoes_amount_and_currency_in_gateway_shape() {
        let order = DemoGateway::new().create_order(&request()).await.unwrap();
        assert_eq!(order.amount, 150_000);
        assert_eq!(order.currency, "INR");
        assert_eq!(order.status, "created");
        assert_eq!(order.receipt.as_deref(), Some("receipt_1"));

        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(json["entity"], "order");
        assert_eq!(json["amount_due"], 150_000);
    }

    #[test]
    fn accepts_any_signature() {
        let gateway = DemoGateway::new();
        assert!(
            gateway
                .verify_payment_signature("order_demo_x", "pay", "garbage")
                .is_ok()
        );
        assert!(gateway.verify_webhook_signature(b"{}", None).is_ok());
    }
}
