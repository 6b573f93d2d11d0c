//! Order creation, payment verification and webhook intake.

use std::sync::Arc;

use document_store::{Collection, DocumentStore, DocumentStoreExt};
use domain::{CartItem, CustomerInfo, Money, Order, ValidationError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CheckoutError, Result};
use crate::gateway::{GatewayOrder, GatewayOrderRequest, PaymentGateway};
use crate::notify::{Notifier, dispatch, templates};

fn default_currency() -> String {
    "INR".to_string()
}

/// Request to start a payment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Amount in minor currency units.
    pub amount: i64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub customer_info: CustomerInfo,
    #[serde(default)]
    pub cart_items: Vec<CartItem>,
}

impl NewOrder {
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.amount <= 0 {
            return Err(ValidationError::InvalidAmount {
                amount: self.amount,
            });
        }
        if self.currency.trim().is_empty() {
            return Err(ValidationError::Required { field: "currency" });
        }
        self.cart_items.iter().try_for_each(CartItem::validate)
    }
}

/// Payment details returned to the client by the gateway's checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Acknowledgement of a webhook delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookReceipt {
    /// The `event` field of the body, when the body is a JSON object carrying one.
    pub event: Option<String>,
}

/// Drives an order through `created → paid`.
///
/// The gateway and notifier are chosen by the caller; the workflow behaves
/// the same for demo and real collaborators.
pub struct OrderWorkflow<S: DocumentStore> {
    store: S,
    gateway: Arc<dyn PaymentGateway>,
    notifier: Arc<dyn Notifier>,
}

impl<S: DocumentStore> OrderWorkflow<S> {
    pub fn new(store: S, gateway: Arc<dyn PaymentGateway>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            gateway,
            notifier,
        }
    }

    /// Name of the configured gateway.
    pub fn gateway_name(&self) -> &'static str {
        self.gateway.name()
    }

    /// Creates a gateway order and stores it in `created`.
    ///
    /// Returns the gateway's order representation unchanged.
    #[tracing::instrument(skip(self, request), fields(amount = request.amount, currency = %request.currency, gateway = self.gateway.name()))]
    pub async fn create_order(&self, request: NewOrder) -> Result<GatewayOrder> {
        request.validate()?;

        let amount = Money::from_minor_units(request.amount);
        let gateway_request = GatewayOrderRequest {
            amount,
            currency: request.currency.clone(),
            receipt: format!("receipt_{}", Uuid::new_v4().simple()),
        };
        let gateway_order = self.gateway.create_order(&gateway_request).await?;

        let order = Order::new(
            gateway_order.id.clone(),
            request.customer_info,
            request.cart_items,
            amount,
            request.currency,
        );
        self.store
            .insert_record(Collection::Orders, &order.order_id, &order)
            .await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(order_id = %order.order_id, "order created");

        Ok(gateway_order)
    }

    /// Verifies a payment signature and marks the order paid.
    ///
    /// The order is left untouched when the signature does not match.
    /// Verifying an already paid order overwrites its payment id.
    #[tracing::instrument(skip(self, confirmation), fields(order_id = %confirmation.order_id, payment_id = %confirmation.payment_id))]
    pub async fn verify_payment(&self, confirmation: PaymentConfirmation) -> Result<Order> {
        if let Err(e) = self.gateway.verify_payment_signature(
            &confirmation.order_id,
            &confirmation.payment_id,
            &confirmation.signature,
        ) {
            metrics::counter!("payment_verification_failures_total").increment(1);
            tracing::warn!(error = %e, "payment signature rejected");
            return Err(e);
        }

        let mut order = self.load_order(&confirmation.order_id).await?;
        order.mark_paid(confirmation.payment_id);

        self.store
            .update_fields(
                Collection::Orders,
                &order.order_id,
                order.payment_fields()?,
            )
            .await?;

        metrics::counter!("payments_verified_total").increment(1);
        tracing::info!("payment verified");

        match templates::order_confirmation(&order) {
            Ok(Some(notification)) => {
                dispatch(Arc::clone(&self.notifier), notification);
            }
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "failed to render order confirmation"),
        }

        Ok(order)
    }

    /// Fetches a stored order by its gateway order id.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: &str) -> Result<Order> {
        self.load_order(order_id).await
    }

    /// Accepts a gateway webhook delivery.
    ///
    /// Only the signature is checked; no order is modified.
    #[tracing::instrument(skip(self, body, signature), fields(body_len = body.len()))]
    pub fn handle_webhook(&self, body: &[u8], signature: Option<&str>) -> Result<WebhookReceipt> {
        metrics::counter!("webhooks_received_total").increment(1);
        self.gateway.verify_webhook_signature(body, signature)?;

        let event = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|value| value.get("event")?.as_str().map(str::to_string));

        tracing::info!(event = event.as_deref().unwrap_or("unknown"), "webhook received");
        Ok(WebhookReceipt { event })
    }

    async fn load_order(&self, order_id: &str) -> Result<Order> {
        self.store
            .get_record(Collection::Orders, order_id)
            .await?
            .ok_or_else(|| CheckoutError::OrderNotFound(order_id.to_string()))
    }
}
