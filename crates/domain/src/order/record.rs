//! Stored payment order.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use common::RecordId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Money, OrderStatus};
use crate::cart::CartItem;

/// Free-form customer details captured at checkout (name, email, phone, ...).
pub type CustomerInfo = BTreeMap<String, String>;

/// A payment order.
///
/// `order_id` is assigned by the payment gateway (or synthesized in demo
/// mode) before the record is stored and never changes afterwards. `items`
/// is a snapshot independent of any live cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: RecordId,
    pub order_id: String,
    pub customer_info: CustomerInfo,
    pub items: Vec<CartItem>,
    pub total_amount: Money,
    pub currency: String,
    pub status: OrderStatus,
    pub payment_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Creates a new order in `Created` status.
    pub fn new(
        order_id: impl Into<String>,
        customer_info: CustomerInfo,
        items: Vec<CartItem>,
        total_amount: Money,
        currency: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            order_id: order_id.into(),
            customer_info,
            items,
            total_amount,
            currency: currency.into(),
            status: OrderStatus::Created,
            payment_id: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a verified payment.
    ///
    /// Applying the same payment again overwrites the previous values; no
    /// duplicate-payment detection is performed.
    pub fn mark_paid(&mut self, payment_id: impl Into<String>) {
        self.status = OrderStatus::Paid;
        self.payment_id = Some(payment_id.into());
        self.updated_at = Utc::now();
    }

    /// Returns the fields touched by [`Order::mark_paid`], for a partial update.
    pub fn payment_fields(&self) -> Result<Map<String, Value>, serde_json::Error> {
        let mut fields = Map::new();
        fields.insert("status".into(), serde_json::to_value(self.status)?);
        fields.insert("payment_id".into(), serde_json::to_value(&self.payment_id)?);
        fields.insert("updated_at".into(), serde_json::to_value(self.updated_at)?);
        Ok(fields)
    }

    /// Returns the customer's email address, if one was captured.
    pub fn customer_email(&self) -> Option<&str> {
        self.customer_info
            .get("email")
            .map(|email| email.trim())
            .filter(|email| !email.is_empty())
    }

    /// Returns the customer's name, if one was captured.
    pub fn customer_name(&self) -> Option<&str> {
        self.customer_info.get("name").map(String::as_str)
    }
}
