use chrono::{DateTime, Utc};
use common::{RecordId, SessionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::CartItem;
use crate::error::ValidationError;

/// Sums `unit_price * quantity` over every line.
pub fn compute_total(items: &[CartItem]) -> Result<Decimal, ValidationError> {
    items.iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(item.line_total()?)
            .ok_or(ValidationError::AmountOverflow)
    })
}

/// Shopping cart for one session.
///
/// `total_amount` is recomputed from every line after each mutation and is
/// never patched incrementally, so a stored cart with a stale total heals
/// itself on the next change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub id: RecordId,
    pub session_id: SessionId,
    pub items: Vec<CartItem>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Creates an empty, unsaved cart.
    pub fn empty(session_id: SessionId) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            session_id,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a cart containing exactly `item`.
    pub fn with_item(session_id: SessionId, item: CartItem) -> Result<Self, ValidationError> {
        item.validate()?;
        let mut cart = Self::empty(session_id);
        cart.total_amount = item.line_total()?;
        cart.items.push(item);
        Ok(cart)
    }

    /// Adds `item`, merging its quantity into an existing line with the
    /// same `product_id` instead of duplicating the line.
    ///
    /// The cart is left untouched on error.
    pub fn add_item(&mut self, item: CartItem) -> Result<(), ValidationError> {
        item.validate()?;

        let mut items = self.items.clone();
        match items
            .iter_mut()
            .find(|line| line.product_id == item.product_id)
        {
            Some(line) => {
                line.quantity = line.quantity.checked_add(item.quantity).ok_or_else(|| {
                    ValidationError::QuantityOverflow {
                        product_id: item.product_id.clone(),
                    }
                })?;
            }
            None => items.push(item),
        }

        self.total_amount = compute_total(&items)?;
        self.items = items;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Removes every line for `product_id`.
    ///
    /// Returns false, leaving the cart untouched, if no line matched.
    pub fn remove_item(&mut self, product_id: &str) -> Result<bool, ValidationError> {
        let before = self.items.len();
        self.items.retain(|line| line.product_id != product_id);
        if self.items.len() == before {
            return Ok(false);
        }

        self.recalculate_total()?;
        Ok(true)
    }

    /// Recomputes `total_amount` from scratch and refreshes `updated_at`.
    pub fn recalculate_total(&mut self) -> Result<(), ValidationError> {
        self.total_amount = compute_total(&self.items)?;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Returns the line for `product_id`, if any.
    pub fn find_item(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|line| line.product_id == product_id)
    }

    /// Returns the number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
