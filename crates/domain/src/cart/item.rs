use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::price::parse_price;

/// A product line in a cart or an order snapshot.
///
/// Identified only by `product_id`; lines are merged by that id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product identifier.
    pub product_id: String,

    /// Human-readable product name.
    pub name: String,

    /// Display price, possibly prefixed by a currency glyph (e.g. `"₹500"`).
    pub price: String,

    /// Quantity, at least 1.
    pub quantity: u32,

    /// Product image URL.
    #[serde(default)]
    pub image: String,
}

impl CartItem {
    /// Creates a new cart item without an image.
    pub fn new(
        product_id: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            price: price.into(),
            quantity,
            image: String::new(),
        }
    }

    /// Sets the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Returns the parsed unit price.
    pub fn unit_price(&self) -> Result<Decimal, ValidationError> {
        parse_price(&self.price)
    }

    /// Returns `unit_price * quantity`.
    pub fn line_total(&self) -> Result<Decimal, ValidationError> {
        self.unit_price()?
            .checked_mul(Decimal::from(self.quantity))
            .ok_or(ValidationError::AmountOverflow)
    }

    /// Checks that the item can be added to a cart.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.product_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "product_id",
            });
        }
        if self.quantity == 0 {
            return Err(ValidationError::InvalidQuantity {
                quantity: self.quantity,
            });
        }
        self.unit_price()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_parsed_price() {
        let item = CartItem::new("p1", "Crystal", "₹500", 3);
        assert_eq!(item.line_total().unwrap(), Decimal::from(1500));
    }

    #[test]
    fn validate_rejects_zero_quantity() {
        let item = CartItem::new("p1", "Crystal", "₹500", 0);
        assert_eq!(
            item.validate(),
            Err(ValidationError::InvalidQuantity { quantity: 0 })
        );
    }

    #[test]
    fn validate_rejects_unparsable_price() {
        let item = CartItem::new("p1", "Crystal", "priceless", 1);
        assert!(matches!(
            item.validate(),
            Err(ValidationError::InvalidPrice { .. })
        ));
    }

    #[test]
    fn validate_rejects_blank_product_id() {
        let item = CartItem::new(" ", "Crystal", "$1", 1);
        assert_eq!(
            item.validate(),
            Err(ValidationError::Required {
                field: "product_id"
            })
        );
    }

    #[test]
    fn image_defaults_to_empty_when_missing() {
        let item: CartItem = serde_json::from_value(serde_json::json!({
            "product_id": "7",
            "name": "Sage Bundle",
            "price": "$35.00",
            "quantity": 1
        }))
        .unwrap();
        assert_eq!(item.image, "");
    }
}
