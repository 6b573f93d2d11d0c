//! Domain error types.

use document_store::StoreError;
use thiserror::Error;

/// Malformed input rejected before anything is stored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Price text is not a non-negative decimal after stripping the currency prefix.
    #[error("Invalid price: {price:?}")]
    InvalidPrice { price: String },

    /// Quantity below one.
    #[error("Invalid quantity: {quantity} (must be at least 1)")]
    InvalidQuantity { quantity: u32 },

    /// Payment amount that is zero or negative.
    #[error("Invalid amount: {amount} (must be greater than 0)")]
    InvalidAmount { amount: i64 },

    /// Arithmetic on a cart total overflowed.
    #[error("Cart total overflowed")]
    AmountOverflow,

    /// A required field is empty.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Merging a repeat add would overflow the line quantity.
    #[error("Quantity overflow for product {product_id}")]
    QuantityOverflow { product_id: String },

    /// A submitted form field failed its declared rule.
    #[error("{field}: {message}")]
    Field { field: String, message: String },
}

impl From<validator::ValidationErrors> for ValidationError {
    /// Reports the first failing field in name order.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let Some((field, failures)) = fields.into_iter().next() else {
            return ValidationError::Field {
                field: "request".to_string(),
                message: errors.to_string(),
            };
        };
        let message = failures
            .first()
            .map(|failure| match &failure.message {
                Some(message) => message.to_string(),
                None => failure.code.to_string(),
            })
            .unwrap_or_else(|| "is invalid".to_string());

        ValidationError::Field {
            field: field.to_string(),
            message,
        }
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// An error occurred in the document store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
