//! Checkout error types.

use document_store::StoreError;
use domain::ValidationError;
use thiserror::Error;

/// Errors that can occur during checkout operations.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The payment signature does not match the order and payment ids.
    #[error("Payment verification failed for order {order_id}")]
    Verification { order_id: String },

    /// The webhook signature header is missing or does not match the body.
    #[error("Invalid webhook signature")]
    Signature,

    /// No order is stored under the gateway order id.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// The payment gateway rejected a request or answered unexpectedly.
    #[error("Payment gateway error: {0}")]
    Gateway(String),

    /// An email could not be delivered.
    #[error("Notification error: {0}")]
    Notification(String),

    /// An email template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// HTTP transport error talking to the gateway or the email API.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Document store error.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for checkout results.
pub type Result<T> = std::result::Result<T, CheckoutError>;
