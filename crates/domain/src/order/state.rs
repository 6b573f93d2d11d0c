//! Order status.

use serde::{Deserialize, Serialize};

/// The status of a payment order.
///
/// ```text
/// Created ──► Paid
///    └──────► Failed
/// ```
///
/// `Failed` is part of the stored vocabulary but nothing in this system
/// assigns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order created at the gateway, awaiting payment.
    #[default]
    Created,

    /// Payment signature verified.
    Paid,

    /// Payment failed.
    Failed,
}

impl OrderStatus {
    /// Returns true once payment has been verified.
    pub fn is_paid(&self) -> bool {
        matches!(self, OrderStatus::Paid)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Created => write!(f, "created"),
            OrderStatus::Paid => write!(f, "paid"),
            OrderStatus::Failed => write!(f, "failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_created() {
        assert_eq!(OrderStatus::default(), OrderStatus::Created);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(OrderStatus::Paid).unwrap(),
            serde_json::json!("paid")
        );
        let status: OrderStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(status, OrderStatus::Failed);
    }

    #[test]
    fn display_matches_serialized_form() {
        for status in [OrderStatus::Created, OrderStatus::Paid, OrderStatus::Failed] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.to_string());
        }
    }
}
