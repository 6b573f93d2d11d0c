use serde::{Deserialize, Serialize};

/// Named group of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Shopping carts, keyed by session id.
    Carts,
    /// Payment orders, keyed by gateway order id.
    Orders,
    /// Contact-form submissions, keyed by record id.
    ContactInquiries,
    /// Service offerings, keyed by record id.
    Services,
    /// Liveness check records, keyed by record id.
    StatusChecks,
}

impl Collection {
    /// Returns the collection name used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Carts => "carts",
            Collection::Orders => "orders",
            Collection::ContactInquiries => "contact_inquiries",
            Collection::Services => "services",
            Collection::StatusChecks => "status_checks",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
