//! Domain layer for the storefront backend.
//!
//! This crate provides:
//! - Price parsing for currency-prefixed price strings
//! - The session-scoped cart and [`CartService`] (the cart manager)
//! - The payment order record and its status transitions
//! - Contact inquiries, the service catalog and status check records

pub mod cart;
pub mod error;
pub mod order;
pub mod price;
pub mod site;

pub use cart::{Cart, CartItem, CartService, compute_total};
pub use error::{DomainError, ValidationError};
pub use order::{CustomerInfo, Money, Order, OrderStatus};
pub use price::parse_price;
pub use site::{
    CatalogService, ContactInquiry, ContactService, InquiryStatus, NewContactInquiry,
    NewStatusCheck, Service, StatusCheck, StatusService, fallback_services,
};
