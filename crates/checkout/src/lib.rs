//! Payment order workflow for the storefront backend.
//!
//! This crate owns the two external collaborators of checkout and the
//! workflow that drives them:
//! - [`PaymentGateway`]: creates gateway orders and checks signatures,
//!   implemented by [`RazorpayGateway`] and the credential-free [`DemoGateway`]
//! - [`Notifier`]: sends templated emails, implemented by [`EmailNotifier`]
//!   and the logging-only [`LogNotifier`]
//! - [`OrderWorkflow`]: create order → verify payment → notify
//!
//! Which implementation is used is decided once at startup; the workflow
//! never inspects configuration.

pub mod error;
pub mod gateway;
pub mod notify;
pub mod signature;
pub mod workflow;

pub use error::{CheckoutError, Result};
pub use gateway::{
    DemoGateway, GatewayOrder, GatewayOrderRequest, PaymentGateway, RazorpayConfig,
    RazorpayGateway,
};
pub use notify::{
    EmailConfig, EmailNotifier, LogNotifier, Notification, Notifier, dispatch, templates,
};
pub use workflow::{NewOrder, OrderWorkflow, PaymentConfirmation, WebhookReceipt};
