//! HTML email templates.
//!
//! Templates live under `templates/` and are HTML-escaped by askama.

use askama::Template;
use domain::{CartItem, ContactInquiry, Money, Order};

use super::Notification;
use crate::error::Result;

#[derive(Template)]
#[template(path = "order_confirmation.html")]
struct OrderConfirmation<'a> {
    name: &'a str,
    order_id: &'a str,
    payment_id: &'a str,
    items: &'a [CartItem],
    currency: &'a str,
    total: Money,
}

#[derive(Template)]
#[template(path = "inquiry_alert.html")]
struct InquiryAlert<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    service: &'a str,
    subject: &'a str,
    message: &'a str,
}

/// Builds the customer's order confirmation.
///
/// Returns `None` when the order carries no customer email.
pub fn order_confirmation(order: &Order) -> Result<Option<Notification>> {
    let Some(to) = order.customer_email() else {
        return Ok(None);
    };

    let html = OrderConfirmation {
        name: order.customer_name().unwrap_or("there"),
        order_id: &order.order_id,
        payment_id: order.payment_id.as_deref().unwrap_or("-"),
        items: &order.items,
        currency: &order.currency,
        total: order.total_amount,
    }
    .render()?;

    Ok(Some(Notification::new(
        to,
        format!("Order confirmation {}", order.order_id),
        html,
    )))
}

/// Builds the admin alert for a new contact inquiry.
pub fn inquiry_alert(inquiry: &ContactInquiry, admin_email: &str) -> Result<Notification> {
    let html = InquiryAlert {
        name: &inquiry.name,
        email: &inquiry.email,
        phone: inquiry.phone.as_deref().unwrap_or("-"),
        service: inquiry.service_interest.as_deref().unwrap_or("-"),
        subject: &inquiry.subject,
        message: &inquiry.message,
    }
    .render()?;

    Ok(Notification::new(
        admin_email,
        format!("New inquiry: {}", inquiry.subject),
        html,
    ))
}
