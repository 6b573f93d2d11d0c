//! Route handlers.

pub mod cart;
pub mod contact;
pub mod health;
pub mod metrics;
pub mod orders;
pub mod services;
pub mod status;
pub mod webhook;

use serde::Serialize;

/// Generic success acknowledgement.
#[derive(Debug, Serialize)]
pub struct Ack {
    pub success: bool,
    pub message: &'static str,
}

impl Ack {
    pub fn ok(message: &'static str) -> Self {
        Self {
            success: true,
            message,
        }
    }
}
