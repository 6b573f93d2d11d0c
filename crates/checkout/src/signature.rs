//! HMAC-SHA256 signatures as used by the payment gateway.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::error::{CheckoutError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Computes the lowercase hex HMAC-SHA256 of `payload` under `secret`.
pub fn sign(secret: &[u8], payload: &[u8]) -> Result<String> {
    let mut mac = HmacSha256::new_from_slice(secret)
        .map_err(|err| CheckoutError::Gateway(format!("invalid signing secret: {err}")))?;
    mac.update(payload);
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Checks a hex signature in constant time.
///
/// Malformed hex is treated as a mismatch.
pub fn verify(secret: &[u8], payload: &[u8], provided: &str) -> Result<bool> {
    let Ok(provided) = hex::decode(provided.trim()) else {
        return Ok(false);
    };
    let expected = hex::decode(sign(secret, payload)?)
        .map_err(|err| CheckoutError::Gateway(format!("invalid computed signature: {err}")))?;

    if provided.len() != expected.len() {
        return Ok(false);
    }
    Ok(expected.ct_eq(provided.as_slice()).into())
}

/// Payload signed for a checkout payment: `"{order_id}|{payment_id}"`.
pub fn payment_payload(order_id: &str, payment_id: &str) -> String {
    format!("{order_id}|{payment_id}")
}
