//! Payment gateway webhook endpoint.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use document_store::DocumentStore;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the hex HMAC of the raw body.
pub const SIGNATURE_HEADER: &str = "x-razorpay-signature";

#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    pub status: &'static str,
}

/// POST /api/webhook — verify and acknowledge a gateway event.
///
/// No order is modified.
#[tracing::instrument(skip_all)]
pub async fn receive<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<WebhookResponse>, ApiError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    state.orders.handle_webhook(&body, signature)?;
    Ok(Json(WebhookResponse { status: "ok" }))
}
