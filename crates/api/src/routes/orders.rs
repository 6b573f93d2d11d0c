//! Payment order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use checkout::{GatewayOrder, NewOrder, PaymentConfirmation};
use document_store::DocumentStore;
use domain::Order;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Payment details posted by the checkout page after the gateway callback.
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(alias = "order_id")]
    pub razorpay_order_id: String,
    #[serde(alias = "payment_id")]
    pub razorpay_payment_id: String,
    #[serde(alias = "signature", default)]
    pub razorpay_signature: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: &'static str,
    pub order_id: String,
}

/// POST /api/create-order — start a payment order.
///
/// Responds with the gateway's order representation.
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<NewOrder>, JsonRejection>,
) -> Result<Json<GatewayOrder>, ApiError> {
    let Json(request) = payload?;
    Ok(Json(state.orders.create_order(request).await?))
}

/// POST /api/verify-payment — confirm a payment and mark the order paid.
#[tracing::instrument(skip(state, payload), fields(order_id = tracing::field::Empty))]
pub async fn verify<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<VerifyPaymentRequest>, JsonRejection>,
) -> Result<Json<VerifyPaymentResponse>, ApiError> {
    let Json(request) = payload?;
    tracing::Span::current().record("order_id", request.razorpay_order_id.as_str());

    let order = state
        .orders
        .verify_payment(PaymentConfirmation {
            order_id: request.razorpay_order_id,
            payment_id: request.razorpay_payment_id,
            signature: request.razorpay_signature,
        })
        .await?;

    Ok(Json(VerifyPaymentResponse {
        success: true,
        message: "Payment verified successfully",
        order_id: order.order_id,
    }))
}

/// GET /api/orders/{order_id}
#[tracing::instrument(skip(state))]
pub async fn get<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(order_id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(state.orders.get_order(&order_id).await?))
}
