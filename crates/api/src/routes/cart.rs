//! Session cart endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use common::SessionId;
use document_store::DocumentStore;
use domain::{Cart, CartItem};
use serde::Deserialize;

use super::Ack;
use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

/// POST /api/cart?session_id= — add an item, merging by product id.
#[tracing::instrument(skip(state, query, payload), fields(product_id = tracing::field::Empty))]
pub async fn add_item<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    query: Result<Query<SessionQuery>, QueryRejection>,
    payload: Result<Json<CartItem>, JsonRejection>,
) -> Result<Json<Ack>, ApiError> {
    let Query(query) = query?;
    let Json(item) = payload?;
    tracing::Span::current().record("product_id", item.product_id.as_str());

    let session_id = SessionId::from(query.session_id);
    state.carts.add_item(&session_id, item).await?;
    Ok(Json(Ack::ok("Item added to cart")))
}

/// GET /api/cart/{session_id} — the session's cart, empty if none exists.
#[tracing::instrument(skip(state))]
pub async fn get<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(session_id): Path<String>,
) -> Result<Json<Cart>, ApiError> {
    let cart = state.carts.get_cart(&SessionId::new(session_id)).await?;
    Ok(Json(cart))
}

/// DELETE /api/cart/{session_id}
#[tracing::instrument(skip(state))]
pub async fn clear<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path(session_id): Path<String>,
) -> Result<Json<Ack>, ApiError> {
    state.carts.clear_cart(&SessionId::new(session_id)).await?;
    Ok(Json(Ack::ok("Cart cleared")))
}

/// DELETE /api/cart/{session_id}/item/{product_id}
#[tracing::instrument(skip(state))]
pub async fn remove_item<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    Path((session_id, product_id)): Path<(String, String)>,
) -> Result<Json<Ack>, ApiError> {
    state
        .carts
        .remove_item(&SessionId::new(session_id), &product_id)
        .await?;
    Ok(Json(Ack::ok("Item removed from cart")))
}
