//! Status check endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use document_store::DocumentStore;
use domain::{NewStatusCheck, StatusCheck};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/status
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<NewStatusCheck>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError> {
    let Json(check) = payload?;
    Ok(Json(state.status.record(check).await?))
}

/// GET /api/status
#[tracing::instrument(skip(state))]
pub async fn list<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    Ok(Json(state.status.list().await?))
}
