//! Service catalog endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use document_store::DocumentStore;
use domain::Service;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/services — active services, or the built-in set when none are stored.
#[tracing::instrument(skip(state))]
pub async fn list<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<Service>>, ApiError> {
    Ok(Json(state.catalog.list_services().await?))
}
