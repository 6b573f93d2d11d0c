//! Contact inquiry endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use checkout::{dispatch, templates};
use document_store::DocumentStore;
use domain::{ContactInquiry, NewContactInquiry};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/contact — validate and store an inquiry, alerting the admin if configured.
#[tracing::instrument(skip(state, payload))]
pub async fn submit<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<NewContactInquiry>, JsonRejection>,
) -> Result<Json<ContactInquiry>, ApiError> {
    let Json(submission) = payload?;
    let inquiry = state.contact.submit(submission).await?;

    if let Some(admin_email) = &state.admin_email {
        match templates::inquiry_alert(&inquiry, admin_email) {
            Ok(notification) => {
                dispatch(Arc::clone(&state.notifier), notification);
            }
            Err(e) => tracing::warn!(error = %e, "failed to render inquiry alert"),
        }
    }

    Ok(Json(inquiry))
}

/// GET /api/contact — list stored inquiries.
#[tracing::instrument(skip(state))]
pub async fn list<S: DocumentStore + Clone + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<ContactInquiry>>, ApiError> {
    Ok(Json(state.contact.list().await?))
}
