//! HTTP API server for the storefront backend.
//!
//! Provides REST endpoints for carts, payment orders and the site's
//! contact/catalog/status resources, with structured logging (tracing) and
//! Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use axum::routing::{delete, get, post};
use document_store::DocumentStore;
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use state::{AppState, Collaborators, build_collaborators, create_state};

/// Creates the Axum application router with all routes and shared state.
///
/// `cors_origins` lists the allowed origins; an empty list allows any.
pub fn create_app<S: DocumentStore + Clone + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
    cors_origins: &[String],
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/api", get(routes::health::root))
        .route("/api/", get(routes::health::root))
        .route(
            "/api/contact",
            post(routes::contact::submit::<S>).get(routes::contact::list::<S>),
        )
        .route("/api/services", get(routes::services::list::<S>))
        .route(
            "/api/status",
            post(routes::status::create::<S>).get(routes::status::list::<S>),
        )
        .route("/api/cart", post(routes::cart::add_item::<S>))
        .route(
            "/api/cart/{session_id}",
            get(routes::cart::get::<S>).delete(routes::cart::clear::<S>),
        )
        .route(
            "/api/cart/{session_id}/item/{product_id}",
            delete(routes::cart::remove_item::<S>),
        )
        .route("/api/create-order", post(routes::orders::create::<S>))
        .route("/api/verify-payment", post(routes::orders::verify::<S>))
        .route("/api/orders/{order_id}", get(routes::orders::get::<S>))
        .route("/api/webhook", post(routes::webhook::receive::<S>))
        .with_state(state)
        .merge(metrics_router)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer for the configured origins.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
