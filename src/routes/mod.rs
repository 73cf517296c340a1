use std::sync::Arc;

use axum::{
    http::{StatusCode, Uri},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    error::AppError,
    middleware::request_id::{make_span_with_request_id, request_id_middleware},
    state::AppState,
};

pub mod analyze;
pub mod products;
pub mod recommendations;

/// Creates the application router with all routes
///
/// The request ID middleware runs first so the trace span and the handlers can read it.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .fallback(not_found)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id)),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(products::list))
        .route("/products/match", post(products::match_products))
        .route("/analyze", post(analyze::analyze))
        .route("/recommend_products", post(recommendations::recommend))
        .route("/recommend_products/health", get(recommendations::health))
        .route("/recommend_products/test", get(recommendations::sample))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Fallback for unknown paths
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
