use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::RoomAnalysisRequest,
    services::recommendations::{self, RecommendationResponse},
    state::AppState,
};

/// Handler for live product recommendations
pub async fn recommend(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RoomAnalysisRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = payload?;

    tracing::info!(
        request_id = %request_id,
        room_type = %request.room_type,
        furniture_count = request.furniture_identified.len(),
        "Processing live recommendation request"
    );

    let response = recommendations::recommend_products(
        state.product_source.as_ref(),
        &state.live_scorer,
        &request,
    )
    .await;

    Ok(Json(response))
}

/// Health check for the live recommendation service
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "recommendation_engine",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Runs the live recommendation path with built-in sample data
pub async fn sample(
    state: State<Arc<AppState>>,
    request_id: Extension<RequestId>,
) -> AppResult<Json<RecommendationResponse>> {
    recommend(state, request_id, Ok(Json(RoomAnalysisRequest::sample()))).await
}
