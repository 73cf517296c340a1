use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::BudgetTier,
    services::{PipelineResult, ScoringProfile},
    state::AppState,
};

fn default_limit() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Base64 encoded room photo, optionally as a `data:` URL
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub budget: BudgetTier,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub profile: Option<ScoringProfile>,
}

/// Handler running the analyze-and-recommend pipeline
///
/// Malformed requests are rejected with 400; pipeline failures are reported inside
/// a 200 body.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> AppResult<Json<PipelineResult>> {
    let Json(request) = payload?;
    if request.limit == 0 {
        return Err(AppError::InvalidInput(
            "limit must be a positive integer".to_string(),
        ));
    }

    tracing::info!(
        request_id = %request_id,
        budget = ?request.budget,
        limit = request.limit,
        image_len = request.image.len(),
        "Processing room analysis request"
    );

    let result = state
        .pipeline(request.profile)
        .analyze_and_recommend(&request.image, request.budget, request.limit)
        .await;

    if let Some(error) = &result.error {
        tracing::warn!(request_id = %request_id, error = %error, "Room analysis failed");
    }

    Ok(Json(result))
}
