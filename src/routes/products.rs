use axum::{
    extract::{rejection::JsonRejection, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MatchQuery, Product, ScoredProduct},
    services::{RankingStrategy, ScoringProfile},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub products: Vec<Product>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(flatten)]
    pub query: MatchQuery,
    /// Overrides the configured scoring profile for this request
    #[serde(default)]
    pub profile: Option<ScoringProfile>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub products: Vec<ScoredProduct>,
    pub total: usize,
    pub profile: ScoringProfile,
}

/// Handler listing the whole catalog
pub async fn list(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        products: state.catalog.products().to_vec(),
        total: state.catalog.len(),
    })
}

/// Handler scoring the catalog against an explicit query
pub async fn match_products(
    State(state): State<Arc<AppState>>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> AppResult<Json<MatchResponse>> {
    let Json(request) = payload?;
    if request.query.limit == 0 {
        return Err(AppError::InvalidInput(
            "limit must be a positive integer".to_string(),
        ));
    }

    let scorer = state.catalog_scorer(request.profile);

    tracing::info!(
        request_id = %request_id,
        room_type = %request.query.room_type,
        budget = ?request.query.budget,
        strategy = scorer.name(),
        "Processing match request"
    );

    let products = scorer.rank(state.catalog.products(), &request.query);

    Ok(Json(MatchResponse {
        total: products.len(),
        products,
        profile: scorer.profile(),
    }))
}
