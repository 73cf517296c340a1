use serde::Serialize;

use crate::{
    models::{LiveMatch, RoomAnalysisRequest},
    services::{
        providers::{generate_search_terms, ProductSource},
        scoring::{LiveScorer, RankingStrategy},
    },
};

/// Products requested per search term from the live source
const LIMIT_PER_TERM: usize = 1;

/// Live product recommendations for one analysis
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<LiveMatch>,
    pub total_found: usize,
    pub search_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResponse {
    fn empty(search_keywords: Vec<String>) -> Self {
        Self {
            recommendations: Vec::new(),
            total_found: 0,
            search_keywords,
            error: None,
        }
    }
}

/// Recommends live products for analysis data
///
/// Generates search terms, fetches candidates from the product source and ranks them
/// with the integer live scorer. A failing product source yields an empty response that
/// carries the error message.
pub async fn recommend_products(
    source: &dyn ProductSource,
    scorer: &LiveScorer,
    request: &RoomAnalysisRequest,
) -> RecommendationResponse {
    let search_terms = generate_search_terms(request);
    if search_terms.is_empty() {
        return RecommendationResponse::empty(search_terms);
    }

    let products = match source.search_and_fetch(&search_terms, LIMIT_PER_TERM).await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(source = source.name(), error = %e, "Live product fetch failed");
            return RecommendationResponse {
                error: Some(format!("Error generating recommendations: {}", e)),
                ..RecommendationResponse::empty(search_terms)
            };
        }
    };

    let recommendations = scorer.rank(&products, request);

    tracing::info!(
        source = source.name(),
        strategy = scorer.name(),
        fetched = products.len(),
        recommended = recommendations.len(),
        "Live recommendations generated"
    );

    RecommendationResponse {
        total_found: recommendations.len(),
        recommendations,
        search_keywords: search_terms,
        error: None,
    }
}
