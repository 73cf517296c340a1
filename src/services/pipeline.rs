use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::{AnalysisFilters, BudgetTier, MatchQuery, RoomAnalysis, ScoredProduct},
    services::{
        analysis::{map_analysis_to_filters, summarize},
        catalog::Catalog,
        scoring::{CatalogScorer, RankingStrategy},
        vision::{analyze_or_fallback, strip_data_url_prefix, VisionProvider},
    },
};

/// Outcome of one analyze-and-recommend run
///
/// Failures are reported in `error` with empty recommendations instead of an HTTP error.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub analysis: Option<RoomAnalysis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters_applied: Option<AnalysisFilters>,
    pub recommendations: Vec<ScoredProduct>,
    pub summary: String,
    pub analyzed_at: DateTime<Utc>,
}

impl PipelineResult {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            analysis: None,
            filters_applied: None,
            recommendations: Vec::new(),
            summary: "Pipeline failed".to_string(),
            analyzed_at: Utc::now(),
        }
    }
}

/// Analyzes a room photo and recommends catalog products for it
#[derive(Clone)]
pub struct RoomAnalysisPipeline {
    vision: Arc<dyn VisionProvider>,
    catalog: Arc<Catalog>,
    scorer: CatalogScorer,
}

impl RoomAnalysisPipeline {
    pub fn new(vision: Arc<dyn VisionProvider>, catalog: Arc<Catalog>, scorer: CatalogScorer) -> Self {
        Self {
            vision,
            catalog,
            scorer,
        }
    }

    /// Image -> vision analysis -> filters -> ranked catalog products -> summary
    pub async fn analyze_and_recommend(
        &self,
        image_base64: &str,
        budget: BudgetTier,
        limit: usize,
    ) -> PipelineResult {
        let start = Instant::now();

        if strip_data_url_prefix(image_base64).trim().is_empty() {
            tracing::warn!("Pipeline called without image data");
            return PipelineResult::failed("No valid image data provided");
        }

        let analysis = analyze_or_fallback(self.vision.as_ref(), image_base64).await;
        let filters = map_analysis_to_filters(&analysis);

        let query = MatchQuery {
            room_type: filters.room_type.clone(),
            styles: filters.style_preferences.clone(),
            colors: filters.color_preferences.clone(),
            budget,
            furniture: filters.furniture_preferences.clone(),
            preferences: filters.additional_info.clone(),
            limit,
        };
        let recommendations = self.scorer.match_products(&self.catalog, &query);
        let summary = summarize(&analysis, &recommendations);

        tracing::info!(
            vision = self.vision.name(),
            strategy = self.scorer.name(),
            room_type = %filters.room_type,
            recommendations = recommendations.len(),
            processing_time_ms = start.elapsed().as_millis(),
            "Room analysis pipeline completed"
        );

        PipelineResult {
            error: None,
            analysis: Some(analysis),
            filters_applied: Some(filters),
            recommendations,
            summary,
            analyzed_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::AppError,
        models::Product,
        services::{
            scoring::ScoringProfile,
            vision::{MockVisionProvider, SampleVisionProvider},
        },
    };

    fn catalog() -> Arc<Catalog> {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"id": "1", "name": "KIVIK Sofa", "price": 699.0, "category": "Living Room", "subcategory": "Sofas", "style": ["modern"], "colors": ["gray"]},
                {"id": "2", "name": "FEJKA Plant", "price": 12.0, "category": "Decor", "subcategory": "Artificial plants", "style": ["modern"], "colors": ["green"]},
                {"id": "3", "name": "MALM Bed", "price": 299.0, "category": "Bedroom", "subcategory": "Beds", "style": ["modern"], "colors": ["white"]}
            ]"#,
        )
        .unwrap();
        Arc::new(Catalog::from_products(products))
    }

    fn pipeline(vision: Arc<dyn VisionProvider>) -> RoomAnalysisPipeline {
        RoomAnalysisPipeline::new(vision, catalog(), CatalogScorer::new(ScoringProfile::Extended))
    }

    #[tokio::test]
    async fn test_sample_analysis_recommends_living_room() {
        let pipeline = pipeline(Arc::new(SampleVisionProvider));
        let result = pipeline
            .analyze_and_recommend("data:image/jpeg;base64,AAAA", BudgetTier::Medium, 10)
            .await;

        assert!(result.error.is_none());
        let filters = result.filters_applied.unwrap();
        assert_eq!(filters.room_type, "living room");
        assert_eq!(filters.additional_info[0], "plants");

        let names: Vec<_> = result
            .recommendations
            .iter()
            .map(|r| r.product.name.as_str())
            .collect();
        // medium budget: 200-800
        assert_eq!(names, vec!["KIVIK Sofa", "MALM Bed"]);
        // style + color + room + furniture
        assert_eq!(result.recommendations[0].match_score, 0.9);
        assert_eq!(result.recommendations[1].match_score, 0.5);
        assert!(result.summary.contains("Top recommendation: KIVIK Sofa"));
    }

    #[tokio::test]
    async fn test_vision_failure_uses_fallback() {
        let mut vision = MockVisionProvider::new();
        vision
            .expect_analyze_room_image()
            .returning(|_| Err(AppError::ExternalApi("unavailable".to_string())));
        vision.expect_name().return_const("mock");

        let result = pipeline(Arc::new(vision))
            .analyze_and_recommend("AAAA", BudgetTier::Unrestricted, 10)
            .await;

        assert!(result.error.is_none());
        assert_eq!(result.analysis, Some(RoomAnalysis::unavailable()));
        assert_eq!(result.filters_applied.unwrap().color_preferences, vec!["white"]);
        assert_eq!(result.recommendations.len(), 3);
        assert_eq!(result.recommendations[0].product.name, "KIVIK Sofa");
    }

    #[tokio::test]
    async fn test_empty_image_is_error_shaped() {
        let mut vision = MockVisionProvider::new();
        vision.expect_analyze_room_image().never();

        let result = pipeline(Arc::new(vision))
            .analyze_and_recommend("data:image/png;base64,", BudgetTier::Low, 5)
            .await;

        assert_eq!(result.error.as_deref(), Some("No valid image data provided"));
        assert!(result.analysis.is_none());
        assert!(result.recommendations.is_empty());
        assert_eq!(result.summary, "Pipeline failed");
    }
}
