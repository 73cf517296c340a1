use std::sync::Arc;

use crate::services::{
    catalog::Catalog, providers::ProductSource, vision::VisionProvider, CatalogScorer,
    LiveScorer, RoomAnalysisPipeline, ScoringProfile,
};

/// Shared application state
///
/// Built once at startup and handed to every handler; nothing in it is mutated afterwards.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub vision: Arc<dyn VisionProvider>,
    pub product_source: Arc<dyn ProductSource>,
    pub scoring_profile: ScoringProfile,
    pub live_scorer: LiveScorer,
}

impl AppState {
    pub fn new(
        catalog: Arc<Catalog>,
        vision: Arc<dyn VisionProvider>,
        product_source: Arc<dyn ProductSource>,
        scoring_profile: ScoringProfile,
    ) -> Self {
        Self {
            catalog,
            vision,
            product_source,
            scoring_profile,
            live_scorer: LiveScorer::default(),
        }
    }

    /// Catalog scorer for a request, falling back to the configured profile
    pub fn catalog_scorer(&self, profile: Option<ScoringProfile>) -> CatalogScorer {
        CatalogScorer::new(profile.unwrap_or(self.scoring_profile))
    }

    /// Analysis pipeline over the shared catalog and vision provider
    pub fn pipeline(&self, profile: Option<ScoringProfile>) -> RoomAnalysisPipeline {
        RoomAnalysisPipeline::new(
            self.vision.clone(),
            self.catalog.clone(),
            self.catalog_scorer(profile),
        )
    }
}
