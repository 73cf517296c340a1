pub mod analysis;
pub mod catalog;
pub mod pipeline;
pub mod providers;
pub mod recommendations;
pub mod scoring;
pub mod vision;

pub use catalog::{Catalog, CatalogStore};
pub use pipeline::{PipelineResult, RoomAnalysisPipeline};
pub use scoring::{CatalogScorer, LiveScorer, RankingStrategy, ScoringProfile};
