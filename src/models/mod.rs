mod analysis;
mod product;
mod query;

pub use analysis::{AnalysisFilters, RoomAnalysis, RoomAnalysisRequest};
pub use product::{
    DimensionEntry, Dimensions, LiveMatch, LiveProduct, MatchType, Product, ScoredProduct,
};
pub use query::{BudgetTier, MatchQuery, PriceRange};
