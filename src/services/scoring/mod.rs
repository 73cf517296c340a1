//! Product ranking strategies
//!
//! Two independent strategies rank candidates for a query:
//! - [`CatalogScorer`] scores static catalog products on a 0-1 float scale.
//! - [`LiveScorer`] scores live product records with integer points and a match band.
//!
//! Their weight scales and output types differ, so they stay separate implementations
//! of the same [`RankingStrategy`] capability.
use serde::{Deserialize, Serialize};

mod catalog;
mod live;
pub mod vocabulary;

pub use catalog::{CatalogScorer, ScoringWeights};
pub use live::{LiveScorer, LIVE_RESULT_LIMIT};

/// Ranks candidates for a query
pub trait RankingStrategy: Send + Sync {
    type Candidate;
    type Query;
    type Ranked;

    /// Scores, sorts and truncates `candidates` for `query`
    ///
    /// Equal scores keep the relative order of `candidates`.
    fn rank(&self, candidates: &[Self::Candidate], query: &Self::Query) -> Vec<Self::Ranked>;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Weight profile for the catalog scorer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScoringProfile {
    /// Style, color and room relevance only
    Basic,
    /// Adds furniture-type preferences and free-text adjustments
    #[default]
    Extended,
}

/// Rounds a score to two decimal places
pub(crate) fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.3 + 0.2 + 0.2), 0.7);
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_profile_serialization() {
        assert_eq!(serde_json::to_string(&ScoringProfile::Basic).unwrap(), "\"basic\"");
        let profile: ScoringProfile = serde_json::from_str("\"extended\"").unwrap();
        assert_eq!(profile, ScoringProfile::Extended);
    }
}
