use crate::{
    models::{MatchQuery, Product, ScoredProduct},
    services::catalog::Catalog,
};

use super::{round2, vocabulary, RankingStrategy, ScoringProfile};

/// Free-text adjustment applied per matching preference
const PREFERENCE_ADJUSTMENT: f64 = 0.1;

/// Component weights of the catalog scorer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub style: f64,
    pub color: f64,
    pub room: f64,
    pub furniture: f64,
    /// Whether free-text preferences adjust the score
    pub free_text: bool,
}

impl ScoringWeights {
    pub fn for_profile(profile: ScoringProfile) -> Self {
        match profile {
            ScoringProfile::Basic => Self {
                style: 0.4,
                color: 0.3,
                room: 0.3,
                furniture: 0.0,
                free_text: false,
            },
            ScoringProfile::Extended => Self {
                style: 0.3,
                color: 0.2,
                room: 0.2,
                furniture: 0.2,
                free_text: true,
            },
        }
    }
}

/// Scores static catalog products against a [`MatchQuery`]
///
/// Each component grants its full weight when at least one tag matches; there is no
/// partial credit. Products outside the budget tier are excluded before scoring.
#[derive(Debug, Clone, Copy)]
pub struct CatalogScorer {
    profile: ScoringProfile,
    weights: ScoringWeights,
}

impl CatalogScorer {
    pub fn new(profile: ScoringProfile) -> Self {
        Self {
            profile,
            weights: ScoringWeights::for_profile(profile),
        }
    }

    pub fn profile(&self) -> ScoringProfile {
        self.profile
    }

    /// Ranks every product of `catalog` for `query`
    pub fn match_products(&self, catalog: &Catalog, query: &MatchQuery) -> Vec<ScoredProduct> {
        self.rank(catalog.products(), query)
    }

    /// Computes the match score of a single product, ignoring the budget
    pub fn score(&self, product: &Product, query: &MatchQuery) -> f64 {
        let w = &self.weights;
        let category = product.category.to_lowercase();
        let subcategory = product.subcategory.to_lowercase();

        let mut score = 0.0;

        if any_tag_matches(&query.styles, &product.style) {
            score += w.style;
        }

        if any_tag_matches(&query.colors, &product.colors) {
            score += w.color;
        }

        let relevant = vocabulary::room_categories(&query.room_type);
        if relevant
            .iter()
            .any(|cat| category.contains(cat) || subcategory.contains(cat))
        {
            score += w.room;
        }

        if w.furniture > 0.0
            && query.furniture.iter().any(|f| {
                let f = f.to_lowercase();
                category.contains(&f) || subcategory.contains(&f)
            })
        {
            score += w.furniture;
        }

        if w.free_text {
            score += preference_adjustment(product, &category, &subcategory, &query.preferences);
        }

        round2(score.max(0.0))
    }
}

impl RankingStrategy for CatalogScorer {
    type Candidate = Product;
    type Query = MatchQuery;
    type Ranked = ScoredProduct;

    fn rank(&self, candidates: &[Product], query: &MatchQuery) -> Vec<ScoredProduct> {
        let range = query.budget.price_range();

        let mut scored: Vec<ScoredProduct> = candidates
            .iter()
            .filter(|p| range.contains(p.price))
            .map(|p| ScoredProduct {
                product: p.clone(),
                match_score: self.score(p, query),
            })
            .collect();

        // sort_by is stable: ties keep catalog order
        scored.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        scored.truncate(query.limit);

        tracing::debug!(
            strategy = self.name(),
            candidates = candidates.len(),
            returned = scored.len(),
            budget = ?query.budget,
            "Catalog products ranked"
        );

        scored
    }

    fn name(&self) -> &'static str {
        match self.profile {
            ScoringProfile::Basic => "catalog_basic",
            ScoringProfile::Extended => "catalog_extended",
        }
    }
}

fn any_tag_matches(wanted: &[String], tags: &[String]) -> bool {
    wanted
        .iter()
        .any(|w| tags.iter().any(|t| t.to_lowercase() == w.to_lowercase()))
}

/// Net adjustment from free-text preferences
///
/// "no X" / "avoid X" penalizes products mentioning X in their name or description.
/// Otherwise plant and lamp wishes reward plant and lighting products.
fn preference_adjustment(
    product: &Product,
    category: &str,
    subcategory: &str,
    preferences: &[String],
) -> f64 {
    let name = product.name.to_lowercase();
    let description = product.description.to_lowercase();
    let mut adjustment = 0.0;

    for preference in preferences {
        let preference = preference.to_lowercase();
        if preference.contains("no") || preference.contains("avoid") {
            let banned = preference.replace("no", "").replace("avoid", "");
            let banned = banned.trim();
            if !banned.is_empty() && (name.contains(banned) || description.contains(banned)) {
                adjustment -= PREFERENCE_ADJUSTMENT;
            }
        } else if preference.contains("plant") && subcategory.contains("plant") {
            adjustment += PREFERENCE_ADJUSTMENT;
        } else if preference.contains("lamp") && category.contains("lighting") {
            adjustment += PREFERENCE_ADJUSTMENT;
        }
    }

    adjustment
}
