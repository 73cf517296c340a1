use crate::models::{LiveMatch, LiveProduct, MatchType, RoomAnalysisRequest};

use super::{vocabulary, RankingStrategy};

/// Maximum number of live recommendations returned
pub const LIVE_RESULT_LIMIT: usize = 15;

const COLOR_POINTS: u32 = 2;
const DIRECT_FURNITURE_POINTS: u32 = 3;
const CATEGORY_FURNITURE_POINTS: u32 = 2;
const SYNONYM_FURNITURE_POINTS: u32 = 2;
const STYLE_POINTS: u32 = 2;
const ROOM_POINTS: u32 = 1;
const PRICE_POINTS: u32 = 1;

/// Scores live product records with integer points
///
/// Products scoring zero are dropped; the rest are banded into a [`MatchType`].
#[derive(Debug, Clone, Copy)]
pub struct LiveScorer {
    limit: usize,
}

impl Default for LiveScorer {
    fn default() -> Self {
        Self::new(LIVE_RESULT_LIMIT)
    }
}

impl LiveScorer {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Computes the integer score and match band of one product
    pub fn score(&self, product: &LiveProduct, request: &RoomAnalysisRequest) -> (u32, MatchType) {
        let room_type = request.room_type.to_lowercase();
        let style = request.style.to_lowercase();

        let name = product.name.to_lowercase();
        let category = product.category.to_lowercase();
        let subcategory = product.subcategory.to_lowercase();
        let description = product.description.to_lowercase();
        let product_colors: Vec<String> = product.colors.iter().map(|c| c.to_lowercase()).collect();

        let mut score = 0;

        for color in request.color_scheme.iter().map(|c| c.to_lowercase()) {
            if product_colors
                .iter()
                .any(|pc| pc.contains(&color) || color.contains(pc.as_str()))
            {
                score += COLOR_POINTS;
            }
        }

        for item in request.furniture_identified.iter().map(|f| f.to_lowercase()) {
            if name.contains(&item) {
                score += DIRECT_FURNITURE_POINTS;
            } else if category.contains(&item) || subcategory.contains(&item) {
                score += CATEGORY_FURNITURE_POINTS;
            } else if vocabulary::furniture_synonyms(&item)
                .iter()
                .any(|syn| name.contains(syn) || category.contains(syn))
            {
                score += SYNONYM_FURNITURE_POINTS;
            }
        }

        if let Some(keywords) = vocabulary::style_keywords(&style) {
            if keywords
                .iter()
                .any(|kw| name.contains(kw) || description.contains(kw))
            {
                score += STYLE_POINTS;
            }
        }

        if let Some(categories) = vocabulary::room_furniture(&room_type) {
            if categories
                .iter()
                .any(|cat| category.contains(cat) || subcategory.contains(cat))
            {
                score += ROOM_POINTS;
            }
        }

        if let Some(price) = product.price {
            // Budget-friendly (< 100) and mid-range (100-500) earn the same bonus
            if price > 0.0 && price <= 500.0 {
                score += PRICE_POINTS;
            }
        }

        (score, MatchType::from_score(score))
    }
}

impl RankingStrategy for LiveScorer {
    type Candidate = LiveProduct;
    type Query = RoomAnalysisRequest;
    type Ranked = LiveMatch;

    fn rank(&self, candidates: &[LiveProduct], query: &RoomAnalysisRequest) -> Vec<LiveMatch> {
        let mut scored: Vec<(u32, MatchType, &LiveProduct)> = candidates
            .iter()
            .map(|product| {
                let (score, match_type) = self.score(product, query);
                (score, match_type, product)
            })
            .filter(|(score, _, _)| *score > 0)
            .collect();

        scored.sort_by(|a, b| b.0.cmp(&a.0));
        scored.truncate(self.limit);

        tracing::debug!(
            strategy = self.name(),
            candidates = candidates.len(),
            returned = scored.len(),
            "Live products ranked"
        );

        scored
            .into_iter()
            .map(|(score, match_type, product)| LiveMatch {
                match_type,
                category: vocabulary::categorize_product(
                    &product.name,
                    &product.category,
                    &product.subcategory,
                ),
                name: product.name.clone(),
                price: product.price,
                currency: product.currency.clone(),
                color: product.colors.clone(),
                image: product.image.clone(),
                url: product.url.clone(),
                match_score: score,
                dimensions: product.dimensions.clone(),
            })
            .collect()
    }

    fn name(&self) -> &'static str {
        "live_points"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn live(name: &str, category: &str, price: Option<f64>, colors: &[&str]) -> LiveProduct {
        LiveProduct {
            name: name.to_string(),
            price,
            currency: "USD".to_string(),
            colors: colors.iter().map(|c| c.to_string()).collect(),
            category: category.to_string(),
            ..Default::default()
        }
    }

    fn request() -> RoomAnalysisRequest {
        RoomAnalysisRequest {
            room_type: "Living Room".to_string(),
            style: "Modern".to_string(),
            color_scheme: vec!["white".to_string(), "gray".to_string()],
            furniture_identified: vec!["sofa".to_string()],
            improvement_suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_direct_match() {
        let scorer = LiveScorer::default();
        let sofa = LiveProduct {
            description: "A sleek three-seat sofa".to_string(),
            ..live("KIVIK Sofa", "sofa", Some(699.0), &["White", "Light gray"])
        };

        // colors 2+2, name 3, style 2, room 1, price 0
        let (score, match_type) = scorer.score(&sofa, &request());
        assert_eq!(score, 10);
        assert_eq!(match_type, MatchType::Direct);
    }

    #[test]
    fn test_color_substring_both_directions() {
        let scorer = LiveScorer::default();
        let mut req = request();
        req.furniture_identified.clear();
        req.color_scheme = vec!["light gray".to_string()];

        let product = live("Cushion", "", None, &["gray"]);
        assert_eq!(scorer.score(&product, &req).0, 2);
    }

    #[test]
    fn test_furniture_category_and_synonym_matches() {
        let scorer = LiveScorer::default();
        let mut req = request();
        req.color_scheme.clear();
        req.style = String::new();
        req.room_type = String::new();

        let by_category = live("EKTORP", "sofa beds", None, &[]);
        assert_eq!(scorer.score(&by_category, &req).0, 2);

        let by_synonym = live("Two-seat couch", "seating", None, &[]);
        assert_eq!(scorer.score(&by_synonym, &req).0, 2);
    }

    #[test]
    fn test_style_keyword_counts_once() {
        let scorer = LiveScorer::default();
        let req = RoomAnalysisRequest {
            room_type: String::new(),
            style: "scandinavian".to_string(),
            color_scheme: Vec::new(),
            furniture_identified: Vec::new(),
            improvement_suggestions: Vec::new(),
        };
        let product = LiveProduct {
            description: "Nordic design in natural oak and birch wood".to_string(),
            ..live("Shelf", "", None, &[])
        };
        assert_eq!(scorer.score(&product, &req), (2, MatchType::Indirect));
    }

    #[test]
    fn test_unknown_style_scores_nothing() {
        let scorer = LiveScorer::default();
        let mut req = request();
        req.style = "Scandinavian Minimalist".to_string();
        req.color_scheme.clear();
        req.furniture_identified.clear();
        req.room_type = String::new();

        let product = live("Scandinavian minimalist chair", "", None, &[]);
        assert_eq!(scorer.score(&product, &req).0, 0);
    }

    #[test]
    fn test_price_bands() {
        let scorer = LiveScorer::default();
        let req = RoomAnalysisRequest {
            room_type: String::new(),
            style: String::new(),
            color_scheme: Vec::new(),
            furniture_identified: Vec::new(),
            improvement_suggestions: Vec::new(),
        };

        assert_eq!(scorer.score(&live("a", "", Some(49.0), &[]), &req), (1, MatchType::Suggested));
        assert_eq!(scorer.score(&live("b", "", Some(100.0), &[]), &req).0, 1);
        assert_eq!(scorer.score(&live("c", "", Some(500.0), &[]), &req).0, 1);
        assert_eq!(scorer.score(&live("d", "", Some(500.01), &[]), &req).0, 0);
        assert_eq!(scorer.score(&live("e", "", None, &[]), &req).0, 0);
    }

    #[test]
    fn test_rank_drops_zero_scores_and_sorts() {
        let scorer = LiveScorer::default();
        let products = vec![
            live("Unrelated", "", Some(900.0), &[]),
            live("Lamp", "lighting", Some(900.0), &[]),
            live("KIVIK Sofa", "sofa", Some(50.0), &["white"]),
        ];

        let ranked = scorer.rank(&products, &request());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "KIVIK Sofa");
        assert_eq!(ranked[0].category, "sofa");
        assert_eq!(ranked[1].name, "Lamp");
        assert_eq!(ranked[1].match_score, 1);
        assert_eq!(ranked[1].match_type, MatchType::Suggested);
        assert_eq!(ranked[1].category, "lighting");
    }

    #[test]
    fn test_rank_respects_limit() {
        let scorer = LiveScorer::new(2);
        let products: Vec<LiveProduct> = (0..5)
            .map(|i| live(&format!("Sofa {}", i), "", Some(10.0), &[]))
            .collect();

        let ranked = scorer.rank(&products, &request());
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Sofa 0");
        assert_eq!(ranked[1].name, "Sofa 1");
    }
}
