/// Live product source abstraction
///
/// A product source answers free-text search terms with raw product records. Each source
/// implements single-term search; the shared [`ProductSource::search_and_fetch`] runs a
/// batch of terms, merges duplicates and tolerates partial failure.
use std::collections::HashSet;

use crate::{
    error::{AppError, AppResult},
    models::{LiveProduct, RoomAnalysisRequest},
};

pub mod catalog;
pub mod http;

pub use catalog::CatalogProductSource;
pub use http::HttpProductSource;

/// Maximum number of distinct products fetched for one recommendation request
pub const MAX_FETCHED_PRODUCTS: usize = 5;

/// Maximum number of search terms generated from one analysis
pub const MAX_SEARCH_TERMS: usize = 10;

/// Trait for live product sources
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    /// Search products matching one term, returning at most `limit` records
    async fn search(&self, term: &str, limit: usize) -> AppResult<Vec<LiveProduct>>;

    /// Search every term and merge the results
    ///
    /// Duplicates (same url, or same name when the url is missing) are dropped and the
    /// merged list is capped at [`MAX_FETCHED_PRODUCTS`]. Fails only when every term fails.
    async fn search_and_fetch(
        &self,
        terms: &[String],
        limit_per_term: usize,
    ) -> AppResult<Vec<LiveProduct>> {
        let mut seen = HashSet::new();
        let mut products = Vec::new();
        let mut errors = 0;

        for term in terms {
            match self.search(term, limit_per_term).await {
                Ok(found) => {
                    for product in found {
                        if seen.insert(product.dedup_key()) {
                            products.push(product);
                        }
                    }
                }
                Err(e) => {
                    tracing::error!(term = %term, source = self.name(), error = %e, "Product search failed for term");
                    errors += 1;
                }
            }
        }

        if errors > 0 {
            tracing::warn!(
                success_count = terms.len() - errors,
                error_count = errors,
                "Partial product search failure"
            );
        }

        if !terms.is_empty() && errors == terms.len() {
            return Err(AppError::ExternalApi(
                "Failed to fetch any product data".to_string(),
            ));
        }

        products.truncate(MAX_FETCHED_PRODUCTS);

        tracing::info!(
            source = self.name(),
            terms = terms.len(),
            products = products.len(),
            "Products fetched"
        );

        Ok(products)
    }

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Builds search terms from analysis data
///
/// Up to three furniture items, then style, two colors and the room type as
/// "<x> furniture". Terms are trimmed; empty and repeated terms are dropped.
pub fn generate_search_terms(request: &RoomAnalysisRequest) -> Vec<String> {
    let mut candidates: Vec<String> = request
        .furniture_identified
        .iter()
        .take(3)
        .cloned()
        .collect();

    let style = request.style.to_lowercase();
    if !style.trim().is_empty() {
        candidates.push(format!("{} furniture", style.trim()));
    }

    for color in request.color_scheme.iter().take(2) {
        candidates.push(format!("{} furniture", color.trim()));
    }

    if !request.room_type.trim().is_empty() {
        candidates.push(format!("{} furniture", request.room_type.trim()));
    }

    let mut seen = HashSet::new();
    let terms: Vec<String> = candidates
        .into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty() && t != "furniture")
        .filter(|t| seen.insert(t.clone()))
        .take(MAX_SEARCH_TERMS)
        .collect();

    tracing::info!(count = terms.len(), terms = ?terms, "Generated search terms");
    terms
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlakySource;

    #[async_trait::async_trait]
    impl ProductSource for FlakySource {
        async fn search(&self, term: &str, _limit: usize) -> AppResult<Vec<LiveProduct>> {
            match term {
                "broken" => Err(AppError::ExternalApi("timeout".to_string())),
                "sofa" => Ok(vec![
                    LiveProduct {
                        name: "KIVIK".to_string(),
                        url: "https://example.com/kivik".to_string(),
                        ..Default::default()
                    },
                    LiveProduct {
                        name: "EKTORP".to_string(),
                        url: "https://example.com/ektorp".to_string(),
                        ..Default::default()
                    },
                ]),
                _ => Ok((0..4)
                    .map(|i| LiveProduct {
                        name: format!("{} {}", term, i),
                        url: if i == 0 {
                            "https://example.com/kivik".to_string()
                        } else {
                            String::new()
                        },
                        ..Default::default()
                    })
                    .collect()),
            }
        }

        fn name(&self) -> &'static str {
            "flaky"
        }
    }

    fn terms(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[tokio::test]
    async fn test_search_and_fetch_dedups_and_caps() {
        let products = FlakySource
            .search_and_fetch(&terms(&["sofa", "broken", "lamp"]), 1)
            .await
            .unwrap();

        let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["KIVIK", "EKTORP", "lamp 1", "lamp 2", "lamp 3"]);
    }

    #[tokio::test]
    async fn test_search_and_fetch_all_failed() {
        let err = FlakySource
            .search_and_fetch(&terms(&["broken", "broken"]), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }

    #[tokio::test]
    async fn test_search_and_fetch_no_terms() {
        let products = FlakySource.search_and_fetch(&[], 1).await.unwrap();
        assert!(products.is_empty());
    }

    #[test]
    fn test_generate_search_terms() {
        let terms = generate_search_terms(&RoomAnalysisRequest::sample());
        assert_eq!(
            terms,
            vec![
                "sofa",
                "coffee table",
                "bookshelf",
                "scandinavian minimalist furniture",
                "white furniture",
                "oak furniture",
                "living room furniture",
            ]
        );
    }

    #[test]
    fn test_generate_search_terms_skips_empty_and_duplicates() {
        let request = RoomAnalysisRequest {
            room_type: String::new(),
            style: "  ".to_string(),
            color_scheme: vec!["white".to_string(), "white".to_string(), "blue".to_string()],
            furniture_identified: vec![" ".to_string(), "sofa".to_string()],
            improvement_suggestions: Vec::new(),
        };

        assert_eq!(generate_search_terms(&request), vec!["sofa", "white furniture"]);
    }
}
