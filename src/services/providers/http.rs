/// HTTP JSON product source
///
/// Queries a product search service at `GET {base_url}/search?q=<term>&limit=<n>`.
/// The service may answer with a bare array or with `{"products": [...]}`; entries
/// that do not deserialize are skipped. Results are cached per term.
use reqwest::Client as HttpClient;

use crate::{
    cache::{Cache, CacheKey},
    cached,
    error::{AppError, AppResult},
    models::LiveProduct,
    services::providers::ProductSource,
};

const SEARCH_CACHE_TTL: u64 = 3600; // 1 hour

#[derive(Clone)]
pub struct HttpProductSource {
    http_client: HttpClient,
    base_url: String,
    cache: Cache,
}

impl HttpProductSource {
    pub fn new(cache: Cache, base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            cache,
        }
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url.trim_end_matches('/'))
    }

    async fn fetch(&self, term: &str, limit: usize) -> AppResult<Vec<LiveProduct>> {
        let response = self
            .http_client
            .get(self.search_url())
            .query(&[("q", term.to_string()), ("limit", limit.to_string())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "Product source returned status {}: {}",
                status, body
            )));
        }

        let body: serde_json::Value = response.json().await?;
        let mut products = parse_products(&body)?;
        products.truncate(limit);

        tracing::info!(
            term = %term,
            results = products.len(),
            source = self.name(),
            "Product search completed"
        );

        Ok(products)
    }
}

/// Extracts product records from a search response body
fn parse_products(body: &serde_json::Value) -> AppResult<Vec<LiveProduct>> {
    let entries = body
        .as_array()
        .or_else(|| body["products"].as_array())
        .ok_or_else(|| AppError::ExternalApi("Invalid product source response format".to_string()))?;

    Ok(entries
        .iter()
        .filter_map(|entry| match serde_json::from_value::<LiveProduct>(entry.clone()) {
            Ok(product) => Some(product),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping malformed product record");
                None
            }
        })
        .collect())
}

#[async_trait::async_trait]
impl ProductSource for HttpProductSource {
    async fn search(&self, term: &str, limit: usize) -> AppResult<Vec<LiveProduct>> {
        if term.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search term cannot be empty".to_string(),
            ));
        }

        cached!(
            self.cache,
            CacheKey::ProductSearch {
                term: term.to_string(),
                limit,
            },
            SEARCH_CACHE_TTL,
            async move { self.fetch(term, limit).await }
        )
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bare_array() {
        let body = json!([
            {"name": "KIVIK Sofa", "price": 699.0, "colors": ["gray"], "url": "https://example.com/kivik"},
            {"name": "LACK Side table"}
        ]);

        let products = parse_products(&body).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].price, Some(699.0));
        assert_eq!(products[1].price, None);
    }

    #[test]
    fn test_parse_wrapped_products() {
        let body = json!({"products": [{"name": "BILLY Bookcase", "category": "storage"}]});
        let products = parse_products(&body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].category, "storage");
    }

    #[test]
    fn test_parse_skips_malformed_entries() {
        let body = json!([{"name": "OK"}, {"name": 42}, "nonsense"]);
        let products = parse_products(&body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "OK");
    }

    #[test]
    fn test_parse_invalid_shape() {
        let err = parse_products(&json!({"items": []})).unwrap_err();
        assert!(matches!(err, AppError::ExternalApi(_)));
    }

    #[test]
    fn test_search_url_trims_slash() {
        let (cache, _handle) = Cache::disabled();
        let source = HttpProductSource::new(cache, "http://products.local/".to_string());
        assert_eq!(source.search_url(), "http://products.local/search");
    }

    #[tokio::test]
    async fn test_empty_term_rejected() {
        let (cache, _handle) = Cache::disabled();
        let source = HttpProductSource::new(cache, "http://127.0.0.1:9".to_string());
        let err = source.search("  ", 1).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_unreachable_source_is_http_error() {
        let (cache, _handle) = Cache::disabled();
        let source = HttpProductSource::new(cache, "http://127.0.0.1:9".to_string());
        let err = source.search("sofa", 1).await.unwrap_err();
        assert!(matches!(err, AppError::HttpClient(_)));
    }
}
