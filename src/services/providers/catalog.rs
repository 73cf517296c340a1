use std::sync::Arc;

use crate::{
    error::AppResult,
    models::{LiveProduct, Product},
    services::{catalog::Catalog, providers::ProductSource},
};

/// Words ignored when matching search terms against the catalog
const STOP_WORDS: &[&str] = &["furniture", "and", "the", "for", "with"];

/// Product source backed by the static catalog
///
/// Used when no live product service is configured. A product matches a term when any
/// significant word of the term appears in its name, categories, description, styles or colors.
#[derive(Clone)]
pub struct CatalogProductSource {
    catalog: Arc<Catalog>,
}

impl CatalogProductSource {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

fn searchable_text(product: &Product) -> String {
    let mut text = format!(
        "{} {} {} {}",
        product.name, product.category, product.subcategory, product.description
    );
    for tag in product.style.iter().chain(product.colors.iter()) {
        text.push(' ');
        text.push_str(tag);
    }
    text.to_lowercase()
}

fn term_tokens(term: &str) -> Vec<String> {
    term.to_lowercase()
        .split_whitespace()
        .filter(|t| t.len() >= 3 && !STOP_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}

#[async_trait::async_trait]
impl ProductSource for CatalogProductSource {
    async fn search(&self, term: &str, limit: usize) -> AppResult<Vec<LiveProduct>> {
        let tokens = term_tokens(term);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let products: Vec<LiveProduct> = self
            .catalog
            .products()
            .iter()
            .filter(|p| {
                let text = searchable_text(p);
                tokens.iter().any(|t| text.contains(t.as_str()))
            })
            .take(limit)
            .map(LiveProduct::from)
            .collect();

        tracing::debug!(term = %term, results = products.len(), source = self.name(), "Catalog search completed");

        Ok(products)
    }

    fn name(&self) -> &'static str {
        "catalog"
    }
}
