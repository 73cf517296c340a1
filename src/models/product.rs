use serde::{Deserialize, Serialize};

/// Physical dimensions of a catalog product
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default = "default_unit")]
    pub unit: String,
}

fn default_unit() -> String {
    "in".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

/// A product from the static catalog
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    pub price: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub style: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub dimensions: Option<Dimensions>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub product_url: String,
}

/// A catalog product paired with its match score
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub match_score: f64,
}

// ============================================================================
// Live Product Source Types
// ============================================================================

/// One measurement reported by the live product source (e.g. width 80 cm)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DimensionEntry {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub unit: String,
}

/// Raw product record returned by a live product source
///
/// Every field is optional on the wire and defaults to empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LiveProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub dimensions: Vec<DimensionEntry>,
}

impl LiveProduct {
    /// Key used to collapse the same product found by several search terms
    pub fn dedup_key(&self) -> String {
        if self.url.is_empty() {
            self.name.to_lowercase()
        } else {
            self.url.clone()
        }
    }
}

impl From<&Product> for LiveProduct {
    fn from(product: &Product) -> Self {
        let dimensions = product
            .dimensions
            .as_ref()
            .map(|d| {
                [("length", d.length), ("width", d.width), ("height", d.height)]
                    .into_iter()
                    .map(|(kind, value)| DimensionEntry {
                        kind: kind.to_string(),
                        value: value.to_string(),
                        unit: d.unit.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        LiveProduct {
            name: product.name.clone(),
            price: Some(product.price),
            currency: product.currency.clone(),
            colors: product.colors.clone(),
            category: product.category.clone(),
            subcategory: product.subcategory.clone(),
            description: product.description.clone(),
            image: product.image_url.clone(),
            url: product.product_url.clone(),
            dimensions,
        }
    }
}

/// Discrete band derived from the integer live match score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    Direct,
    Indirect,
    Suggested,
}

impl MatchType {
    /// Classifies an integer match score
    pub fn from_score(score: u32) -> Self {
        if score >= 5 {
            MatchType::Direct
        } else if score >= 2 {
            MatchType::Indirect
        } else {
            MatchType::Suggested
        }
    }
}

/// A live product recommendation returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LiveMatch {
    pub match_type: MatchType,
    pub category: String,
    pub name: String,
    pub price: Option<f64>,
    pub currency: String,
    pub color: Vec<String>,
    pub image: String,
    pub url: String,
    pub match_score: u32,
    pub dimensions: Vec<DimensionEntry>,
}
