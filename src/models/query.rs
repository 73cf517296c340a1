use serde::{Deserialize, Serialize};

/// Budget tier requested by the client
///
/// Parsing is case-insensitive. Unrecognized tiers become `Unrestricted`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
    Unrestricted,
}

impl From<&str> for BudgetTier {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "low" => BudgetTier::Low,
            "medium" => BudgetTier::Medium,
            "high" => BudgetTier::High,
            _ => BudgetTier::Unrestricted,
        }
    }
}

impl From<String> for BudgetTier {
    fn from(value: String) -> Self {
        BudgetTier::from(value.as_str())
    }
}

impl BudgetTier {
    /// Inclusive price range for this tier
    pub fn price_range(self) -> PriceRange {
        match self {
            BudgetTier::Low => PriceRange::new(0.0, 200.0),
            BudgetTier::Medium => PriceRange::new(200.0, 800.0),
            BudgetTier::High => PriceRange::new(800.0, f64::INFINITY),
            BudgetTier::Unrestricted => PriceRange::new(0.0, f64::INFINITY),
        }
    }
}

/// Inclusive price range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        self.min <= price && price <= self.max
    }
}

fn default_limit() -> usize {
    10
}

fn default_budget() -> BudgetTier {
    BudgetTier::Unrestricted
}

/// Query consumed by the catalog scorer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchQuery {
    pub room_type: String,
    #[serde(default)]
    pub styles: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    /// Omitted budgets do not restrict prices
    #[serde(default = "default_budget")]
    pub budget: BudgetTier,
    /// Desired furniture categories (e.g. "sofas")
    #[serde(default)]
    pub furniture: Vec<String>,
    /// Free-text preferences and exclusions (e.g. "no plants")
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default = "default_limit")]
    pub limit: usize,
}
