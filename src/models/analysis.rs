use serde::{Deserialize, Serialize};

/// Structured room description produced by the vision model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoomAnalysis {
    #[serde(default)]
    pub room_type: String,
    #[serde(default)]
    pub current_style: String,
    #[serde(default)]
    pub color_scheme: Vec<String>,
    #[serde(default)]
    pub furniture: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
}

impl RoomAnalysis {
    /// Fallback record used when the vision model cannot be reached
    pub fn unavailable() -> Self {
        Self::default()
    }
}

/// Scoring filters derived from a [`RoomAnalysis`]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisFilters {
    pub room_type: String,
    pub style_preferences: Vec<String>,
    pub color_preferences: Vec<String>,
    pub furniture_preferences: Vec<String>,
    pub additional_info: Vec<String>,
}

/// Analysis data submitted for live product recommendations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomAnalysisRequest {
    pub room_type: String,
    pub style: String,
    #[serde(default)]
    pub color_scheme: Vec<String>,
    #[serde(default)]
    pub furniture_identified: Vec<String>,
    #[serde(default)]
    pub improvement_suggestions: Vec<String>,
}

impl RoomAnalysisRequest {
    /// Sample request served by the live recommendation test endpoint
    pub fn sample() -> Self {
        Self {
            room_type: "living room".to_string(),
            style: "Scandinavian Minimalist".to_string(),
            color_scheme: vec![
                "white".to_string(),
                "oak".to_string(),
                "sage green".to_string(),
            ],
            furniture_identified: vec![
                "sofa".to_string(),
                "coffee table".to_string(),
                "bookshelf".to_string(),
            ],
            improvement_suggestions: vec![
                "add warm lighting".to_string(),
                "introduce natural wood textures".to_string(),
            ],
        }
    }
}
