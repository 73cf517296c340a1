//! Maps raw vision-model output onto the catalog scorer's vocabulary.

use crate::models::{AnalysisFilters, RoomAnalysis, ScoredProduct};

const MAX_COLORS: usize = 3;
const MAX_FURNITURE: usize = 5;
const DEFAULT_ROOM_TYPE: &str = "living room";
const DEFAULT_STYLE: &str = "modern";
const DEFAULT_COLOR: &str = "white";

/// Collapses a detected room label onto one of the four canonical room types
pub fn canonical_room_type(room_type: &str) -> &'static str {
    match room_type.trim().to_lowercase().as_str() {
        "living room" => "living room",
        "bedroom" => "bedroom",
        "kitchen" | "dining room" => "kitchen",
        "office" | "bathroom" | "study" => "office",
        _ => DEFAULT_ROOM_TYPE,
    }
}

/// Collapses a detected style adjective onto a canonical style tag
pub fn canonical_style(style: &str) -> &'static str {
    match style.trim().to_lowercase().as_str() {
        "modern" | "contemporary" => "modern",
        "traditional" => "traditional",
        "classic" => "classic",
        "minimalist" => "minimalist",
        "scandinavian" => "scandinavian",
        "industrial" => "industrial",
        "bohemian" => "colorful",
        "rustic" => "rustic",
        "luxury" => "luxury",
        _ => DEFAULT_STYLE,
    }
}

/// Maps a detected furniture noun onto a catalog category; unknown nouns pass through
pub fn canonical_furniture(item: &str) -> String {
    let item = item.trim().to_lowercase();
    let mapped = match item.as_str() {
        "sofa" | "couch" => "sofas",
        "chair" => "chairs",
        "table" | "dining table" => "tables",
        "coffee table" => "coffee tables",
        "bed" => "beds",
        "dresser" => "dressers",
        "desk" => "desks",
        "bookshelf" | "shelf" | "cabinet" | "tv stand" => "storage",
        "lamp" | "lighting" => "lighting",
        _ => return item,
    };
    mapped.to_string()
}

/// Converts a free-text improvement into a preference phrase, if it names a known trigger
pub fn improvement_preference(improvement: &str) -> Option<&'static str> {
    let text = improvement.to_lowercase();
    if text.contains("plant") {
        Some("plants")
    } else if text.contains("lamp") || text.contains("lighting") {
        Some("better lighting")
    } else if text.contains("pillow") {
        Some("decorative pillows")
    } else if text.contains("rug") {
        Some("area rugs")
    } else if text.contains("art") || text.contains("decoration") {
        Some("wall decorations")
    } else {
        None
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

/// Builds scoring filters from a vision analysis
pub fn map_analysis_to_filters(analysis: &RoomAnalysis) -> AnalysisFilters {
    let mut furniture_preferences = Vec::new();
    for item in &analysis.furniture {
        push_unique(&mut furniture_preferences, canonical_furniture(item));
    }
    furniture_preferences.truncate(MAX_FURNITURE);

    let mut additional_info = Vec::new();
    for phrase in analysis
        .improvements
        .iter()
        .filter_map(|i| improvement_preference(i))
    {
        push_unique(&mut additional_info, phrase.to_string());
    }

    let mut color_preferences: Vec<String> = analysis
        .color_scheme
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .take(MAX_COLORS)
        .collect();
    if color_preferences.is_empty() {
        color_preferences.push(DEFAULT_COLOR.to_string());
    }

    AnalysisFilters {
        room_type: canonical_room_type(&analysis.room_type).to_string(),
        style_preferences: vec![canonical_style(&analysis.current_style).to_string()],
        color_preferences,
        furniture_preferences,
        additional_info,
    }
}

/// Human readable summary of an analysis and its recommendations
pub fn summarize(analysis: &RoomAnalysis, recommendations: &[ScoredProduct]) -> String {
    let room_type = non_empty_or_unknown(&analysis.room_type);
    let style = non_empty_or_unknown(&analysis.current_style);

    let mut summary = format!(
        "Analyzed {} with {} style (confidence: {:.1}%)\nFound {} furniture recommendations",
        room_type,
        style,
        analysis.confidence * 100.0,
        recommendations.len()
    );

    if let Some(top) = recommendations.first() {
        summary.push_str(&format!(
            "\nTop recommendation: {} (${:.2})",
            top.product.name, top.product.price
        ));
    }

    summary
}

fn non_empty_or_unknown(value: &str) -> &str {
    if value.trim().is_empty() {
        "Unknown"
    } else {
        value
    }
}
