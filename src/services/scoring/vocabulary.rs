//! Fixed vocabularies shared by the scorers and the analysis adapter.

/// Catalog categories relevant to each canonical room type
pub fn room_categories(room_type: &str) -> &'static [&'static str] {
    match room_type.trim().to_lowercase().as_str() {
        "living room" => &["sofas", "chairs", "coffee tables", "lighting", "storage"],
        "bedroom" => &["beds", "dressers", "lighting", "storage"],
        "kitchen" => &["tables", "chairs", "storage"],
        "office" => &["desks", "chairs", "storage", "lighting"],
        _ => &[],
    }
}

/// Keywords that signal a design style in live product text
pub fn style_keywords(style: &str) -> Option<&'static [&'static str]> {
    let keywords: &'static [&'static str] = match style {
        "scandinavian" => &[
            "scandinavian",
            "nordic",
            "minimalist",
            "clean",
            "simple",
            "natural",
            "wood",
            "oak",
            "birch",
        ],
        "modern" => &["modern", "contemporary", "sleek", "minimalist", "clean", "geometric"],
        "traditional" => &["traditional", "classic", "timeless", "elegant", "formal"],
        "industrial" => &["industrial", "metal", "steel", "exposed", "raw", "urban"],
        "minimalist" => &["minimalist", "minimal", "simple", "clean", "uncluttered", "sparse"],
        "bohemian" => &["bohemian", "boho", "eclectic", "colorful", "vibrant", "artistic"],
        "rustic" => &["rustic", "country", "farmhouse", "natural", "wood", "distressed"],
        "luxury" => &["luxury", "premium", "high-end", "elegant", "sophisticated"],
        _ => return None,
    };
    Some(keywords)
}

/// Live furniture categories relevant to each room type
pub fn room_furniture(room_type: &str) -> Option<&'static [&'static str]> {
    let categories: &'static [&'static str] = match room_type {
        "living room" => &["sofa", "coffee_table", "chair", "lighting", "storage", "rug"],
        "bedroom" => &["bed", "storage", "lighting", "rug"],
        "kitchen" | "dining room" => &["chair", "storage", "lighting"],
        "office" => &["desk", "chair", "storage", "lighting"],
        "bathroom" => &["storage", "lighting"],
        _ => return None,
    };
    Some(categories)
}

/// Synonyms for live furniture categories
pub fn furniture_synonyms(item: &str) -> &'static [&'static str] {
    match item {
        "sofa" => &["couch", "settee", "divan"],
        "coffee_table" => &["coffee table", "side table", "end table"],
        "chair" => &["seat", "stool"],
        "lighting" => &["lamp", "light", "fixture"],
        "storage" => &["bookcase", "shelf", "cabinet", "dresser", "wardrobe"],
        "rug" => &["carpet", "mat"],
        "bed" => &["mattress", "bedframe"],
        "desk" => &["table", "workstation"],
        _ => &[],
    }
}

/// Derives a display category for a live product from its name
///
/// Falls back to subcategory, then category, then "furniture".
pub fn categorize_product(name: &str, category: &str, subcategory: &str) -> String {
    const RULES: &[(&str, &[&str])] = &[
        ("sofa", &["sofa", "couch", "settee"]),
        ("coffee_table", &["coffee table", "side table", "end table"]),
        ("chair", &["chair", "seat", "stool"]),
        ("lighting", &["lamp", "light", "fixture"]),
        ("storage", &["bookcase", "shelf", "cabinet", "dresser"]),
        ("rug", &["rug", "carpet", "mat"]),
        ("bed", &["bed", "mattress", "bedframe"]),
        ("desk", &["desk", "table", "workstation"]),
    ];

    let name = name.to_lowercase();
    for (label, words) in RULES {
        if words.iter().any(|word| name.contains(word)) {
            return label.to_string();
        }
    }

    [subcategory, category]
        .into_iter()
        .find(|s| !s.is_empty())
        .map(str::to_lowercase)
        .unwrap_or_else(|| "furniture".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_categories_known_and_unknown() {
        assert!(room_categories("Living Room").contains(&"sofas"));
        assert!(room_categories("office").contains(&"desks"));
        assert!(room_categories("garage").is_empty());
    }

    #[test]
    fn test_style_keywords_lookup() {
        assert!(style_keywords("scandinavian").unwrap().contains(&"oak"));
        assert!(style_keywords("scandinavian minimalist").is_none());
    }

    #[test]
    fn test_categorize_by_name() {
        assert_eq!(categorize_product("KIVIK Couch", "", ""), "sofa");
        assert_eq!(categorize_product("LACK Coffee table", "", ""), "coffee_table");
        assert_eq!(categorize_product("BILLY Bookcase", "", ""), "storage");
        assert_eq!(categorize_product("HEKTAR Floor lamp", "", ""), "lighting");
    }

    #[test]
    fn test_categorize_fallbacks() {
        assert_eq!(categorize_product("FEJKA", "Decor", "Plants"), "plants");
        assert_eq!(categorize_product("FEJKA", "Decor", ""), "decor");
        assert_eq!(categorize_product("FEJKA", "", ""), "furniture");
    }
}
