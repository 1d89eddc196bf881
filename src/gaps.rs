//! Wardrobe gap analysis and per-outfit missing-piece suggestions.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::preferences::EventType;
use crate::rules::piece_suggestion;
use crate::wardrobe::{Category, WardrobeItem};

/// Categories every wardrobe needs.
pub const ESSENTIAL_CATEGORIES: [Category; 3] =
    [Category::Tops, Category::Bottoms, Category::Shoes];
/// Categories that widen the outfit space.
pub const VERSATILE_CATEGORIES: [Category; 3] =
    [Category::Outerwear, Category::Accessories, Category::Dresses];

/// One suggestion per absent category: essentials first, then versatile ones,
/// each in fixed order.
pub fn analyze_wardrobe_gaps(items: &[WardrobeItem]) -> Vec<String> {
    let present: BTreeSet<Category> = items.iter().map(|i| i.category).collect();

    let essentials = ESSENTIAL_CATEGORIES
        .iter()
        .filter(|c| !present.contains(c))
        .map(|c| format!("Add {} to build a foundation wardrobe", c.as_str().to_lowercase()));
    let versatile = VERSATILE_CATEGORIES
        .iter()
        .filter(|c| !present.contains(c))
        .map(|c| {
            format!(
                "Consider adding {} for more outfit variety",
                c.as_str().to_lowercase()
            )
        });

    essentials.chain(versatile).collect()
}

/// A piece the user does not own but the outfit would benefit from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceSuggestion {
    pub category: Category,
    pub name: String,
    pub description: String,
}

/// Essential pieces for `event` that the outfit lacks.
pub fn suggest_missing_pieces(outfit: &[&WardrobeItem], event: EventType) -> Vec<PieceSuggestion> {
    let present: BTreeSet<Category> = outfit.iter().map(|i| i.category).collect();
    event
        .essential_pieces()
        .iter()
        .filter(|c| !present.contains(c))
        .map(|&category| match piece_suggestion(category, event) {
            Some((name, description)) => PieceSuggestion {
                category,
                name: name.to_string(),
                description: description.to_string(),
            },
            None => PieceSuggestion {
                category,
                name: format!("{category} Item"),
                description: format!(
                    "A nice {} piece for this occasion",
                    category.as_str().to_lowercase()
                ),
            },
        })
        .collect()
}
