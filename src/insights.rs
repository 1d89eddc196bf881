//! Wardrobe composition analysis: breakdowns, wear statistics and advice.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::gaps::ESSENTIAL_CATEGORIES;
use crate::wardrobe::{Category, Season, WardrobeItem};

/// An essential category with fewer items than this gets a nudge.
const MIN_ESSENTIAL_ITEMS: usize = 3;
const MIN_DISTINCT_COLORS: usize = 3;
const MAX_DISTINCT_COLORS: usize = 10;
const WORN_LIST_LEN: usize = 5;
/// Item count that earns a full wardrobe score.
const FULL_WARDROBE_ITEMS: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WornItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub times_worn: u32,
}

impl From<&WardrobeItem> for WornItem {
    fn from(item: &WardrobeItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            category: item.category,
            times_worn: item.usage_count,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeAnalysis {
    pub total_items: usize,
    pub category_breakdown: BTreeMap<Category, usize>,
    pub color_breakdown: BTreeMap<String, usize>,
    pub style_breakdown: BTreeMap<String, usize>,
    pub season_breakdown: BTreeMap<Season, usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_style: Option<String>,
    pub most_worn_items: Vec<WornItem>,
    pub least_worn_items: Vec<WornItem>,
    pub recommendations: Vec<String>,
    pub wardrobe_score: u8,
    pub analysis: String,
}

pub fn analyze_wardrobe(items: &[WardrobeItem]) -> WardrobeAnalysis {
    if items.is_empty() {
        return WardrobeAnalysis {
            recommendations: vec!["Start by adding some clothing items to your wardrobe".into()],
            analysis: "No wardrobe items to analyze".into(),
            ..Default::default()
        };
    }

    let mut out = WardrobeAnalysis {
        total_items: items.len(),
        ..Default::default()
    };

    for item in items {
        *out.category_breakdown.entry(item.category).or_default() += 1;
        if let Some(color) = item.primary_color() {
            *out.color_breakdown.entry(color).or_default() += 1;
        }
        if let Some(style) = item.style.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            *out.style_breakdown.entry(style.to_lowercase()).or_default() += 1;
        }
        let seasons: BTreeSet<Season> = item.seasons.iter().copied().collect();
        for season in seasons {
            *out.season_breakdown.entry(season).or_default() += 1;
        }
    }

    // ties resolve to the alphabetically first style
    out.dominant_style = out
        .style_breakdown
        .iter()
        .fold(None::<(&String, usize)>, |best, (style, &n)| match best {
            Some((_, m)) if m >= n => best,
            _ => Some((style, n)),
        })
        .map(|(style, _)| style.clone());

    let mut by_wear: Vec<&WardrobeItem> = items.iter().collect();
    by_wear.sort_by(|a, b| b.usage_count.cmp(&a.usage_count));
    out.most_worn_items = by_wear
        .into_iter()
        .take(WORN_LIST_LEN)
        .map(WornItem::from)
        .collect();
    out.least_worn_items = items
        .iter()
        .filter(|i| i.usage_count == 0)
        .take(WORN_LIST_LEN)
        .map(WornItem::from)
        .collect();

    for category in ESSENTIAL_CATEGORIES {
        let count = out.category_breakdown.get(&category).copied().unwrap_or(0);
        if count < MIN_ESSENTIAL_ITEMS {
            out.recommendations.push(format!(
                "Consider adding more {} for a complete wardrobe",
                category.as_str().to_lowercase()
            ));
        }
    }

    let colors = out.color_breakdown.len();
    if colors < MIN_DISTINCT_COLORS {
        out.recommendations
            .push("Add more color variety to increase outfit possibilities".into());
    } else if colors > MAX_DISTINCT_COLORS {
        out.recommendations
            .push("Focus on a cohesive color palette for better coordination".into());
    }

    out.wardrobe_score = wardrobe_score(items.len());
    out.analysis = format!(
        "Your wardrobe has {} items with a focus on {} style.",
        items.len(),
        out.dominant_style.as_deref().unwrap_or("mixed")
    );
    out
}

fn wardrobe_score(n: usize) -> u8 {
    (n as f64 / FULL_WARDROBE_ITEMS * 100.0).round().min(100.0) as u8
}
