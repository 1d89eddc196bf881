//! Wardrobe data model: items, categories, seasons and the category grouper.
//!
//! Items are owned by the caller (storage collaborator). The engine only borrows
//! them; recommendations carry clones, the inputs stay untouched.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Closed set of clothing categories. Declaration order is the canonical order
/// used by grouping and gap analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    AllSeason,
}

impl Season {
    pub fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::AllSeason => "all-season",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single catalogued piece of clothing.
///
/// `name` doubles as display label and as the text the mood matcher inspects.
/// Optional fields contribute nothing to scoring when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WardrobeItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Primary color, lower-cased on comparison.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occasions: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<Season>,
    /// Times previously selected.
    #[serde(default)]
    pub usage_count: u32,
}

impl WardrobeItem {
    /// Minimal item; the remaining attributes start empty.
    pub fn new(id: impl Into<String>, name: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            color: None,
            material: None,
            style: None,
            occasions: Vec::new(),
            seasons: Vec::new(),
            usage_count: 0,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_seasons(mut self, seasons: impl IntoIterator<Item = Season>) -> Self {
        self.seasons = seasons.into_iter().collect();
        self
    }

    pub fn worn(mut self, times: u32) -> Self {
        self.usage_count = times;
        self
    }

    /// Normalized primary color, if any.
    pub fn primary_color(&self) -> Option<String> {
        self.color
            .as_deref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty())
    }
}

/// Items bucketed by category. Within a bucket the input order is kept and
/// duplicate ids are preserved.
pub type CategoryGroups<'a> = BTreeMap<Category, Vec<&'a WardrobeItem>>;

pub fn group_by_category(items: &[WardrobeItem]) -> CategoryGroups<'_> {
    let mut grouped: CategoryGroups<'_> = BTreeMap::new();
    for item in items {
        grouped.entry(item.category).or_default().push(item);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_keeps_order_and_duplicates() {
        let items = vec![
            WardrobeItem::new("1", "White Shirt", Category::Tops),
            WardrobeItem::new("2", "Black Jeans", Category::Bottoms),
            WardrobeItem::new("3", "Grey Tee", Category::Tops),
            WardrobeItem::new("1", "White Shirt", Category::Tops),
        ];
        let grouped = group_by_category(&items);

        let tops: Vec<&str> = grouped[&Category::Tops]
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(tops, vec!["White Shirt", "Grey Tee", "White Shirt"]);
        assert_eq!(grouped[&Category::Bottoms].len(), 1);
        assert!(!grouped.contains_key(&Category::Shoes));
    }

    #[test]
    fn empty_input_groups_to_nothing() {
        assert!(group_by_category(&[]).is_empty());
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let raw = r#"{"id":"a","name":"Linen Shirt","category":"Tops","usageCount":4,"seasons":["all-season"]}"#;
        let item: WardrobeItem = serde_json::from_str(raw).unwrap();
        assert_eq!(item.usage_count, 4);
        assert_eq!(item.seasons, vec![Season::AllSeason]);
        assert!(item.style.is_none());

        let v = serde_json::to_value(&item).unwrap();
        assert_eq!(v["usageCount"], serde_json::json!(4));
        assert!(v.get("color").is_none());
    }

    #[test]
    fn primary_color_is_normalized() {
        let item = WardrobeItem::new("1", "Scarf", Category::Accessories).with_color("  Navy ");
        assert_eq!(item.primary_color().as_deref(), Some("navy"));
        let blank = WardrobeItem::new("2", "Scarf", Category::Accessories).with_color(" ");
        assert!(blank.primary_color().is_none());
    }
}
