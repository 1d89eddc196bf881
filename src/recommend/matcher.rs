//! Mood keyword matching.
//!
//! The scorer only asks "how many of these words does this item carry?".
//! Keeping that question behind `StyleMatcher` lets a smarter classifier
//! replace the substring heuristic without touching the arithmetic.

use crate::wardrobe::WardrobeItem;

pub trait StyleMatcher: Send + Sync {
    /// Number of entries in `vocabulary` that this item matches.
    fn count_matches(&self, item: &WardrobeItem, vocabulary: &[&str]) -> usize;
}

/// Case-insensitive substring search over the item name.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

impl StyleMatcher for SubstringMatcher {
    fn count_matches(&self, item: &WardrobeItem, vocabulary: &[&str]) -> usize {
        let name = item.name.to_lowercase();
        vocabulary
            .iter()
            .filter(|kw| {
                let kw = kw.trim().to_lowercase();
                !kw.is_empty() && name.contains(kw.as_str())
            })
            .count()
    }
}
