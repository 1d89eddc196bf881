//! Additive outfit scoring.
//!
//! total = 10 * items
//!       + (30 if every required category is present, else -20)
//!       + 15 * mood keyword hits - 10 * mood avoid hits
//!       + 5 * distinct categories
//!       + extended signals (style +10, favorite color +5, usage up to +10 per item)
//!
//! The total is clamped at zero. No randomness: same candidate, same score.

use serde::Serialize;
use std::collections::BTreeSet;

use super::matcher::StyleMatcher;
use crate::preferences::{ExtendedSignals, Preferences};
use crate::wardrobe::{Category, WardrobeItem};

pub const POINTS_PER_ITEM: i32 = 10;
pub const REQUIRED_BONUS: i32 = 30;
pub const REQUIRED_PENALTY: i32 = -20;
pub const MOOD_KEYWORD_POINTS: i32 = 15;
pub const MOOD_AVOID_POINTS: i32 = -10;
pub const POINTS_PER_CATEGORY: i32 = 5;
pub const PREFERRED_STYLE_POINTS: i32 = 10;
pub const FAVORITE_COLOR_POINTS: i32 = 5;
pub const USAGE_BONUS_CAP: u32 = 10;

/// Per-term contributions, kept for explainability and debugging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub cardinality: i32,
    pub event: i32,
    pub mood: i32,
    pub variety: i32,
    pub extended: i32,
}

impl ScoreBreakdown {
    pub fn raw(&self) -> i32 {
        self.cardinality + self.event + self.mood + self.variety + self.extended
    }

    /// Final score, floored at zero.
    pub fn total(&self) -> u32 {
        self.raw().max(0).unsigned_abs()
    }
}

pub fn has_all_required(items: &[&WardrobeItem], prefs: &Preferences) -> bool {
    let present: BTreeSet<Category> = items.iter().map(|i| i.category).collect();
    prefs
        .event_type
        .rule()
        .required
        .iter()
        .all(|c| present.contains(c))
}

pub fn score_outfit(
    items: &[&WardrobeItem],
    prefs: &Preferences,
    matcher: &dyn StyleMatcher,
    signals: Option<&ExtendedSignals>,
) -> ScoreBreakdown {
    let distinct: BTreeSet<Category> = items.iter().map(|i| i.category).collect();

    let event = if has_all_required(items, prefs) {
        REQUIRED_BONUS
    } else {
        REQUIRED_PENALTY
    };

    let style = prefs.mood.style();
    let mood = items
        .iter()
        .map(|item| {
            let hits = matcher.count_matches(item, style.keywords) as i32;
            let misses = matcher.count_matches(item, style.avoid) as i32;
            hits * MOOD_KEYWORD_POINTS + misses * MOOD_AVOID_POINTS
        })
        .sum();

    ScoreBreakdown {
        cardinality: items.len() as i32 * POINTS_PER_ITEM,
        event,
        mood,
        variety: distinct.len() as i32 * POINTS_PER_CATEGORY,
        extended: signals.map_or(0, |s| extended_bonus(items, s)),
    }
}

fn extended_bonus(items: &[&WardrobeItem], signals: &ExtendedSignals) -> i32 {
    items
        .iter()
        .map(|item| {
            let mut bonus = 0;
            if item.style.as_deref().is_some_and(|s| signals.prefers_style(s)) {
                bonus += PREFERRED_STYLE_POINTS;
            }
            if item.primary_color().is_some_and(|c| signals.likes_color(&c)) {
                bonus += FAVORITE_COLOR_POINTS;
            }
            if signals.usage_history {
                bonus += item.usage_count.min(USAGE_BONUS_CAP) as i32;
            }
            bonus
        })
        .sum()
}
