//! Confidence labels, ordering and truncation.

use serde::{Deserialize, Serialize};

use super::OutfitRecommendation;

/// Never return more than this many outfits.
pub const TOP_N: usize = 3;

const HIGH_MIN_SCORE: u32 = 80;
const HIGH_MIN_ITEMS: usize = 3;
const MEDIUM_MIN_SCORE: u32 = 50;
const MEDIUM_MIN_ITEMS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

pub fn confidence_level(score: u32, item_count: usize) -> ConfidenceLevel {
    if score >= HIGH_MIN_SCORE && item_count >= HIGH_MIN_ITEMS {
        ConfidenceLevel::High
    } else if score >= MEDIUM_MIN_SCORE && item_count >= MEDIUM_MIN_ITEMS {
        ConfidenceLevel::Medium
    } else {
        ConfidenceLevel::Low
    }
}

/// Stable sort by score (desc), keep the top `TOP_N`, then number them
/// `outfit-1..` in rank order.
pub fn rank(mut scored: Vec<OutfitRecommendation>) -> Vec<OutfitRecommendation> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(TOP_N);
    for (i, rec) in scored.iter_mut().enumerate() {
        rec.id = format!("outfit-{}", i + 1);
    }
    scored
}
