// src/recommend/mod.rs
//! Recommendation pipeline entry.
//! Order:
//! 1) group items by category
//! 2) draw up to `attempts` random candidates under the event's category rule
//! 3) score, explain and label each candidate
//! 4) optionally drop candidates missing a required category (strict mode)
//! 5) rank, keep the top three
//!
//! Stateless per call; the only shared data are the constant rule tables.

pub mod explain;
pub mod generator;
pub mod matcher;
pub mod rank;
pub mod scoring;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::gaps::{suggest_missing_pieces, PieceSuggestion};
use crate::preferences::{ExtendedSignals, Preferences};
use crate::wardrobe::{group_by_category, WardrobeItem};

pub use crate::recommend::matcher::{StyleMatcher, SubstringMatcher};
pub use crate::recommend::rank::{confidence_level, ConfidenceLevel, TOP_N};
pub use crate::recommend::scoring::{score_outfit, ScoreBreakdown};

/// One ranked outfit. Built fresh per call; `id` is a call-local rank label.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitRecommendation {
    pub id: String,
    pub items: Vec<WardrobeItem>,
    pub score: u32,
    #[serde(rename = "scoreBreakdown")]
    pub breakdown: ScoreBreakdown,
    pub confidence_level: ConfidenceLevel,
    pub reasoning: String,
    pub style_notes: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_pieces: Vec<PieceSuggestion>,
}

pub struct Recommender<M: StyleMatcher = SubstringMatcher> {
    config: EngineConfig,
    matcher: M,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Recommender {
    pub fn new(config: EngineConfig) -> Self {
        Self::with_matcher(config, SubstringMatcher)
    }
}

impl<M: StyleMatcher> Recommender<M> {
    pub fn with_matcher(config: EngineConfig, matcher: M) -> Self {
        Self { config, matcher }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Recommend using the thread-local RNG.
    pub fn recommend(
        &self,
        items: &[WardrobeItem],
        prefs: &Preferences,
        signals: Option<&ExtendedSignals>,
    ) -> Vec<OutfitRecommendation> {
        self.recommend_with_rng(items, prefs, signals, &mut rand::rng())
    }

    /// Recommend with an injected random source; seed it to pin the output.
    pub fn recommend_with_rng<R: Rng + ?Sized>(
        &self,
        items: &[WardrobeItem],
        prefs: &Preferences,
        signals: Option<&ExtendedSignals>,
        rng: &mut R,
    ) -> Vec<OutfitRecommendation> {
        let groups = group_by_category(items);
        let candidates =
            generator::generate_candidates(&groups, prefs, self.config.generator_params(), rng);
        let generated = candidates.len();

        let strict = self.config.ranking.strict_required;
        let scored: Vec<OutfitRecommendation> = candidates
            .into_iter()
            .filter(|combo| !strict || scoring::has_all_required(combo, prefs))
            .enumerate()
            .map(|(i, combo)| self.build(i, &combo, prefs, signals, rng))
            .collect();
        let kept = scored.len();

        let ranked = rank::rank(scored);
        debug!(
            target: "recommend",
            items = items.len(),
            categories = groups.len(),
            generated,
            kept,
            returned = ranked.len(),
            event = %prefs.event_type,
            mood = %prefs.mood,
            strict,
            "recommendations ranked"
        );
        ranked
    }

    fn build<R: Rng + ?Sized>(
        &self,
        index: usize,
        combo: &[&WardrobeItem],
        prefs: &Preferences,
        signals: Option<&ExtendedSignals>,
        rng: &mut R,
    ) -> OutfitRecommendation {
        let breakdown = score_outfit(combo, prefs, &self.matcher, signals);
        let score = breakdown.total();
        OutfitRecommendation {
            id: format!("outfit-{}", index + 1),
            items: combo.iter().map(|&item| item.clone()).collect(),
            score,
            breakdown,
            confidence_level: confidence_level(score, combo.len()),
            reasoning: explain::reasoning(combo, prefs, rng),
            style_notes: explain::style_notes(combo, prefs),
            missing_pieces: suggest_missing_pieces(combo, prefs.event_type),
        }
    }
}

/// Default entry point: built-in config, substring matcher, process RNG, no
/// extended signals.
pub fn generate_recommendations(
    items: &[WardrobeItem],
    prefs: &Preferences,
) -> Vec<OutfitRecommendation> {
    Recommender::new(EngineConfig::default()).recommend(items, prefs, None)
}
