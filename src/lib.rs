// src/lib.rs
// Public library surface for integration tests and host applications.

pub mod api;
pub mod config;
pub mod error;
pub mod gaps;
pub mod insights;
pub mod metrics;
pub mod preferences;
pub mod recommend;
pub mod rules;
pub mod trends;
pub mod wardrobe;

// ---- Re-exports for stable public API ----
pub use crate::api::router;
pub use crate::config::EngineConfig;
pub use crate::error::{EngineError, EngineResult};
pub use crate::gaps::{analyze_wardrobe_gaps, suggest_missing_pieces, PieceSuggestion};
pub use crate::insights::{analyze_wardrobe, WardrobeAnalysis};
pub use crate::preferences::{EventType, ExtendedSignals, Mood, Preferences, PreferencesInput};
pub use crate::recommend::{
    generate_recommendations, ConfidenceLevel, OutfitRecommendation, Recommender, StyleMatcher,
};
pub use crate::trends::{trends_for, SeasonalTrends};
pub use crate::wardrobe::{group_by_category, Category, Season, WardrobeItem};
