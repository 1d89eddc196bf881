//! HTTP adapter: one JSON endpoint per engine operation, no persistence.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::gaps::analyze_wardrobe_gaps;
use crate::insights::{analyze_wardrobe, WardrobeAnalysis};
use crate::metrics::{record_recommendations, record_request};
use crate::preferences::{ExtendedSignals, Preferences, PreferencesInput};
use crate::recommend::{OutfitRecommendation, Recommender};
use crate::trends::{trends_for, SeasonalTrends};
use crate::wardrobe::{Season, WardrobeItem};

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

impl AppState {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            recommender: Arc::new(Recommender::new(config)),
        }
    }

    /// Build from `EngineConfig::load()` (file + env).
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(EngineConfig::load()?))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/recommendations", post(recommend))
        .route("/wardrobe/gaps", post(wardrobe_gaps))
        .route("/wardrobe/analysis", post(wardrobe_analysis))
        .route("/trends", get(trends))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

/// JSON error body with an HTTP status.
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            code: Some(code),
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(e: EngineError) -> Self {
        Self::bad_request(e.to_string(), e.code())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub items: Vec<WardrobeItem>,
    #[serde(default)]
    pub preferences: PreferencesInput,
    #[serde(default)]
    pub signals: Option<ExtendedSignals>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReport {
    pub recommendations: Vec<OutfitRecommendation>,
    pub preferences: Preferences,
    pub total_items: usize,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct WardrobeRequest {
    #[serde(default)]
    pub items: Vec<WardrobeItem>,
}

#[derive(Debug, Serialize)]
pub struct GapsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TrendsQuery {
    pub season: Option<String>,
}

async fn recommend(
    State(state): State<AppState>,
    Json(body): Json<RecommendRequest>,
) -> Result<Json<RecommendationReport>, ApiError> {
    record_request("recommendations");
    let prefs = body.preferences.validate()?;

    let recommendations = state
        .recommender
        .recommend(&body.items, &prefs, body.signals.as_ref());
    record_recommendations(prefs.event_type, recommendations.len());
    debug!(
        target: "api",
        items = body.items.len(),
        returned = recommendations.len(),
        "recommendations served"
    );

    Ok(Json(RecommendationReport {
        recommendations,
        preferences: prefs,
        total_items: body.items.len(),
        generated_at: Utc::now(),
    }))
}

async fn wardrobe_gaps(Json(body): Json<WardrobeRequest>) -> Json<GapsResponse> {
    record_request("wardrobe_gaps");
    Json(GapsResponse {
        suggestions: analyze_wardrobe_gaps(&body.items),
    })
}

async fn wardrobe_analysis(Json(body): Json<WardrobeRequest>) -> Json<WardrobeAnalysis> {
    record_request("wardrobe_analysis");
    Json(analyze_wardrobe(&body.items))
}

async fn trends(Query(q): Query<TrendsQuery>) -> Result<Json<SeasonalTrends>, ApiError> {
    record_request("trends");
    let season = match q.season.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => raw.parse::<Season>()?,
        None => Season::current(),
    };
    Ok(Json(trends_for(season)))
}
