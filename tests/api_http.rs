// tests/api_http.rs
//
// HTTP-level tests for the public API Router without opening sockets.
// We exercise the router directly via tower::ServiceExt::oneshot.
//
// Covered:
// - GET /health
// - POST /recommendations (report envelope + 400 on bad preferences)
// - POST /wardrobe/gaps
// - POST /wardrobe/analysis
// - GET /trends

use serde_json::json;
use serde_json::Value as Json;
use shuttle_axum::axum::{
    body::{self, Body},
    http::{Request, StatusCode},
    Router,
};
use tower::ServiceExt as _; // for `oneshot`

use outfit_engine::api::{self, AppState};
use outfit_engine::EngineConfig;

const BODY_LIMIT: usize = 1024 * 1024;

/// Build the same Router the binary uses, minus metrics.
fn test_router() -> Router {
    api::router(AppState::new(EngineConfig::default()))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.oneshot(req).await.expect("oneshot");
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), BODY_LIMIT)
        .await
        .expect("read body")
        .to_vec();
    (status, bytes)
}

fn post_json(uri: &str, payload: &Json) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build POST")
}

fn basic_wardrobe() -> Json {
    json!([
        { "id": "t1", "category": "Tops", "name": "White Shirt", "color": "white" },
        { "id": "b1", "category": "Bottoms", "name": "Black Jeans", "color": "black" },
        { "id": "s1", "category": "Shoes", "name": "Black Boots", "color": "black" }
    ])
}

#[tokio::test]
async fn api_health_returns_200_and_ok_body() {
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .expect("build GET /health");

    let (status, bytes) = send(test_router(), req).await;
    assert_eq!(status, StatusCode::OK, "health should be 200");
    assert_eq!(String::from_utf8(bytes).expect("utf8").trim(), "OK");
}

#[tokio::test]
async fn api_recommendations_returns_report_envelope() {
    let payload = json!({
        "items": basic_wardrobe(),
        "preferences": { "eventType": "Work", "mood": "Confident" }
    });
    let (status, bytes) = send(test_router(), post_json("/recommendations", &payload)).await;
    assert_eq!(status, StatusCode::OK);

    let v: Json = serde_json::from_slice(&bytes).expect("parse report json");
    assert_eq!(v["totalItems"], 3);
    assert_eq!(v["preferences"]["eventType"], "Work");
    assert_eq!(v["preferences"]["mood"], "Confident");
    assert!(v.get("generatedAt").is_some(), "missing 'generatedAt'");

    let recs = v["recommendations"].as_array().expect("recommendations array");
    assert!(!recs.is_empty() && recs.len() <= 3);
    let top = &recs[0];
    assert_eq!(top["id"], "outfit-1");
    for key in ["items", "score", "scoreBreakdown", "confidenceLevel", "reasoning", "styleNotes"] {
        assert!(top.get(key).is_some(), "missing '{key}'");
    }
    assert!(top["score"].as_u64().expect("score") > 0);

    // Ranked descending
    let scores: Vec<u64> = recs.iter().filter_map(|r| r["score"].as_u64()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");
}

#[tokio::test]
async fn api_recommendations_empty_wardrobe_is_empty_list() {
    let payload = json!({
        "items": [],
        "preferences": { "eventType": "Casual", "mood": "Relaxed" }
    });
    let (status, bytes) = send(test_router(), post_json("/recommendations", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(v["recommendations"], json!([]));
    assert_eq!(v["totalItems"], 0);
}

#[tokio::test]
async fn api_recommendations_rejects_missing_mood() {
    let payload = json!({
        "items": basic_wardrobe(),
        "preferences": { "eventType": "Work" }
    });
    let (status, bytes) = send(test_router(), post_json("/recommendations", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Json = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(v["code"], "missing_field");
    assert!(v["message"].as_str().unwrap_or_default().contains("mood"));
}

#[tokio::test]
async fn api_recommendations_rejects_unknown_event_with_hint() {
    let payload = json!({
        "items": basic_wardrobe(),
        "preferences": { "eventType": "Partyy", "mood": "Playful" }
    });
    let (status, bytes) = send(test_router(), post_json("/recommendations", &payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Json = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(v["code"], "unknown_event_type");
    assert!(
        v["message"].as_str().unwrap_or_default().contains("Party"),
        "expected a suggestion in {v}"
    );
}

#[tokio::test]
async fn api_wardrobe_gaps_lists_missing_categories() {
    let payload = json!({ "items": basic_wardrobe() });
    let (status, bytes) = send(test_router(), post_json("/wardrobe/gaps", &payload)).await;
    assert_eq!(status, StatusCode::OK);

    let v: Json = serde_json::from_slice(&bytes).expect("json");
    let suggestions: Vec<&str> = v["suggestions"]
        .as_array()
        .expect("suggestions array")
        .iter()
        .filter_map(Json::as_str)
        .collect();
    assert_eq!(
        suggestions,
        vec![
            "Consider adding outerwear for more outfit variety",
            "Consider adding accessories for more outfit variety",
            "Consider adding dresses for more outfit variety",
        ]
    );
}

#[tokio::test]
async fn api_wardrobe_analysis_reports_counts() {
    let payload = json!({ "items": basic_wardrobe() });
    let (status, bytes) = send(test_router(), post_json("/wardrobe/analysis", &payload)).await;
    assert_eq!(status, StatusCode::OK);

    let v: Json = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(v["totalItems"], 3);
    assert_eq!(v["categoryBreakdown"]["Tops"], 1);
    assert_eq!(v["colorBreakdown"]["black"], 2);
}

#[tokio::test]
async fn api_trends_accepts_season_and_rejects_garbage() {
    let ok = Request::builder()
        .uri("/trends?season=autumn")
        .body(Body::empty())
        .expect("build GET /trends");
    let (status, bytes) = send(test_router(), ok).await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(v["season"], "fall");
    assert!(v["tips"].as_array().is_some_and(|t| !t.is_empty()));

    let bad = Request::builder()
        .uri("/trends?season=monsoon")
        .body(Body::empty())
        .expect("build GET /trends");
    let (status, bytes) = send(test_router(), bad).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let v: Json = serde_json::from_slice(&bytes).expect("json");
    assert_eq!(v["code"], "unknown_season");
}

#[tokio::test]
async fn api_trends_without_season_uses_current() {
    let req = Request::builder()
        .uri("/trends")
        .body(Body::empty())
        .expect("build GET /trends");
    let (status, bytes) = send(test_router(), req).await;
    assert_eq!(status, StatusCode::OK);
    let v: Json = serde_json::from_slice(&bytes).expect("json");
    assert_ne!(v["season"], "all-season");
}
