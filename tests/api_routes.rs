use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use propline::{
    api::{create_router, AppState},
    FallbackProvider,
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let state = AppState::new(Arc::new(FallbackProvider::fixtures_only()), "test");
    create_router(state)
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let response = app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn list_players_returns_fixtures() {
    let (status, body) = get_json("/api/players").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(body["data"][0]["name"], "LeBron James");
    assert!(body["lastUpdated"].is_string());
}

#[tokio::test]
async fn suggestions_are_ordered_by_confidence() {
    let (status, body) = get_json("/api/players/1/suggestions").await;

    assert_eq!(status, StatusCode::OK);
    let suggestions = body["data"].as_array().unwrap();
    assert_eq!(suggestions.len(), 4);

    assert_eq!(suggestions[0]["type"], "points");
    assert_eq!(suggestions[0]["suggestion"], "More than 21");
    assert_eq!(suggestions[0]["confidence"], 95);
    assert_eq!(suggestions[0]["odds"], "-140");
    assert_eq!(suggestions[0]["strength"], "high");

    let confidences: Vec<u64> = suggestions
        .iter()
        .map(|s| s["confidence"].as_u64().unwrap())
        .collect();
    assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn stats_include_trend_and_player() {
    let (status, body) = get_json("/api/players/4/stats").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["player"]["name"], "Giannis Antetokounmpo");
    assert_eq!(data["stats"]["rebounds"], 11.8);
    assert_eq!(data["recentGames"].as_array().unwrap().len(), 5);
    assert_eq!(data["trend"], "stable");
    assert!(!data["suggestions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_player_is_not_found() {
    let (status, body) = get_json("/api/players/999/suggestions").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Player not found");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn non_numeric_id_is_bad_request() {
    let (status, body) = get_json("/api/players/lebron/stats").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn health_reports_data_source() {
    let (status, body) = get_json("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["dataSource"], "fixtures");
}
