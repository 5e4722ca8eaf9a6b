//! Tests for the JSON API and the HTTP client.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use trivia_leaderboard::{
    DbError, LeaderboardClient, LeaderboardEntry, LeaderboardRepository, LeaderboardService,
    LeaderboardStore, NewLeaderboardEntry, server,
};

fn setup_router() -> Router {
    let repo = LeaderboardRepository::open(":memory:").expect("Failed to open repository");
    server::router(LeaderboardService::new(Arc::new(repo)))
}

struct BrokenStore;

#[async_trait]
impl LeaderboardStore for BrokenStore {
    async fn insert(&self, _entry: NewLeaderboardEntry) -> Result<LeaderboardEntry, DbError> {
        Err(DbError::new("disk full"))
    }

    async fn all_entries(&self) -> Result<Vec<LeaderboardEntry>, DbError> {
        Err(DbError::new("disk full"))
    }
}

async fn post_json(app: &Router, body: Value) -> (StatusCode, Value) {
    let request = Request::post("/leaderboard")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

async fn get_leaderboard(app: &Router) -> (StatusCode, Value) {
    let request = Request::get("/leaderboard")
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_post_then_get_ranked() {
    let app = setup_router();

    for (name, score, date) in [
        ("A", 10, "2024-01-01T09:00:00Z"),
        ("B", 20, "2024-01-01T10:00:00Z"),
        ("C", 20, "2024-01-01T11:00:00Z"),
    ] {
        let (status, body) =
            post_json(&app, json!({ "playerName": name, "score": score, "date": date })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true }));
    }

    let (status, body) = get_leaderboard(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    let board = body["leaderboard"].as_array().expect("leaderboard array");
    let names: Vec<&str> = board
        .iter()
        .map(|e| e["playerName"].as_str().expect("playerName"))
        .collect();
    assert_eq!(names, vec!["C", "B", "A"]);
    assert_eq!(board[0]["score"], json!(20));
    assert_eq!(board[0]["date"], json!("2024-01-01T11:00:00.000Z"));
    assert!(board[0]["id"].is_i64());
}

#[tokio::test]
async fn test_post_zero_score_succeeds() {
    let app = setup_router();

    let (_, body) = post_json(&app, json!({ "playerName": "Alice", "score": 0 })).await;
    assert_eq!(body, json!({ "success": true }));

    let (_, body) = get_leaderboard(&app).await;
    assert_eq!(body["leaderboard"][0]["score"], json!(0));
}

#[tokio::test]
async fn test_post_missing_fields_reports_failure() {
    let app = setup_router();

    let (status, body) = post_json(&app, json!({ "playerName": "", "score": 5 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false }));

    let (_, body) = post_json(&app, json!({ "playerName": "Alice" })).await;
    assert_eq!(body, json!({ "success": false }));

    let (_, body) = post_json(&app, json!({ "score": 3 })).await;
    assert_eq!(body, json!({ "success": false }));

    let (_, body) = get_leaderboard(&app).await;
    assert_eq!(body, json!({ "success": true, "leaderboard": [] }));
}

#[tokio::test]
async fn test_post_malformed_json_rejected_by_extractor() {
    let app = setup_router();
    let request = Request::post("/leaderboard")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("Failed to build request");

    let (status, _) = send(&app, request).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_storage_failure_reported_in_band() {
    let app = server::router(LeaderboardService::new(Arc::new(BrokenStore)));

    let (status, body) = post_json(&app, json!({ "playerName": "Alice", "score": 1 })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false }));

    let (status, body) = get_leaderboard(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": false, "leaderboard": [] }));
}

#[tokio::test]
async fn test_health() {
    let app = setup_router();
    let request = Request::get("/health")
        .body(Body::empty())
        .expect("Failed to build request");
    let response = app.oneshot(request).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_client_against_live_server() {
    let repo = LeaderboardRepository::open(":memory:").expect("Failed to open repository");
    let service = LeaderboardService::new(Arc::new(repo));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local addr");
    tokio::spawn(server::serve(listener, service));

    let client = LeaderboardClient::new(format!("http://{addr}/"));

    let added = client
        .add_player_leaderboard("Alice", 6, None)
        .await
        .expect("Submit failed");
    assert!(added.success);

    let rejected = client
        .add_player_leaderboard("", 6, None)
        .await
        .expect("Submit failed");
    assert!(!rejected.success);

    let board = client.get_leaderboard().await.expect("Fetch failed");
    assert!(board.success);
    assert_eq!(board.leaderboard.len(), 1);
    assert_eq!(board.leaderboard[0].player_name(), "Alice");
    assert_eq!(*board.leaderboard[0].score(), 6);
}
