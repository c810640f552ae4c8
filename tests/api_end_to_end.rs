use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use reelforge_core::server;
use reelforge_core::state::AppState;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn create(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-video")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn list() -> Request<Body> {
    Request::builder().uri("/api/videos").body(Body::empty()).unwrap()
}

fn delete(query: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/api/videos{}", query))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_create_returns_ready_item() {
    let app = server::create_router(AppState::default());

    let (status, body) = send(
        &app,
        create(json!({
            "niche": "History Facts",
            "topic": "Top 10 AI Tools for 2024",
            "duration": "8-10",
            "tone": "informative"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let video = &body["video"];
    assert_eq!(video["status"], "ready");
    let tags: Vec<&str> = video["tags"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t.as_str().unwrap())
        .collect();
    assert!(tags.contains(&"historyfacts"));
    assert!(tags.contains(&"top10aitoolsfor2024"));
    assert_eq!(video["thumbnailIdeas"].as_array().unwrap().len(), 5);
    assert_eq!(video["duration"], "8-10");
    assert!(video["createdAt"].is_string());
}

#[tokio::test]
async fn test_list_returns_oldest_first() {
    let app = server::create_router(AppState::default());

    let (_, first) = send(&app, create(json!({"niche": "Crypto & NFTs", "topic": "First"}))).await;
    let (_, second) =
        send(&app, create(json!({"niche": "Crypto & NFTs", "topic": "Second"}))).await;

    let (status, body) = send(&app, list()).await;
    assert_eq!(status, StatusCode::OK);
    let videos = body["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0]["id"], first["video"]["id"]);
    assert_eq!(videos[1]["id"], second["video"]["id"]);
}

#[tokio::test]
async fn test_delete_unknown_id_is_success_and_no_op() {
    let app = server::create_router(AppState::default());
    send(&app, create(json!({"niche": "Science Explained", "topic": "Tides"}))).await;

    let (_, before) = send(&app, list()).await;
    let (status, body) = send(&app, delete("?id=00000000-0000-4000-8000-000000000000")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, _) = send(&app, delete("?id=not-a-uuid")).await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&app, list()).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_delete_removes_item_and_is_idempotent() {
    let app = server::create_router(AppState::default());
    let payload = json!({"niche": "Productivity Hacks", "topic": "Inbox Zero"});
    let (_, created) = send(&app, create(payload)).await;
    let id = created["video"]["id"].as_str().unwrap().to_string();

    for _ in 0..2 {
        let (status, body) = send(&app, delete(&format!("?id={}", id))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
    }

    let (_, body) = send(&app, list()).await;
    assert!(body["videos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_without_id_is_client_error() {
    let app = server::create_router(AppState::default());
    let (status, body) = send(&app, delete("")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Video ID required");
}

#[tokio::test]
async fn test_bad_create_payloads_are_rejected_without_storing() {
    let app = server::create_router(AppState::default());

    let bad = [
        json!({"niche": "History Facts", "topic": "Rome", "tone": "sarcastic"}),
        json!({"niche": "History Facts", "topic": "Rome", "duration": "1-2"}),
        json!({"niche": "", "topic": "Rome"}),
        json!({"topic": "Rome"}),
    ];
    for body in bad {
        let (status, response) = send(&app, create(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(response["error"].is_string());
    }

    let (_, body) = send(&app, list()).await;
    assert!(body["videos"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_stats_and_options() {
    let app = server::create_router(AppState::default());
    send(&app, create(json!({"niche": "History Facts", "topic": "Vikings"}))).await;

    let (status, stats) = send(
        &app,
        Request::builder().uri("/api/videos/stats").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats, json!({"total": 1, "ready": 1, "processing": 0, "pending": 0}));

    let (status, options) = send(
        &app,
        Request::builder().uri("/api/options").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(options["niches"].as_array().unwrap().len(), 10);
    assert_eq!(options["durations"][0]["value"], "3-5");
}

#[tokio::test]
async fn test_malformed_delete_query_returns_json_error() {
    let app = server::create_router(AppState::default());
    let (status, body) = send(&app, delete("?id=a&id=b")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert!(body["error"].as_str().unwrap().contains("id"));
}

#[tokio::test]
async fn test_tone_is_case_insensitive_over_http() {
    let app = server::create_router(AppState::default());
    let (status, body) = send(
        &app,
        create(json!({"niche": "History Facts", "topic": "Vikings", "tone": "Dramatic"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["video"]["tone"], "dramatic");
}
