//! End-to-end flows through the fully assembled router.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use gymbook_backend::{build_app, AppState};
use gymbook_config::{AppConfig, StorageConfig};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::{tempdir, TempDir};
use tower::ServiceExt;

async fn app_with(config: AppConfig) -> (TempDir, Router) {
    let dir = tempdir().unwrap();
    let config = AppConfig {
        storage: StorageConfig {
            data_dir: dir.path().join("data").to_string_lossy().into_owned(),
            ..StorageConfig::default()
        },
        ..config
    };
    let state = AppState::open(Arc::new(config)).await.unwrap();
    (dir, build_app(&state))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn health_and_welcome() {
    let (_dir, app) = app_with(AppConfig::default()).await;

    let (status, health) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({"status": "ok", "service": "gym-reservation-api"}));

    let (status, welcome) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(welcome["message"].is_string());
    assert_eq!(welcome["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn register_book_cancel_rebook() {
    let (dir, app) = app_with(AppConfig::default()).await;
    let date = (Utc::now().date_naive() + Duration::days(5))
        .format("%Y-%m-%d")
        .to_string();

    let (status, alice) = send(&app, "POST", "/api/users", Some(json!({"name": "Alice"}))).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, bob) = send(&app, "POST", "/api/users", Some(json!({"name": "Bob"}))).await;
    let alice_id = alice["id"].as_str().unwrap();
    let bob_id = bob["id"].as_str().unwrap();

    let (status, reservation) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({"userId": alice_id, "date": date, "timeSlot": "18:00-19:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let reservation_id = reservation["id"].as_str().unwrap();

    let (status, _) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({"userId": bob_id, "date": date, "timeSlot": "18:00-19:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/reservations/{reservation_id}?userId={bob_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, cancelled) = send(
        &app,
        "DELETE",
        &format!("/api/reservations/{reservation_id}?userId={alice_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["reservation"]["status"], "cancelled");

    let (status, _) = send(
        &app,
        "POST",
        "/api/reservations",
        Some(json!({"userId": bob_id, "date": date, "timeSlot": "18:00-19:00"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, slots) = send(
        &app,
        "GET",
        &format!("/api/time-slots/{date}?userId={bob_id}"),
        None,
    )
    .await;
    let evening = slots["timeSlots"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["slot"] == "18:00-19:00")
        .unwrap();
    assert_eq!(evening["available"], false);
    assert_eq!(evening["isMyReservation"], true);

    // Both records are on disk, the cancelled one included
    let text = std::fs::read_to_string(dir.path().join("data/reservations.json")).unwrap();
    let stored: Vec<Value> = serde_json::from_str(&text).unwrap();
    assert_eq!(stored.len(), 2);
}

#[tokio::test]
async fn restricted_cors_origin() {
    let mut config = AppConfig::default();
    config.server.allowed_origins = vec!["http://localhost:5173".to_string()];
    let (_dir, app) = app_with(config).await;

    let request = Request::builder()
        .uri("/health")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn unknown_api_route_is_not_found() {
    let (_dir, app) = app_with(AppConfig::default()).await;

    let (status, _) = send(&app, "GET", "/api/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
