//! End-to-end tests for the HTTP API

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use multitimer::{api::create_router, state::AppState};

fn router_with_capacity(max_timers: usize) -> Router {
    let state = Arc::new(AppState::new(0, "127.0.0.1".to_string(), max_timers, 250));
    create_router(state)
}

async fn request(
    router: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn create_and_list_timers() {
    let router = router_with_capacity(50);

    let (status, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "countdown", "label": "tea", "minutes": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["timer"]["id"], 1);
    assert_eq!(body["timer"]["kind"], "countdown");
    assert_eq!(body["timer"]["phase"], "idle");
    assert_eq!(body["timer"]["display"], "00:03:00");

    let (status, body) = request(&router, "GET", "/timers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["capacity"], 50);
    assert_eq!(body["timers"][0]["label"], "tea");
}

#[tokio::test]
async fn zero_duration_countdown_is_rejected() {
    let router = router_with_capacity(50);

    let (status, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "countdown", "label": "broken"})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["status"], "error");

    // nothing was created
    let (_, body) = request(&router, "GET", "/timers", None).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn stopwatches_need_no_duration() {
    let router = router_with_capacity(50);

    let (status, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "stopwatch", "label": "laps"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["timer"]["display"], "00:00:00");
}

#[tokio::test]
async fn creation_beyond_capacity_is_rejected() {
    let router = router_with_capacity(2);

    for _ in 0..2 {
        let (status, _) = request(
            &router,
            "POST",
            "/timers",
            Some(json!({"kind": "stopwatch"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    let (status, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "stopwatch"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], "error");

    let (_, body) = request(&router, "GET", "/timers", None).await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn full_lifecycle_through_the_api() {
    let router = router_with_capacity(50);

    let (_, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "countdown", "label": "eggs", "seconds": 30})),
    )
    .await;
    let id = body["timer"]["id"].as_u64().unwrap();

    let (status, body) =
        request(&router, "POST", &format!("/timers/{}/start", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer"]["phase"], "running");

    let (_, body) = request(&router, "POST", &format!("/timers/{}/pause", id), None).await;
    assert_eq!(body["timer"]["phase"], "paused");

    let (_, body) = request(&router, "POST", &format!("/timers/{}/resume", id), None).await;
    assert_eq!(body["timer"]["phase"], "running");

    let (_, body) = request(&router, "POST", &format!("/timers/{}/reset", id), None).await;
    assert_eq!(body["timer"]["phase"], "idle");
    assert_eq!(body["timer"]["display"], "00:00:30");
}

#[tokio::test]
async fn mute_toggles_back_and_forth() {
    let router = router_with_capacity(50);

    let (_, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "countdown", "seconds": 5})),
    )
    .await;
    let id = body["timer"]["id"].as_u64().unwrap();

    let (_, body) = request(&router, "POST", &format!("/timers/{}/mute", id), None).await;
    assert_eq!(body["timer"]["muted"], true);
    let (_, body) = request(&router, "POST", &format!("/timers/{}/mute", id), None).await;
    assert_eq!(body["timer"]["muted"], false);
}

#[tokio::test]
async fn unknown_ids_are_not_found_but_delete_is_idempotent() {
    let router = router_with_capacity(50);

    let (status, _) = request(&router, "POST", "/timers/99/start", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = request(&router, "GET", "/timers/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = request(&router, "DELETE", "/timers/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["removed"], false);

    let (_, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "stopwatch", "label": "gone"})),
    )
    .await;
    let id = body["timer"]["id"].as_u64().unwrap();
    let (_, body) = request(&router, "DELETE", &format!("/timers/{}", id), None).await;
    assert_eq!(body["removed"], true);
    let (_, body) = request(&router, "DELETE", &format!("/timers/{}", id), None).await;
    assert_eq!(body["removed"], false);
}

#[tokio::test]
async fn empty_labels_get_a_default() {
    let router = router_with_capacity(50);

    let (_, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "stopwatch", "label": ""})),
    )
    .await;
    assert_eq!(body["timer"]["label"], "Timer #1");
}

#[tokio::test]
async fn creation_fields_are_clamped() {
    let router = router_with_capacity(50);

    // 200h/75m/75s clamps to 99h/59m/59s
    let (_, body) = request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "countdown", "hours": 200, "minutes": 75, "seconds": 75})),
    )
    .await;
    assert_eq!(body["timer"]["display"], "99:59:59");
}

#[tokio::test]
async fn status_and_health_report() {
    let router = router_with_capacity(50);

    let (status, body) = request(&router, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    request(
        &router,
        "POST",
        "/timers",
        Some(json!({"kind": "stopwatch"})),
    )
    .await;
    let (status, body) = request(&router, "GET", "/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["timer_count"], 1);
    assert_eq!(body["capacity"], 50);
    assert_eq!(body["last_action"], "create");
}
