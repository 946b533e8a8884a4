mod common;

use chrono::{Duration, Utc};
use serde_json::json;
use sqlx::SqlitePool;

// ─── POST /links ─────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_create_link_success(pool: SqlitePool) {
    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));

    let response = server
        .post("/links")
        .json(&json!({
            "url": "https://example.com",
            "label": "Example",
            "tags": ["docs", "upstream"],
            "project": "infra"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["label"], "Example");
    assert_eq!(body["tags"], json!(["docs", "upstream"]));
    assert_eq!(body["project"], "infra");
}

#[sqlx::test]
async fn test_create_link_label_defaults_to_url(pool: SqlitePool) {
    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));

    let response = server
        .post("/links")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);
    assert_eq!(response.json::<serde_json::Value>()["label"], "http://example.com");
}

#[sqlx::test]
async fn test_create_link_rejects_bad_scheme(pool: SqlitePool) {
    let server =
        common::make_server(common::create_test_state(pool.clone(), common::StubFetcher::new()));

    let response = server
        .post("/links")
        .json(&json!({ "url": "ftp://example.com" }))
        .await;

    response.assert_status_bad_request();
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_duplicate_url_conflicts(pool: SqlitePool) {
    let server =
        common::make_server(common::create_test_state(pool.clone(), common::StubFetcher::new()));

    server
        .post("/links")
        .json(&json!({ "url": "https://example.com" }))
        .await
        .assert_status(axum::http::StatusCode::CREATED);

    let response = server
        .post("/links")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status(axum::http::StatusCode::CONFLICT);
    assert_eq!(common::count_links(&pool).await, 1);
}

// ─── GET /links ──────────────────────────────────────────────────────────────

#[sqlx::test]
async fn test_list_links_annotates_latest_snapshot(pool: SqlitePool) {
    let link_id = common::create_test_link(&pool, "https://example.com").await;

    let now = Utc::now();
    common::insert_snapshot(&pool, link_id, "old", "older summary", "ok", now - Duration::hours(2))
        .await;
    common::insert_snapshot(&pool, link_id, "new", "newest summary", "error", now).await;

    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));
    let response = server.get("/links").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["last_summary"], "newest summary");
    assert_eq!(body[0]["last_status"], "error");
}

#[sqlx::test]
async fn test_list_links_never_checked_has_null_annotations(pool: SqlitePool) {
    common::create_test_link(&pool, "https://example.com").await;

    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));
    let body = server.get("/links").await.json::<serde_json::Value>();

    assert_eq!(body[0]["last_summary"], serde_json::Value::Null);
    assert_eq!(body[0]["last_status"], serde_json::Value::Null);
    assert_eq!(body[0]["last_checked"], serde_json::Value::Null);
}

// ─── PATCH /links/{id} ───────────────────────────────────────────────────────

#[sqlx::test]
async fn test_update_link_label(pool: SqlitePool) {
    let link_id = common::create_test_link(&pool, "https://example.com").await;

    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));
    let response = server
        .patch(&format!("/links/{link_id}"))
        .json(&json!({ "label": "Renamed" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["label"], "Renamed");
    // Untouched fields stay as they were.
    assert_eq!(body["url"], "https://example.com");
    assert_eq!(body["project"], "");
}

#[sqlx::test]
async fn test_update_link_tags_and_project(pool: SqlitePool) {
    let link_id = common::create_test_link(&pool, "https://example.com").await;

    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));
    let response = server
        .patch(&format!("/links/{link_id}"))
        .json(&json!({ "tags": ["a", "b"], "project": "watchlist" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["tags"], json!(["a", "b"]));
    assert_eq!(body["project"], "watchlist");
}

#[sqlx::test]
async fn test_update_link_not_found(pool: SqlitePool) {
    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));
    let response = server
        .patch("/links/999")
        .json(&json!({ "label": "x" }))
        .await;

    response.assert_status_not_found();
}

// ─── DELETE /links/{id} ──────────────────────────────────────────────────────

#[sqlx::test]
async fn test_delete_link_removes_snapshots(pool: SqlitePool) {
    let link_id = common::create_test_link(&pool, "https://example.com").await;
    common::insert_snapshot(&pool, link_id, "content", "summary", "ok", Utc::now()).await;

    let server =
        common::make_server(common::create_test_state(pool.clone(), common::StubFetcher::new()));
    let response = server.delete(&format!("/links/{link_id}")).await;

    response.assert_status(axum::http::StatusCode::NO_CONTENT);
    assert_eq!(common::count_links(&pool).await, 0);
    assert_eq!(common::count_snapshots(&pool, link_id).await, 0);
}

#[sqlx::test]
async fn test_delete_link_not_found(pool: SqlitePool) {
    let server = common::make_server(common::create_test_state(pool, common::StubFetcher::new()));
    server.delete("/links/999").await.assert_status_not_found();
}
