mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use phish_tracker::api::handlers::{
    add_recipients_handler, delete_recipients_handler, list_recipients_handler,
};
use phish_tracker::state::{AppState, HttpSettings};
use serde_json::json;
use sqlx::PgPool;

fn app(state: AppState) -> TestServer {
    let app = Router::new()
        .route(
            "/api/recipients",
            get(list_recipients_handler).post(add_recipients_handler),
        )
        .route("/api/recipients/delete", post(delete_recipients_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_bulk_add_mixed_input(pool: PgPool) {
    let server = app(common::create_test_state(pool.clone()));

    let response = server
        .post("/api/recipients")
        .json(&json!({ "emails": "a@b.com,bad-email\nc@d.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["added"], 2);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["errors"], json!(["Неверный формат: bad-email"]));

    assert_eq!(common::count_rows(&pool, "recipients").await, 2);
}

#[sqlx::test]
async fn test_bulk_add_duplicate_case_insensitive(pool: PgPool) {
    let server = app(common::create_test_state(pool.clone()));
    common::create_test_recipient(&pool, "alice@example.com", "token-a").await;

    let response = server
        .post("/api/recipients")
        .json(&json!({ "emails": "Alice@Example.com" }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["added"], 0);
    assert_eq!(json["skipped"], 1);
    assert_eq!(json["errors"], json!(["Дубликат: Alice@Example.com"]));

    assert_eq!(common::count_rows(&pool, "recipients").await, 1);
}

#[sqlx::test]
async fn test_bulk_add_empty_list(pool: PgPool) {
    let server = app(common::create_test_state(pool));

    let response = server
        .post("/api/recipients")
        .json(&json!({ "emails": "" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["message"], "Список email пуст");
}

#[sqlx::test]
async fn test_added_recipients_have_distinct_tokens(pool: PgPool) {
    let server = app(common::create_test_state(pool.clone()));

    server
        .post("/api/recipients")
        .json(&json!({ "emails": "a@example.com\nb@example.com\nc@example.com" }))
        .await
        .assert_status_ok();

    let distinct: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT token) FROM recipients")
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(distinct, 3);
}

#[sqlx::test]
async fn test_list_recipients_with_host_link(pool: PgPool) {
    let server = app(common::create_test_state(pool.clone()));
    common::create_test_recipient(&pool, "a@example.com", "abcdef0123456789").await;

    let response = server
        .get("/api/recipients")
        .add_header("Host", "phish.example.com")
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    let items = json.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["email"], "a@example.com");
    assert_eq!(
        items[0]["tracking_link"],
        "http://phish.example.com/track/abcdef0123456789"
    );
}

#[sqlx::test]
async fn test_list_recipients_with_public_base_url(pool: PgPool) {
    let settings = HttpSettings {
        public_base_url: Some("https://track.example.com".to_string()),
        ..HttpSettings::default()
    };
    let server = app(common::create_test_state_with(pool.clone(), settings));
    common::create_test_recipient(&pool, "a@example.com", "abcdef0123456789").await;

    let response = server.get("/api/recipients").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json[0]["tracking_link"],
        "https://track.example.com/track/abcdef0123456789"
    );
}

#[sqlx::test]
async fn test_delete_recipients_keeps_clicks(pool: PgPool) {
    let server = app(common::create_test_state(pool.clone()));
    let id = common::create_test_recipient(&pool, "a@example.com", "token-a").await;
    common::create_test_click(&pool, "token-a", Some(id), "10.0.0.1").await;

    let response = server
        .post("/api/recipients/delete")
        .json(&json!({ "ids": [id] }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["deleted"], 1);

    assert_eq!(common::count_rows(&pool, "recipients").await, 0);
    assert_eq!(common::count_rows(&pool, "clicks").await, 1);
}

#[sqlx::test]
async fn test_delete_recipients_without_ids(pool: PgPool) {
    let server = app(common::create_test_state(pool));

    let response = server
        .post("/api/recipients/delete")
        .json(&json!({ "ids": [] }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "no_ids");
    assert_eq!(json["error"]["message"], "Не выбраны email");
}
