mod common;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use phish_tracker::api::handlers::{aggregate_handler, analytics_handler};
use phish_tracker::state::AppState;
use serde_json::json;
use sqlx::PgPool;

fn app(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/api/analytics", get(analytics_handler))
        .route("/api/analytics/aggregate", post(aggregate_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_analytics_empty_campaign(pool: PgPool) {
    let server = app(common::create_test_state(pool));

    let response = server.get("/api/analytics").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["total_links"], 0);
    assert_eq!(json["total_clicks"], 0);
    assert_eq!(json["non_clicked"], 0);
    assert_eq!(json["click_ratio"], 0.0);
    assert_eq!(json["click_percentage"], 0.0);
}

#[sqlx::test]
async fn test_analytics_counts_repeats_and_unmatched(pool: PgPool) {
    let server = app(common::create_test_state(pool.clone()));

    let a = common::create_test_recipient(&pool, "a@example.com", "token-a").await;
    common::create_test_recipient(&pool, "b@example.com", "token-b").await;
    common::create_test_recipient(&pool, "c@example.com", "token-c").await;
    common::create_test_recipient(&pool, "d@example.com", "token-d").await;

    common::create_test_click(&pool, "token-a", Some(a), "10.0.0.1").await;
    common::create_test_click(&pool, "token-a", Some(a), "10.0.0.1").await;
    common::create_test_click(&pool, "forged", None, "10.0.0.2").await;

    let json = server.get("/api/analytics").await.json::<serde_json::Value>();

    assert_eq!(json["total_links"], 4);
    assert_eq!(json["total_clicks"], 3);
    assert_eq!(json["unique_clicked_links"], 1);
    assert_eq!(json["non_clicked"], 3);
    assert_eq!(json["click_ratio"], 0.75);
    assert_eq!(json["click_percentage"], 75.0);
}

#[sqlx::test]
async fn test_analytics_non_clicked_negative_after_delete(pool: PgPool) {
    let server = app(common::create_test_state(pool.clone()));

    let a = common::create_test_recipient(&pool, "a@example.com", "token-a").await;
    let b = common::create_test_recipient(&pool, "b@example.com", "token-b").await;
    common::create_test_click(&pool, "token-a", Some(a), "10.0.0.1").await;
    common::create_test_click(&pool, "token-b", Some(b), "10.0.0.2").await;

    sqlx::query("DELETE FROM recipients")
        .execute(&pool)
        .await
        .unwrap();
    common::create_test_recipient(&pool, "c@example.com", "token-c").await;

    let json = server.get("/api/analytics").await.json::<serde_json::Value>();

    assert_eq!(json["total_links"], 1);
    assert_eq!(json["unique_clicked_links"], 2);
    assert_eq!(json["non_clicked"], -1);
    assert_eq!(json["click_percentage"], 200.0);
}

#[sqlx::test]
async fn test_aggregate(pool: PgPool) {
    let server = app(common::create_test_state(pool));

    let response = server
        .post("/api/analytics/aggregate")
        .json(&json!({
            "campaigns": [
                { "total_links": 100, "total_clicks": 25 },
                { "total_links": 150, "total_clicks": 45 },
                { "total_links": 80, "total_clicks": 20 }
            ]
        }))
        .await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["campaign_count"], 3);
    assert_eq!(json["total_links"], 330);
    assert_eq!(json["total_clicks"], 90);
    assert_eq!(json["overall_ratio"], 0.27);
    assert_eq!(json["overall_percentage"], 27.27);
}

#[sqlx::test]
async fn test_aggregate_rejects_negative_totals(pool: PgPool) {
    let server = app(common::create_test_state(pool));

    let response = server
        .post("/api/analytics/aggregate")
        .json(&json!({
            "campaigns": [{ "total_links": -10, "total_clicks": 5 }]
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[sqlx::test]
async fn test_aggregate_overflow_is_bad_request(pool: PgPool) {
    let server = app(common::create_test_state(pool));

    let response = server
        .post("/api/analytics/aggregate")
        .json(&json!({
            "campaigns": [
                { "total_links": i64::MAX, "total_clicks": 1 },
                { "total_links": 1, "total_clicks": 1 }
            ]
        }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["campaign"], 1);
}
