//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, get, post_form};
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["projects"], 0);
    assert_eq!(json["keywords"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_counts_projects_and_keywords(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    post_form(app.clone(), "/new", &[("project_name", "Lemonade stand")]).await;
    post_form(
        app.clone(),
        "/keywords/add",
        &[("keyword_text", "lemonade"), ("long_tail_keywords", "pink lemonade\nlemonade recipe")],
    )
    .await;

    let json = body_json(get(app, "/health").await).await;
    assert_eq!(json["projects"], 1);
    assert_eq!(json["keywords"], 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_reports_closed_pool_as_degraded(pool: SqlitePool) {
    pool.close().await;
    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert!(json["projects"].is_null());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns the HTML 404 page
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Page not found"));
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}
