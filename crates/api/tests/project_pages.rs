//! HTTP-level tests for the project pages.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use common::{body_text, flash_cookie, flash_from, get, get_with_cookie, location, post_form};
use sqlx::SqlitePool;
use ventureboard_api::flash::{Flash, FlashLevel};
use ventureboard_db::repositories::ProjectRepo;

/// Create a project through the form and return its id.
async fn create_project(pool: &SqlitePool, fields: &[(&str, &str)]) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/new", fields).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let projects = ProjectRepo::list(pool).await.unwrap();
    projects[0].id
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_without_name_rerenders_form(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/new", &[("project_name", ""), ("idea", "keep me")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Project Name is a required field."));
    assert!(body.contains("keep me"), "submitted values stay in the form");

    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_whitespace_name_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/new", &[("project_name", "   ")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_overlong_name_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let name = "n".repeat(101);
    let response = post_form(app, "/new", &[("project_name", &name)]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Project Name cannot exceed 100 characters."));
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_redirects_with_flash_and_lists_newest_first(pool: SqlitePool) {
    create_project(&pool, &[("project_name", "Older")]).await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/new", &[("project_name", "X")]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/");
    assert_eq!(
        flash_from(&response),
        Some(Flash::success("Project 'X' created successfully!"))
    );

    let cookie = flash_cookie(&response).unwrap();
    let app = common::build_test_app(pool.clone());
    let page = get_with_cookie(app, "/", &cookie).await;
    assert_eq!(page.status(), StatusCode::OK);
    let cleared = page.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
    assert!(cleared.contains("Max-Age=0"), "flash is shown only once");

    let body = body_text(page).await;
    assert!(body.contains("flash-success"));
    let x = body.find(">X</a>").expect("new project is listed");
    let older = body.find(">Older</a>").expect("older project is listed");
    assert!(x < older, "newest project comes first");

    let projects = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(projects[0].project_name, "X");
    assert_eq!(projects[0].status.as_deref(), Some("idea"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_without_projects_shows_empty_state(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(SET_COOKIE).is_none());
    assert!(body_text(response).await.contains("No projects yet."));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_filters_by_status(pool: SqlitePool) {
    create_project(&pool, &[("project_name", "Alpha"), ("status", "running")]).await;
    create_project(&pool, &[("project_name", "Beta")]).await;

    let app = common::build_test_app(pool);
    let body = body_text(get(app, "/?status=running&search=").await).await;

    assert!(body.contains(">Alpha</a>"));
    assert!(!body.contains(">Beta</a>"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_names_are_html_escaped(pool: SqlitePool) {
    create_project(&pool, &[("project_name", "<script>alert(1)</script>")]).await;

    let app = common::build_test_app(pool);
    let body = body_text(get(app, "/").await).await;

    assert!(!body.contains("<script>"));
    assert!(body.contains("&lt;script&gt;"));
}

// ---------------------------------------------------------------------------
// Detail / update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_shows_project(pool: SqlitePool) {
    let id = create_project(&pool, &[("project_name", "Detail Me"), ("idea", "An idea")]).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/project/{id}")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Detail Me"));
    assert!(body.contains("An idea"));
    assert!(body.contains("id=\"tasks\""));
    assert!(body.contains("id=\"research\""));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_of_missing_project_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/project/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_text(response).await.contains("Project with id 999999 not found"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_detail_with_malformed_id_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/project/abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_overwrites_unsubmitted_fields(pool: SqlitePool) {
    let id = create_project(
        &pool,
        &[
            ("project_name", "Overwrite"),
            ("idea", "old idea"),
            ("code_repository", "https://example.com/repo"),
        ],
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/project/{id}"),
        &[("project_name", "Overwrite"), ("status", "running")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/project/{id}"));
    assert_eq!(
        flash_from(&response),
        Some(Flash::success("Project updated successfully!"))
    );

    let project = ProjectRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(project.status.as_deref(), Some("running"));
    assert!(project.idea.is_none(), "fields left out are cleared, not merged");
    assert!(project.code_repository.is_none());
    assert!(project.start_date.is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_empty_name_keeps_row(pool: SqlitePool) {
    let id = create_project(&pool, &[("project_name", "Keep"), ("idea", "stay")]).await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, &format!("/project/{id}"), &[("project_name", "")]).await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/project/{id}"));
    let flash = flash_from(&response).unwrap();
    assert_eq!(flash.level, FlashLevel::Error);
    assert_eq!(flash.message, "Project Name cannot be empty.");

    let project = ProjectRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(project.project_name, "Keep");
    assert_eq!(project.idea.as_deref(), Some("stay"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_with_unreadable_body_flashes_error(pool: SqlitePool) {
    let id = create_project(&pool, &[("project_name", "Keep")]).await;

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/project/{id}"),
        &[("project_name", "One"), ("project_name", "Two")],
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), format!("/project/{id}"));
    let flash = flash_from(&response).unwrap();
    assert_eq!(flash.level, FlashLevel::Error);
    assert!(flash.message.starts_with("The form could not be read."));
    let project = ProjectRepo::find_by_id(&pool, id).await.unwrap().unwrap();
    assert_eq!(project.project_name, "Keep");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_with_unreadable_body_rerenders_form(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/new", &[("project_name", "A"), ("project_name", "B")]).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("flash-error"));
    assert!(body.contains("The form could not be read."));
    assert_eq!(ProjectRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_of_missing_project_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = post_form(app, "/project/424242", &[("project_name", "Ghost")]).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
