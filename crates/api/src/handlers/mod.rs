//! Request handlers, one module per resource.
//!
//! GET handlers render a page. POST handlers validate their form model,
//! run one repository call, attach a flash message and answer with a
//! `303 See Other` so a browser refresh never resubmits the form.

pub mod keyword;
pub mod project;
pub mod research;
pub mod task;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use ventureboard_core::types::DbId;

use crate::views;

/// Fragment selecting the tasks tab on the project page.
pub const TASKS_TAB: &str = "tasks";

/// Fragment selecting the research tab on the project page.
pub const RESEARCH_TAB: &str = "research";

/// Canonical location of a project page, optionally opened on a tab.
pub fn project_location(id: DbId, tab: Option<&str>) -> String {
    match tab {
        Some(tab) => format!("/project/{id}#{tab}"),
        None => format!("/project/{id}"),
    }
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        views::error_page(StatusCode::NOT_FOUND, "Page not found"),
    )
}
