use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use ventureboard_db::repositories::{KeywordRepo, ProjectRepo};

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Row counts; absent when the database is unreachable.
    pub projects: Option<i64>,
    pub keywords: Option<i64>,
}

/// GET /health -- database reachability plus project and keyword counts.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let counts = tokio::try_join!(
        ProjectRepo::count(&state.pool),
        KeywordRepo::count(&state.pool)
    );
    let (projects, keywords) = match counts {
        Ok((projects, keywords)) => (Some(projects), Some(keywords)),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not query the database");
            (None, None)
        }
    };
    let db_healthy = projects.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        projects,
        keywords,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
