//! Route definitions for projects and their tasks and research materials.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{project, research, task};
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// GET    /                            -> project::list
/// GET    /new                         -> project::new_form
/// POST   /new                         -> project::create
/// GET    /project/{id}                -> project::detail
/// POST   /project/{id}                -> project::update
///
/// POST   /project/{id}/research/add   -> research::add
/// POST   /research/{id}/delete        -> research::delete
///
/// POST   /project/{id}/task/add       -> task::add
/// POST   /task/{id}/edit              -> task::edit
/// POST   /task/{id}/delete            -> task::delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/new", get(project::new_form).post(project::create))
        .route("/project/{id}", get(project::detail).post(project::update))
        .route("/project/{id}/research/add", post(research::add))
        .route("/research/{id}/delete", post(research::delete))
        .route("/project/{id}/task/add", post(task::add))
        .route("/task/{id}/edit", post(task::edit))
        .route("/task/{id}/delete", post(task::delete))
}
