//! Route definitions for the keyword taxonomy.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::keyword;
use crate::state::AppState;

/// Keyword routes.
///
/// ```text
/// GET    /keywords               -> dashboard
/// POST   /keywords/add           -> add
/// GET    /keyword/{id}           -> detail
/// POST   /keyword/{id}/edit      -> edit
/// POST   /keyword/{id}/delete    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/keywords", get(keyword::dashboard))
        .route("/keywords/add", post(keyword::add))
        .route("/keyword/{id}", get(keyword::detail))
        .route("/keyword/{id}/edit", post(keyword::edit))
        .route("/keyword/{id}/delete", post(keyword::delete))
}
