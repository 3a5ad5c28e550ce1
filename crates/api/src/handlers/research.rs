//! Handlers for a project's research materials.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use ventureboard_core::types::DbId;
use ventureboard_db::models::research::CreateResearchMaterial;
use ventureboard_db::repositories::ResearchRepo;

use super::{project_location, RESEARCH_TAB};
use crate::flash::{redirect_with_flash, Flash};
use crate::form;
use crate::state::AppState;

/// POST /project/{id}/research/add
pub async fn add(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    submitted: Result<Form<CreateResearchMaterial>, FormRejection>,
) -> Response {
    let location = project_location(project_id, Some(RESEARCH_TAB));
    let input = match form::accept(submitted) {
        Ok(input) => input,
        Err(msg) => {
            return redirect_with_flash(&state.config.secret_key, &location, Flash::error(msg))
        }
    };

    let flash = match ResearchRepo::create(&state.pool, project_id, &input).await {
        Ok(material) => {
            tracing::info!(project_id, research_id = material.id, "Research material saved");
            Flash::success("Research material saved.")
        }
        Err(e) => {
            tracing::error!(project_id, error = %e, "Failed to save research material");
            Flash::error("Database error: the research material could not be saved.")
        }
    };
    redirect_with_flash(&state.config.secret_key, &location, flash)
}

/// POST /research/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    let secret = &state.config.secret_key;
    match ResearchRepo::delete(&state.pool, id).await {
        Ok(Some(project_id)) => {
            tracing::info!(research_id = id, project_id, "Research material deleted");
            redirect_with_flash(
                secret,
                &project_location(project_id, Some(RESEARCH_TAB)),
                Flash::success("Research material deleted."),
            )
        }
        Ok(None) => redirect_with_flash(
            secret,
            "/",
            Flash::error(format!("Research material {id} not found.")),
        ),
        Err(e) => {
            tracing::error!(research_id = id, error = %e, "Failed to delete research material");
            redirect_with_flash(
                secret,
                "/",
                Flash::error("Database error: the research material could not be deleted."),
            )
        }
    }
}
