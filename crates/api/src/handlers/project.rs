//! Handlers for projects: list, create, detail and update.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Form;
use ventureboard_core::types::DbId;
use ventureboard_db::models::project::{CreateProject, ProjectListParams, UpdateProject};
use ventureboard_db::repositories::{ProjectRepo, ResearchRepo, TaskRepo};

use super::project_location;
use crate::error::{AppError, AppResult};
use crate::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::form;
use crate::state::AppState;
use crate::views;

/// GET /?status=&search=
pub async fn list(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Response> {
    let projects = ProjectRepo::list_filtered(&state.pool, &params).await?;
    let page = views::project::project_list(&projects, &params, flash.flash.as_ref());
    Ok(flash.render(page))
}

/// GET /new
pub async fn new_form(flash: IncomingFlash) -> Response {
    let page = views::project::new_project_form(None, flash.flash.as_ref());
    flash.render(page)
}

/// POST /new
///
/// A submission without a project name re-renders the form with the error
/// instead of redirecting, keeping what the user typed.
pub async fn create(
    State(state): State<AppState>,
    submitted: Result<Form<CreateProject>, FormRejection>,
) -> Response {
    let input = match submitted {
        Ok(Form(input)) => input,
        Err(rejection) => {
            let flash = Flash::error(form::rejected(&rejection));
            let page = views::project::new_project_form(None, Some(&flash));
            return (StatusCode::OK, page).into_response();
        }
    };
    if let Err(msg) = form::check(&input) {
        let page = views::project::new_project_form(Some(&input), Some(&Flash::error(msg)));
        return (StatusCode::OK, page).into_response();
    }

    let flash = match ProjectRepo::create(&state.pool, &input).await {
        Ok(project) => {
            tracing::info!(project_id = project.id, "Project created");
            Flash::success(format!(
                "Project '{}' created successfully!",
                project.project_name
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create project");
            Flash::error("Database error: the project could not be created.")
        }
    };
    redirect_with_flash(&state.config.secret_key, "/", flash)
}

/// GET /project/{id}
pub async fn detail(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;
    let tasks = TaskRepo::list_by_project(&state.pool, id).await?;
    let research = ResearchRepo::list_by_project(&state.pool, id).await?;

    let page = views::project::project_detail(&project, &tasks, &research, flash.flash.as_ref());
    Ok(flash.render(page))
}

/// POST /project/{id}
///
/// Every editable field is replaced by the submitted value; blank fields
/// clear the stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    submitted: Result<Form<UpdateProject>, FormRejection>,
) -> AppResult<Response> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Project", id))?;

    let location = project_location(id, None);
    let input = match form::accept(submitted) {
        Ok(input) => input,
        Err(msg) => {
            return Ok(redirect_with_flash(
                &state.config.secret_key,
                &location,
                Flash::error(msg),
            ))
        }
    };

    let flash = match ProjectRepo::update(&state.pool, id, &input).await {
        Ok(Some(_)) => {
            tracing::info!(project_id = id, "Project updated");
            Flash::success("Project updated successfully!")
        }
        Ok(None) => return Err(AppError::not_found("Project", id)),
        Err(e) => {
            tracing::error!(project_id = id, error = %e, "Failed to update project");
            Flash::error("Database error on update: the project was not saved.")
        }
    };
    Ok(redirect_with_flash(&state.config.secret_key, &location, flash))
}
