//! Handlers for a project's tasks.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use ventureboard_core::types::DbId;
use ventureboard_db::models::task::{CreateTask, UpdateTaskStatus};
use ventureboard_db::repositories::TaskRepo;

use super::{project_location, TASKS_TAB};
use crate::flash::{redirect_with_flash, Flash};
use crate::form;
use crate::state::AppState;

/// POST /project/{id}/task/add
pub async fn add(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    submitted: Result<Form<CreateTask>, FormRejection>,
) -> Response {
    let location = project_location(project_id, Some(TASKS_TAB));
    let input = match form::accept(submitted) {
        Ok(input) => input,
        Err(msg) => {
            return redirect_with_flash(&state.config.secret_key, &location, Flash::error(msg))
        }
    };

    let flash = match TaskRepo::create(&state.pool, project_id, &input).await {
        Ok(task) => {
            tracing::info!(project_id, task_id = task.id, "Task added");
            Flash::success("Task added.")
        }
        Err(e) => {
            tracing::error!(project_id, error = %e, "Failed to add task");
            Flash::error("Database error: the task could not be added.")
        }
    };
    redirect_with_flash(&state.config.secret_key, &location, flash)
}

/// POST /task/{id}/edit
///
/// Changes the status only. Moving to `done` stamps the completion time;
/// any other status clears it.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    submitted: Result<Form<UpdateTaskStatus>, FormRejection>,
) -> Response {
    let secret = &state.config.secret_key;
    let input = match form::accept(submitted) {
        Ok(input) => input,
        Err(msg) => return redirect_to_owner(&state, id, Flash::error(msg)).await,
    };
    let Some(status) = input.status.as_deref() else {
        return redirect_to_owner(&state, id, Flash::error("Task status is required.")).await;
    };

    match TaskRepo::update_status(&state.pool, id, status).await {
        Ok(Some(project_id)) => {
            tracing::info!(task_id = id, status, "Task status updated");
            redirect_with_flash(
                secret,
                &project_location(project_id, Some(TASKS_TAB)),
                Flash::success("Task updated."),
            )
        }
        Ok(None) => redirect_with_flash(secret, "/", Flash::error(format!("Task {id} not found."))),
        Err(e) => {
            tracing::error!(task_id = id, error = %e, "Failed to update task");
            redirect_to_owner(
                &state,
                id,
                Flash::error("Database error: the task could not be updated."),
            )
            .await
        }
    }
}

/// POST /task/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    let secret = &state.config.secret_key;
    match TaskRepo::delete(&state.pool, id).await {
        Ok(Some(project_id)) => {
            tracing::info!(task_id = id, project_id, "Task deleted");
            redirect_with_flash(
                secret,
                &project_location(project_id, Some(TASKS_TAB)),
                Flash::success("Task deleted."),
            )
        }
        Ok(None) => redirect_with_flash(secret, "/", Flash::error(format!("Task {id} not found."))),
        Err(e) => {
            tracing::error!(task_id = id, error = %e, "Failed to delete task");
            redirect_with_flash(
                secret,
                "/",
                Flash::error("Database error: the task could not be deleted."),
            )
        }
    }
}

/// Redirect to the task's project page when the task can still be found,
/// otherwise to the project list.
async fn redirect_to_owner(state: &AppState, task_id: DbId, flash: Flash) -> Response {
    let location = match TaskRepo::find_by_id(&state.pool, task_id).await {
        Ok(Some(task)) => project_location(task.project_id, Some(TASKS_TAB)),
        _ => "/".to_string(),
    };
    redirect_with_flash(&state.config.secret_key, &location, flash)
}
