//! Handlers for the keyword taxonomy.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Form;
use ventureboard_core::keyword_tree::build_tree;
use ventureboard_core::types::DbId;
use ventureboard_db::models::keyword::{CreateKeyword, KeywordListParams, UpdateKeyword};
use ventureboard_db::repositories::{KeywordRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::flash::{redirect_with_flash, Flash, IncomingFlash};
use crate::form;
use crate::state::AppState;
use crate::views;

const DASHBOARD: &str = "/keywords";

/// GET /keywords?search=
pub async fn dashboard(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Query(params): Query<KeywordListParams>,
) -> AppResult<Response> {
    let rows = KeywordRepo::list_filtered(&state.pool, &params).await?;
    let total = rows.len();
    let tree = build_tree(rows);
    let shown: usize = tree.iter().map(|node| node.node_count()).sum();
    if shown < total {
        tracing::debug!(dropped = total - shown, "Keywords with a missing parent left out of the tree");
    }

    let projects = ProjectRepo::list(&state.pool).await?;
    let page = views::keyword::keyword_dashboard(&tree, &projects, &params, flash.flash.as_ref());
    Ok(flash.render(page))
}

/// POST /keywords/add
///
/// Creates the broad keyword and every listed long-tail keyword together;
/// if any insert fails none of them is kept.
pub async fn add(
    State(state): State<AppState>,
    submitted: Result<Form<CreateKeyword>, FormRejection>,
) -> Response {
    let secret = &state.config.secret_key;
    let input = match form::accept(submitted) {
        Ok(input) => input,
        Err(msg) => return redirect_with_flash(secret, DASHBOARD, Flash::error(msg)),
    };

    let long_tails = input.long_tails();
    let flash = match KeywordRepo::create_with_long_tails(&state.pool, &input, &long_tails).await {
        Ok((keyword, children)) => {
            tracing::info!(
                keyword_id = keyword.id,
                long_tails = children.len(),
                "Keyword added"
            );
            Flash::success(format!(
                "Keyword '{}' added with {} long-tail keyword(s).",
                keyword.keyword_text,
                children.len()
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to add keyword");
            Flash::error("Database error: the keyword could not be added.")
        }
    };
    redirect_with_flash(secret, DASHBOARD, flash)
}

/// GET /keyword/{id}
pub async fn detail(
    State(state): State<AppState>,
    flash: IncomingFlash,
    Path(id): Path<DbId>,
) -> AppResult<Response> {
    let keyword = KeywordRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Keyword", id))?;

    let parent = match keyword.parent_id {
        Some(parent_id) => KeywordRepo::find_by_id(&state.pool, parent_id).await?,
        None => None,
    };
    let children = KeywordRepo::list_children(&state.pool, id).await?;
    let project = match keyword.project_id {
        Some(project_id) => ProjectRepo::find_by_id(&state.pool, project_id).await?,
        None => None,
    };

    let page = views::keyword::keyword_detail(
        &keyword,
        parent.as_ref(),
        &children,
        project.as_ref(),
        flash.flash.as_ref(),
    );
    Ok(flash.render(page))
}

/// POST /keyword/{id}/edit
///
/// Overwrites the keyword text and, for a broad keyword, its competition
/// fields. Listed long-tails are appended under a broad keyword in the same
/// transaction.
pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    submitted: Result<Form<UpdateKeyword>, FormRejection>,
) -> Response {
    let secret = &state.config.secret_key;
    let location = format!("/keyword/{id}");
    let input = match form::accept(submitted) {
        Ok(input) => input,
        Err(msg) => return redirect_with_flash(secret, &location, Flash::error(msg)),
    };

    let existing = match KeywordRepo::find_by_id(&state.pool, id).await {
        Ok(Some(keyword)) => keyword,
        Ok(None) => {
            return redirect_with_flash(
                secret,
                DASHBOARD,
                Flash::error(format!("Keyword {id} not found.")),
            )
        }
        Err(e) => {
            tracing::error!(keyword_id = id, error = %e, "Failed to load keyword");
            return redirect_with_flash(
                secret,
                &location,
                Flash::error("Database error: the keyword could not be updated."),
            );
        }
    };

    let long_tails = input.long_tails();
    if existing.parent_id.is_some() && !long_tails.is_empty() {
        return redirect_with_flash(
            secret,
            &location,
            Flash::error("Long-tail keywords can only be added to a broad keyword."),
        );
    }

    let flash = match KeywordRepo::update_with_long_tails(&state.pool, id, &input, &long_tails).await
    {
        Ok(Some((keyword, added))) => {
            tracing::info!(keyword_id = keyword.id, long_tails = added.len(), "Keyword updated");
            if added.is_empty() {
                Flash::success("Keyword updated.")
            } else {
                Flash::success(format!(
                    "Keyword updated with {} new long-tail keyword(s).",
                    added.len()
                ))
            }
        }
        Ok(None) => {
            return redirect_with_flash(
                secret,
                DASHBOARD,
                Flash::error(format!("Keyword {id} not found.")),
            )
        }
        Err(e) => {
            tracing::error!(keyword_id = id, error = %e, "Failed to update keyword");
            Flash::error("Database error: the keyword could not be updated.")
        }
    };
    redirect_with_flash(secret, &location, flash)
}

/// POST /keyword/{id}/delete
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> Response {
    let flash = match KeywordRepo::delete(&state.pool, id).await {
        Ok(true) => {
            tracing::info!(keyword_id = id, "Keyword deleted");
            Flash::success("Keyword deleted.")
        }
        Ok(false) => Flash::error(format!("Keyword {id} not found.")),
        Err(e) => {
            tracing::error!(keyword_id = id, error = %e, "Failed to delete keyword");
            Flash::error("Database error: the keyword could not be deleted.")
        }
    };
    redirect_with_flash(&state.config.secret_key, DASHBOARD, flash)
}
