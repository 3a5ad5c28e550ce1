//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use ventureboard_core::form::empty_as_none;
use ventureboard_core::types::{DbId, Timestamp};

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub task_name: String,
    pub status: String,
    pub notes: Option<String>,
    pub due_date: Option<String>,
    /// Set only while `status` is `done`.
    pub completed_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Form model for adding a task to a project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTask {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Task Name is a required field."))]
    pub task_name: Option<String>,
    /// Defaults to `todo` if omitted.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub due_date: Option<String>,
}

/// Form model for the inline task status editor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTaskStatus {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Task status is required."))]
    pub status: Option<String>,
}
