//! Repository for the `tasks` table.

use sqlx::SqlitePool;
use ventureboard_core::status::{is_task_done, DEFAULT_TASK_STATUS};
use ventureboard_core::types::DbId;

use crate::models::task::{CreateTask, Task};

const COLUMNS: &str =
    "id, project_id, task_name, status, notes, due_date, completed_at, created_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task under `project_id`. `status` defaults to `todo`.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateTask,
    ) -> Result<Task, sqlx::Error> {
        let status = input.status.as_deref().unwrap_or(DEFAULT_TASK_STATUS);
        let query = format!(
            "INSERT INTO tasks (project_id, task_name, status, notes, due_date, completed_at)
             VALUES (?1, ?2, ?3, ?4, ?5,
                     CASE WHEN ?6 THEN strftime('%Y-%m-%dT%H:%M:%fZ', 'now') ELSE NULL END)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(&input.task_name)
            .bind(status)
            .bind(&input.notes)
            .bind(&input.due_date)
            .bind(is_task_done(status))
            .fetch_one(pool)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's tasks, newest first.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks WHERE project_id = ?1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Set a task's status. Moving to `done` stamps `completed_at` with the
    /// current time; any other status clears it.
    ///
    /// Returns the owning project's id, or `None` if the task does not exist.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "UPDATE tasks SET
                status = ?2,
                completed_at = CASE WHEN ?3 THEN strftime('%Y-%m-%dT%H:%M:%fZ', 'now') ELSE NULL END
             WHERE id = ?1
             RETURNING project_id",
        )
        .bind(id)
        .bind(status)
        .bind(is_task_done(status))
        .fetch_optional(pool)
        .await
    }

    /// Delete a task. Returns the owning project's id, or `None` if the task
    /// did not exist.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("DELETE FROM tasks WHERE id = ?1 RETURNING project_id")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
