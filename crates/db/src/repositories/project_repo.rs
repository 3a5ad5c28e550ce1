//! Repository for the `projects` table.

use sqlx::SqlitePool;
use ventureboard_core::status::DEFAULT_PROJECT_STATUS;
use ventureboard_core::types::DbId;

use super::contains_pattern;
use crate::models::project::{CreateProject, Project, ProjectListParams, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_name, code_repository, idea, description, market_research, \
    competitor_research, status, start_date, due_date, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `status` defaults to `idea` and `start_date` to today's (UTC) date.
    pub async fn create(pool: &SqlitePool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (project_name, code_repository, idea, description, status, start_date)
             VALUES (?1, ?2, ?3, ?4, COALESCE(?5, ?6), date('now'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_name)
            .bind(&input.code_repository)
            .bind(&input.idea)
            .bind(&input.description)
            .bind(&input.status)
            .bind(DEFAULT_PROJECT_STATUS)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = ?1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Project>, sqlx::Error> {
        Self::list_filtered(pool, &ProjectListParams::default()).await
    }

    /// List projects, optionally narrowed to one status and/or a
    /// case-insensitive search over name and idea. Newest first.
    pub async fn list_filtered(
        pool: &SqlitePool,
        params: &ProjectListParams,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE (?1 IS NULL OR status = ?1)
               AND (?2 IS NULL
                    OR project_name LIKE ?2 ESCAPE '\\'
                    OR idea LIKE ?2 ESCAPE '\\')
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&params.status)
            .bind(contains_pattern(params.search.as_deref()))
            .fetch_all(pool)
            .await
    }

    /// Overwrite every editable column of a project with `input`.
    ///
    /// Fields that are `None` are stored as NULL; nothing is merged with the
    /// existing row. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                project_name = ?2,
                code_repository = ?3,
                idea = ?4,
                description = ?5,
                market_research = ?6,
                competitor_research = ?7,
                status = ?8,
                start_date = ?9,
                due_date = ?10
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.project_name)
            .bind(&input.code_repository)
            .bind(&input.idea)
            .bind(&input.description)
            .bind(&input.market_research)
            .bind(&input.competitor_research)
            .bind(&input.status)
            .bind(&input.start_date)
            .bind(&input.due_date)
            .fetch_optional(pool)
            .await
    }

    /// Number of rows in the `projects` table.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }
}
