//! Repository for the `research_materials` table.

use sqlx::SqlitePool;
use ventureboard_core::types::DbId;

use crate::models::research::{CreateResearchMaterial, ResearchMaterial};

const COLUMNS: &str = "id, project_id, title, url, summary, saved_at";

/// Provides create/list/delete for research materials. Materials are never
/// edited in place.
pub struct ResearchRepo;

impl ResearchRepo {
    /// Attach a research material to `project_id`.
    pub async fn create(
        pool: &SqlitePool,
        project_id: DbId,
        input: &CreateResearchMaterial,
    ) -> Result<ResearchMaterial, sqlx::Error> {
        let query = format!(
            "INSERT INTO research_materials (project_id, title, url, summary)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ResearchMaterial>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.summary)
            .fetch_one(pool)
            .await
    }

    /// List a project's research materials, most recently saved first.
    pub async fn list_by_project(
        pool: &SqlitePool,
        project_id: DbId,
    ) -> Result<Vec<ResearchMaterial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM research_materials
             WHERE project_id = ?1
             ORDER BY saved_at DESC, id DESC"
        );
        sqlx::query_as::<_, ResearchMaterial>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a research material. Returns the owning project's id, or
    /// `None` if the row did not exist.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("DELETE FROM research_materials WHERE id = ?1 RETURNING project_id")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
