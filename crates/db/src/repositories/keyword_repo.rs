//! Repository for the `keywords` table.
//!
//! Broad keywords are inserted with no parent. Long-tail keywords are
//! inserted under an existing broad keyword, inherit its project and never
//! store competition data. A long-tail insert whose parent is missing or is
//! itself a long-tail keyword inserts nothing, which keeps the taxonomy at
//! two levels.

use sqlx::{SqliteConnection, SqlitePool};
use ventureboard_core::types::DbId;

use super::contains_pattern;
use crate::models::keyword::{CreateKeyword, Keyword, KeywordListParams, UpdateKeyword};

const COLUMNS: &str = "id, project_id, keyword_text, parent_id, competition_level, \
    competitor_analysis, created_at";

/// Provides CRUD operations for keywords.
pub struct KeywordRepo;

impl KeywordRepo {
    /// Insert a broad keyword (no parent), returning the created row.
    pub async fn create(pool: &SqlitePool, input: &CreateKeyword) -> Result<Keyword, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert_broad(&mut conn, input).await
    }

    /// Insert a long-tail keyword under the broad keyword `parent_id`.
    ///
    /// Returns `None` (and inserts nothing) if the parent does not exist or
    /// is not a broad keyword.
    pub async fn create_long_tail(
        pool: &SqlitePool,
        parent_id: DbId,
        keyword_text: &str,
    ) -> Result<Option<Keyword>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::insert_long_tail(&mut conn, parent_id, keyword_text).await
    }

    /// Insert a broad keyword and its long-tail keywords in one transaction.
    ///
    /// Each long-tail row references the broad keyword's generated id. If
    /// any insert fails nothing is kept.
    pub async fn create_with_long_tails(
        pool: &SqlitePool,
        input: &CreateKeyword,
        long_tails: &[String],
    ) -> Result<(Keyword, Vec<Keyword>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let parent = Self::insert_broad(&mut tx, input).await?;
        let mut children = Vec::with_capacity(long_tails.len());
        for text in long_tails {
            let child = Self::insert_long_tail(&mut tx, parent.id, text)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            children.push(child);
        }

        tx.commit().await?;
        Ok((parent, children))
    }

    /// Find a keyword by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Keyword>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM keywords WHERE id = ?1");
        sqlx::query_as::<_, Keyword>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every keyword, alphabetically by text.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Keyword>, sqlx::Error> {
        Self::list_filtered(pool, &KeywordListParams::default()).await
    }

    /// List keywords alphabetically, optionally narrowed by a search term.
    ///
    /// A match on a broad keyword keeps its long-tails, and a match on a
    /// long-tail keeps its parent, so matches still group into the tree.
    pub async fn list_filtered(
        pool: &SqlitePool,
        params: &KeywordListParams,
    ) -> Result<Vec<Keyword>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM keywords
             WHERE ?1 IS NULL
                OR keyword_text LIKE ?1 ESCAPE '\\'
                OR competitor_analysis LIKE ?1 ESCAPE '\\'
                OR parent_id IN (SELECT id FROM keywords
                                 WHERE keyword_text LIKE ?1 ESCAPE '\\'
                                    OR competitor_analysis LIKE ?1 ESCAPE '\\')
                OR id IN (SELECT parent_id FROM keywords
                          WHERE parent_id IS NOT NULL
                            AND (keyword_text LIKE ?1 ESCAPE '\\'
                                 OR competitor_analysis LIKE ?1 ESCAPE '\\'))
             ORDER BY keyword_text ASC, id ASC"
        );
        sqlx::query_as::<_, Keyword>(&query)
            .bind(contains_pattern(params.search.as_deref()))
            .fetch_all(pool)
            .await
    }

    /// List the long-tail keywords directly under `parent_id`, alphabetically.
    pub async fn list_children(
        pool: &SqlitePool,
        parent_id: DbId,
    ) -> Result<Vec<Keyword>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM keywords WHERE parent_id = ?1 ORDER BY keyword_text ASC, id ASC"
        );
        sqlx::query_as::<_, Keyword>(&query)
            .bind(parent_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a keyword's text and competition fields, then add
    /// `long_tails` under it, all in one transaction.
    ///
    /// A long-tail keyword keeps NULL competition fields whatever was
    /// submitted, and cannot receive long-tails of its own: the insert finds
    /// no broad parent and the whole edit is rolled back with
    /// `RowNotFound`. Returns `None` if no keyword with `id` exists.
    pub async fn update_with_long_tails(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateKeyword,
        long_tails: &[String],
    ) -> Result<Option<(Keyword, Vec<Keyword>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE keywords SET
                keyword_text = ?2,
                competition_level = CASE WHEN parent_id IS NULL THEN ?3 ELSE NULL END,
                competitor_analysis = CASE WHEN parent_id IS NULL THEN ?4 ELSE NULL END
             WHERE id = ?1
             RETURNING {COLUMNS}"
        );
        let Some(keyword) = sqlx::query_as::<_, Keyword>(&query)
            .bind(id)
            .bind(&input.keyword_text)
            .bind(&input.competition_level)
            .bind(&input.competitor_analysis)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut added = Vec::with_capacity(long_tails.len());
        for text in long_tails {
            let child = Self::insert_long_tail(&mut tx, keyword.id, text)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            added.push(child);
        }

        tx.commit().await?;
        Ok(Some((keyword, added)))
    }

    /// Delete a keyword; its long-tail keywords are removed with it.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM keywords WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count keywords of both levels.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM keywords")
            .fetch_one(pool)
            .await
    }

    async fn insert_broad(
        conn: &mut SqliteConnection,
        input: &CreateKeyword,
    ) -> Result<Keyword, sqlx::Error> {
        let query = format!(
            "INSERT INTO keywords
                (project_id, keyword_text, parent_id, competition_level, competitor_analysis)
             VALUES (?1, ?2, NULL, ?3, ?4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Keyword>(&query)
            .bind(input.project_id)
            .bind(&input.keyword_text)
            .bind(&input.competition_level)
            .bind(&input.competitor_analysis)
            .fetch_one(&mut *conn)
            .await
    }

    async fn insert_long_tail(
        conn: &mut SqliteConnection,
        parent_id: DbId,
        keyword_text: &str,
    ) -> Result<Option<Keyword>, sqlx::Error> {
        let query = format!(
            "INSERT INTO keywords
                (project_id, keyword_text, parent_id, competition_level, competitor_analysis)
             SELECT project_id, ?2, id, NULL, NULL
               FROM keywords
              WHERE id = ?1 AND parent_id IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Keyword>(&query)
            .bind(parent_id)
            .bind(keyword_text)
            .fetch_optional(&mut *conn)
            .await
    }
}
