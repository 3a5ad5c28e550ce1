//! Research material entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use ventureboard_core::form::empty_as_none;
use ventureboard_core::types::{DbId, Timestamp};

/// A row from the `research_materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ResearchMaterial {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub url: Option<String>,
    pub summary: Option<String>,
    pub saved_at: Timestamp,
}

/// Form model for attaching research material to a project.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateResearchMaterial {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(required(message = "Research title is a required field."))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub summary: Option<String>,
}
