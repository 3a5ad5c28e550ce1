//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use ventureboard_core::form::empty_as_none;
use ventureboard_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_name: String,
    pub code_repository: Option<String>,
    pub idea: Option<String>,
    pub description: Option<String>,
    pub market_research: Option<String>,
    pub competitor_research: Option<String>,
    pub status: Option<String>,
    pub start_date: Option<String>,
    pub due_date: Option<String>,
    pub created_at: Timestamp,
}

/// Form model for the new-project page.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProject {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Project Name is a required field."),
        length(max = 100, message = "Project Name cannot exceed 100 characters.")
    )]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub code_repository: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub idea: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    /// Defaults to `idea` if omitted.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
}

/// Form model for the project detail page.
///
/// Every editable column is written back as submitted: a field left blank
/// clears the stored value.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Project Name cannot be empty."),
        length(max = 100, message = "Project Name cannot exceed 100 characters.")
    )]
    pub project_name: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub code_repository: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub idea: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub market_research: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub competitor_research: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub due_date: Option<String>,
}

/// Query parameters for the project list (`?status=&search=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub search: Option<String>,
}
