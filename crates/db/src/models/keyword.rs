//! Keyword entity model and DTOs.
//!
//! Keywords form a two-level taxonomy: broad keywords have no parent,
//! long-tail keywords point at a broad keyword and carry no competition
//! data of their own.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;
use ventureboard_core::form::{empty_as_none, parse_long_tails};
use ventureboard_core::keyword_tree::TreeRow;
use ventureboard_core::types::{DbId, Timestamp};

/// A row from the `keywords` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Keyword {
    pub id: DbId,
    pub project_id: Option<DbId>,
    pub keyword_text: String,
    /// `None` for broad keywords.
    pub parent_id: Option<DbId>,
    pub competition_level: Option<String>,
    pub competitor_analysis: Option<String>,
    pub created_at: Timestamp,
}

impl Keyword {
    pub fn is_broad(&self) -> bool {
        self.parent_id.is_none()
    }
}

impl TreeRow for Keyword {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }
}

/// Form model for the keyword dashboard's add form.
///
/// Creates one broad keyword plus any long-tail keywords listed in
/// `long_tail_keywords` (one per line or comma-separated).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateKeyword {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Keyword is a required field."),
        length(max = 100, message = "Keyword cannot exceed 100 characters.")
    )]
    pub keyword_text: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub project_id: Option<DbId>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub competition_level: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub competitor_analysis: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub long_tail_keywords: Option<String>,
}

impl CreateKeyword {
    /// The long-tail entries submitted with this keyword.
    pub fn long_tails(&self) -> Vec<String> {
        self.long_tail_keywords
            .as_deref()
            .map(parse_long_tails)
            .unwrap_or_default()
    }
}

/// Form model for the keyword page's edit form.
///
/// Text and competition fields are overwritten as submitted. Entries in
/// `long_tail_keywords` are added as new long-tails of a broad keyword;
/// existing long-tails are kept.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateKeyword {
    #[serde(default, deserialize_with = "empty_as_none")]
    #[validate(
        required(message = "Keyword is a required field."),
        length(max = 100, message = "Keyword cannot exceed 100 characters.")
    )]
    pub keyword_text: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub competition_level: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub competitor_analysis: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub long_tail_keywords: Option<String>,
}

impl UpdateKeyword {
    /// The long-tail entries to add under the edited keyword.
    pub fn long_tails(&self) -> Vec<String> {
        self.long_tail_keywords
            .as_deref()
            .map(parse_long_tails)
            .unwrap_or_default()
    }
}

/// Query parameters for the keyword dashboard (`?search=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeywordListParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub search: Option<String>,
}
