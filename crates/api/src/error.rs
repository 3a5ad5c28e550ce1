use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ventureboard_core::error::CoreError;

use crate::views;

/// Application-level error type for page handlers.
///
/// Form handlers never return it for validation or storage failures (those
/// become flash messages and a redirect). It covers the cases that must
/// surface as an HTTP status: a missing project or keyword, and storage
/// failures while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `ventureboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: ventureboard_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::NotFound { entity, id }) => {
                (StatusCode::NOT_FOUND, format!("{entity} with id {id} not found"))
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, views::error_page(status, &message)).into_response()
    }
}
