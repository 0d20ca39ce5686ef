use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ErrorBody;
use crate::services::ShowError;

#[derive(Debug)]
pub enum ApiError {
    NotFound(String),

    DatabaseError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::DatabaseError(msg) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<ShowError> for ApiError {
    fn from(err: ShowError) -> Self {
        match err {
            ShowError::NotFound(id) => Self::show_not_found(id),
            ShowError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

impl ApiError {
    pub fn show_not_found(id: impl fmt::Display) -> Self {
        ApiError::NotFound(format!("Show {} not found", id))
    }
}
