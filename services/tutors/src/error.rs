//! Custom error types for the tutors service

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::error::DatabaseError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Custom error type for the tutors service
#[derive(Error, Debug)]
pub enum ApiError {
    /// No credential presented
    #[error("No token, unauthorized")]
    Unauthenticated,

    /// Credential presented but invalid or expired
    #[error("Invalid or expired token")]
    Forbidden,

    /// Malformed identifier or missing required parameter
    #[error("{0}")]
    InvalidArgument(String),

    /// A mutation matched no document
    #[error("{0}")]
    NotFound(String),

    /// Unexpected failure
    #[error("{0}")]
    Internal(String),

    /// Store error
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden => StatusCode::FORBIDDEN,
            ApiError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Database(DatabaseError::InvalidId(_)) => StatusCode::BAD_REQUEST,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let (message, detail) = match &self {
            ApiError::Database(DatabaseError::InvalidId(_)) => {
                ("Invalid ID format".to_string(), "Bad Request".to_string())
            }
            ApiError::Database(e) => {
                error!("Database error: {}", e);
                ("Database error".to_string(), "Internal Server Error".to_string())
            }
            ApiError::Internal(msg) => {
                error!("Internal error: {}", msg);
                (msg.clone(), "Internal Server Error".to_string())
            }
            other => (
                other.to_string(),
                status.canonical_reason().unwrap_or("Error").to_string(),
            ),
        };

        let body = Json(json!({
            "message": message,
            "error": detail,
        }));

        (status, body).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidArgument(rejection.body_text())
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
