//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` so every handler can return `Result<_, AppError>`.

pub mod config;
pub mod schema;

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, schema::SchemaError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Every response body is an `ErrorDto`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// The `account` table does not match the expected schema.
    ///
    /// Only produced at startup, where it aborts the boot.
    #[error(transparent)]
    SchemaErr(#[from] SchemaError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 400 Bad Request, `RecordNotFound` becomes
    /// 404 Not Found, and anything else is a 500 carrying the driver message.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, including conflicts with existing records.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request body is not valid JSON for the expected payload.
    ///
    /// Results in 400 Bad Request carrying axum's rejection message.
    #[error("{}", .0.body_text())]
    JsonRejection(#[from] JsonRejection),

    /// Path segment could not be parsed, e.g. a non-numeric ID.
    #[error("{}", .0.body_text())]
    PathRejection(#[from] PathRejection),

    /// Query string could not be deserialized.
    #[error("{}", .0.body_text())]
    QueryRejection(#[from] QueryRejection),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::JsonRejection(_) | Self::PathRejection(_) | Self::QueryRejection(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::DbErr(DbErr::RecordNotFound(_)) => StatusCode::NOT_FOUND,
            Self::DbErr(err) if is_unique_violation(err) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, extractor rejections and unique constraint violations
/// - 404 Not Found - For `NotFound` and `DbErr::RecordNotFound`
/// - 500 Internal Server Error - For all other errors, logged and passed through
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            Self::NotFound(msg) | Self::BadRequest(msg) => {
                (status, Json(ErrorDto { error: msg })).into_response()
            }
            Self::DbErr(DbErr::RecordNotFound(msg)) => {
                (status, Json(ErrorDto { error: msg })).into_response()
            }
            err if status == StatusCode::BAD_REQUEST => {
                (status, Json(ErrorDto { error: err.to_string() })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The error message is logged and returned to the client, since operators of the
/// dashboard are the ones who need to see database failures.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        tracing::error!("{}", message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto { error: message }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_not_found_and_bad_request() {
        assert_eq!(
            AppError::NotFound("Group not found".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::BadRequest("Rank is required".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn maps_extractor_rejections_to_400() {
        use axum::extract::rejection::MissingJsonContentType;

        let err = AppError::from(JsonRejection::from(MissingJsonContentType::default()));

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn maps_record_not_found_to_404() {
        let err = AppError::DbErr(DbErr::RecordNotFound("account 1".to_string()));

        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn maps_other_database_errors_to_500() {
        let err = AppError::DbErr(DbErr::Custom("connection reset".to_string()));

        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("connection reset"));
    }
}
