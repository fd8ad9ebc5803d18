//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the
//! ShiftManager API. It maps domain-specific errors to appropriate HTTP
//! status codes and JSON error responses, ensuring a consistent error
//! handling experience across the entire API.
//!
//! The implementation is based on Axum's error handling mechanisms and
//! integrates with ShiftManager's custom error types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use shiftmanager_core::errors::ShiftError;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `ShiftError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads. Both persistence and notification
/// failures surface as 500s with the underlying error's message in an
/// `{"error": ...}` body.
#[derive(Debug)]
pub struct AppError(pub ShiftError);

/// Converts application errors to HTTP responses
///
/// This implementation maps each error type to the appropriate HTTP status
/// code and formats the error message into a JSON response body.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            ShiftError::NotFound(_) => StatusCode::NOT_FOUND,
            ShiftError::Validation(_) => StatusCode::BAD_REQUEST,
            ShiftError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShiftError::Notification(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShiftError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        // Combine status code and JSON body into a response
        (status, body).into_response()
    }
}

/// Automatic conversion from ShiftError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, ShiftError>` in handler functions that return
/// `Result<T, AppError>`.
impl From<ShiftError> for AppError {
    fn from(err: ShiftError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, eyre::Report>` in handler functions that return
/// `Result<T, AppError>`. It wraps the eyre error in a
/// `ShiftError::Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ShiftError::Database(err))
    }
}
