//! Application error handling
//!
//! This module provides unified error handling for the API,
//! converting internal errors to appropriate HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use nutricalc_shared::types::{ErrorDetail, ErrorResponse};
use nutricalc_shared::validation::get_field_display_label;
use nutricalc_shared::CalculationError;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Incomplete data")]
    IncompleteData { missing: Vec<&'static str> },

    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Calculation failed: {0}")]
    CalculationFailed(String),
}

impl From<CalculationError> for ApiError {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::IncompleteData { missing } => ApiError::IncompleteData { missing },
            CalculationError::Validation { field, message } => {
                ApiError::Validation { field, message }
            }
            CalculationError::Computation(msg) => ApiError::CalculationFailed(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message, field) = match &self {
            ApiError::IncompleteData { missing } => (
                StatusCode::BAD_REQUEST,
                "INCOMPLETE_DATA",
                "Incomplete data".to_string(),
                (missing.len() == 1).then(|| missing[0].to_string()),
            ),
            ApiError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("{}: {}", get_field_display_label(field), message),
                Some(field.clone()),
            ),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone(), None)
            }
            ApiError::CalculationFailed(msg) => {
                error!("Calculation error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CALCULATION_FAILED",
                    "Calculation failed".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
                field,
            },
        });

        (status, body).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
