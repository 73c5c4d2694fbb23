//! Error mapping to HTTP responses

use std::collections::HashMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use retail_core::error::DomainError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Domain(err) = self;
        let (status, label, code, message, errors) = match &err {
            DomainError::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                "Not Found",
                "NOT_FOUND",
                err.to_string(),
                None,
            ),
            DomainError::Validation(violations) => {
                // First violation per field wins when a field fails several rules.
                let mut fields = HashMap::new();
                for violation in violations {
                    fields
                        .entry(violation.field.clone())
                        .or_insert_with(|| violation.message.clone());
                }
                (
                    StatusCode::BAD_REQUEST,
                    "Validation Failed",
                    "VALIDATION_ERROR",
                    "Invalid request data".to_string(),
                    Some(fields),
                )
            }
            DomainError::Database(detail) => {
                error!("Request failed on a database error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error",
                    "INTERNAL_ERROR",
                    "An unexpected error occurred".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: label.to_string(),
            message,
            code: code.to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}
