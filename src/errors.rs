// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Covers transport and decode faults plus handler-level
/// rejection. A non-"OK" status in a decoded response body is NOT an error;
/// it travels back to the caller as data.
#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Forbidden access")]
    Forbidden,

    #[error("External API error: {0}")]
    ExternalApiError(String),

    #[error("Malformed API response: {0}")]
    DecodeError(String),
}

/// Convert PlacesError to HTTP response
/// DOCUMENTATION: Maps error types to HTTP status codes and JSON responses
impl ResponseError for PlacesError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code) = match self {
            PlacesError::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            PlacesError::ValidationError(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            PlacesError::Unauthorized => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            PlacesError::Forbidden => (StatusCode::FORBIDDEN, "FORBIDDEN"),
            PlacesError::ExternalApiError(_) => (StatusCode::BAD_GATEWAY, "EXTERNAL_API_ERROR"),
            PlacesError::DecodeError(_) => (StatusCode::BAD_GATEWAY, "DECODE_ERROR"),
        };

        let body = json!({
            "error": {
                "code": error_code,
                "message": self.to_string(),
                "timestamp": chrono::Utc::now().to_rfc3339()
            }
        });

        HttpResponse::build(status).json(body)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            PlacesError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            PlacesError::ValidationError(_) => StatusCode::BAD_REQUEST,
            PlacesError::Unauthorized => StatusCode::UNAUTHORIZED,
            PlacesError::Forbidden => StatusCode::FORBIDDEN,
            PlacesError::ExternalApiError(_) => StatusCode::BAD_GATEWAY,
            PlacesError::DecodeError(_) => StatusCode::BAD_GATEWAY,
        }
    }
}
