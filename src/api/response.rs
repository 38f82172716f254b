//! Response types for the Payment Analyzer API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::AnalyzerError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response with the given body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<AnalyzerError> for ApiErrorResponse {
    fn from(error: AnalyzerError) -> Self {
        match error {
            AnalyzerError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            AnalyzerError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            AnalyzerError::InvalidConfig { field, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Invalid configuration value '{}': {}", field, message),
                ),
            },
            AnalyzerError::InvalidRules { field, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_RULES",
                    format!("Invalid payment rule '{}': {}", field, message),
                    "Rates and bonuses must be zero or positive",
                ))
            }
            AnalyzerError::RulesNotFound { date } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "RULES_NOT_FOUND",
                    format!("No payment rules in force on {}", date),
                    "The date precedes every configured rule table",
                ))
            }
            AnalyzerError::InvalidDate { value, message } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    format!("Expected YYYY-MM-DD: {}", message),
                ))
            }
            AnalyzerError::Overflow { context } => {
                ApiErrorResponse::bad_request(ApiError::with_details(
                    "ARITHMETIC_OVERFLOW",
                    format!("Arithmetic overflow while computing {}", context),
                    "An amount or count is too large to calculate with",
                ))
            }
        }
    }
}
