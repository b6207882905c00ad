//! API error types with HTTP status code mapping

use serde::Serialize;
use thiserror::Error;

use crate::verify::ValidationError;

/// API error carrying the HTTP status it maps to
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Invalid request (400)
    #[error("BAD_REQUEST: {0}")]
    BadRequest(String),
    /// Route or resource not found (404)
    #[error("NOT_FOUND: {0}")]
    NotFound(String),
    /// Internal server error (500)
    #[error("INTERNAL_ERROR: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound(_) => 404,
            Self::Internal(_) => 500,
        }
    }

    /// Get the error code string
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// The caller-facing message, without the code prefix
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(m) | Self::NotFound(m) | Self::Internal(m) => m,
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Serializable error data for JSON responses
#[derive(Debug, Serialize)]
pub struct ApiErrorData {
    /// Error code string
    pub code: String,
    /// Human-readable message
    pub message: String,
}

impl From<&ApiError> for ApiErrorData {
    fn from(err: &ApiError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.message().to_string(),
        }
    }
}
