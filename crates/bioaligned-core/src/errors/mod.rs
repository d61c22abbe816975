// ABOUTME: Unified error handling with standard error codes and HTTP response mapping
// ABOUTME: Single boundary that turns validation and inference failures into API errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BioAligned Fit Contributors

//! # Unified Error Handling System
//!
//! Every failure that can reach an HTTP client passes through [`AppError`].
//! Domain errors (`ValidationError` here, inference errors in the intelligence
//! crate) convert into it, so handlers never need to name them. The wire shape
//! is flat: `{"error": "<message>"}`.

/// Payload validation errors
pub mod validation;

pub use validation::ValidationError;

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Request body is not usable input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required payload field is absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A payload field has the wrong JSON type
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Request body exceeds the configured limit
    #[serde(rename = "PAYLOAD_TOO_LARGE")]
    PayloadTooLarge = 3003,
    /// Request did not complete within the configured timeout
    #[serde(rename = "REQUEST_TIMEOUT")]
    RequestTimeout = 3004,

    // Configuration (6000-6999)
    /// Configuration or model artifact problem
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Scaling or classification failed
    #[serde(rename = "INFERENCE_ERROR")]
    InferenceError = 9004,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            // 400 Bad Request
            Self::InvalidInput | Self::MissingRequiredField | Self::InvalidFormat => 400,
            Self::RequestTimeout => 408,
            Self::PayloadTooLarge => 413,

            // 500 Internal Server Error
            Self::ConfigError | Self::InternalError | Self::InferenceError => 500,
        }
    }
}

/// Unified error type for the application
///
/// `Display` renders only the message, which is what the API returns verbatim.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Request body over the size limit
    #[must_use]
    pub fn payload_too_large() -> Self {
        Self::new(ErrorCode::PayloadTooLarge, "Request body too large")
    }

    /// Request exceeded the processing timeout
    #[must_use]
    pub fn request_timeout() -> Self {
        Self::new(ErrorCode::RequestTimeout, "Request timed out")
    }

    /// Internal server error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Inference failure
    #[must_use]
    pub fn inference(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InferenceError, message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body: `{"error": "<message>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message, passed through verbatim
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.message.clone(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match &error {
            ValidationError::MissingField { .. } => ErrorCode::MissingRequiredField,
            ValidationError::InvalidType { .. } => ErrorCode::InvalidFormat,
            ValidationError::MalformedBody { .. } => ErrorCode::InvalidInput,
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(feature = "http-response")]
mod http_response {
    use super::{AppError, ErrorResponse};
    use axum::{
        response::{IntoResponse, Response},
        Json,
    };
    use http::StatusCode;

    impl IntoResponse for AppError {
        fn into_response(self) -> Response {
            let status = StatusCode::from_u16(self.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

            if status.is_server_error() {
                tracing::error!(code = ?self.code, error = %self.message, "Request failed");
            } else {
                tracing::warn!(code = ?self.code, error = %self.message, "Request rejected");
            }

            (status, Json(ErrorResponse::from(&self))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::MissingRequiredField.http_status(), 400);
        assert_eq!(ErrorCode::InvalidFormat.http_status(), 400);
        assert_eq!(ErrorCode::InferenceError.http_status(), 500);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
        assert_eq!(ErrorCode::PayloadTooLarge.http_status(), 413);
        assert_eq!(ErrorCode::RequestTimeout.http_status(), 408);
    }

    #[test]
    fn test_missing_field_maps_to_client_error() {
        let error = AppError::from(ValidationError::missing("bmi"));
        assert_eq!(error.code, ErrorCode::MissingRequiredField);
        assert_eq!(error.http_status(), 400);
        assert_eq!(error.to_string(), "Missing field: bmi");
    }

    #[test]
    fn test_error_response_is_flat() {
        let error = AppError::inference("scaler produced a non-finite value");
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"error": "scaler produced a non-finite value"})
        );
    }

    #[cfg(feature = "http-response")]
    #[tokio::test]
    async fn test_into_response_status_and_body() {
        use axum::response::IntoResponse;

        let response = AppError::from(ValidationError::missing("duration")).into_response();
        assert_eq!(response.status().as_u16(), 400);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "Missing field: duration");
    }
}
