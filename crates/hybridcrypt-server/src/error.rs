// ============================================
// File: crates/hybridcrypt-server/src/error.rs
// ============================================
//! # Server Error Types
//!
//! - `ServerError`: startup, configuration and lifecycle failures
//! - `ApiError`: per-request failures, rendered as the response envelope
//!
//! ## Last Modified
//! v0.1.0 - Initial error definitions
//! v0.1.1 - Extractor rejections, timeout envelope

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::debug;
use validator::ValidationErrors;

use hybridcrypt_common::error::CommonError;
use hybridcrypt_core::error::CoreError;

use crate::handlers::models::ErrorResponse;

/// Result type for server operations.
pub type Result<T> = std::result::Result<T, ServerError>;

// ============================================
// ServerError
// ============================================

/// Server error types.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Configuration file could not be read or parsed.
    #[error("Failed to load configuration from '{path}': {reason}")]
    ConfigLoad {
        /// Path that failed.
        path: String,
        /// Failure description.
        reason: String,
    },

    /// Configuration parsed but holds an invalid value.
    #[error("Invalid configuration: {field} - {reason}")]
    ConfigInvalid {
        /// Offending field.
        field: String,
        /// Why it is invalid.
        reason: String,
    },

    /// Startup could not complete.
    #[error("Server failed to start: {reason}")]
    StartupFailed {
        /// Failure description.
        reason: String,
    },

    /// Shared error.
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Engine error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Creates a `ConfigLoad` error.
    pub fn config_load(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `ConfigInvalid` error.
    pub fn config_invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a `StartupFailed` error.
    pub fn startup_failed(reason: impl Into<String>) -> Self {
        Self::StartupFailed {
            reason: reason.into(),
        }
    }

    /// Returns true for configuration problems.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad { .. } | Self::ConfigInvalid { .. })
    }

    /// Returns true if the process cannot continue.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        match self {
            Self::ConfigLoad { .. } | Self::StartupFailed { .. } => true,
            Self::Core(e) => e.is_fatal(),
            _ => false,
        }
    }
}

// ============================================
// ApiError
// ============================================

/// Error code for rejected request bodies.
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
/// Error code for failed encryption.
pub const ENCRYPTION_ERROR: &str = "ENCRYPTION_ERROR";
/// Error code for failed decryption.
pub const DECRYPTION_ERROR: &str = "DECRYPTION_ERROR";
/// Error code for requests that exceeded the configured timeout.
pub const REQUEST_TIMEOUT: &str = "REQUEST_TIMEOUT";

/// A request-level failure.
///
/// Carries no crypto detail: the client only learns which operation failed.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body was malformed or violated a limit.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Encryption failed.
    #[error("Encryption failed")]
    Encryption,

    /// Decryption failed, for any reason.
    #[error("Decryption failed")]
    Decryption,

    /// The request did not finish within the configured timeout.
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    /// Wire error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => VALIDATION_ERROR,
            Self::Encryption => ENCRYPTION_ERROR,
            Self::Decryption => DECRYPTION_ERROR,
            Self::Timeout => REQUEST_TIMEOUT,
        }
    }

    /// HTTP status for this failure.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::REQUEST_TIMEOUT,
            Self::Encryption | Self::Decryption => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        // Field names and rule codes only; the rejected values stay out
        let mut violations: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| format!("{field}: {}", error.code))
            })
            .collect();
        violations.sort();

        debug!(violations = ?violations, "Request validation failed");
        Self::Validation(violations.join(", "))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::new(self.error_code());
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ServerError::config_load("/etc/hybridcrypt.toml", "file not found");
        assert!(err.to_string().contains("/etc/hybridcrypt.toml"));
    }

    #[test]
    fn test_error_classification() {
        let config_err = ServerError::config_invalid("crypto.rsa_bits", "unsupported");
        assert!(config_err.is_config_error());
        assert!(!config_err.is_fatal());

        let key_err: ServerError = CoreError::key_initialization("rng").into();
        assert!(key_err.is_fatal());
    }

    #[test]
    fn test_api_error_mapping() {
        let validation = ApiError::Validation("payload: cannot be empty".into());
        assert_eq!(validation.status(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.error_code(), "VALIDATION_ERROR");

        assert_eq!(ApiError::Encryption.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Encryption.error_code(), "ENCRYPTION_ERROR");

        assert_eq!(ApiError::Decryption.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(ApiError::Decryption.error_code(), "DECRYPTION_ERROR");
    }

    #[test]
    fn test_api_error_response_status() {
        let response = ApiError::Decryption.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Timeout.into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(ApiError::Timeout.error_code(), "REQUEST_TIMEOUT");
    }

    #[test]
    fn test_validation_errors_name_fields_not_values() {
        use validator::Validate;

        use crate::handlers::models::EncryptRequest;

        let request = EncryptRequest {
            payload: "x".repeat(2001),
        };
        let err: ApiError = request.validate().unwrap_err().into();

        match err {
            ApiError::Validation(message) => {
                assert_eq!(message, "payload: length");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
