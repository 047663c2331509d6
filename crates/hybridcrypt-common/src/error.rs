// ============================================
// File: crates/hybridcrypt-common/src/error.rs
// ============================================
//! # Common Error Types
//!
//! ## Creation Reason
//! Base error enum shared by the core and server crates for failures that
//! are not cryptographic: input validation and text decoding.
//!
//! ## ⚠️ Important Note for Next Developer
//! - Never put payloads or key material into error messages
//! - Crate-specific errors wrap `CommonError` transparently
//!
//! ## Last Modified
//! v0.1.0 - Initial error definitions

use thiserror::Error;

// ============================================
// Result Type Alias
// ============================================

/// Common result type for operations that may fail.
pub type Result<T> = std::result::Result<T, CommonError>;

// ============================================
// CommonError
// ============================================

/// Common error types shared across the HybridCrypt crates.
///
/// # Example
/// ```
/// use hybridcrypt_common::error::{CommonError, Result};
///
/// fn require_text(data: &str) -> Result<()> {
///     if data.is_empty() {
///         return Err(CommonError::invalid_input("data", "cannot be empty"));
///     }
///     Ok(())
/// }
///
/// assert!(require_text("").is_err());
/// ```
#[derive(Error, Debug)]
pub enum CommonError {
    // ========================================
    // Validation Errors
    // ========================================

    /// Invalid input data provided.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the field or parameter
        field: String,
        /// Description of what's wrong
        reason: String,
    },

    /// Data length doesn't match expected size.
    #[error("Invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length
        expected: usize,
        /// Actual length received
        actual: usize,
    },

    // ========================================
    // Encoding Errors
    // ========================================

    /// Failed to decode text into bytes.
    #[error("Decoding error: {context}")]
    Decoding {
        /// What was being decoded
        context: String,
        /// Error details
        details: String,
    },
}

impl CommonError {
    /// Creates an `InvalidInput` error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidLength` error.
    pub const fn invalid_length(expected: usize, actual: usize) -> Self {
        Self::InvalidLength { expected, actual }
    }

    /// Creates a `Decoding` error.
    pub fn decoding(context: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Decoding {
            context: context.into(),
            details: details.into(),
        }
    }

    /// Returns `true` if this error indicates a client mistake.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::InvalidLength { .. } | Self::Decoding { .. }
        )
    }
}

// ============================================
// Error Conversions
// ============================================

impl From<hex::FromHexError> for CommonError {
    fn from(err: hex::FromHexError) -> Self {
        Self::decoding("hex decode", err.to_string())
    }
}

// ============================================
// Tests
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommonError::invalid_input("payload", "cannot be empty");
        assert!(err.to_string().contains("payload"));
        assert!(err.to_string().contains("cannot be empty"));

        let err = CommonError::invalid_length(64, 10);
        assert!(err.to_string().contains("64"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_error_classification() {
        assert!(CommonError::invalid_input("field", "bad").is_client_error());
        assert!(CommonError::invalid_length(64, 3).is_client_error());
        assert!(CommonError::decoding("hex decode", "odd length").is_client_error());
    }

    #[test]
    fn test_hex_error_conversion() {
        let hex_err = hex::decode("zz").unwrap_err();
        let common_err: CommonError = hex_err.into();
        assert!(matches!(common_err, CommonError::Decoding { .. }));
    }
}
