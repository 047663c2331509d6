// ============================================
// File: crates/hybridcrypt-core/src/error.rs
// ============================================
//! # Core Error Types
//!
//! ## Creation Reason
//! Defines the error taxonomy of the hybrid encryption engine. Each
//! component re-raises library failures as its own kind and drops the
//! library's message on the floor.
//!
//! ## Error Categories
//! 1. **Lifecycle**: key pair initialization (fatal)
//! 2. **Policy**: payload size, checked before any crypto runs
//! 3. **Asymmetric**: key wrapping and unwrapping
//! 4. **Symmetric**: payload sealing and opening
//! 5. **Orchestrator**: the single opaque `Decryption` kind
//!
//! ## ⚠️ Important Note for Next Developer
//! - NEVER include key material, plaintext or library error text here
//! - Crypto variants have fixed messages: a padding failure and
//!   a wrong key must read identically
//! - None of these errors is transient; do not add retry logic on top
//!
//! ## Last Modified
//! v0.1.0 - Initial error definitions

use thiserror::Error;

use hybridcrypt_common::error::CommonError;

// ============================================
// Result Type Alias
// ============================================

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

// ============================================
// CoreError
// ============================================

/// Error kinds raised by the hybrid encryption engine.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key pair generation or encoding failed. Fatal to the process.
    #[error("Key initialization failed: {context}")]
    KeyInitialization {
        /// Which step failed (never includes key material)
        context: String,
    },

    /// Payload exceeds the size policy.
    #[error("Payload too large: max {max} characters, got {actual}")]
    PayloadTooLarge {
        /// Maximum allowed characters
        max: usize,
        /// Characters received
        actual: usize,
    },

    /// Encryption under the public key failed.
    #[error("Asymmetric encryption failed")]
    AsymmetricEncryption,

    /// Decryption with the private key failed.
    #[error("Asymmetric decryption failed")]
    AsymmetricDecryption,

    /// Symmetric encryption failed.
    #[error("Symmetric encryption failed")]
    SymmetricEncryption,

    /// Symmetric decryption failed.
    #[error("Symmetric decryption failed")]
    SymmetricDecryption,

    /// Hybrid decryption failed at some stage.
    #[error("Decryption failed")]
    Decryption,

    /// Error from common crate.
    #[error(transparent)]
    Common(#[from] CommonError),
}

impl CoreError {
    /// Creates a `KeyInitialization` error.
    pub fn key_initialization(context: impl Into<String>) -> Self {
        Self::KeyInitialization {
            context: context.into(),
        }
    }

    /// Creates a `PayloadTooLarge` error.
    pub const fn payload_too_large(max: usize, actual: usize) -> Self {
        Self::PayloadTooLarge { max, actual }
    }

    // ========================================
    // Error Classification
    // ========================================

    /// Returns `true` if the process cannot continue after this error.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::KeyInitialization { .. })
    }

    /// Returns `true` if the caller's input violated a policy.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::PayloadTooLarge { .. } => true,
            Self::Common(e) => e.is_client_error(),
            _ => false,
        }
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
        let err = CoreError::payload_too_large(2000, 2001);
        assert!(err.to_string().contains("2000"));
        assert!(err.to_string().contains("2001"));

        assert_eq!(CoreError::Decryption.to_string(), "Decryption failed");
    }

    #[test]
    fn test_decrypt_messages_do_not_leak_stage_detail() {
        for err in [
            CoreError::AsymmetricDecryption,
            CoreError::SymmetricDecryption,
            CoreError::Decryption,
        ] {
            let msg = err.to_string().to_lowercase();
            assert!(!msg.contains("padding"));
            assert!(!msg.contains("tag"));
            assert!(!msg.contains("key"));
        }
    }

    #[test]
    fn test_error_classification() {
        assert!(CoreError::key_initialization("rng").is_fatal());
        assert!(!CoreError::Decryption.is_fatal());

        assert!(CoreError::payload_too_large(2000, 2001).is_client_error());
        assert!(!CoreError::SymmetricEncryption.is_client_error());
    }

    #[test]
    fn test_common_error_conversion() {
        let common = CommonError::invalid_input("payload", "bad value");
        let core: CoreError = common.into();
        assert!(matches!(core, CoreError::Common(_)));
        assert!(core.is_client_error());
    }
}
