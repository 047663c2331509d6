// ============================================
// File: crates/hybridcrypt-server/src/handlers/models.rs
// ============================================
//! # Request and Response Models
//!
//! ## Wire Format
//! ```text
//! POST /get-encrypt-data   { "payload": "..." }
//!   200 { "successful": true, "data": { "data1": <wrapped key>, "data2": <ciphertext> } }
//!
//! POST /get-decrypt-data   { "data1": "...", "data2": "..." }
//!   200 { "successful": true, "data": { "payload": "..." } }
//!
//! failure
//!   4xx/5xx { "successful": false, "error_code": "...", "data": null }
//! ```
//!
//! Request bodies are checked with `validator` by the
//! [`ValidateJson`](super::extract::ValidateJson) extractor.
//!
//! ## Last Modified
//! v0.1.0 - Initial models
//! v0.1.1 - Declarative validation, OpenAPI schemas

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use hybridcrypt_common::types::{Ciphertext, EncryptedPayload, WrappedKey};

// ============================================
// Envelope
// ============================================

/// Success envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Always `true`.
    pub successful: bool,

    /// Operation output.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Builds a success envelope.
    pub fn success(data: T) -> Self {
        Self {
            successful: true,
            data,
        }
    }
}

/// Failure envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "successful": false,
    "error_code": "DECRYPTION_ERROR",
    "data": null
}))]
pub struct ErrorResponse {
    /// Always `false`.
    pub successful: bool,

    /// Coarse error code.
    pub error_code: String,

    /// Always `null`.
    #[schema(value_type = Option<Object>)]
    pub data: Option<()>,
}

impl ErrorResponse {
    /// Builds a failure envelope.
    pub fn new(error_code: impl Into<String>) -> Self {
        Self {
            successful: false,
            error_code: error_code.into(),
            data: None,
        }
    }
}

// ============================================
// Encrypt
// ============================================

/// Body of `POST /get-encrypt-data`.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[schema(example = json!({ "payload": "Hello, this is a test message" }))]
pub struct EncryptRequest {
    /// Text to encrypt, counted in characters.
    #[validate(length(min = 1, max = 2000))]
    #[schema(min_length = 1, max_length = 2000)]
    pub payload: String,
}

/// `data` of a successful encryption.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "data1": "kV3pQ0f1...base64 RSA-OAEP ciphertext...",
    "data2": "q2m8sJbE...base64 nonce||ciphertext||tag..."
}))]
pub struct EncryptResponseData {
    /// The wrapped symmetric key.
    #[schema(value_type = String)]
    pub data1: WrappedKey,
    /// The encrypted payload.
    #[schema(value_type = String)]
    pub data2: Ciphertext,
}

impl From<EncryptedPayload> for EncryptResponseData {
    fn from(sealed: EncryptedPayload) -> Self {
        Self {
            data1: sealed.wrapped_key,
            data2: sealed.ciphertext,
        }
    }
}

// ============================================
// Decrypt
// ============================================

/// Body of `POST /get-decrypt-data`.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[schema(example = json!({
    "data1": "kV3pQ0f1...",
    "data2": "q2m8sJbE..."
}))]
pub struct DecryptRequest {
    /// The wrapped symmetric key.
    #[validate(length(min = 1))]
    #[schema(min_length = 1)]
    pub data1: String,
    /// The encrypted payload.
    #[validate(length(min = 1))]
    #[schema(min_length = 1)]
    pub data2: String,
}

impl DecryptRequest {
    /// Splits the body into the engine's token types.
    #[must_use]
    pub fn into_tokens(self) -> (WrappedKey, Ciphertext) {
        (WrappedKey::new(self.data1), Ciphertext::new(self.data2))
    }
}

/// `data` of a successful decryption.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({ "payload": "Hello, this is a test message" }))]
pub struct DecryptResponseData {
    /// The recovered text.
    pub payload: String,
}

#[cfg(test)]
mod tests {
    use hybridcrypt_common::types::MAX_PAYLOAD_CHARS;

    use super::*;

    #[test]
    fn test_failure_envelope_shape() {
        let body = ErrorResponse::new("DECRYPTION_ERROR");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "successful": false,
                "error_code": "DECRYPTION_ERROR",
                "data": null
            })
        );
    }

    #[test]
    fn test_success_envelope_omits_error_code() {
        let body = ApiResponse::success(DecryptResponseData {
            payload: "hi".into(),
        });
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "successful": true, "data": { "payload": "hi" } })
        );
    }

    #[test]
    fn test_encrypt_request_validation() {
        let ok = EncryptRequest { payload: "x".repeat(MAX_PAYLOAD_CHARS) };
        assert!(ok.validate().is_ok());

        let too_long = EncryptRequest { payload: "x".repeat(MAX_PAYLOAD_CHARS + 1) };
        let errors = too_long.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("payload"));

        let empty = EncryptRequest { payload: String::new() };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_encrypt_request_counts_characters() {
        // 2000 characters, 6000 bytes
        let req = EncryptRequest { payload: "€".repeat(MAX_PAYLOAD_CHARS) };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_decrypt_request_validation() {
        let req: DecryptRequest =
            serde_json::from_str(r#"{ "data1": "abc", "data2": "" }"#).unwrap();
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("data2"));
        assert!(!fields.contains_key("data1"));
    }

    #[test]
    fn test_decrypt_request_into_tokens() {
        let req = DecryptRequest {
            data1: "key".into(),
            data2: "ct".into(),
        };
        let (wrapped, ciphertext) = req.into_tokens();
        assert_eq!(wrapped.as_str(), "key");
        assert_eq!(ciphertext.as_str(), "ct");
    }
}
