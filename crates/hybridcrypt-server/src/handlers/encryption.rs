// ============================================
// File: crates/hybridcrypt-server/src/handlers/encryption.rs
// ============================================
//! # Encryption Handlers
//!
//! ## Main Functionality
//! - `encrypt_data`: validate, seal, return `data1`/`data2`
//! - `decrypt_data`: validate, open, return `payload`
//!
//! ## Failure Mapping
//! ```text
//! bad JSON / empty / too long   → 400 VALIDATION_ERROR
//! over the configured limit     → 400 VALIDATION_ERROR (engine policy)
//! encryption failure            → 500 ENCRYPTION_ERROR
//! any decryption failure        → 500 DECRYPTION_ERROR
//! ```
//!
//! ## Last Modified
//! v0.1.0 - Initial handlers
//! v0.1.1 - `ValidateJson` bodies, OpenAPI annotations

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::handlers::extract::ValidateJson;
use crate::handlers::models::{
    ApiResponse, DecryptRequest, DecryptResponseData, EncryptRequest, EncryptResponseData,
    ErrorResponse,
};
use crate::state::AppState;

/// `POST /get-encrypt-data`
///
/// # Errors
/// `Validation` for a rejected body, `Encryption` if sealing fails.
#[utoipa::path(
    post,
    path = "/get-encrypt-data",
    tag = "encryption",
    summary = "Encrypt a payload",
    request_body(content = EncryptRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Payload encrypted", body = ApiResponse<EncryptResponseData>),
        (status = 400, description = "Missing, empty or too long payload", body = ErrorResponse),
        (status = 408, description = "Request timed out", body = ErrorResponse),
        (status = 500, description = "Encryption failed", body = ErrorResponse),
    )
)]
pub async fn encrypt_data(
    State(state): State<AppState>,
    ValidateJson(request): ValidateJson<EncryptRequest>,
) -> Result<Json<ApiResponse<EncryptResponseData>>, ApiError> {
    info!("Encrypt request received");

    let engine = Arc::clone(&state.engine);
    let sealed = tokio::task::spawn_blocking(move || engine.encrypt_payload(&request.payload))
        .await
        .map_err(|e| {
            error!("Encryption task aborted: {}", e);
            ApiError::Encryption
        })?
        .map_err(|e| {
            if e.is_client_error() {
                ApiError::Validation(e.to_string())
            } else {
                warn!("Encryption failed: {}", e);
                ApiError::Encryption
            }
        })?;

    info!("Data encrypted successfully");
    Ok(Json(ApiResponse::success(sealed.into())))
}

/// `POST /get-decrypt-data`
///
/// # Errors
/// `Validation` for a rejected body, `Decryption` for anything the engine
/// cannot open.
#[utoipa::path(
    post,
    path = "/get-decrypt-data",
    tag = "encryption",
    summary = "Decrypt a wrapped key and ciphertext pair",
    request_body(content = DecryptRequest, content_type = "application/json"),
    responses(
        (status = 200, description = "Payload decrypted", body = ApiResponse<DecryptResponseData>),
        (status = 400, description = "Missing or empty token", body = ErrorResponse),
        (status = 408, description = "Request timed out", body = ErrorResponse),
        (status = 500, description = "Decryption failed", body = ErrorResponse),
    )
)]
pub async fn decrypt_data(
    State(state): State<AppState>,
    ValidateJson(request): ValidateJson<DecryptRequest>,
) -> Result<Json<ApiResponse<DecryptResponseData>>, ApiError> {
    info!("Decrypt request received");

    let (data1, data2) = request.into_tokens();
    let engine = Arc::clone(&state.engine);
    let payload = tokio::task::spawn_blocking(move || engine.decrypt_payload(&data1, &data2))
        .await
        .map_err(|e| {
            error!("Decryption task aborted: {}", e);
            ApiError::Decryption
        })?
        .map_err(|e| {
            debug!("Decryption rejected: {}", e);
            ApiError::Decryption
        })?;

    info!("Data decrypted successfully");
    Ok(Json(ApiResponse::success(DecryptResponseData { payload })))
}
