// ============================================
// File: crates/hybridcrypt-server/src/handlers/mod.rs
// ============================================
//! # HTTP Handlers
//!
//! ## Routes
//! - `POST /get-encrypt-data` → [`encryption::encrypt_data`]
//! - `POST /get-decrypt-data` → [`encryption::decrypt_data`]
//! - `GET /api-docs/openapi.json` → generated OpenAPI document
//!
//! ## ⚠️ Important Note for Next Developer
//! - Handlers never log payloads, keys or tokens
//! - RSA work is blocking; keep it inside `spawn_blocking`
//! - A timed-out request still answers with the failure envelope,
//!   see [`with_timeout_envelope`]
//!
//! ## Last Modified
//! v0.1.0 - Initial routes
//! v0.1.1 - OpenAPI document, enveloped timeouts

pub mod encryption;
pub mod extract;
pub mod models;

use std::time::Duration;

use axum::http::StatusCode;
use axum::middleware::map_response;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::error::ApiError;
use crate::handlers::models::{
    DecryptRequest, DecryptResponseData, EncryptRequest, EncryptResponseData, ErrorResponse,
};
use crate::state::AppState;

/// Path of the encrypt endpoint.
pub const ENCRYPT_PATH: &str = "/get-encrypt-data";
/// Path of the decrypt endpoint.
pub const DECRYPT_PATH: &str = "/get-decrypt-data";
/// Path of the OpenAPI document.
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

// ============================================
// OpenAPI
// ============================================

/// OpenAPI document for the encryption endpoints.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "HybridCrypt API",
        description = "Hybrid RSA-OAEP + ChaCha20-Poly1305 encryption service"
    ),
    paths(encryption::encrypt_data, encryption::decrypt_data),
    components(schemas(
        EncryptRequest,
        EncryptResponseData,
        DecryptRequest,
        DecryptResponseData,
        ErrorResponse
    )),
    tags((name = "encryption", description = "Payload encryption and decryption"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// ============================================
// Router
// ============================================

/// Rewrites the timeout layer's bare 408 into the failure envelope.
pub async fn envelope_timeouts(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        return ApiError::Timeout.into_response();
    }
    response
}

/// Applies the request timeout to `router`, answering expired requests
/// with `408 REQUEST_TIMEOUT` in the failure envelope.
pub fn with_timeout_envelope<S>(router: Router<S>, timeout: Duration) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TimeoutLayer::new(timeout))
        .layer(map_response(envelope_timeouts))
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let timeout = state.request_timeout;

    let api = Router::new()
        .route(ENCRYPT_PATH, post(encryption::encrypt_data))
        .route(DECRYPT_PATH, post(encryption::decrypt_data));

    with_timeout_envelope(api, timeout)
        .route(OPENAPI_PATH, get(openapi_json))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_lists_endpoints() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();

        assert!(doc["paths"][ENCRYPT_PATH]["post"].is_object());
        assert!(doc["paths"][DECRYPT_PATH]["post"].is_object());

        let payload = &doc["components"]["schemas"]["EncryptRequest"]["properties"]["payload"];
        assert_eq!(payload["maxLength"], 2000);
        assert_eq!(payload["minLength"], 1);
    }

    #[tokio::test]
    async fn test_timeout_is_enveloped() {
        let response = envelope_timeouts(StatusCode::REQUEST_TIMEOUT.into_response()).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["successful"], false);
        assert_eq!(json["error_code"], "REQUEST_TIMEOUT");
        assert!(json["data"].is_null());
    }

    #[tokio::test]
    async fn test_other_statuses_pass_through() {
        let response = envelope_timeouts(StatusCode::NOT_FOUND.into_response()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
