// ============================================
// File: crates/hybridcrypt-server/src/handlers/extract.rs
// ============================================
//! # Validated JSON Extractor
//!
//! [`ValidateJson`] deserializes a JSON body and runs its `validator`
//! rules. Both a malformed body and a failed rule reject with
//! [`ApiError::Validation`], so handlers only ever see valid input.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::ApiError;

/// JSON extractor that also validates the body.
#[must_use]
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self(data))
    }
}
