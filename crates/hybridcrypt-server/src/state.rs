// ============================================
// File: crates/hybridcrypt-server/src/state.rs
// ============================================
//! # Shared Application State
//!
//! Cloned into every handler. The engine is built once at startup and is
//! read-only afterwards, so no lock is needed.

use std::sync::Arc;
use std::time::Duration;

use hybridcrypt_core::HybridCipher;

/// State shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The initialized hybrid encryption engine.
    pub engine: Arc<HybridCipher>,
    /// Per-request timeout applied by the router.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates state around an initialized engine.
    #[must_use]
    pub fn new(engine: Arc<HybridCipher>, request_timeout: Duration) -> Self {
        Self {
            engine,
            request_timeout,
        }
    }

    /// Maximum accepted payload length in characters.
    #[must_use]
    pub fn max_payload_chars(&self) -> usize {
        self.engine.max_payload_chars()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("max_payload_chars", &self.max_payload_chars())
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}
