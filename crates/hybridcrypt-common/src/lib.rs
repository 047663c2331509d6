// ============================================
// File: crates/hybridcrypt-common/src/lib.rs
// ============================================
//! # HybridCrypt Common - Shared Types Library
//!
//! ## Creation Reason
//! Holds the types that cross crate boundaries: the base error enum and the
//! opaque text tokens produced by the hybrid engine and carried by the
//! HTTP boundary.
//!
//! ## Main Functionality
//! - [`error`]: `CommonError` and its `Result` alias
//! - [`types`]: `WrappedKey`, `Ciphertext`, `EncryptedPayload`, payload policy
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │              hybridcrypt-server                     │
//! │                    │                                │
//! │                    ▼                                │
//! │             hybridcrypt-core                        │
//! │                    │                                │
//! │                    ▼                                │
//! │             hybridcrypt-common  ◄── You are here    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## ⚠️ Important Note for Next Developer
//! - This crate is the leaf: no internal dependencies
//! - Token types are opaque; never parse them outside the core crate
//!
//! ## Last Modified
//! v0.1.0 - Initial implementation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

pub use error::{CommonError, Result};
pub use types::{
    payload_char_count, Ciphertext, EncryptedPayload, WrappedKey, MAX_PAYLOAD_CHARS,
};
