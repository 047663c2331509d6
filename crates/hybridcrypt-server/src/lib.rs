// ============================================
// File: crates/hybridcrypt-server/src/lib.rs
// ============================================
//! # HybridCrypt Server Library
//!
//! ## Creation Reason
//! Exposes the hybrid encryption engine over HTTP with a uniform JSON
//! response envelope.
//!
//! ## Main Functionality
//!
//! ### Modules
//! - [`config`]: Server configuration management
//! - [`server`]: Startup, serving and shutdown
//! - [`handlers`]: Routes, request/response models
//! - [`state`]: State shared across handlers
//! - [`error`]: Server and request error types
//!
//! ## Architecture Overview
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    HybridCrypt Server                    │
//! ├──────────────────────────────────────────────────────────┤
//! │  ┌──────────┐    ┌──────────┐    ┌───────────────────┐  │
//! │  │  Config  │───►│  Server  │───►│  Router/Handlers  │  │
//! │  └──────────┘    └────┬─────┘    └─────────┬─────────┘  │
//! │                       │                    │            │
//! │                       ▼                    ▼            │
//! │               ┌──────────────────────────────────┐      │
//! │               │   HybridCipher (Arc, read-only)  │      │
//! │               └──────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## ⚠️ Important Note for Next Developer
//! - Configuration changes require restart (no hot-reload)
//! - Error responses carry only a coarse code, never crypto detail
//!
//! ## Last Modified
//! v0.1.0 - Initial server library

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;

// Re-export primary types
pub use config::ServerConfig;
pub use error::{ApiError, Result, ServerError};
pub use server::Server;
pub use state::AppState;
