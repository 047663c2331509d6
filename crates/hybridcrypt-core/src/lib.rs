// ============================================
// File: crates/hybridcrypt-core/src/lib.rs
// ============================================
//! # HybridCrypt Core - Hybrid Encryption Engine
//!
//! ## Creation Reason
//! Encrypts text payloads with a fresh symmetric key per call and protects
//! that key with the process's RSA key pair, so the pair of outputs can be
//! carried anywhere and reversed only by the holder of the private key.
//!
//! ## Main Functionality
//!
//! ### Crypto Module ([`crypto`])
//! - `SymmetricKey`: 256-bit key, hex text form, zeroized on drop
//! - `SymmetricCipher` / `ChaChaCipher`: ChaCha20-Poly1305 sealing
//! - `AsymmetricKeyStore` / `RsaKeyStore`: RSA-OAEP-SHA256 key wrapping
//!
//! ### Hybrid Module ([`hybrid`])
//! - `HybridCipher`: `encrypt_payload` / `decrypt_payload`
//! - `EngineConfig`: modulus size and payload policy
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │              hybridcrypt-server                     │
//! │                    │                                │
//! │                    ▼                                │
//! │             hybridcrypt-core   ◄── You are here     │
//! │                    │                                │
//! │                    ▼                                │
//! │             hybridcrypt-common                      │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Guarantees
//! - **Confidentiality**: ChaCha20 for payloads, RSA-OAEP for keys
//! - **Integrity**: Poly1305 tag checked before any plaintext is returned
//! - **No oracle**: every decrypt failure surfaces as one opaque error
//!
//! ## ⚠️ Important Note for Next Developer
//! - ALL cryptographic code uses RustCrypto implementations
//! - NEVER implement custom crypto primitives
//! - Secrets implement Zeroize and never reach logs
//!
//! ## Last Modified
//! v0.1.0 - Initial implementation

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod crypto;
pub mod error;
pub mod hybrid;

// Re-export commonly used items
pub use crypto::{AsymmetricKeyStore, ChaChaCipher, RsaKeyStore, SymmetricCipher, SymmetricKey};
pub use error::{CoreError, Result};
pub use hybrid::{EngineConfig, HybridCipher};
