// ============================================
// File: crates/hybridcrypt-core/src/crypto/mod.rs
// ============================================
//! # Cryptography Module
//!
//! ## Creation Reason
//! Groups the two primitives the hybrid engine is built from, each behind
//! a trait so the concrete library can be swapped without touching callers.
//!
//! ## Submodules
//! - [`keys`]: `SymmetricKey` (256-bit, hex text form)
//! - [`symmetric`]: `SymmetricCipher` trait, ChaCha20-Poly1305 implementation
//! - [`asymmetric`]: `AsymmetricKeyStore` trait, RSA-OAEP implementation
//!
//! ## Cryptographic Design
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Encrypt                              │
//! │                                                             │
//! │  OsRng ──► SymmetricKey (32 bytes) ──► hex (64 chars)       │
//! │                 │                          │                │
//! │                 ▼                          ▼                │
//! │  payload ──► ChaCha20-Poly1305     RSA-OAEP-SHA256          │
//! │                 │                          │                │
//! │                 ▼                          ▼                │
//! │   base64(nonce||ct||tag)          base64(wrapped key)       │
//! │        = Ciphertext                  = WrappedKey           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Randomness
//! Every random value (symmetric keys, nonces, RSA primes, OAEP seeds)
//! comes from the operating system CSPRNG via `rand::rngs::OsRng`.
//!
//! ## ⚠️ Important Note for Next Developer
//! - ALL implementations use RustCrypto crates
//! - NEVER roll your own crypto
//! - Secret material implements Zeroize
//!
//! ## Last Modified
//! v0.1.0 - Initial crypto implementation

pub mod asymmetric;
pub mod keys;
pub mod symmetric;

pub use asymmetric::{AsymmetricKeyStore, RsaKeyStore};
pub use keys::SymmetricKey;
pub use symmetric::{ChaChaCipher, SymmetricCipher};

// ============================================
// Constants
// ============================================

/// Size of a symmetric key in bytes (256 bits).
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// Length of a symmetric key's hex encoding.
pub const SYMMETRIC_KEY_HEX_LEN: usize = SYMMETRIC_KEY_SIZE * 2;

/// Size of the ChaCha20-Poly1305 nonce in bytes.
pub const NONCE_SIZE: usize = 12;

/// Size of the Poly1305 authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Smallest valid decoded symmetric token (empty plaintext).
pub const MIN_TOKEN_SIZE: usize = NONCE_SIZE + TAG_SIZE;

/// Default RSA modulus size in bits.
pub const DEFAULT_RSA_BITS: usize = 2048;

/// Output size of the OAEP hash (SHA-256) in bytes.
pub const OAEP_HASH_SIZE: usize = 32;
