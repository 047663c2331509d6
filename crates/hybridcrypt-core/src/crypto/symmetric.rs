// ============================================
// File: crates/hybridcrypt-core/src/crypto/symmetric.rs
// ============================================
//! # Symmetric Cipher
//!
//! ## Creation Reason
//! Seals arbitrary text payloads under a per-call key with an AEAD, so a
//! wrong key or a tampered token is rejected instead of decrypting to
//! garbage.
//!
//! ## Main Functionality
//! - `SymmetricCipher`: trait for key generation and text sealing
//! - `ChaChaCipher`: ChaCha20-Poly1305 implementation
//!
//! ## Token Format
//! ```text
//! base64( ┌──────────────┬──────────────────────┬───────────────┐ )
//!         │ Nonce (12 B) │ Ciphertext (len(P))  │ Tag (16 B)    │
//!         └──────────────┴──────────────────────┴───────────────┘
//! ```
//! The nonce is fresh from `OsRng` for every call; since every key is also
//! fresh, a (key, nonce) pair never repeats.
//!
//! ## Decrypt Validation Order
//! 1. Base64 decode (standard alphabet, padded)
//! 2. Length >= nonce + tag
//! 3. AEAD tag check
//! 4. UTF-8 check on the recovered bytes
//!
//! ## ⚠️ Important Note for Next Developer
//! - Every failure in `decrypt` maps to `SymmetricDecryption`; the stage is
//!   only visible in debug logs
//! - Never return partially decrypted data
//!
//! ## Last Modified
//! v0.1.0 - Initial symmetric cipher implementation

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroize;

use hybridcrypt_common::types::Ciphertext;

use super::keys::SymmetricKey;
use super::{MIN_TOKEN_SIZE, NONCE_SIZE, SYMMETRIC_KEY_SIZE};
use crate::error::{CoreError, Result};

// ============================================
// SymmetricCipher Trait
// ============================================

/// Symmetric key generation and text encryption.
pub trait SymmetricCipher: Send + Sync {
    /// Generates a fresh 256-bit key from the OS CSPRNG.
    fn generate_key(&self) -> SymmetricKey;

    /// Encrypts `plaintext` (may be empty) under `key`.
    ///
    /// # Errors
    /// - `SymmetricEncryption`: the cipher failed (not expected for valid keys)
    fn encrypt(&self, plaintext: &str, key: &SymmetricKey) -> Result<Ciphertext>;

    /// Decrypts a token produced by [`SymmetricCipher::encrypt`].
    ///
    /// # Errors
    /// - `SymmetricDecryption`: malformed token, wrong key, tampering, or
    ///   non-UTF-8 output
    fn decrypt(&self, ciphertext: &Ciphertext, key: &SymmetricKey) -> Result<String>;
}

// ============================================
// ChaChaCipher
// ============================================

/// ChaCha20-Poly1305 implementation of [`SymmetricCipher`].
#[derive(Debug, Default, Clone, Copy)]
pub struct ChaChaCipher;

impl ChaChaCipher {
    /// Creates a new instance.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn cipher_for(key: &SymmetricKey) -> Option<ChaCha20Poly1305> {
        ChaCha20Poly1305::new_from_slice(key.as_bytes()).ok()
    }
}

impl SymmetricCipher for ChaChaCipher {
    fn generate_key(&self) -> SymmetricKey {
        let mut bytes = [0u8; SYMMETRIC_KEY_SIZE];
        OsRng.fill_bytes(&mut bytes);
        let key = SymmetricKey::from_bytes(bytes);
        bytes.zeroize();
        key
    }

    fn encrypt(&self, plaintext: &str, key: &SymmetricKey) -> Result<Ciphertext> {
        let cipher = Self::cipher_for(key).ok_or(CoreError::SymmetricEncryption)?;

        let mut nonce_bytes = [0u8; NONCE_SIZE];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let sealed = cipher
            .encrypt(nonce, plaintext.as_bytes())
            .map_err(|_| CoreError::SymmetricEncryption)?;

        let mut token = Vec::with_capacity(NONCE_SIZE + sealed.len());
        token.extend_from_slice(&nonce_bytes);
        token.extend_from_slice(&sealed);

        Ok(Ciphertext::new(BASE64.encode(token)))
    }

    fn decrypt(&self, ciphertext: &Ciphertext, key: &SymmetricKey) -> Result<String> {
        let token = BASE64.decode(ciphertext.as_str()).map_err(|_| {
            debug!("Rejected symmetric token: not valid base64");
            CoreError::SymmetricDecryption
        })?;

        if token.len() < MIN_TOKEN_SIZE {
            debug!(
                len = token.len(),
                min = MIN_TOKEN_SIZE,
                "Rejected symmetric token: too short"
            );
            return Err(CoreError::SymmetricDecryption);
        }

        let (nonce_bytes, sealed) = token.split_at(NONCE_SIZE);
        let cipher = Self::cipher_for(key).ok_or(CoreError::SymmetricDecryption)?;

        let opened = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), sealed)
            .map_err(|_| {
                debug!("Rejected symmetric token: authentication failed");
                CoreError::SymmetricDecryption
            })?;

        String::from_utf8(opened).map_err(|e| {
            e.into_bytes().zeroize();
            debug!("Rejected symmetric token: plaintext is not UTF-8");
            CoreError::SymmetricDecryption
        })
    }
}

// ============================================
// Tests
// ============================================
