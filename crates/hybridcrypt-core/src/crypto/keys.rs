// ============================================
// File: crates/hybridcrypt-core/src/crypto/keys.rs
// ============================================
//! # Symmetric Key Type
//!
//! ## Creation Reason
//! A per-call 256-bit key with the handling guarantees a secret needs:
//! zeroed on drop, constant-time equality, redacted `Debug`.
//!
//! ## Key Lifecycle
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  SymmetricKey (per encryption call)                        │
//! │  ├─ Drawn from OsRng inside `SymmetricCipher::generate_key`│
//! │  ├─ Seals exactly one payload                              │
//! │  ├─ Leaves the engine only as an RSA-wrapped hex string    │
//! │  └─ Recovered from that hex string on decrypt, then dropped│
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Last Modified
//! v0.1.0 - Initial key type definitions

use std::fmt;
use std::str::FromStr;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use hybridcrypt_common::error::CommonError;

use super::{SYMMETRIC_KEY_HEX_LEN, SYMMETRIC_KEY_SIZE};

/// 256-bit symmetric key.
///
/// # Text Encoding
/// 64 lowercase hex characters. Parsing accepts either case.
///
/// # Example
/// ```
/// use hybridcrypt_core::crypto::SymmetricKey;
///
/// let key = SymmetricKey::from_bytes([0x42; 32]);
/// let hex = key.to_hex();
/// let restored: SymmetricKey = hex.parse().unwrap();
/// assert_eq!(key, restored);
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; SYMMETRIC_KEY_SIZE]);

impl SymmetricKey {
    /// Creates a key from raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; SYMMETRIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Parses a key from its hex encoding.
    ///
    /// # Errors
    /// Returns `InvalidLength` for anything but 64 characters and
    /// `Decoding` for non-hex input.
    pub fn from_hex(hex_str: &str) -> Result<Self, CommonError> {
        if hex_str.len() != SYMMETRIC_KEY_HEX_LEN {
            return Err(CommonError::invalid_length(
                SYMMETRIC_KEY_HEX_LEN,
                hex_str.len(),
            ));
        }
        let mut bytes = [0u8; SYMMETRIC_KEY_SIZE];
        hex::decode_to_slice(hex_str, &mut bytes)?;
        let key = Self(bytes);
        bytes.zeroize();
        Ok(key)
    }

    /// Returns the hex encoding in zeroizing storage.
    #[must_use]
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(self.0))
    }

    /// Returns the raw key bytes.
    ///
    /// # Security Warning
    /// Do not log or store the returned bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SYMMETRIC_KEY_SIZE] {
        &self.0
    }
}

impl FromStr for SymmetricKey {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymmetricKey([REDACTED])")
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SymmetricKey {}

// ============================================
// Tests
// ============================================
