// ============================================
// File: crates/hybridcrypt-common/src/types.rs
// ============================================
//! # Token Type Definitions
//!
//! ## Creation Reason
//! The hybrid engine hands two text tokens to its callers and takes them
//! back later. Distinct newtypes keep the wrapped key and the ciphertext
//! from being swapped by accident at the boundary.
//!
//! ## Main Functionality
//! - `WrappedKey`: base64 RSA ciphertext of a symmetric key's hex encoding
//! - `Ciphertext`: base64 AEAD token (`nonce || ciphertext || tag`)
//! - `EncryptedPayload`: the pair returned by one encryption
//! - `MAX_PAYLOAD_CHARS`: payload size policy
//!
//! ## ⚠️ Important Note for Next Developer
//! - Tokens are opaque outside `hybridcrypt-core`
//! - Both serialize as plain JSON strings
//!
//! ## Last Modified
//! v0.1.0 - Initial type definitions

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================
// Constants
// ============================================

/// Largest payload accepted for encryption, in characters.
///
/// This is a policy limit applied before any cryptographic work, not a
/// limit of the cipher.
pub const MAX_PAYLOAD_CHARS: usize = 2000;

/// Counts a payload's length the way the size policy does: in Unicode
/// scalar values, not bytes.
#[must_use]
pub fn payload_char_count(payload: &str) -> usize {
    payload.chars().count()
}

// ============================================
// Token newtypes
// ============================================

macro_rules! text_token {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps an encoded token.
            #[must_use]
            pub fn new(token: impl Into<String>) -> Self {
                Self(token.into())
            }

            /// Returns the encoded token.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the token is empty.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl From<String> for $name {
            fn from(token: String) -> Self {
                Self(token)
            }
        }

        impl From<&str> for $name {
            fn from(token: &str) -> Self {
                Self(token.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // Length only; tokens are long and not useful in logs
                write!(f, concat!(stringify!($name), "({} chars)"), self.0.len())
            }
        }
    };
}

text_token!(
    /// A symmetric key encrypted under the RSA public key, base64 encoded.
    WrappedKey
);

text_token!(
    /// A symmetric AEAD token, base64 encoded.
    Ciphertext
);

// ============================================
// EncryptedPayload
// ============================================

/// Output of one hybrid encryption.
///
/// Both halves are required to recover the payload, and only the holder of
/// the matching private key can unwrap `wrapped_key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedPayload {
    /// The wrapped symmetric key.
    pub wrapped_key: WrappedKey,
    /// The payload encrypted under that symmetric key.
    pub ciphertext: Ciphertext,
}

impl EncryptedPayload {
    /// Creates a new encrypted payload pair.
    #[must_use]
    pub fn new(wrapped_key: WrappedKey, ciphertext: Ciphertext) -> Self {
        Self {
            wrapped_key,
            ciphertext,
        }
    }
}

// ============================================
// Tests
// ============================================
