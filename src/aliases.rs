// src/aliases.rs
//! Secret wrappers used throughout secret-vault
//!
//! Both zeroize their contents on drop and print `[REDACTED]` under Debug.

use std::fmt;

use zeroize::Zeroizing;

use crate::consts::KEY_LEN;

/// 256-bit AES-GCM vault key
pub struct EncryptionKey(Zeroizing<[u8; KEY_LEN]>);

impl EncryptionKey {
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn expose_secret(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey([REDACTED])")
    }
}

/// Decrypted password, only ever held transiently
pub struct PlainSecret(Zeroizing<String>);

impl PlainSecret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Expose the plaintext value. Use sparingly.
    pub fn expose_secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PlainSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for PlainSecret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
