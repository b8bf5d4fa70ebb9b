// src/core/cipher.rs
//! Pure cryptographic primitives: no I/O, no database
//!
//! AES-256-GCM over a single password string. Each call draws a fresh
//! random nonce and embeds it in the token, so encrypting the same
//! plaintext twice yields different tokens and decryption needs only
//! the key. Token layout before base64:
//!
//! `version (1) || nonce (12) || ciphertext || tag (16)`
//!
//! The version byte doubles as associated data.

use aes_gcm::aead::{Aead, Payload};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::RngCore;

use crate::aliases::{EncryptionKey, PlainSecret};
use crate::consts::{NONCE_LEN, TAG_LEN, TOKEN_VERSION};
use crate::error::{CoreError, DecryptionError};

/// Text-safe encrypted password, as stored in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(String);

impl Ciphertext {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for Ciphertext {
    fn from(token: String) -> Self {
        Ciphertext(token)
    }
}

fn cipher_for(key: &EncryptionKey) -> Option<Aes256Gcm> {
    Aes256Gcm::new_from_slice(&key.expose_secret()[..]).ok()
}

/// Encrypt `plaintext` under `key` with a fresh nonce
pub fn encrypt(key: &EncryptionKey, plaintext: &str) -> Result<Ciphertext, CoreError> {
    let mut nonce_bytes = [0u8; NONCE_LEN];
    rand::rng().fill_bytes(&mut nonce_bytes);

    let aad = [TOKEN_VERSION];
    let sealed = cipher_for(key)
        .ok_or(CoreError::Encryption)?
        .encrypt(
            Nonce::from_slice(&nonce_bytes),
            Payload {
                msg: plaintext.as_bytes(),
                aad: &aad,
            },
        )
        .map_err(|_| CoreError::Encryption)?;

    let mut token = Vec::with_capacity(1 + NONCE_LEN + sealed.len());
    token.push(TOKEN_VERSION);
    token.extend_from_slice(&nonce_bytes);
    token.extend_from_slice(&sealed);

    Ok(Ciphertext(URL_SAFE.encode(token)))
}

/// Decrypt a token produced by [`encrypt`]
///
/// Any failure, whether bad encoding, unknown version, wrong key or a
/// failed tag check, is reported as the same [`DecryptionError`].
pub fn decrypt(key: &EncryptionKey, ciphertext: &Ciphertext) -> Result<PlainSecret, DecryptionError> {
    let token = URL_SAFE
        .decode(ciphertext.as_str())
        .map_err(|_| DecryptionError)?;
    if token.len() < 1 + NONCE_LEN + TAG_LEN || token[0] != TOKEN_VERSION {
        return Err(DecryptionError);
    }
    let (header, rest) = token.split_at(1);
    let (nonce_bytes, sealed) = rest.split_at(NONCE_LEN);

    let plain = cipher_for(key)
        .ok_or(DecryptionError)?
        .decrypt(
            Nonce::from_slice(nonce_bytes),
            Payload {
                msg: sealed,
                aad: header,
            },
        )
        .map_err(|_| DecryptionError)?;

    String::from_utf8(plain)
        .map(|s| PlainSecret::new(s))
        .map_err(|_| DecryptionError)
}
