// src/core/key_store.rs
//! Lifecycle of the single vault encryption key
//!
//! The key is generated once, written atomically with owner-only
//! permissions, and read back unchanged by every later call and process.
//! A key file that exists but cannot be parsed is an error, never a
//! reason to generate a new key: that would orphan every stored secret.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine;
use rand::RngCore;
use tempfile::NamedTempFile;

use crate::aliases::EncryptionKey;
use crate::consts::KEY_LEN;
use crate::error::KeyStoreError;

pub type Result<T> = std::result::Result<T, KeyStoreError>;

/// Owns the path of the key file; the only component that touches it
#[derive(Debug, Clone)]
pub struct KeyStore {
    path: PathBuf,
}

impl KeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the persisted key, generating and persisting one if none exists
    pub fn get_or_create_key(&self) -> Result<EncryptionKey> {
        match read_key(&self.path)? {
            Some(key) => {
                tracing::trace!(path = %self.path.display(), "loaded encryption key");
                Ok(key)
            }
            None => self.create_key(),
        }
    }

    fn create_key(&self) -> Result<EncryptionKey> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| KeyStoreError::io(dir, e))?;

        let key = generate_key();
        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| KeyStoreError::io(dir, e))?;
        restrict_permissions(tmp.as_file()).map_err(|e| KeyStoreError::io(tmp.path(), e))?;
        tmp.write_all(encode_key(&key).as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| KeyStoreError::io(tmp.path(), e))?;

        match tmp.persist_noclobber(&self.path) {
            Ok(_) => {
                tracing::debug!(path = %self.path.display(), "generated new encryption key");
                Ok(key)
            }
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                // Another process won the race; its key is the one on disk
                tracing::debug!(path = %self.path.display(), "key file appeared concurrently, re-reading");
                read_key(&self.path)?.ok_or_else(|| {
                    KeyStoreError::io(&self.path, io::Error::from(io::ErrorKind::NotFound))
                })
            }
            Err(err) => Err(KeyStoreError::io(&self.path, err.error)),
        }
    }
}

/// Generate fresh random key material
pub fn generate_key() -> EncryptionKey {
    let mut bytes = [0u8; KEY_LEN];
    rand::rng().fill_bytes(&mut bytes);
    EncryptionKey::new(bytes)
}

/// Key file encoding: URL-safe base64, padded
pub fn encode_key(key: &EncryptionKey) -> String {
    URL_SAFE.encode(key.expose_secret())
}

/// Inverse of [`encode_key`]; surrounding whitespace is ignored
pub fn decode_key(path: &Path, contents: &[u8]) -> Result<EncryptionKey> {
    let corrupt = |reason| KeyStoreError::Corrupt {
        path: path.to_path_buf(),
        reason,
    };
    let text = std::str::from_utf8(contents).map_err(|_| corrupt("not valid UTF-8"))?;
    let text = text.trim();
    if text.is_empty() {
        return Err(corrupt("empty"));
    }
    let raw = URL_SAFE
        .decode(text)
        .map_err(|_| corrupt("not valid base64"))?;
    let bytes: [u8; KEY_LEN] = raw
        .as_slice()
        .try_into()
        .map_err(|_| corrupt("wrong key length"))?;
    Ok(EncryptionKey::new(bytes))
}

/// `Ok(None)` only when the file does not exist
fn read_key(path: &Path) -> Result<Option<EncryptionKey>> {
    match fs::read(path) {
        Ok(contents) => decode_key(path, &contents).map(Some),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(KeyStoreError::io(path, e)),
    }
}

#[cfg(unix)]
fn restrict_permissions(file: &fs::File) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_file: &fs::File) -> io::Result<()> {
    Ok(())
}
