// src/error.rs
//! Public error types for the entire crate

use std::path::PathBuf;

use thiserror::Error;

use crate::core::validator::ValidationError;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Password does not meet requirements: {0}")]
    Validation(#[from] ValidationError),

    #[error("Service name must not be empty")]
    EmptyService,

    #[error("A password for {service} already exists")]
    DuplicateService { service: String },

    #[error("No password found for {service}")]
    NotFound { service: String },

    #[error(transparent)]
    KeyStore(#[from] KeyStoreError),

    #[error("Encryption failed")]
    Encryption,

    #[error(transparent)]
    Decryption(#[from] DecryptionError),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures reading or creating the key file
#[derive(Error, Debug)]
pub enum KeyStoreError {
    #[error("Key file {path} is not accessible: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Key file {path} is corrupt ({reason}); refusing to replace it")]
    Corrupt { path: PathBuf, reason: &'static str },
}

impl KeyStoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        KeyStoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Decryption failed. Carries no detail on purpose: a wrong key,
/// tampered data and a malformed token all look the same.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Decryption failed: wrong key or corrupted data")]
pub struct DecryptionError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML in config: {0}")]
    Parse(#[from] toml::de::Error),
}
