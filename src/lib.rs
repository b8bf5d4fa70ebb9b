// src/lib.rs
//! secret-vault: a local, single-user password vault
//!
//! Features:
//! - AES-256-GCM authenticated encryption, fresh nonce per secret
//! - One key file, generated once and written atomically (0600)
//! - SQLite storage with database-enforced unique service names
//! - Password strength validation with per-rule feedback
//! - Keys and decrypted plaintext zeroize on drop

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod db;
pub mod enums;
pub mod error;
pub mod manager;

// Re-export everything users need at the crate root
pub use aliases::{EncryptionKey, PlainSecret};
pub use config::load as load_config;
pub use crate::core::{validate, Ciphertext, KeyStore, ValidationError};
pub use db::SecretRepository;
pub use enums::PasswordRule;
pub use error::{ConfigError, CoreError, DecryptionError, KeyStoreError, Result as CoreResult};
pub use manager::SecretManager;
