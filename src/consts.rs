// src/consts.rs
//! Shared constants: security parameters and defaults

use std::time::Duration;

/// Raw key length for AES-256-GCM
pub const KEY_LEN: usize = 32;

/// 96-bit GCM nonce, freshly random per encryption
pub const NONCE_LEN: usize = 12;

/// GCM authentication tag appended to every ciphertext
pub const TAG_LEN: usize = 16;

/// Leading byte of every stored token; also bound in as AAD
pub const TOKEN_VERSION: u8 = 0x01;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LEN: usize = 8;

/// How long a connection waits on a locked database before giving up
// Concurrent inserts from other processes queue behind this instead of failing
pub const DB_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Default file names inside the data directory
pub const APP_DIR_NAME: &str = "secret-vault";
pub const DEFAULT_KEY_FILE_NAME: &str = "encryption.key";
pub const DEFAULT_DB_FILE_NAME: &str = "passwords.db";

/// Default config file looked up when `SV_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "secret-vault.toml";

/// Prompt attempts the CLI allows before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
