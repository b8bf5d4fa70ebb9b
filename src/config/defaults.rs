// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{CliSettings, Paths};
pub use crate::consts::DEFAULT_CONFIG_FILE;
use crate::consts::{APP_DIR_NAME, DEFAULT_DB_FILE_NAME, DEFAULT_KEY_FILE_NAME, DEFAULT_MAX_ATTEMPTS};

pub const ENV_CONFIG: &str = "SV_CONFIG";
pub const ENV_KEY_FILE: &str = "SV_KEY_FILE";
pub const ENV_SECRETS_DB: &str = "SV_SECRETS_DB";

/// `<data_dir>/secret-vault`, or the working directory when the platform has none
fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn default_key_file() -> PathBuf {
    data_dir().join(DEFAULT_KEY_FILE_NAME)
}

pub fn default_secrets_db() -> PathBuf {
    data_dir().join(DEFAULT_DB_FILE_NAME)
}

pub fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

pub fn default_paths() -> Paths {
    Paths {
        key_file: default_key_file(),
        secrets_db: default_secrets_db(),
    }
}

pub fn default_cli() -> CliSettings {
    CliSettings {
        max_attempts: default_max_attempts(),
    }
}
