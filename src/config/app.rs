// src/config/app.rs
use super::defaults::*;
use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_paths")]
    pub paths: Paths,
    #[serde(default = "default_cli")]
    pub cli: CliSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    #[serde(default = "default_key_file")]
    pub key_file: PathBuf,
    #[serde(default = "default_secrets_db")]
    pub secrets_db: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliSettings {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: default_paths(),
            cli: default_cli(),
        }
    }
}

impl Config {
    /// Parse a TOML document; missing tables and fields fall back to defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut conf: Config = toml::from_str(content)?;
        conf.cli.max_attempts = conf.cli.max_attempts.max(1);
        Ok(conf)
    }

    /// Load from an explicit file, or built-in defaults when it does not exist
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Config::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::from_toml(&content)
    }

    /// Apply `SV_KEY_FILE` / `SV_SECRETS_DB` style overrides from a lookup function
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key_file) = lookup(ENV_KEY_FILE) {
            self.paths.key_file = PathBuf::from(key_file);
        }
        if let Some(db) = lookup(ENV_SECRETS_DB) {
            self.paths.secrets_db = PathBuf::from(db);
        }
    }
}

/// Load config at runtime: `SV_CONFIG` (or `secret-vault.toml`), then env overrides
///
/// The caller owns the returned value; nothing is cached globally.
pub fn load() -> Result<Config, ConfigError> {
    let config_path = std::env::var(ENV_CONFIG).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
    let mut conf = Config::from_file(Path::new(&config_path))?;
    conf.apply_overrides(|name| std::env::var(name).ok());
    Ok(conf)
}
