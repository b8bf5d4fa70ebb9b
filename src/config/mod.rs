// src/config/mod.rs
//! Configuration system for secret-vault
//!
//! TOML file + env overrides, loaded once by the process entry point
//! and handed to whoever needs it.

pub use app::{load, CliSettings, Config, Paths};
pub use defaults::{ENV_CONFIG, ENV_KEY_FILE, ENV_SECRETS_DB};

mod app;
mod defaults;
