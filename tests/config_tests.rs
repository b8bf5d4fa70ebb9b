// tests/config_tests.rs
mod common;

use std::collections::HashMap;
use std::path::PathBuf;

use common::TestVault;
use secret_vault::config::{Config, ENV_KEY_FILE, ENV_SECRETS_DB};
use secret_vault::consts::{DEFAULT_DB_FILE_NAME, DEFAULT_KEY_FILE_NAME, DEFAULT_MAX_ATTEMPTS};
use secret_vault::ConfigError;

#[test]
fn test_defaults_point_at_data_dir_files() {
    let config = Config::default();
    assert!(config.paths.key_file.ends_with(DEFAULT_KEY_FILE_NAME));
    assert!(config.paths.secrets_db.ends_with(DEFAULT_DB_FILE_NAME));
    assert_eq!(config.cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn test_partial_toml_fills_in_defaults() {
    let config = Config::from_toml(
        r#"
        [paths]
        key_file = "/tmp/custom.key"
        "#,
    )
    .unwrap();

    assert_eq!(config.paths.key_file, PathBuf::from("/tmp/custom.key"));
    assert!(config.paths.secrets_db.ends_with(DEFAULT_DB_FILE_NAME));
    assert_eq!(config.cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn test_zero_attempts_is_clamped() {
    let config = Config::from_toml("[cli]\nmax_attempts = 0\n").unwrap();
    assert_eq!(config.cli.max_attempts, 1);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    assert!(matches!(
        Config::from_toml("[paths\nkey_file = "),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let vault = TestVault::new();
    let config = Config::from_file(&vault.path().join("absent.toml")).unwrap();
    assert_eq!(config.cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
}

#[test]
fn test_file_then_overrides() {
    let vault = TestVault::new();
    let file = vault.path().join("secret-vault.toml");
    std::fs::write(
        &file,
        "[paths]\nkey_file = \"from-file.key\"\nsecrets_db = \"from-file.db\"\n[cli]\nmax_attempts = 5\n",
    )
    .unwrap();

    let mut config = Config::from_file(&file).unwrap();
    assert_eq!(config.paths.key_file, PathBuf::from("from-file.key"));
    assert_eq!(config.cli.max_attempts, 5);

    let env: HashMap<&str, &str> = HashMap::from([(ENV_SECRETS_DB, "from-env.db")]);
    config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));

    assert_eq!(config.paths.key_file, PathBuf::from("from-file.key"));
    assert_eq!(config.paths.secrets_db, PathBuf::from("from-env.db"));

    let env: HashMap<&str, &str> = HashMap::from([(ENV_KEY_FILE, "from-env.key")]);
    config.apply_overrides(|name| env.get(name).map(|v| v.to_string()));
    assert_eq!(config.paths.key_file, PathBuf::from("from-env.key"));
}
