// tests/common.rs
//! Shared test utilities: isolated vault directories and logging setup

use std::path::{Path, PathBuf};

use secret_vault::{KeyStore, SecretManager, SecretRepository};
use tempfile::TempDir;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; respects RUST_LOG=
/// Idempotent, safe to call from every test
#[allow(dead_code)]
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// A key file + database pair living in its own temp directory
///
/// Opening several managers on one `TestVault` simulates separate
/// processes sharing the same files.
#[allow(dead_code)]
pub struct TestVault {
    dir: TempDir,
    key_file: PathBuf,
    secrets_db: PathBuf,
}

#[allow(dead_code)]
impl TestVault {
    pub fn new() -> Self {
        setup();
        let dir = tempfile::tempdir().expect("create temp dir");
        let key_file = dir.path().join("encryption.key");
        let secrets_db = dir.path().join("passwords.db");
        Self {
            dir,
            key_file,
            secrets_db,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn key_file(&self) -> &Path {
        &self.key_file
    }

    pub fn secrets_db(&self) -> &Path {
        &self.secrets_db
    }

    pub fn key_store(&self) -> KeyStore {
        KeyStore::new(&self.key_file)
    }

    pub fn repository(&self) -> SecretRepository {
        SecretRepository::open(&self.secrets_db).expect("open secrets db")
    }

    pub fn manager(&self) -> SecretManager {
        SecretManager::new(self.key_store(), self.repository())
    }
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}
