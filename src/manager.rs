// src/manager.rs
//! Top-level workflows: validate → encrypt → store, and lookup → decrypt
//!
//! Holds no state of its own beyond the injected key store and repository.

use crate::aliases::PlainSecret;
use crate::config::Config;
use crate::core::{cipher, validator, KeyStore};
use crate::db::SecretRepository;
use crate::error::CoreError;
use crate::CoreResult as Result;

#[derive(Debug)]
pub struct SecretManager {
    key_store: KeyStore,
    repository: SecretRepository,
}

impl SecretManager {
    pub fn new(key_store: KeyStore, repository: SecretRepository) -> Self {
        Self {
            key_store,
            repository,
        }
    }

    /// Build from configured paths; the key itself is loaded lazily on first use
    pub fn open(config: &Config) -> Result<Self> {
        let repository = SecretRepository::open(&config.paths.secrets_db)?;
        Ok(Self::new(KeyStore::new(&config.paths.key_file), repository))
    }

    pub fn key_store(&self) -> &KeyStore {
        &self.key_store
    }

    pub fn repository(&self) -> &SecretRepository {
        &self.repository
    }

    /// Store `password` for `service` if it passes validation and the
    /// service is not already taken
    pub fn add_secret(&self, service: &str, password: &str) -> Result<()> {
        if service.is_empty() {
            return Err(CoreError::EmptyService);
        }
        validator::validate(password)?;

        let key = self.key_store.get_or_create_key()?;
        let ciphertext = cipher::encrypt(&key, password)?;
        // Duplicate detection happens here, atomically, in the database
        self.repository.insert(service, &ciphertext)
    }

    pub fn get_secret(&self, service: &str) -> Result<PlainSecret> {
        let ciphertext = self.repository.lookup(service)?;
        let key = self.key_store.get_or_create_key()?;
        Ok(cipher::decrypt(&key, &ciphertext)?)
    }
}
