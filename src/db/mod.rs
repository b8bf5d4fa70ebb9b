// src/db/mod.rs
pub mod repository;
pub mod secrets_db_conn;

pub use repository::SecretRepository;
pub use secrets_db_conn::{ensure_schema, open_secrets_db};
