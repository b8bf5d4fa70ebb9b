// src/db/repository.rs
//! Secrets database operations
//!
//! Maps service name to ciphertext. Uniqueness of `service` is enforced
//! by the table's UNIQUE constraint, so concurrent inserts of the same
//! service are serialized by SQLite and exactly one wins. Service names
//! are compared exactly as given: case-sensitive, no trimming.

use std::path::Path;

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::core::Ciphertext;
use crate::db::secrets_db_conn::{ensure_schema, open_secrets_db};
use crate::error::CoreError;
use crate::CoreResult as Result;

/// The only component that reads or writes the secrets database
#[derive(Debug)]
pub struct SecretRepository {
    conn: Connection,
}

impl SecretRepository {
    /// Open the database file at `path`, creating the schema if needed
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = open_secrets_db(path.as_ref())?;
        Ok(Self { conn })
    }

    /// Private in-memory database, mainly for tests
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn ensure_schema(&self) -> Result<()> {
        ensure_schema(&self.conn)?;
        Ok(())
    }

    /// Insert a new record; an existing `service` is rejected, never overwritten
    pub fn insert(&self, service: &str, ciphertext: &Ciphertext) -> Result<()> {
        let inserted = self.conn.execute(
            "INSERT INTO secrets (service, ciphertext) VALUES (?1, ?2)",
            params![service, ciphertext.as_str()],
        );

        match inserted {
            Ok(_) => {
                tracing::debug!(service, "secret stored");
                Ok(())
            }
            Err(err) if is_unique_violation(&err) => {
                tracing::debug!(service, "duplicate service rejected");
                Err(CoreError::DuplicateService {
                    service: service.to_owned(),
                })
            }
            Err(err) => Err(CoreError::Sql(err)),
        }
    }

    pub fn lookup(&self, service: &str) -> Result<Ciphertext> {
        let token: Option<String> = self
            .conn
            .query_row(
                "SELECT ciphertext FROM secrets WHERE service = ?1",
                [service],
                |row| row.get(0),
            )
            .optional()?;

        token.map(Ciphertext::from).ok_or_else(|| CoreError::NotFound {
            service: service.to_owned(),
        })
    }

    /// Read-only existence check; not a substitute for the insert constraint
    pub fn contains(&self, service: &str) -> Result<bool> {
        let found: bool = self.conn.query_row(
            "SELECT EXISTS (SELECT 1 FROM secrets WHERE service = ?1)",
            [service],
            |row| row.get(0),
        )?;
        Ok(found)
    }
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}
