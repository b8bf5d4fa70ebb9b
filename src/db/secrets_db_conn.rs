// src/db/secrets_db_conn.rs
use std::{fs, path::Path};

use rusqlite::{Connection, Result};

use crate::consts::DB_BUSY_TIMEOUT;
use crate::error::CoreError;
use crate::CoreResult;

/// Open (creating if needed) the secrets database at `db_path`
pub fn open_secrets_db(db_path: &Path) -> CoreResult<Connection> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CoreError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let conn = Connection::open(db_path)?;
    conn.busy_timeout(DB_BUSY_TIMEOUT)?;
    ensure_schema(&conn)?;

    Ok(conn)
}

/// Idempotent: creates the `secrets` table when absent, no-op otherwise
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS secrets (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            service    TEXT NOT NULL UNIQUE CHECK (length(service) > 0),
            ciphertext TEXT NOT NULL
        );
        "#,
    )?;
    tracing::trace!("secrets schema ensured");
    Ok(())
}
