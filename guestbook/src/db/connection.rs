use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;

use super::schema::SCHEMA;

/// SQLite in-memory database identifier
const MEMORY_DB_PATH: &str = ":memory:";

/// Database wrapper owning the single connection used for a run.
///
/// The whole tool is sequential, so there is no pool: one connection is
/// opened at the start, borrowed by the repositories, and closed at the end.
/// If a run aborts early the connection is still released when the wrapper
/// drops.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `path`, creating the file if it does not exist.
    ///
    /// # Arguments
    /// * `path` - Database file path or ":memory:" for an in-memory database
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();

        let conn = if path_str.trim().eq_ignore_ascii_case(MEMORY_DB_PATH) {
            Connection::open_in_memory().context("Failed to open in-memory database")?
        } else {
            Connection::open(path.as_ref())
                .with_context(|| format!("Failed to open database at {}", path_str))?
        };

        Ok(Self { conn })
    }

    /// Open an in-memory database (useful for testing)
    pub fn in_memory() -> Result<Self> {
        Self::open(MEMORY_DB_PATH)
    }

    /// Verify the connection is live with an explicit round-trip query.
    pub fn ping(&self) -> Result<()> {
        self.conn
            .query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .context("Database liveness check failed")?;
        Ok(())
    }

    /// Initialize the database schema; safe to call on every start.
    pub fn initialize(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA)
            .context("Failed to initialize database schema")?;
        Ok(())
    }

    /// Borrow the underlying connection for repository use.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Close the connection, surfacing any failure to release it cleanly.
    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_conn, err)| err)
            .context("Failed to close database")?;
        Ok(())
    }
}
