use anyhow::{Context, Result};
use rusqlite::{Connection, OptionalExtension};

use guestbook_types::User;

use crate::db::InsertError;

pub struct UserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> UserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Insert a user, returning the assigned row id.
    ///
    /// A duplicate name surfaces as `InsertError::UniqueViolation` so the
    /// caller can decide whether to tolerate it.
    pub fn insert(&self, name: &str) -> Result<i64, InsertError> {
        self.conn
            .execute("INSERT INTO users (name) VALUES (?1)", [name])
            .map_err(|e| InsertError::classify(e, "users", "name"))?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Get user by name
    pub fn get_by_name(&self, name: &str) -> Result<Option<User>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name FROM users WHERE name = ?")
            .context("Failed to prepare user query")?;

        let user = stmt
            .query_row([name], |row| {
                Ok(User {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()
            .context("Failed to query user by name")?;

        Ok(user)
    }
}
