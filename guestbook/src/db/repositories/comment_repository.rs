use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};

use guestbook_types::{Comment, CommentView};

pub struct CommentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> CommentRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Insert a comment attributed to `username`, returning the assigned
    /// row id.
    ///
    /// The author's id is resolved by a subquery inside the INSERT itself;
    /// an unknown username stores NULL rather than failing.
    pub fn insert(&self, username: &str, date: DateTime<Utc>, text: &str) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO comments (id, user_id, date, comment)
                 VALUES (NULL, (SELECT id FROM users WHERE name = ?1), ?2, ?3)",
                (username, date.to_rfc3339(), text),
            )
            .context("Failed to insert comment")?;

        Ok(self.conn.last_insert_rowid())
    }

    /// Get comment by ID
    pub fn get_by_id(&self, id: i64) -> Result<Option<Comment>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, user_id, date, comment FROM comments WHERE id = ?")
            .context("Failed to prepare comment query")?;

        let comment = stmt
            .query_row([id], |row| {
                let date_str: String = row.get(2)?;
                Ok(Comment {
                    id: row.get(0)?,
                    user_id: row.get(1)?,
                    date: parse_stored_date(&date_str, 2)?,
                    comment: row.get(3)?,
                })
            })
            .optional()
            .context("Failed to query comment by id")?;

        Ok(comment)
    }

    /// All comments written by `username`, oldest first.
    pub fn find_by_username(&self, username: &str) -> Result<Vec<CommentView>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT c.id, u.name, c.date, c.comment
                 FROM comments c
                 JOIN users u ON c.user_id = u.id
                 WHERE u.name = ?
                 ORDER BY c.id",
            )
            .context("Failed to prepare comment query")?;

        let comments = stmt
            .query_map([username], |row| {
                let date_str: String = row.get(2)?;
                Ok(CommentView {
                    id: row.get(0)?,
                    username: row.get(1)?,
                    date: parse_stored_date(&date_str, 2)?,
                    comment: row.get(3)?,
                })
            })
            .context("Failed to execute comment query")?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to collect comments")?;

        Ok(comments)
    }
}

/// Parse an RFC 3339 date column back into a timestamp.
fn parse_stored_date(date_str: &str, column: usize) -> Result<DateTime<Utc>, rusqlite::Error> {
    date_str.parse::<DateTime<Utc>>().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}
