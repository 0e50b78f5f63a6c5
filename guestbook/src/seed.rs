use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::db::repositories::{CommentRepository, UserRepository};
use crate::db::InsertError;

/// One comment to record during seeding.
#[derive(Debug, Clone)]
pub struct SeedComment {
    pub username: String,
    pub text: String,
}

impl SeedComment {
    pub fn new(username: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            text: text.into(),
        }
    }
}

/// Fixture data written into the store on every run.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub usernames: Vec<String>,
    pub comments: Vec<SeedComment>,
}

impl SeedData {
    /// The stock demo fixture: two users and three comments, attributed
    /// alternately.
    pub fn demo() -> Self {
        Self {
            usernames: vec!["jlubawy".to_string(), "anonymous".to_string()],
            comments: vec![
                SeedComment::new("jlubawy", "Comment 0"),
                SeedComment::new("anonymous", "Comment 1"),
                SeedComment::new("jlubawy", "Comment 2"),
            ],
        }
    }
}

/// Counts from a user-seeding pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UserSeedSummary {
    pub inserted: usize,
    pub skipped: usize,
}

/// Insert every username, tolerating names already present.
///
/// Only the UNIQUE rejection on `users.name` is tolerated; any other
/// failure aborts the pass.
pub fn seed_users(repo: &UserRepository, usernames: &[String]) -> Result<UserSeedSummary> {
    let mut summary = UserSeedSummary::default();

    for name in usernames {
        match repo.insert(name) {
            Ok(id) => {
                tracing::debug!("Inserted user '{}' with id {}", name, id);
                summary.inserted += 1;
            }
            Err(InsertError::UniqueViolation { .. }) => {
                tracing::debug!("User '{}' already exists, skipping", name);
                summary.skipped += 1;
            }
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to insert user '{}'", name));
            }
        }
    }

    Ok(summary)
}

/// Insert every comment, stamping each with the current time.
///
/// The pause after each write keeps consecutive timestamps distinguishable
/// at one-second resolution.
pub fn seed_comments(
    repo: &CommentRepository,
    comments: &[SeedComment],
    pause: Duration,
) -> Result<usize> {
    let mut inserted = 0;

    for entry in comments {
        let id = repo
            .insert(&entry.username, Utc::now(), &entry.text)
            .with_context(|| format!("Failed to insert comment for '{}'", entry.username))?;
        tracing::debug!("Inserted comment {} for '{}'", id, entry.username);
        inserted += 1;

        if !pause.is_zero() {
            thread::sleep(pause);
        }
    }

    Ok(inserted)
}
