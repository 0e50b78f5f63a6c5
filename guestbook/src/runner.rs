use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::db::repositories::{CommentRepository, UserRepository};
use crate::db::Database;
use crate::report;
use crate::seed::{self, SeedData};

/// Settings for one seed-and-report run.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// SQLite file to open, created on first use.
    pub database: PathBuf,
    /// Username whose comments the report lists.
    pub report_username: String,
    /// Pause after each comment write.
    pub pause: Duration,
}

/// Counts collected over one run.
#[derive(Debug, Default)]
pub struct RunStats {
    pub users_inserted: usize,
    pub users_skipped: usize,
    pub comments_inserted: usize,
    pub rows_reported: usize,
}

/// Execute one full run: open and verify the store, apply the schema, seed
/// users and comments, print the report, then close.
///
/// Every failure other than a duplicate seed user is fatal and propagates.
pub fn run(options: &RunOptions, data: &SeedData) -> Result<RunStats> {
    let db = Database::open(&options.database)?;
    db.ping()?;
    tracing::info!("Connected to database at {}", options.database.display());

    db.initialize()?;

    let mut stats = RunStats::default();

    {
        let users = UserRepository::new(db.conn());
        let summary = seed::seed_users(&users, &data.usernames)?;
        stats.users_inserted = summary.inserted;
        stats.users_skipped = summary.skipped;

        let comments = CommentRepository::new(db.conn());
        stats.comments_inserted = seed::seed_comments(&comments, &data.comments, options.pause)?;

        let found = comments.find_by_username(&options.report_username)?;
        stats.rows_reported = found.len();
        report::print_report(&found);
    }

    db.close()?;

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(database: PathBuf) -> RunOptions {
        RunOptions {
            database,
            report_username: "jlubawy".to_string(),
            pause: Duration::ZERO,
        }
    }

    #[test]
    fn test_run_with_demo_data() {
        let stats = run(&options(PathBuf::from(":memory:")), &SeedData::demo())
            .expect("Run should succeed");

        assert_eq!(stats.users_inserted, 2);
        assert_eq!(stats.users_skipped, 0);
        assert_eq!(stats.comments_inserted, 3);
        assert_eq!(stats.rows_reported, 2);
    }

    #[test]
    fn test_run_fails_when_store_cannot_open() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        // A directory is not a usable database file
        let err = run(&options(dir.path().to_path_buf()), &SeedData::demo())
            .expect_err("Opening a directory should fail");
        assert!(err.to_string().contains("Failed to open database"));
    }
}
