use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guestbook::runner::{self, RunOptions};
use guestbook::seed::SeedData;

/// Guestbook Demo Utility
///
/// Seeds a SQLite guestbook with demo users and comments, then prints every
/// comment left by one user.
#[derive(Parser, Debug)]
#[command(name = "guestbook")]
#[command(about = "Seed a SQLite guestbook and report one user's comments", long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value = "guestbook.db")]
    database: PathBuf,

    /// Username whose comments the report lists
    #[arg(short, long, default_value = "jlubawy")]
    username: String,

    /// Milliseconds to pause after each comment insert
    #[arg(long, default_value_t = 1_000)]
    pause_ms: u64,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "guestbook=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let options = RunOptions {
        database: args.database,
        report_username: args.username,
        pause: Duration::from_millis(args.pause_ms),
    };

    let stats = runner::run(&options, &SeedData::demo())?;

    tracing::info!(
        "Run complete: {} users inserted, {} skipped, {} comments inserted, {} rows reported",
        stats.users_inserted,
        stats.users_skipped,
        stats.comments_inserted,
        stats.rows_reported
    );

    Ok(())
}
