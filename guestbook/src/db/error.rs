use thiserror::Error;

/// Failure raised by row-insert helpers.
///
/// The seed loader is allowed to tolerate exactly one failure kind: a
/// duplicate value hitting a UNIQUE constraint. Promoting that case to its
/// own variant lets callers match on it without ever inspecting the driver
/// error type.
#[derive(Error, Debug)]
pub enum InsertError {
    #[error("Unique constraint rejected duplicate value for {table}.{column}")]
    UniqueViolation {
        table: &'static str,
        column: &'static str,
    },

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl InsertError {
    /// Classify a driver error against the UNIQUE constraint on
    /// `table.column`.
    pub fn classify(err: rusqlite::Error, table: &'static str, column: &'static str) -> Self {
        if is_unique_violation(&err, table, column) {
            InsertError::UniqueViolation { table, column }
        } else {
            InsertError::Sqlite(err)
        }
    }
}

/// True when `err` is SQLite's UNIQUE-constraint rejection for `table.column`.
///
/// SQLite reports these with the SQLITE_CONSTRAINT_UNIQUE extended code and
/// a message naming the violated column ("UNIQUE constraint failed:
/// users.name"), so both are checked.
pub fn is_unique_violation(err: &rusqlite::Error, table: &str, column: &str) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(code, Some(message)) => {
            code.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                && message.contains(&format!("{}.{}", table, column))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    /// Build the SqliteFailure shape the driver produces for a given
    /// extended result code and message.
    fn sqlite_failure(extended_code: i32, message: &str) -> rusqlite::Error {
        rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(extended_code),
            Some(message.to_string()),
        )
    }

    #[test]
    fn test_duplicate_insert_classifies_as_unique_violation() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        db.conn()
            .execute("INSERT INTO users (name) VALUES ('alice')", [])
            .expect("First insert should succeed");

        let err = db
            .conn()
            .execute("INSERT INTO users (name) VALUES ('alice')", [])
            .expect_err("Second insert should hit the unique constraint");

        assert!(is_unique_violation(&err, "users", "name"));
        assert!(!is_unique_violation(&err, "comments", "comment"));

        let classified = InsertError::classify(err, "users", "name");
        assert!(matches!(
            classified,
            InsertError::UniqueViolation {
                table: "users",
                column: "name"
            }
        ));
    }

    #[test]
    fn test_other_failures_are_not_unique_violations() {
        let db = Database::in_memory().expect("Failed to create database");
        db.initialize().expect("Failed to initialize schema");

        // NOT NULL violation is a different constraint kind
        let err = db
            .conn()
            .execute("INSERT INTO users (name) VALUES (NULL)", [])
            .expect_err("NULL name should be rejected");
        assert!(!is_unique_violation(&err, "users", "name"));

        let classified = InsertError::classify(err, "users", "name");
        assert!(matches!(classified, InsertError::Sqlite(_)));

        // Non-driver failures never classify
        assert!(!is_unique_violation(
            &rusqlite::Error::QueryReturnedNoRows,
            "users",
            "name"
        ));
    }

    // Property-based tests
    use proptest::prelude::*;

    // Feature: duplicate-user-tolerance, Property 1: Classification accuracy
    // For any table/column pair, a UNIQUE-violation failure naming that pair
    // classifies as a unique violation for it, and a failure with any other
    // extended code never does.
    proptest! {
        #[test]
        fn prop_unique_violation_classification(
            table in "[a-z][a-z_]{0,11}",
            column in "[a-z][a-z_]{0,11}",
        ) {
            let message = format!("UNIQUE constraint failed: {}.{}", table, column);

            let unique = sqlite_failure(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE, &message);
            prop_assert!(is_unique_violation(&unique, &table, &column));

            // Same message but a different constraint kind must not match
            let not_null = sqlite_failure(rusqlite::ffi::SQLITE_CONSTRAINT_NOTNULL, &message);
            prop_assert!(!is_unique_violation(&not_null, &table, &column));
        }

        #[test]
        fn prop_unrelated_columns_do_not_classify(
            table in "[a-z][a-z_]{0,11}",
            column in "[a-z][a-z_]{0,11}",
            other in "[a-z][a-z_]{0,11}",
        ) {
            let message = format!("UNIQUE constraint failed: {}.{}", table, column);
            let err = sqlite_failure(rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE, &message);

            // Only meaningful when the other pair is not a substring of the
            // message (e.g. "user.name" inside "users.names")
            if !message.contains(&format!("{}.{}", table, other)) {
                prop_assert!(!is_unique_violation(&err, &table, &other));
            }
        }
    }
}
