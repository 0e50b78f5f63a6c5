/// SQL schema for the guestbook database
/// Creates both tables with their keys and the foreign-key relationship
pub const SCHEMA: &str = r#"
-- Users table (names are unique)
CREATE TABLE IF NOT EXISTS users (
    id   INTEGER PRIMARY KEY,
    name TEXT UNIQUE NOT NULL
);

-- Comments table (user_id stays NULL when the author name is unknown)
CREATE TABLE IF NOT EXISTS comments (
    id      INTEGER PRIMARY KEY,
    user_id INTEGER,
    date    TEXT NOT NULL,
    comment TEXT NOT NULL,
    FOREIGN KEY (user_id) REFERENCES users(id)
);

-- Create index on user_id for efficient report joins
CREATE INDEX IF NOT EXISTS idx_comments_user_id ON comments(user_id);
"#;
