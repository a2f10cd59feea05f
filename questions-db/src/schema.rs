//! SQLite schema creation and verification.
//!
//! The tables are normally created by an external tool before the store is
//! opened. [`create_schema`] exists for `questions init` and for tests; every
//! other entry point only checks that the expected layout is present.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Missing table '{0}' (run `questions init` to create the schema)")]
    MissingTable(String),
    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },
}

/// Every table the entity layer reads or writes, with the columns it expects.
pub const EXPECTED_TABLES: &[(&str, &[&str])] = &[
    ("users", &["id", "fname", "lname"]),
    ("questions", &["id", "title", "body", "user_id"]),
    ("replies", &["id", "body", "question_id", "user_id", "parent_id"]),
    ("question_follows", &["id", "question_id", "user_id"]),
    ("question_likes", &["id", "question_id", "user_id"]),
];

/// Create all tables and indexes if they don't exist.
///
/// This is idempotent: safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Check that every expected table and column is present.
pub fn verify_schema(conn: &Connection) -> Result<(), SchemaError> {
    for (table, columns) in EXPECTED_TABLES {
        let present = table_columns(conn, table)?;
        if present.is_empty() {
            return Err(SchemaError::MissingTable(table.to_string()));
        }
        if let Some(column) = columns.iter().find(|c| !present.iter().any(|p| p == *c)) {
            return Err(SchemaError::MissingColumn {
                table: table.to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Column names of `table`, or an empty list if the table does not exist.
fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>, SchemaError> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
    let rows = stmt.query_map([table], |row| row.get::<_, String>(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY,
    fname TEXT NOT NULL,
    lname TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    user_id INTEGER NOT NULL REFERENCES users(id)
);
CREATE INDEX IF NOT EXISTS idx_questions_user ON questions(user_id);

CREATE TABLE IF NOT EXISTS replies (
    id INTEGER PRIMARY KEY,
    body TEXT NOT NULL,
    question_id INTEGER NOT NULL REFERENCES questions(id),
    user_id INTEGER NOT NULL REFERENCES users(id),
    parent_id INTEGER REFERENCES replies(id)
);
CREATE INDEX IF NOT EXISTS idx_replies_question ON replies(question_id);
CREATE INDEX IF NOT EXISTS idx_replies_parent ON replies(parent_id);

CREATE TABLE IF NOT EXISTS question_follows (
    id INTEGER PRIMARY KEY,
    question_id INTEGER NOT NULL REFERENCES questions(id),
    user_id INTEGER NOT NULL REFERENCES users(id)
);
CREATE INDEX IF NOT EXISTS idx_follows_question ON question_follows(question_id);

CREATE TABLE IF NOT EXISTS question_likes (
    id INTEGER PRIMARY KEY,
    question_id INTEGER NOT NULL REFERENCES questions(id),
    user_id INTEGER NOT NULL REFERENCES users(id)
);
CREATE INDEX IF NOT EXISTS idx_likes_question ON question_likes(question_id);
"#;
