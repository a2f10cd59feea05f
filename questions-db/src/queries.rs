//! Read-only aggregate queries across tables.

use serde::Serialize;

use crate::error::RecordError;
use crate::store::Store;

/// Row counts for each table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub users: i64,
    pub questions: i64,
    pub replies: i64,
    pub top_level_replies: i64,
    pub follows: i64,
    pub likes: i64,
}

/// Count the rows in every table.
pub fn store_stats(store: &Store) -> Result<StoreStats, RecordError> {
    let count = |sql: &str| -> Result<i64, RecordError> {
        Ok(store.conn().query_row(sql, [], |row| row.get(0))?)
    };

    Ok(StoreStats {
        users: count("SELECT COUNT(*) FROM users")?,
        questions: count("SELECT COUNT(*) FROM questions")?,
        replies: count("SELECT COUNT(*) FROM replies")?,
        top_level_replies: count("SELECT COUNT(*) FROM replies WHERE parent_id IS NULL")?,
        follows: count("SELECT COUNT(*) FROM question_follows")?,
        likes: count("SELECT COUNT(*) FROM question_likes")?,
    })
}
