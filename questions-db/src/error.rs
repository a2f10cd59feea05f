use thiserror::Error;

/// Errors raised by entity persistence and association queries.
#[derive(Debug, Error)]
pub enum RecordError {
    /// SQLite error
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// `save` called on an entity that already has an identity
    #[error("{entity} #{id} is already in the database; use update instead")]
    AlreadyPersisted { entity: &'static str, id: i64 },

    /// `update` or an association called on an entity without an identity
    #[error("{entity} has not been saved yet")]
    NotPersisted { entity: &'static str },

    /// No row with the requested identity
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    /// The operation makes no sense for this entity's current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// A result row could not be turned into an entity
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl RecordError {
    pub fn invalid_operation(msg: impl Into<String>) -> Self {
        Self::InvalidOperation(msg.into())
    }
}

/// A result row was missing a column or held a value of the wrong type.
#[derive(Debug, Error)]
#[error("Cannot decode {table}.{column}: {reason}")]
pub struct DecodeError {
    pub table: &'static str,
    pub column: String,
    pub reason: String,
}

impl DecodeError {
    /// Build a decode error from the rusqlite error raised while reading `column`.
    pub(crate) fn from_rusqlite(table: &'static str, column: &str, err: rusqlite::Error) -> Self {
        let reason = match err {
            rusqlite::Error::InvalidColumnName(_) => "column missing from result row".to_string(),
            rusqlite::Error::InvalidColumnType(_, _, ty) => format!("unexpected {ty} value"),
            rusqlite::Error::IntegralValueOutOfRange(_, v) => format!("integer {v} out of range"),
            other => other.to_string(),
        };
        Self {
            table,
            column: column.to_string(),
            reason,
        }
    }
}
