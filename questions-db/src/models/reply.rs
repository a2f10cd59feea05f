use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

use crate::error::{DecodeError, RecordError};
use crate::models::{Question, User};
use crate::record::{Record, column, query_all, sealed};
use crate::store::Store;

/// A reply to a question, optionally nested under another reply.
///
/// Nothing stops `parent_id` from forming a cycle; walking
/// [`Reply::child_replies`] recursively over such data never terminates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    id: Option<i64>,
    pub body: String,
    pub question_id: i64,
    /// Author's user id.
    pub user_id: i64,
    /// `None` for a top-level reply.
    pub parent_id: Option<i64>,
}

/// Assignable [`Reply`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyField {
    Body(String),
    QuestionId(i64),
    UserId(i64),
    ParentId(Option<i64>),
}

impl Reply {
    /// A top-level reply to `question_id`.
    pub fn new(body: impl Into<String>, question_id: i64, user_id: i64) -> Self {
        Self {
            id: None,
            body: body.into(),
            question_id,
            user_id,
            parent_id: None,
        }
    }

    /// A reply nested under `parent`, on the same question.
    pub fn child_of(
        parent: &Reply,
        body: impl Into<String>,
        user_id: i64,
    ) -> Result<Self, RecordError> {
        Ok(Self {
            id: None,
            body: body.into(),
            question_id: parent.question_id,
            user_id,
            parent_id: Some(parent.persisted_id()?),
        })
    }

    pub fn is_top_level(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn find_by_user_id(store: &Store, user_id: i64) -> Result<Vec<Reply>, RecordError> {
        query_all(
            store,
            "SELECT * FROM replies WHERE user_id = ?1 ORDER BY id",
            [user_id],
        )
    }

    pub fn find_by_question_id(store: &Store, question_id: i64) -> Result<Vec<Reply>, RecordError> {
        query_all(
            store,
            "SELECT * FROM replies WHERE question_id = ?1 ORDER BY id",
            [question_id],
        )
    }

    pub fn author(&self, store: &Store) -> Result<User, RecordError> {
        User::find_by_id(store, self.user_id)
    }

    pub fn question(&self, store: &Store) -> Result<Question, RecordError> {
        Question::find_by_id(store, self.question_id)
    }

    /// The reply this one is nested under.
    ///
    /// Asking a top-level reply for its parent is a caller error.
    pub fn parent_reply(&self, store: &Store) -> Result<Reply, RecordError> {
        match self.parent_id {
            Some(parent_id) => Reply::find_by_id(store, parent_id),
            None => Err(RecordError::invalid_operation(format!(
                "reply {} is a top-level reply and has no parent",
                self.id.map_or_else(|| "(unsaved)".to_string(), |id| format!("#{id}")),
            ))),
        }
    }

    pub fn child_replies(&self, store: &Store) -> Result<Vec<Reply>, RecordError> {
        query_all(
            store,
            "SELECT * FROM replies WHERE parent_id = ?1 ORDER BY id",
            [self.persisted_id()?],
        )
    }
}

impl sealed::Identity for Reply {
    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Reply {
    const ENTITY: &'static str = "Reply";
    const TABLE: &'static str = "replies";
    const COLUMNS: &'static [&'static str] = &["body", "question_id", "user_id", "parent_id"];

    type Field = ReplyField;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: Some(column(row, Self::TABLE, "id")?),
            body: column(row, Self::TABLE, "body")?,
            question_id: column(row, Self::TABLE, "question_id")?,
            user_id: column(row, Self::TABLE, "user_id")?,
            parent_id: column(row, Self::TABLE, "parent_id")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.body.clone()),
            Value::Integer(self.question_id),
            Value::Integer(self.user_id),
            self.parent_id.map_or(Value::Null, Value::Integer),
        ]
    }

    fn assign(&mut self, field: ReplyField) {
        match field {
            ReplyField::Body(v) => self.body = v,
            ReplyField::QuestionId(v) => self.question_id = v,
            ReplyField::UserId(v) => self.user_id = v,
            ReplyField::ParentId(v) => self.parent_id = v,
        }
    }
}
