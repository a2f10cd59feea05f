use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

use crate::error::{DecodeError, RecordError};
use crate::models::{QuestionFollow, QuestionLike, Reply, User};
use crate::record::{Record, column, query_all, sealed};
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    id: Option<i64>,
    pub title: String,
    pub body: String,
    /// Author's user id.
    pub user_id: i64,
}

/// Assignable [`Question`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionField {
    Title(String),
    Body(String),
    UserId(i64),
}

impl Question {
    pub fn new(title: impl Into<String>, body: impl Into<String>, user_id: i64) -> Self {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            user_id,
        }
    }

    pub fn find_by_author_id(store: &Store, author_id: i64) -> Result<Vec<Question>, RecordError> {
        query_all(
            store,
            "SELECT * FROM questions WHERE user_id = ?1 ORDER BY id",
            [author_id],
        )
    }

    /// The `n` questions with the most follows. Ties come back in no particular order.
    pub fn most_followed(store: &Store, n: usize) -> Result<Vec<Question>, RecordError> {
        QuestionFollow::most_followed_questions(store, n)
    }

    /// The `n` questions with the most likes. Ties come back in no particular order.
    pub fn most_liked(store: &Store, n: usize) -> Result<Vec<Question>, RecordError> {
        QuestionLike::most_liked_questions(store, n)
    }

    pub fn author(&self, store: &Store) -> Result<User, RecordError> {
        User::find_by_id(store, self.user_id)
    }

    pub fn replies(&self, store: &Store) -> Result<Vec<Reply>, RecordError> {
        Reply::find_by_question_id(store, self.persisted_id()?)
    }

    pub fn followers(&self, store: &Store) -> Result<Vec<User>, RecordError> {
        QuestionFollow::followers_for_question_id(store, self.persisted_id()?)
    }

    pub fn likers(&self, store: &Store) -> Result<Vec<User>, RecordError> {
        QuestionLike::likers_for_question_id(store, self.persisted_id()?)
    }

    pub fn num_likes(&self, store: &Store) -> Result<i64, RecordError> {
        QuestionLike::num_likes_for_question_id(store, self.persisted_id()?)
    }

    pub fn num_follows(&self, store: &Store) -> Result<i64, RecordError> {
        QuestionFollow::num_follows_for_question_id(store, self.persisted_id()?)
    }
}

impl sealed::Identity for Question {
    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for Question {
    const ENTITY: &'static str = "Question";
    const TABLE: &'static str = "questions";
    const COLUMNS: &'static [&'static str] = &["title", "body", "user_id"];

    type Field = QuestionField;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: Some(column(row, Self::TABLE, "id")?),
            title: column(row, Self::TABLE, "title")?,
            body: column(row, Self::TABLE, "body")?,
            user_id: column(row, Self::TABLE, "user_id")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.title.clone()),
            Value::Text(self.body.clone()),
            Value::Integer(self.user_id),
        ]
    }

    fn assign(&mut self, field: QuestionField) {
        match field {
            QuestionField::Title(v) => self.title = v,
            QuestionField::Body(v) => self.body = v,
            QuestionField::UserId(v) => self.user_id = v,
        }
    }
}
