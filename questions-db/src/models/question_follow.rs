use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

use crate::error::{DecodeError, RecordError};
use crate::models::{Question, User};
use crate::record::{Record, column, query_all, sealed};
use crate::store::Store;

/// A user following a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionFollow {
    id: Option<i64>,
    pub question_id: i64,
    pub user_id: i64,
}

/// Assignable [`QuestionFollow`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowField {
    QuestionId(i64),
    UserId(i64),
}

impl QuestionFollow {
    pub fn new(question_id: i64, user_id: i64) -> Self {
        Self {
            id: None,
            question_id,
            user_id,
        }
    }

    pub fn followers_for_question_id(
        store: &Store,
        question_id: i64,
    ) -> Result<Vec<User>, RecordError> {
        query_all(
            store,
            "SELECT U.id, U.fname, U.lname
             FROM question_follows QF
             JOIN users U ON U.id = QF.user_id
             WHERE QF.question_id = ?1
             ORDER BY QF.id",
            [question_id],
        )
    }

    pub fn num_follows_for_question_id(
        store: &Store,
        question_id: i64,
    ) -> Result<i64, RecordError> {
        let count = store.conn().query_row(
            "SELECT COUNT(*) FROM question_follows WHERE question_id = ?1",
            [question_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn followed_questions_for_user_id(
        store: &Store,
        user_id: i64,
    ) -> Result<Vec<Question>, RecordError> {
        query_all(
            store,
            "SELECT Q.id, Q.title, Q.body, Q.user_id
             FROM questions Q
             JOIN question_follows QF ON Q.id = QF.question_id
             WHERE QF.user_id = ?1
             ORDER BY QF.id",
            [user_id],
        )
    }

    /// Top `n` questions by follow count; questions nobody follows are left out.
    pub fn most_followed_questions(store: &Store, n: usize) -> Result<Vec<Question>, RecordError> {
        query_all(
            store,
            "SELECT Q.id, Q.title, Q.body, Q.user_id
             FROM questions Q
             JOIN question_follows QF ON Q.id = QF.question_id
             GROUP BY Q.id
             ORDER BY COUNT(QF.id) DESC
             LIMIT ?1",
            [limit_param(n)],
        )
    }
}

/// SQLite wants a signed limit; anything past `i64::MAX` means "no limit" anyway.
pub(crate) fn limit_param(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

impl sealed::Identity for QuestionFollow {
    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for QuestionFollow {
    const ENTITY: &'static str = "QuestionFollow";
    const TABLE: &'static str = "question_follows";
    const COLUMNS: &'static [&'static str] = &["question_id", "user_id"];

    type Field = FollowField;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: Some(column(row, Self::TABLE, "id")?),
            question_id: column(row, Self::TABLE, "question_id")?,
            user_id: column(row, Self::TABLE, "user_id")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![Value::Integer(self.question_id), Value::Integer(self.user_id)]
    }

    fn assign(&mut self, field: FollowField) {
        match field {
            FollowField::QuestionId(v) => self.question_id = v,
            FollowField::UserId(v) => self.user_id = v,
        }
    }
}
