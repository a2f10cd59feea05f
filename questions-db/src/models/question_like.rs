use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

use crate::error::{DecodeError, RecordError};
use crate::models::question_follow::limit_param;
use crate::models::{Question, User};
use crate::record::{Record, column, query_all, sealed};
use crate::store::Store;

/// A user liking a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionLike {
    id: Option<i64>,
    pub question_id: i64,
    pub user_id: i64,
}

/// Assignable [`QuestionLike`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LikeField {
    QuestionId(i64),
    UserId(i64),
}

impl QuestionLike {
    pub fn new(question_id: i64, user_id: i64) -> Self {
        Self {
            id: None,
            question_id,
            user_id,
        }
    }

    pub fn likers_for_question_id(
        store: &Store,
        question_id: i64,
    ) -> Result<Vec<User>, RecordError> {
        query_all(
            store,
            "SELECT U.id, U.fname, U.lname
             FROM question_likes QL
             JOIN users U ON U.id = QL.user_id
             WHERE QL.question_id = ?1
             ORDER BY QL.id",
            [question_id],
        )
    }

    pub fn num_likes_for_question_id(store: &Store, question_id: i64) -> Result<i64, RecordError> {
        let count = store.conn().query_row(
            "SELECT COUNT(*) FROM question_likes WHERE question_id = ?1",
            [question_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    pub fn liked_questions_for_user_id(
        store: &Store,
        user_id: i64,
    ) -> Result<Vec<Question>, RecordError> {
        query_all(
            store,
            "SELECT Q.id, Q.title, Q.body, Q.user_id
             FROM questions Q
             JOIN question_likes QL ON Q.id = QL.question_id
             WHERE QL.user_id = ?1
             ORDER BY QL.id",
            [user_id],
        )
    }

    /// Top `n` questions by like count; questions nobody likes are left out.
    pub fn most_liked_questions(store: &Store, n: usize) -> Result<Vec<Question>, RecordError> {
        query_all(
            store,
            "SELECT Q.id, Q.title, Q.body, Q.user_id
             FROM questions Q
             JOIN question_likes QL ON Q.id = QL.question_id
             GROUP BY Q.id
             ORDER BY COUNT(QL.id) DESC
             LIMIT ?1",
            [limit_param(n)],
        )
    }
}

impl sealed::Identity for QuestionLike {
    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for QuestionLike {
    const ENTITY: &'static str = "QuestionLike";
    const TABLE: &'static str = "question_likes";
    const COLUMNS: &'static [&'static str] = &["question_id", "user_id"];

    type Field = LikeField;

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

    fn assign(&mut self, field: LikeField) {
        match field {
            LikeField::QuestionId(v) => self.question_id = v,
            LikeField::UserId(v) => self.user_id = v,
        }
    }
}
