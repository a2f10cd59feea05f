use rusqlite::Row;
use rusqlite::types::Value;
use serde::Serialize;

use crate::error::{DecodeError, RecordError};
use crate::models::{Question, QuestionFollow, QuestionLike, Reply};
use crate::record::{Record, column, query_one, sealed};
use crate::store::Store;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: Option<i64>,
    pub fname: String,
    pub lname: String,
}

/// Assignable [`User`] fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserField {
    Fname(String),
    Lname(String),
}

impl User {
    pub fn new(fname: impl Into<String>, lname: impl Into<String>) -> Self {
        Self {
            id: None,
            fname: fname.into(),
            lname: lname.into(),
        }
    }

    /// First user with exactly this first and last name.
    pub fn find_by_name(
        store: &Store,
        fname: &str,
        lname: &str,
    ) -> Result<Option<User>, RecordError> {
        query_one(
            store,
            "SELECT * FROM users WHERE fname = ?1 AND lname = ?2 ORDER BY id LIMIT 1",
            [fname, lname],
        )
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname)
    }

    pub fn authored_questions(&self, store: &Store) -> Result<Vec<Question>, RecordError> {
        Question::find_by_author_id(store, self.persisted_id()?)
    }

    pub fn authored_replies(&self, store: &Store) -> Result<Vec<Reply>, RecordError> {
        Reply::find_by_user_id(store, self.persisted_id()?)
    }

    pub fn followed_questions(&self, store: &Store) -> Result<Vec<Question>, RecordError> {
        QuestionFollow::followed_questions_for_user_id(store, self.persisted_id()?)
    }

    pub fn liked_questions(&self, store: &Store) -> Result<Vec<Question>, RecordError> {
        QuestionLike::liked_questions_for_user_id(store, self.persisted_id()?)
    }

    /// Average number of likes per authored question that has any likes.
    ///
    /// Questions without likes are left out of the denominator: two questions
    /// with 3 and 0 likes give 3.0, not 1.5. A user whose questions have no
    /// likes at all scores 0.0.
    pub fn average_karma(&self, store: &Store) -> Result<f64, RecordError> {
        let id = self.persisted_id()?;
        let karma: Option<f64> = store.conn().query_row(
            "SELECT
                 CAST(COUNT(QL.id) AS REAL) / COUNT(DISTINCT QL.question_id)
             FROM questions Q
             JOIN question_likes QL ON Q.id = QL.question_id
             WHERE Q.user_id = ?1",
            [id],
            |row| row.get(0),
        )?;
        Ok(karma.unwrap_or(0.0))
    }
}

impl sealed::Identity for User {
    fn assign_id(&mut self, id: i64) {
        self.id = Some(id);
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &["fname", "lname"];

    type Field = UserField;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            id: Some(column(row, Self::TABLE, "id")?),
            fname: column(row, Self::TABLE, "fname")?,
            lname: column(row, Self::TABLE, "lname")?,
        })
    }

    fn values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.fname.clone()),
            Value::Text(self.lname.clone()),
        ]
    }

    fn assign(&mut self, field: UserField) {
        match field {
            UserField::Fname(v) => self.fname = v,
            UserField::Lname(v) => self.lname = v,
        }
    }
}
