//! The persistence pattern shared by every entity type.
//!
//! An entity describes its table, its columns, how to decode a row and how
//! to bind its values; [`Record`] turns that into find, list, save, update
//! and bulk field assignment.

use rusqlite::types::{FromSql, Value};
use rusqlite::{Params, Row, params_from_iter};

use crate::error::{DecodeError, RecordError};
use crate::store::Store;

pub(crate) mod sealed {
    /// Only a successful insert or a decoded row may assign an identity.
    pub trait Identity {
        fn assign_id(&mut self, id: i64);
    }
}

pub trait Record: sealed::Identity + Sized {
    /// Human-readable entity name used in error messages.
    const ENTITY: &'static str;
    const TABLE: &'static str;
    /// Every column except `id`, in the order [`Record::values`] binds them.
    const COLUMNS: &'static [&'static str];

    /// A typed assignment of one non-identity field, used by [`Record::change_all`].
    type Field: Clone;

    fn id(&self) -> Option<i64>;

    /// Decode an entity from a result row by column name.
    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError>;

    /// Current values for [`Record::COLUMNS`].
    fn values(&self) -> Vec<Value>;

    fn assign(&mut self, field: Self::Field);

    /// The identity, or `NotPersisted` if the entity was never saved.
    fn persisted_id(&self) -> Result<i64, RecordError> {
        self.id()
            .ok_or(RecordError::NotPersisted { entity: Self::ENTITY })
    }

    fn find_by_id(store: &Store, id: i64) -> Result<Self, RecordError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", Self::TABLE);
        query_one(store, &sql, [id])?.ok_or(RecordError::NotFound {
            entity: Self::ENTITY,
            id,
        })
    }

    /// Every row of the table in storage order.
    fn all(store: &Store) -> Result<Vec<Self>, RecordError> {
        let sql = format!("SELECT * FROM {} ORDER BY id", Self::TABLE);
        query_all(store, &sql, [])
    }

    /// Insert a new row and take the identity the store assigned to it.
    ///
    /// An entity that already has an identity is rejected with
    /// `AlreadyPersisted`; use [`Record::update`] for those.
    fn save(&mut self, store: &Store) -> Result<i64, RecordError> {
        if let Some(id) = self.id() {
            return Err(RecordError::AlreadyPersisted {
                entity: Self::ENTITY,
                id,
            });
        }

        let placeholders = (1..=Self::COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
            Self::TABLE,
            Self::COLUMNS.join(", "),
            placeholders,
        );
        let id: i64 = store
            .conn()
            .query_row(&sql, params_from_iter(self.values()), |row| row.get(0))?;
        self.assign_id(id);
        log::debug!("inserted {} #{}", Self::ENTITY, id);
        Ok(id)
    }

    /// Overwrite the row matching this entity's identity with its current values.
    fn update(&self, store: &Store) -> Result<(), RecordError> {
        let id = self.persisted_id()?;

        let assignments = Self::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{column} = ?{}", i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            Self::TABLE,
            assignments,
            Self::COLUMNS.len() + 1,
        );

        let mut values = self.values();
        values.push(Value::Integer(id));
        let changed = store.conn().execute(&sql, params_from_iter(values))?;
        if changed == 0 {
            return Err(RecordError::NotFound {
                entity: Self::ENTITY,
                id,
            });
        }
        log::debug!("updated {} #{}", Self::ENTITY, id);
        Ok(())
    }

    /// Assign `field` on every row of the table, one update per row.
    ///
    /// Returns the number of rows updated.
    fn change_all(store: &Store, field: Self::Field) -> Result<usize, RecordError> {
        let mut records = Self::all(store)?;
        for record in &mut records {
            record.assign(field.clone());
            record.update(store)?;
        }
        log::debug!("changed {} {} rows", records.len(), Self::TABLE);
        Ok(records.len())
    }
}

/// Run `sql` and decode every result row as `T`.
pub(crate) fn query_all<T: Record, P: Params>(
    store: &Store,
    sql: &str,
    params: P,
) -> Result<Vec<T>, RecordError> {
    let mut stmt = store.conn().prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut records = Vec::new();
    while let Some(row) = rows.next()? {
        records.push(T::from_row(row)?);
    }
    Ok(records)
}

/// Run `sql` and decode the first result row, if any.
pub(crate) fn query_one<T: Record, P: Params>(
    store: &Store,
    sql: &str,
    params: P,
) -> Result<Option<T>, RecordError> {
    let mut stmt = store.conn().prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let record = match rows.next()? {
        Some(row) => Some(T::from_row(row)?),
        None => None,
    };
    Ok(record)
}

/// Read column `name` from `row`, reporting failures against `table`.
pub(crate) fn column<T: FromSql>(
    row: &Row<'_>,
    table: &'static str,
    name: &str,
) -> Result<T, DecodeError> {
    row.get(name)
        .map_err(|e| DecodeError::from_rusqlite(table, name, e))
}
