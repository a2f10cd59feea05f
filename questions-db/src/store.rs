//! The store handle every entity operation runs against.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use crate::schema::{SchemaError, create_schema, verify_schema};

/// A single connection to a questions database.
///
/// There is no global handle: callers construct a `Store` and pass it to
/// each operation. Each statement runs in its own implicit transaction.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing database file whose schema has already been created.
    ///
    /// A missing file is an error rather than a new empty database; a file
    /// without the expected tables fails with [`SchemaError::MissingTable`].
    pub fn open(path: &Path) -> Result<Self, SchemaError> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        log::debug!("opened database {}", path.display());
        Self::from_connection(conn)
    }

    /// Open or create a database file and create any missing tables.
    pub fn create(path: &Path) -> Result<Self, SchemaError> {
        let conn = Connection::open(path)?;
        create_schema(&conn)?;
        log::debug!("created schema in {}", path.display());
        Self::from_connection(conn)
    }

    /// Open an in-memory database with the full schema. Useful for testing.
    pub fn open_memory() -> Result<Self, SchemaError> {
        let conn = Connection::open_in_memory()?;
        create_schema(&conn)?;
        Self::from_connection(conn)
    }

    /// Wrap an existing connection after checking its schema.
    ///
    /// Foreign key enforcement is switched off: the bundled SQLite build turns
    /// it on by default, but rows may reference identities that do not exist.
    pub fn from_connection(conn: Connection) -> Result<Self, SchemaError> {
        conn.pragma_update(None, "foreign_keys", false)?;
        verify_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.conn.path())
            .finish()
    }
}
