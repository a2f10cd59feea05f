use questions_db::schema::{EXPECTED_TABLES, create_schema};
use questions_db::{SchemaError, Store};
use rusqlite::Connection;

#[test]
fn all_tables_exist() {
    let store = Store::open_memory().unwrap();
    for (table, _) in EXPECTED_TABLES {
        let exists: bool = store
            .conn()
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn schema_is_idempotent() {
    let store = Store::open_memory().unwrap();
    // Creating again should not error
    create_schema(store.conn()).unwrap();
}

#[test]
fn open_fails_without_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.db");
    std::fs::write(&path, b"").unwrap();

    let err = Store::open(&path).unwrap_err();
    assert!(
        matches!(err, SchemaError::MissingTable(ref t) if t == "users"),
        "unexpected error: {err}"
    );
}

#[test]
fn open_does_not_create_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.db");

    let err = Store::open(&path).unwrap_err();
    assert!(matches!(err, SchemaError::Sqlite(_)), "unexpected error: {err}");
    assert!(!path.exists());
}

#[test]
fn create_then_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("questions.db");

    Store::create(&path).unwrap();
    Store::open(&path).unwrap();
    // A second create leaves the existing schema alone
    Store::create(&path).unwrap();
}

#[test]
fn missing_column_is_reported() {
    let conn = Connection::open_in_memory().unwrap();
    create_schema(&conn).unwrap();
    conn.execute_batch(
        "DROP TABLE question_likes;
         CREATE TABLE question_likes (id INTEGER PRIMARY KEY, question_id INTEGER);",
    )
    .unwrap();

    let err = Store::from_connection(conn).unwrap_err();
    match err {
        SchemaError::MissingColumn { table, column } => {
            assert_eq!(table, "question_likes");
            assert_eq!(column, "user_id");
        }
        other => panic!("expected MissingColumn, got {other}"),
    }
}
