use notekeep_core::db::migrations::{latest_version, schema_version};
use notekeep_core::db::{open_db, open_db_in_memory, DbError};
use notekeep_core::{NoteService, RepoError, SqliteNoteRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_notes_table() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert!(SqliteNoteRepository::try_new(&conn).is_ok());
}

#[test]
fn reopening_file_database_keeps_notes_and_schema() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.db");

    let first_id = {
        let conn = open_db(&path).unwrap();
        let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());
        service.create_note("persisted", "across reopen").unwrap()
    };

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn).unwrap());
    let note = service.get_note(first_id).unwrap().unwrap();
    assert_eq!(note.title, "persisted");
    assert_eq!(note.body, "across reopen");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteNoteRepository::try_new(&conn).err().unwrap();
    assert!(matches!(err, RepoError::MissingRequiredTable("notes")));
}

#[test]
fn repository_rejects_table_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch("CREATE TABLE notes (id INTEGER PRIMARY KEY, title TEXT);")
        .unwrap();

    let err = SqliteNoteRepository::try_new(&conn).err().unwrap();
    match err {
        RepoError::MissingRequiredColumn { table, column } => {
            assert_eq!(table, "notes");
            assert_eq!(column, "body");
        }
        other => panic!("unexpected error: {other}"),
    }
}
