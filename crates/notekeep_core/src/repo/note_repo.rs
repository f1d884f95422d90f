//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the three note persistence operations over the `notes` table.
//! - Keep SQL text inside the persistence boundary.
//!
//! # Invariants
//! - `list_notes` is ordered by `id DESC` (newest first).
//! - A missing note is `Ok(None)`, never an error.
//! - Storage failures are returned as-is; nothing is retried.

use crate::db::DbError;
use crate::model::note::{Note, NoteId};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTES_TABLE: &str = "notes";
const NOTES_COLUMNS: [&str; 3] = ["id", "title", "body"];
const NOTE_SELECT_SQL: &str = "SELECT id, title, body FROM notes";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository-level failure for note persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Connection is not bootstrapped with the notes schema.
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing; was the database migrated?")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::MissingRequiredTable(_) | Self::MissingRequiredColumn { .. } => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence operations for notes.
pub trait NoteRepository {
    /// Inserts one note and returns its storage-assigned id.
    fn create_note(&self, title: &str, body: &str) -> RepoResult<NoteId>;
    /// Returns every note, newest first.
    fn list_notes(&self) -> RepoResult<Vec<Note>>;
    /// Returns one note by id, or `None` when absent.
    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>>;
}

/// SQLite-backed note repository over an injected connection.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Wraps a connection after checking it carries the notes schema.
    ///
    /// Use [`crate::db::open_db`] or [`crate::db::open_db_in_memory`] to get a
    /// connection that passes this check.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_notes_schema(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create_note(&self, title: &str, body: &str) -> RepoResult<NoteId> {
        self.conn.execute(
            "INSERT INTO notes (title, body) VALUES (?1, ?2);",
            params![title, body],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY id DESC;"))?;
        let notes = stmt
            .query_map([], parse_note_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(notes)
    }

    fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let note = self
            .conn
            .query_row(
                &format!("{NOTE_SELECT_SQL} WHERE id = ?1;"),
                [id],
                parse_note_row,
            )
            .optional()?;
        Ok(note)
    }
}

fn parse_note_row(row: &Row<'_>) -> rusqlite::Result<Note> {
    Ok(Note {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
    })
}

fn ensure_notes_schema(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, NOTES_TABLE)? {
        return Err(RepoError::MissingRequiredTable(NOTES_TABLE));
    }

    for column in NOTES_COLUMNS {
        if !table_has_column(conn, NOTES_TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: NOTES_TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    for name in stmt.query_map([], |row| row.get::<_, String>("name"))? {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}
