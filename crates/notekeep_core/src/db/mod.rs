//! SQLite storage accessor for the notes table.
//!
//! # Responsibility
//! - Hand out configured connections to callers (file or in-memory).
//! - Bring the schema up to date before any note is read or written.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A database written by a newer binary is never opened for use.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure raised by the storage accessor or by a statement it executed.
#[derive(Debug)]
pub enum DbError {
    /// Underlying SQLite failure, passed through unmodified.
    Sqlite(rusqlite::Error),
    /// On-disk schema is newer than the migrations this binary knows.
    UnsupportedSchemaVersion { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "sqlite error: {err}"),
            Self::UnsupportedSchemaVersion { found, supported } => write!(
                f,
                "notes database schema v{found} is newer than supported v{supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
