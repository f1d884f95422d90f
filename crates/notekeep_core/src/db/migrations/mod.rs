//! Ordered schema migrations for the notes database.
//!
//! # Invariants
//! - `version` values are strictly increasing.
//! - All pending migrations run in one transaction, and the last applied
//!   version is mirrored to `PRAGMA user_version`.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_notes.sql"),
}];

/// Latest schema version this binary can produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Applies every migration newer than the database's `user_version`.
///
/// Returns [`DbError::UnsupportedSchemaVersion`] when the database is ahead
/// of this binary; nothing is modified in that case.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = schema_version(conn)?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::UnsupportedSchemaVersion { found, supported });
    }
    if found == supported {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS.iter().filter(|m| m.version > found) {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
        info!(
            "event=db_migrate module=db status=ok version={}",
            migration.version
        );
    }
    tx.commit()?;

    Ok(())
}

/// Reads the schema version recorded in `PRAGMA user_version`.
pub fn schema_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}
