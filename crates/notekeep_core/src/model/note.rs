//! Note domain record.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reused.
//! - `title` and `body` are free-form; empty strings are valid.

use serde::{Deserialize, Serialize};

/// Storage-assigned note identifier (SQLite `INTEGER PRIMARY KEY`).
pub type NoteId = i64;

/// One stored note.
///
/// Serializes to exactly `{ "id", "title", "body" }`, which is also the
/// shape returned by the `notes` tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub body: String,
}

impl Note {
    pub fn new(id: NoteId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }
}
