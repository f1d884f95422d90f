//! Domain model for stored notes.
//!
//! # Invariants
//! - Every note is identified by a storage-assigned `NoteId`.
//! - Notes are immutable once stored; there is no update or delete path.

pub mod note;
