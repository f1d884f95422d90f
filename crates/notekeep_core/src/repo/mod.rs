//! Repository layer for note persistence.
//!
//! # Responsibility
//! - Define the storage contract the service layer depends on.
//! - Isolate SQLite query details from dispatch and service code.

pub mod note_repo;
