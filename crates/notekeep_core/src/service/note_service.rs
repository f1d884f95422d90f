//! Note use-case service.
//!
//! # Responsibility
//! - Expose create/list/get to the tool surface and other callers.
//! - Emit metadata-only diagnostic events for each operation.
//!
//! # Invariants
//! - Service APIs never bypass the repository contract.
//! - Note titles and bodies are never written to logs.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoResult};
use log::{debug, error, info};

/// Note service facade over a repository implementation.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service over the provided repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Stores a new note and returns its id.
    ///
    /// No validation is applied; empty title and body are stored as given.
    pub fn create_note(&self, title: &str, body: &str) -> RepoResult<NoteId> {
        match self.repo.create_note(title, body) {
            Ok(id) => {
                info!("event=note_create module=service status=ok note_id={id}");
                Ok(id)
            }
            Err(err) => {
                error!("event=note_create module=service status=error error={err}");
                Err(err)
            }
        }
    }

    /// Lists every note, newest first.
    pub fn list_notes(&self) -> RepoResult<Vec<Note>> {
        let notes = self.repo.list_notes().inspect_err(|err| {
            error!("event=note_list module=service status=error error={err}");
        })?;
        debug!(
            "event=note_list module=service status=ok count={}",
            notes.len()
        );
        Ok(notes)
    }

    /// Gets one note by id; `Ok(None)` when it does not exist.
    pub fn get_note(&self, id: NoteId) -> RepoResult<Option<Note>> {
        let note = self.repo.get_note(id).inspect_err(|err| {
            error!("event=note_get module=service status=error note_id={id} error={err}");
        })?;
        debug!(
            "event=note_get module=service status=ok note_id={id} found={}",
            note.is_some()
        );
        Ok(note)
    }
}
