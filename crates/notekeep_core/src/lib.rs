//! Core of notekeep: a small SQLite-backed note store exposed as the `notes`
//! tool.
//!
//! Callers open a connection with [`db::open_db`], wrap it in a
//! [`SqliteNoteRepository`] and a [`NoteService`], then either call the
//! service directly or go through [`dispatch`] / [`call_notes_tool`].

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod tool;

pub use config::{ConfigError, CoreConfig};
pub use logging::{default_log_level, init_logging, logging_status, LogTarget, LoggingError};
pub use model::note::{Note, NoteId};
pub use repo::note_repo::{NoteRepository, RepoError, RepoResult, SqliteNoteRepository};
pub use service::note_service::NoteService;
pub use tool::dispatch::{call_notes_tool, dispatch, ToolError};
pub use tool::request::{
    CreateNoteRequest, GetNoteRequest, ListNotesRequest, NotesAction, NotesRequest,
    NotesResponse, NotesToolArgs, NOT_FOUND_MESSAGE,
};
pub use tool::{tool_definition, ToolDefinition, TOOL_DESCRIPTION, TOOL_NAME};
