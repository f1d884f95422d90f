//! Dispatch entry point of the `notes` tool.
//!
//! # Invariants
//! - The action is resolved before any storage access, so a usage error
//!   never mutates the store.
//! - A missing note is a normal `NotFound` response, not an error.
//! - Storage failures surface as [`ToolError::Repo`] with the original
//!   error as `source()`.

use crate::repo::note_repo::{NoteRepository, RepoError};
use crate::service::note_service::NoteService;
use crate::tool::request::{
    CreateNoteRequest, GetNoteRequest, ListNotesRequest, NotesRequest, NotesResponse,
    NotesToolArgs,
};
use log::{debug, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure of a `notes` tool call.
#[derive(Debug)]
pub enum ToolError {
    /// Action name is not one of `create|list|get`.
    UnknownAction(String),
    /// Arguments do not match the tool's input schema.
    InvalidArguments(serde_json::Error),
    /// Response could not be encoded as JSON.
    EncodeResponse(serde_json::Error),
    /// Storage failure, propagated unmodified.
    Repo(RepoError),
}

impl Display for ToolError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAction(action) => write!(
                f,
                "unknown action `{action}`; expected one of create|list|get"
            ),
            Self::InvalidArguments(err) => write!(f, "invalid notes tool arguments: {err}"),
            Self::EncodeResponse(err) => write!(f, "failed to encode notes tool response: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownAction(_) => None,
            Self::InvalidArguments(err) | Self::EncodeResponse(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ToolError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl ToolError {
    /// Whether the caller, not the store, is at fault.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::UnknownAction(_) | Self::InvalidArguments(_))
    }
}

/// Routes one typed request to the matching service operation.
pub fn dispatch<R: NoteRepository>(
    service: &NoteService<R>,
    request: NotesRequest,
) -> Result<NotesResponse, ToolError> {
    let action = request.action();
    let response = match request {
        NotesRequest::Create(CreateNoteRequest { title, body }) => NotesResponse::Created {
            id: service.create_note(&title, &body)?,
        },
        NotesRequest::List(ListNotesRequest) => NotesResponse::Listed {
            notes: service.list_notes()?,
        },
        NotesRequest::Get(GetNoteRequest { id }) => service
            .get_note(id)?
            .map_or_else(NotesResponse::not_found, NotesResponse::Found),
    };

    debug!("event=tool_dispatch module=tool status=ok action={action}");
    Ok(response)
}

/// Executes a raw `notes` tool call: JSON arguments in, JSON result out.
///
/// # Errors
/// - [`ToolError::InvalidArguments`] when `args` does not deserialize.
/// - [`ToolError::UnknownAction`] for actions other than `create|list|get`.
/// - [`ToolError::Repo`] for storage failures.
pub fn call_notes_tool<R: NoteRepository>(
    service: &NoteService<R>,
    args: Value,
) -> Result<Value, ToolError> {
    let args: NotesToolArgs = serde_json::from_value(args).map_err(ToolError::InvalidArguments)?;
    let request = NotesRequest::try_from(args).inspect_err(|err| {
        warn!("event=tool_dispatch module=tool status=rejected error={err}");
    })?;
    let response = dispatch(service, request)?;
    serde_json::to_value(&response).map_err(ToolError::EncodeResponse)
}
