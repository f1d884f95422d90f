//! Typed requests and responses for the `notes` tool.
//!
//! The wire arguments are loosely typed (every field optional except
//! `action`); they are converted once into one request shape per action.

use crate::model::note::{Note, NoteId};
use crate::tool::dispatch::ToolError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Error payload returned by `get` when the id does not exist.
pub const NOT_FOUND_MESSAGE: &str = "not found";

/// Closed set of actions understood by the `notes` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotesAction {
    Create,
    List,
    Get,
}

impl NotesAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::List => "list",
            Self::Get => "get",
        }
    }
}

impl Display for NotesAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotesAction {
    type Err = ToolError;

    /// Parses an action name case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "create" => Ok(Self::Create),
            "list" => Ok(Self::List),
            "get" => Ok(Self::Get),
            _ => Err(ToolError::UnknownAction(value.to_string())),
        }
    }
}

/// Raw arguments of a `notes` tool call, as sent by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NotesToolArgs {
    /// One of `create`, `list` or `get` (case-insensitive).
    pub action: String,
    /// Note title. Used only by `create`.
    #[serde(default)]
    pub title: String,
    /// Note body. Used only by `create`.
    #[serde(default)]
    pub body: String,
    /// Note id. Used only by `get`.
    #[serde(default)]
    pub id: NoteId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNoteRequest {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListNotesRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetNoteRequest {
    pub id: NoteId,
}

/// One strongly-typed request per supported action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesRequest {
    Create(CreateNoteRequest),
    List(ListNotesRequest),
    Get(GetNoteRequest),
}

impl NotesRequest {
    pub fn create(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Create(CreateNoteRequest {
            title: title.into(),
            body: body.into(),
        })
    }

    pub fn list() -> Self {
        Self::List(ListNotesRequest)
    }

    pub fn get(id: NoteId) -> Self {
        Self::Get(GetNoteRequest { id })
    }

    pub fn action(&self) -> NotesAction {
        match self {
            Self::Create(_) => NotesAction::Create,
            Self::List(_) => NotesAction::List,
            Self::Get(_) => NotesAction::Get,
        }
    }
}

impl TryFrom<NotesToolArgs> for NotesRequest {
    type Error = ToolError;

    /// Keeps only the fields meaningful for the requested action.
    fn try_from(args: NotesToolArgs) -> Result<Self, Self::Error> {
        let request = match args.action.parse::<NotesAction>()? {
            NotesAction::Create => Self::create(args.title, args.body),
            NotesAction::List => Self::list(),
            NotesAction::Get => Self::get(args.id),
        };
        Ok(request)
    }
}

/// Result of one `notes` tool call.
///
/// Serialized without a tag, so each variant maps to the documented JSON
/// shape of its action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NotesResponse {
    /// `{ "id": 1 }`
    Created { id: NoteId },
    /// `{ "notes": [ ... ] }`
    Listed { notes: Vec<Note> },
    /// `{ "id", "title", "body" }`
    Found(Note),
    /// `{ "error": "not found" }`
    NotFound { error: &'static str },
}

impl NotesResponse {
    pub fn not_found() -> Self {
        Self::NotFound {
            error: NOT_FOUND_MESSAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NotesAction, NotesRequest, NotesResponse, NotesToolArgs};
    use crate::model::note::Note;
    use crate::tool::dispatch::ToolError;
    use serde_json::json;

    #[test]
    fn action_parsing_ignores_case() {
        for raw in ["create", "CREATE", "Create", "cReAtE"] {
            assert_eq!(raw.parse::<NotesAction>().unwrap(), NotesAction::Create);
        }
        assert_eq!("LIST".parse::<NotesAction>().unwrap(), NotesAction::List);
        assert_eq!("Get".parse::<NotesAction>().unwrap(), NotesAction::Get);
    }

    #[test]
    fn unknown_action_keeps_original_spelling() {
        let err = "Delete".parse::<NotesAction>().unwrap_err();
        match err {
            ToolError::UnknownAction(action) => assert_eq!(action, "Delete"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn args_default_optional_fields() {
        let args: NotesToolArgs = serde_json::from_value(json!({ "action": "list" })).unwrap();
        assert_eq!(args.title, "");
        assert_eq!(args.body, "");
        assert_eq!(args.id, 0);
    }

    #[test]
    fn args_convert_to_per_action_requests() {
        let create = NotesToolArgs {
            action: "create".to_string(),
            title: "t".to_string(),
            body: "b".to_string(),
            id: 42,
        };
        assert_eq!(
            NotesRequest::try_from(create).unwrap(),
            NotesRequest::create("t", "b")
        );

        let get = NotesToolArgs {
            action: "get".to_string(),
            title: "ignored".to_string(),
            id: 9,
            ..NotesToolArgs::default()
        };
        assert_eq!(NotesRequest::try_from(get).unwrap(), NotesRequest::get(9));
    }

    #[test]
    fn responses_serialize_to_action_shapes() {
        assert_eq!(
            serde_json::to_value(NotesResponse::Created { id: 3 }).unwrap(),
            json!({ "id": 3 })
        );
        assert_eq!(
            serde_json::to_value(NotesResponse::Listed {
                notes: vec![Note::new(2, "a", "b")]
            })
            .unwrap(),
            json!({ "notes": [{ "id": 2, "title": "a", "body": "b" }] })
        );
        assert_eq!(
            serde_json::to_value(NotesResponse::not_found()).unwrap(),
            json!({ "error": "not found" })
        );
    }
}
