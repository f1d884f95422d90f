//! The `notes` tool: the single externally invoked entry point.
//!
//! # Responsibility
//! - Describe the tool (name, description, JSON input schema).
//! - Turn loosely-typed call arguments into typed requests and dispatch them.
//!
//! Transport framing is left to the host that invokes the tool.

pub mod dispatch;
pub mod request;

use request::NotesToolArgs;
use schemars::schema::RootSchema;
use serde::Serialize;

pub const TOOL_NAME: &str = "notes";
pub const TOOL_DESCRIPTION: &str = "Notes management tool. Actions: `create` stores a note \
from `title` and `body` and returns its id; `list` returns all notes, newest first; `get` \
returns the note with the given `id`, or an error payload when it does not exist.";

/// Self-description handed to tool hosts.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: RootSchema,
}

/// Builds the `notes` tool definition with its generated input schema.
pub fn tool_definition() -> ToolDefinition {
    ToolDefinition {
        name: TOOL_NAME,
        description: TOOL_DESCRIPTION,
        input_schema: schemars::schema_for!(NotesToolArgs),
    }
}

#[cfg(test)]
mod tests {
    use super::{tool_definition, TOOL_NAME};

    #[test]
    fn definition_schema_lists_all_parameters() {
        let definition = tool_definition();
        assert_eq!(definition.name, TOOL_NAME);

        let json = serde_json::to_value(&definition).unwrap();
        let properties = &json["input_schema"]["properties"];
        for field in ["action", "title", "body", "id"] {
            assert!(properties.get(field).is_some(), "missing property {field}");
        }
        assert_eq!(json["input_schema"]["required"], serde_json::json!(["action"]));
    }
}
