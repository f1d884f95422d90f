//! `notekeep` command-line entry point.
//!
//! # Responsibility
//! - Invoke the `notes` tool from a shell and print its JSON result.
//! - Resolve configuration from `NOTEKEEP_*` variables, overridden by flags.
//!
//! Logs go to stderr (or `--log-dir`) so stdout only carries tool output.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use notekeep_core::db::open_db;
use notekeep_core::{
    call_notes_tool, init_logging, tool_definition, CoreConfig, NoteId, NoteService,
    NotesAction, SqliteNoteRepository,
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(name = "notekeep", version, about = "Create, list and fetch notes")]
struct Cli {
    /// SQLite database file [env: NOTEKEEP_DB_PATH]
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// trace|debug|info|warn|error [env: NOTEKEEP_LOG_LEVEL]
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Absolute directory for log files [env: NOTEKEEP_LOG_DIR]
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Store a new note and print its id
    Create {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        body: String,
    },
    /// Print all notes, newest first
    List,
    /// Print one note by id
    Get { id: NoteId },
    /// Invoke the notes tool with raw JSON arguments
    Call {
        /// e.g. '{"action":"get","id":1}'
        args: String,
    },
    /// Print the notes tool definition and input schema
    Schema,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = CoreConfig::from_env()?;
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    if cli.log_dir.is_some() {
        config.log_dir = cli.log_dir;
    }
    let level = cli.log_level.as_deref().unwrap_or(config.log_level);
    init_logging(level, config.log_dir.as_deref()).map_err(|err| anyhow!("{err}"))?;

    let output = execute(cli.command, &config.db_path)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn execute(command: Command, db_path: &Path) -> Result<Value> {
    let Some(args) = tool_args(command)? else {
        return Ok(serde_json::to_value(tool_definition())?);
    };
    let conn = open_db(db_path)
        .with_context(|| format!("failed to open notes database `{}`", db_path.display()))?;
    let service = NoteService::new(SqliteNoteRepository::try_new(&conn)?);

    info!("event=cli_call module=cli status=start");
    Ok(call_notes_tool(&service, args)?)
}

/// Tool arguments for `command`; `None` for commands that skip the store.
fn tool_args(command: Command) -> Result<Option<Value>> {
    let args = match command {
        Command::Create { title, body } => {
            json!({ "action": NotesAction::Create.as_str(), "title": title, "body": body })
        }
        Command::List => json!({ "action": NotesAction::List.as_str() }),
        Command::Get { id } => json!({ "action": NotesAction::Get.as_str(), "id": id }),
        Command::Call { args } => {
            serde_json::from_str(&args).context("call arguments must be a JSON object")?
        }
        Command::Schema => return Ok(None),
    };
    Ok(Some(args))
}

#[cfg(test)]
mod tests {
    use super::{execute, tool_args, Cli, Command};
    use clap::{CommandFactory, Parser};
    use serde_json::json;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_db_flag_is_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["notekeep", "get", "7", "--db", "/tmp/n.db"]).unwrap();
        assert_eq!(cli.db.as_deref(), Some(std::path::Path::new("/tmp/n.db")));
        assert!(matches!(cli.command, Command::Get { id: 7 }));
    }

    #[test]
    fn subcommands_map_to_tool_arguments() {
        let create = Command::Create {
            title: "Todo".to_string(),
            body: "call bank".to_string(),
        };
        assert_eq!(
            tool_args(create).unwrap(),
            Some(json!({ "action": "create", "title": "Todo", "body": "call bank" }))
        );
        assert_eq!(
            tool_args(Command::List).unwrap(),
            Some(json!({ "action": "list" }))
        );
        assert_eq!(
            tool_args(Command::Get { id: 3 }).unwrap(),
            Some(json!({ "action": "get", "id": 3 }))
        );
        assert_eq!(tool_args(Command::Schema).unwrap(), None);
        assert!(tool_args(Command::Call {
            args: "not json".to_string()
        })
        .is_err());
    }

    #[test]
    fn execute_runs_against_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("cli.db");

        let created = execute(
            Command::Create {
                title: "Shopping".to_string(),
                body: "milk, eggs".to_string(),
            },
            &db,
        )
        .unwrap();
        assert_eq!(created, json!({ "id": 1 }));

        let fetched = execute(
            Command::Call {
                args: r#"{"action":"GET","id":1}"#.to_string(),
            },
            &db,
        )
        .unwrap();
        assert_eq!(
            fetched,
            json!({ "id": 1, "title": "Shopping", "body": "milk, eggs" })
        );

        let missing = execute(Command::Get { id: 99 }, &db).unwrap();
        assert_eq!(missing, json!({ "error": "not found" }));
    }

    #[test]
    fn execute_reports_unknown_action() {
        let dir = tempfile::tempdir().unwrap();
        let err = execute(
            Command::Call {
                args: r#"{"action":"delete"}"#.to_string(),
            },
            &dir.path().join("cli.db"),
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown action"));
    }

    #[test]
    fn schema_does_not_need_a_database() {
        let missing_db = std::path::Path::new("/nonexistent/x.db");
        let definition = execute(Command::Schema, missing_db).unwrap();
        assert_eq!(definition["name"], "notes");
    }
}
