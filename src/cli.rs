//! Command-line surface and dispatch.
//!
//! Positional arguments are collected raw by clap and validated here, so
//! a missing argument reports `Missing required argument: <name>` with
//! exit status 1 instead of clap's own usage error.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::STORE_ENV;
use crate::error::{TrackerError, TrackerResult};
use crate::job::{JobId, Status};
use crate::render;
use crate::store::Store;
use crate::tracker::Tracker;

#[derive(Debug, Parser)]
#[command(name = "job-tracker")]
#[command(about = "Record, list, update and remove job applications")]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Path to the JSON store file
    #[arg(long, value_name = "PATH", env = STORE_ENV, global = true)]
    pub file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<RawCommand>,
}

/// Command name plus its untouched positional tokens.
#[derive(Debug, Subcommand)]
pub enum RawCommand {
    /// Record a new application
    Add {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show all applications
    List {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },
    /// Change an application's status
    Update {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Delete an application
    Remove {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Show usage
    Help {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
        args: Vec<String>,
    },
    #[command(external_subcommand)]
    Unknown(Vec<String>),
}

/// A validated command, ready to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        company: String,
        role: String,
        status: Status,
        notes: Option<String>,
    },
    List,
    Update {
        id: JobId,
        status: Status,
    },
    Remove {
        id: JobId,
    },
    Help,
}

/// Fail with `MissingArgument` when `value` is absent or only whitespace.
pub fn require_arg<'a>(value: Option<&'a String>, name: &'static str) -> TrackerResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.as_str()),
        _ => Err(TrackerError::MissingArgument(name)),
    }
}

impl Command {
    /// Validate the raw tokens of a parsed command line.
    pub fn from_raw(raw: Option<RawCommand>) -> TrackerResult<Self> {
        let Some(raw) = raw else {
            return Ok(Command::Help);
        };

        match raw {
            RawCommand::Add { args } => Self::parse_add(&args),
            RawCommand::List { .. } => Ok(Command::List),
            RawCommand::Update { args } => {
                let id = require_arg(args.first(), "id")?;
                let status = require_arg(args.get(1), "status")?.parse::<Status>()?;
                Ok(Command::Update {
                    id: id.trim().into(),
                    status,
                })
            }
            RawCommand::Remove { args } => {
                let id = require_arg(args.first(), "id")?;
                Ok(Command::Remove {
                    id: id.trim().into(),
                })
            }
            RawCommand::Help { .. } => Ok(Command::Help),
            RawCommand::Unknown(tokens) => Err(TrackerError::UnknownCommand(
                tokens.into_iter().next().unwrap_or_default(),
            )),
        }
    }

    /// `add <company> <role> [status] [notes...]`: the third token is a status
    /// only on an exact match, otherwise it opens the notes.
    fn parse_add(args: &[String]) -> TrackerResult<Self> {
        let company = require_arg(args.first(), "company")?.trim().to_string();
        let role = require_arg(args.get(1), "role")?.trim().to_string();

        let mut rest = args.get(2..).unwrap_or_default();
        let mut status = Status::default();
        if let Some(parsed) = rest.first().and_then(|token| token.parse::<Status>().ok()) {
            status = parsed;
            rest = &rest[1..];
        }

        let notes = rest.join(" ");
        Ok(Command::Add {
            company,
            role,
            status,
            notes: (!notes.is_empty()).then_some(notes),
        })
    }

    /// Whether running this command needs the store at all.
    pub fn uses_store(&self) -> bool {
        !matches!(self, Command::Help)
    }

    /// Run against `tracker`, returning the text for stdout.
    pub fn run<S: Store>(self, tracker: &Tracker<S>) -> TrackerResult<String> {
        match self {
            Command::Add {
                company,
                role,
                status,
                notes,
            } => tracker
                .add(&company, &role, status, notes)
                .map(|job| render::added(&job)),
            Command::List => tracker.list().map(|jobs| render::list(&jobs)),
            Command::Update { id, status } => tracker
                .update(&id, status)
                .map(|job| render::updated(&job.id, job.status)),
            Command::Remove { id } => tracker.remove(&id).map(|()| render::removed(&id)),
            Command::Help => Ok(render::usage()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::tests::MemoryStore;

    fn parse(argv: &[&str]) -> TrackerResult<Command> {
        let cli = Cli::try_parse_from(std::iter::once("job-tracker").chain(argv.iter().copied()))
            .expect("clap accepts the command line");
        Command::from_raw(cli.command)
    }

    #[test]
    fn test_no_command_is_help() {
        assert_eq!(parse(&[]).unwrap(), Command::Help);
        assert_eq!(parse(&["help"]).unwrap(), Command::Help);
    }

    #[test]
    fn test_add_default_status() {
        assert_eq!(
            parse(&["add", "Acme", "Engineer"]).unwrap(),
            Command::Add {
                company: "Acme".into(),
                role: "Engineer".into(),
                status: Status::Saved,
                notes: None,
            }
        );
    }

    #[test]
    fn test_add_status_then_notes() {
        assert_eq!(
            parse(&["add", "Acme", "Engineer", "applied", "referral", "note"]).unwrap(),
            Command::Add {
                company: "Acme".into(),
                role: "Engineer".into(),
                status: Status::Applied,
                notes: Some("referral note".into()),
            }
        );
    }

    #[test]
    fn test_add_non_status_third_token_is_notes() {
        assert_eq!(
            parse(&["add", "Acme", "Engineer", "referral note"]).unwrap(),
            Command::Add {
                company: "Acme".into(),
                role: "Engineer".into(),
                status: Status::Saved,
                notes: Some("referral note".into()),
            }
        );
        let Command::Add { status, notes, .. } =
            parse(&["add", "Acme", "Engineer", "Applied", "-", "via", "board"]).unwrap()
        else {
            panic!("expected add");
        };
        assert_eq!(status, Status::Saved);
        assert_eq!(notes.as_deref(), Some("Applied - via board"));
    }

    #[test]
    fn test_missing_arguments() {
        let missing = |argv: &[&str]| match parse(argv) {
            Err(TrackerError::MissingArgument(name)) => name,
            other => panic!("expected MissingArgument, got {other:?}"),
        };
        assert_eq!(missing(&["add"]), "company");
        assert_eq!(missing(&["add", "  ", "Engineer"]), "company");
        assert_eq!(missing(&["add", "Acme"]), "role");
        assert_eq!(missing(&["update"]), "id");
        assert_eq!(missing(&["update", "ab12"]), "status");
        assert_eq!(missing(&["remove", ""]), "id");
    }

    #[test]
    fn test_update_invalid_status() {
        let err = parse(&["update", "ab12", "hired"]).unwrap_err();
        assert!(matches!(&err, TrackerError::InvalidStatus(v) if v == "hired"));
        assert!(err.shows_usage());
    }

    #[test]
    fn test_unknown_command() {
        let err = parse(&["archive", "ab12"]).unwrap_err();
        assert!(matches!(&err, TrackerError::UnknownCommand(name) if name == "archive"));
    }

    #[test]
    fn test_run_round() {
        let tracker = Tracker::new(MemoryStore::default());
        let out = parse(&["add", "Acme", "Engineer", "offer"])
            .unwrap()
            .run(&tracker)
            .unwrap();
        assert!(out.starts_with("Added Acme / Engineer [offer]"));

        let id = tracker.list().unwrap().as_slice()[0].id.clone();
        let out = Command::Update {
            id: id.clone(),
            status: Status::Rejected,
        }
        .run(&tracker)
        .unwrap();
        assert_eq!(out, format!("Updated {id} → rejected"));

        let first = Command::List.run(&tracker).unwrap();
        let second = Command::List.run(&tracker).unwrap();
        assert_eq!(first, second);

        let out = Command::Remove { id: id.clone() }.run(&tracker).unwrap();
        assert_eq!(out, format!("Removed {id}"));
        assert!(Command::List.run(&tracker).unwrap().starts_with("No jobs yet"));
    }
}
