//! Human-readable output for each command.

use std::fmt::Write;

use chrono::Local;

use crate::collection::Collection;
use crate::job::{JobApplication, JobId, Status};

const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn added(job: &JobApplication) -> String {
    format!(
        "Added {} / {} [{}] (id: {})",
        job.company, job.role, job.status, job.id
    )
}

pub fn updated(id: &JobId, status: Status) -> String {
    format!("Updated {id} → {status}")
}

pub fn removed(id: &JobId) -> String {
    format!("Removed {id}")
}

/// Listing in collection order, `createdAt` shown in local time.
pub fn list(jobs: &Collection) -> String {
    if jobs.is_empty() {
        return "No jobs yet. Add one with: job-tracker add <company> <role>".to_string();
    }

    let mut out = String::new();
    let noun = if jobs.len() == 1 { "job" } else { "jobs" };
    let _ = write!(out, "{} {noun}:", jobs.len());
    for job in jobs {
        let created = job.created_at.with_timezone(&Local).format(CREATED_FORMAT);
        let _ = write!(
            out,
            "\n\n- {} / {}\n  id: {}  status: {}  created: {created}",
            job.company, job.role, job.id, job.status
        );
        if let Some(notes) = &job.notes {
            let _ = write!(out, "\n  notes: {notes}");
        }
    }
    out
}

/// Static usage text.
pub fn usage() -> String {
    let statuses: Vec<_> = Status::ALL.iter().map(|s| s.as_str()).collect();
    format!(
        "job-tracker: keep track of your job applications

Usage:
  job-tracker [--file <PATH>] [-v] <command> [args...]

Commands:
  add <company> <role> [status] [notes...]   Record a new application
  list                                       Show all applications, newest first
  update <id> <status>                       Change an application's status
  remove <id>                                Delete an application
  help                                       Show this text

Statuses: {}

Options:
  --file <PATH>   Store file (env JOB_TRACKER_FILE, default ./jobs.json)
  -v, --verbose   Debug logging on stderr

Examples:
  job-tracker add \"Acme\" \"Engineer\"
  job-tracker add \"Acme\" \"Engineer\" applied \"referral from a friend\"
  job-tracker update 1a2b3c4d interview
  job-tracker remove 1a2b3c4d",
        statuses.join(", ")
    )
}
