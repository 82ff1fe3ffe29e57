//! Job Tracker: a personal job-application tracker backed by one JSON file.
//!
//! Each invocation runs exactly one command and exits:
//!
//! ```text
//!   parse args ──→ load store ──→ operate ──→ save (if mutated) ──→ print
//! ```
//!
//! # Overview
//!
//! - [`JobApplication`] / [`JobId`] / [`Status`] describe one tracked application
//! - [`Collection`] holds the newest-first list and its in-memory operations
//! - [`Store`] is the persistence seam; [`JsonFileStore`] is the on-disk implementation
//! - [`Tracker`] pairs operations with persistence (add / list / update / remove)
//! - [`cli::Command`] validates the command line and renders results
//! - [`TrackerError`] covers every way a command can fail
//!
//! ```no_run
//! use job_tracker::{JsonFileStore, Status, Tracker};
//!
//! let tracker = Tracker::new(JsonFileStore::new("jobs.json"));
//! let job = tracker.add("Acme", "Engineer", Status::Applied, None)?;
//! tracker.update(&job.id, Status::Interview)?;
//! # Ok::<(), job_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod job;
pub mod render;
pub mod store;
pub mod tracker;

pub use collection::Collection;
pub use config::TrackerConfig;
pub use error::{TrackerError, TrackerResult};
pub use job::{JobApplication, JobId, Status};
pub use store::{JsonFileStore, Store};
pub use tracker::Tracker;
