//! Persistence for the job collection.
//!
//! The [`Store`] trait is the only way the tracker reaches persistent
//! state:
//!
//! ```text
//!   load() ──→ (operate in memory) ──→ save()
//!   (every command)                   (mutating commands only)
//! ```
//!
//! ## Contract
//!
//! | Method | Absent data | Invalid data |
//! |--------|-------------|--------------|
//! | `load()` | empty collection | `CorruptStore` |
//! | `save()` | creates it | overwritten in full |
//!
//! There is no locking between processes: the last writer wins.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::collection::Collection;
use crate::error::{TrackerError, TrackerResult};
use crate::job::JobApplication;

/// Load and save a whole collection.
pub trait Store {
    /// Read the persisted collection.
    ///
    /// Missing data MUST yield an empty collection. Data that exists but
    /// cannot be validated MUST fail with `CorruptStore`, never fall back
    /// to empty.
    fn load(&self) -> TrackerResult<Collection>;

    /// Replace the persisted collection with `jobs`.
    fn save(&self, jobs: &Collection) -> TrackerResult<()>;
}

/// A pretty-printed JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`. Nothing is read yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> TrackerError {
        TrackerError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "jobs.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> TrackerResult<Collection> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no store file, starting empty");
                return Ok(Collection::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let entries: Vec<JobApplication> = serde_json::from_str(&raw)
            .map_err(|e| TrackerError::corrupt(&self.path, e.to_string()))?;
        let jobs = Collection::from_entries(entries)
            .map_err(|reason| TrackerError::corrupt(&self.path, reason))?;

        debug!(path = %self.path.display(), count = jobs.len(), "loaded store");
        Ok(jobs)
    }

    fn save(&self, jobs: &Collection) -> TrackerResult<()> {
        let mut json = serde_json::to_string_pretty(jobs)
            .map_err(|e| self.io_error(std::io::Error::other(e)))?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), count = jobs.len(), "saved store");
        Ok(())
    }
}
