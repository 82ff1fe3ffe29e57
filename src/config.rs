//! Runtime configuration.
//!
//! Resolved once in `main`; nothing below the dispatcher looks at the
//! environment or the working directory.

use std::path::{Path, PathBuf};

/// Environment variable naming the store file.
pub const STORE_ENV: &str = "JOB_TRACKER_FILE";

/// Store file name used when nothing else is configured.
pub const DEFAULT_STORE_FILE: &str = "jobs.json";

/// Settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Location of the JSON store file.
    pub store_path: PathBuf,
}

impl TrackerConfig {
    /// Pick the store location: explicit path first, else `DEFAULT_STORE_FILE` under `cwd`.
    ///
    /// The binary feeds both the `--file` flag and `JOB_TRACKER_FILE`
    /// through `explicit`.
    pub fn resolve(explicit: Option<PathBuf>, cwd: &Path) -> Self {
        let store_path = match explicit {
            Some(path) if path.is_absolute() => path,
            Some(path) => cwd.join(path),
            None => cwd.join(DEFAULT_STORE_FILE),
        };
        Self { store_path }
    }
}
