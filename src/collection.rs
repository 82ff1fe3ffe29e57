//! In-memory collection of job applications.
//!
//! The collection is ordered newest-first. Operations here never touch
//! disk; the [`Tracker`](crate::tracker::Tracker) decides when to persist.

use rustc_hash::FxHashSet;
use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::job::{JobApplication, JobId, Status};

/// The ordered set of applications for one invocation.
///
/// Serializes as a bare array; loading goes through [`Collection::from_entries`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Collection {
    jobs: Vec<JobApplication>,
}

impl Collection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from entries, rejecting blank fields and duplicate ids.
    ///
    /// The error is a plain reason string; the store wraps it with the file path.
    pub fn from_entries(jobs: Vec<JobApplication>) -> Result<Self, String> {
        let mut seen = FxHashSet::default();
        for (index, job) in jobs.iter().enumerate() {
            job.check().map_err(|reason| format!("entry {index}: {reason}"))?;
            if !seen.insert(&job.id) {
                return Err(format!("entry {index}: duplicate id {}", job.id));
            }
        }
        Ok(Self { jobs })
    }

    /// Insert a new application at the front with a freshly minted id.
    pub fn add(
        &mut self,
        company: &str,
        role: &str,
        status: Status,
        notes: Option<String>,
    ) -> &JobApplication {
        let id = JobId::generate(|candidate| self.get(candidate).is_some());
        let job = JobApplication::new(id, company, role, status, notes);
        self.jobs.insert(0, job);
        &self.jobs[0]
    }

    /// Look up an application by id.
    pub fn get(&self, id: &JobId) -> Option<&JobApplication> {
        self.jobs.iter().find(|job| &job.id == id)
    }

    fn get_mut(&mut self, id: &JobId) -> Option<&mut JobApplication> {
        self.jobs.iter_mut().find(|job| &job.id == id)
    }

    /// Change the status of one application, leaving every other field alone.
    pub fn set_status(&mut self, id: &JobId, status: Status) -> TrackerResult<&JobApplication> {
        match self.get_mut(id) {
            Some(job) => {
                job.status = status;
                Ok(&*job)
            }
            None => Err(TrackerError::NotFound(id.clone())),
        }
    }

    /// Drop every application with this id, returning how many went.
    pub fn remove(&mut self, id: &JobId) -> TrackerResult<usize> {
        let before = self.jobs.len();
        self.jobs.retain(|job| &job.id != id);
        match before - self.jobs.len() {
            0 => Err(TrackerError::NotFound(id.clone())),
            removed => Ok(removed),
        }
    }

    /// Iterate in display order (newest first).
    pub fn iter(&self) -> impl Iterator<Item = &JobApplication> {
        self.jobs.iter()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn as_slice(&self) -> &[JobApplication] {
        &self.jobs
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a JobApplication;
    type IntoIter = std::slice::Iter<'a, JobApplication>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}
