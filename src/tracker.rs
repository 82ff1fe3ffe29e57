//! The four operations, each one load → mutate → persist.
//!
//! A failed operation never reaches `save()`: mutation and persistence
//! happen together or not at all.

use tracing::debug;

use crate::collection::Collection;
use crate::error::TrackerResult;
use crate::job::{JobApplication, JobId, Status};
use crate::store::Store;

/// Runs tracker operations against a [`Store`].
#[derive(Debug, Clone)]
pub struct Tracker<S> {
    store: S,
}

impl<S: Store> Tracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Record a new application at the front of the collection.
    pub fn add(
        &self,
        company: &str,
        role: &str,
        status: Status,
        notes: Option<String>,
    ) -> TrackerResult<JobApplication> {
        let mut jobs = self.store.load()?;
        let job = jobs.add(company, role, status, notes).clone();
        self.store.save(&jobs)?;
        debug!(id = %job.id, %status, "added job");
        Ok(job)
    }

    /// Current collection, newest first. Never writes.
    pub fn list(&self) -> TrackerResult<Collection> {
        self.store.load()
    }

    /// Set the status of the application with `id`.
    pub fn update(&self, id: &JobId, status: Status) -> TrackerResult<JobApplication> {
        let mut jobs = self.store.load()?;
        let job = jobs.set_status(id, status)?.clone();
        self.store.save(&jobs)?;
        debug!(%id, %status, "updated job");
        Ok(job)
    }

    /// Delete the application with `id`.
    pub fn remove(&self, id: &JobId) -> TrackerResult<()> {
        let mut jobs = self.store.load()?;
        let removed = jobs.remove(id)?;
        if removed > 1 {
            tracing::warn!(%id, removed, "removed several entries sharing one id");
        }
        self.store.save(&jobs)?;
        debug!(%id, "removed job");
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::error::TrackerError;

    /// Keeps the collection in memory and counts saves.
    #[derive(Debug, Default)]
    pub(crate) struct MemoryStore {
        jobs: RefCell<Collection>,
        pub(crate) saves: Cell<usize>,
    }

    impl Store for MemoryStore {
        fn load(&self) -> TrackerResult<Collection> {
            Ok(self.jobs.borrow().clone())
        }

        fn save(&self, jobs: &Collection) -> TrackerResult<()> {
            *self.jobs.borrow_mut() = jobs.clone();
            self.saves.set(self.saves.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_add_persists() {
        let tracker = Tracker::new(MemoryStore::default());
        let job = tracker.add("Acme", "Engineer", Status::Saved, None).unwrap();

        let jobs = tracker.list().unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs.get(&job.id), Some(&job));
        assert_eq!(tracker.store().saves.get(), 1);
    }

    #[test]
    fn test_list_never_saves() {
        let tracker = Tracker::new(MemoryStore::default());
        tracker.add("Acme", "Engineer", Status::Saved, None).unwrap();
        let first = tracker.list().unwrap();
        let second = tracker.list().unwrap();
        assert_eq!(first, second);
        assert_eq!(tracker.store().saves.get(), 1);
    }

    #[test]
    fn test_update_not_found_skips_save() {
        let tracker = Tracker::new(MemoryStore::default());
        tracker.add("Acme", "Engineer", Status::Saved, None).unwrap();

        let err = tracker.update(&"missing".into(), Status::Offer).unwrap_err();
        assert!(matches!(err, TrackerError::NotFound(_)));
        assert_eq!(tracker.store().saves.get(), 1);
    }

    #[test]
    fn test_update_and_remove() {
        let tracker = Tracker::new(MemoryStore::default());
        let job = tracker.add("Acme", "Engineer", Status::Saved, None).unwrap();
        tracker.add("Globex", "Analyst", Status::Applied, None).unwrap();

        let updated = tracker.update(&job.id, Status::Interview).unwrap();
        assert_eq!(updated.status, Status::Interview);
        assert_eq!(updated.created_at, job.created_at);

        tracker.remove(&job.id).unwrap();
        let jobs = tracker.list().unwrap();
        assert_eq!(jobs.len(), 1);
        assert!(jobs.get(&job.id).is_none());

        assert!(matches!(
            tracker.remove(&job.id),
            Err(TrackerError::NotFound(_))
        ));
        assert_eq!(tracker.store().saves.get(), 4);
    }
}
