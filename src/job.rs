//! Job application types.
//!
//! An application moves through the status set freely; there is no
//! enforced ordering between states:
//!
//! ```text
//!   saved ──→ applied ──→ interview ──→ offer
//!                 │            │
//!                 └────────────┴──→ rejected
//! ```
//!
//! **Invariants:**
//! - `id`, `company`, `role`, `created_at` and `notes` never change after creation.
//! - `status` changes only through `update`.
//! - Ids are unique within a collection.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TrackerError;

/// Number of hex digits kept from a random UUID when minting an id.
const ID_LEN: usize = 8;

/// Unique identifier for a job application.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub String);

impl JobId {
    /// Create a job ID from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh id that `taken` does not report as already in use.
    pub fn generate(taken: impl Fn(&JobId) -> bool) -> Self {
        loop {
            let candidate = Self(Uuid::new_v4().simple().to_string()[..ID_LEN].to_string());
            if !taken(&candidate) {
                return candidate;
            }
            tracing::warn!(id = %candidate, "generated id collided, retrying");
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for JobId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for JobId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Where an application currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Bookmarked, not yet applied.
    #[default]
    Saved,
    /// Application sent.
    Applied,
    /// Interviewing.
    Interview,
    /// Offer received.
    Offer,
    /// Turned down.
    Rejected,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Status; 5] = [
        Status::Saved,
        Status::Applied,
        Status::Interview,
        Status::Offer,
        Status::Rejected,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Saved => "saved",
            Status::Applied => "applied",
            Status::Interview => "interview",
            Status::Offer => "offer",
            Status::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive match against the lowercase status names.
impl FromStr for Status {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TrackerError::InvalidStatus(s.to_string()))
    }
}

/// One tracked job application, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobApplication {
    pub id: JobId,
    pub company: String,
    pub role: String,
    pub status: Status,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl JobApplication {
    /// Create an application stamped with the current instant.
    pub fn new(
        id: JobId,
        company: impl Into<String>,
        role: impl Into<String>,
        status: Status,
        notes: Option<String>,
    ) -> Self {
        Self {
            id,
            company: company.into(),
            role: role.into(),
            status,
            created_at: Utc::now(),
            notes,
        }
    }

    /// Override the creation instant.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Check the fields serde cannot: required strings must not be blank.
    pub(crate) fn check(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("blank id".into());
        }
        if self.company.trim().is_empty() {
            return Err(format!("blank company for id {}", self.id));
        }
        if self.role.trim().is_empty() {
            return Err(format!("blank role for id {}", self.id));
        }
        Ok(())
    }
}
