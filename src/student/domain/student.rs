//! Student aggregate root and its creation-time profile.

use super::{
    ChangeSet, ReviewStatus, StudentDomainError, StudentId, TransitionRejection, evaluate,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Fields fixed when a student is enrolled.
///
/// All three values are trimmed and must be non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentProfile {
    name: String,
    task: String,
    deadline: String,
}

impl StudentProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`StudentDomainError::EmptyName`],
    /// [`StudentDomainError::EmptyTask`], or
    /// [`StudentDomainError::EmptyDeadline`] for the first blank field.
    pub fn new(
        name: impl Into<String>,
        task: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Result<Self, StudentDomainError> {
        Ok(Self {
            name: required(name.into(), StudentDomainError::EmptyName)?,
            task: required(task.into(), StudentDomainError::EmptyTask)?,
            deadline: required(deadline.into(), StudentDomainError::EmptyDeadline)?,
        })
    }

    /// Returns the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the assigned task.
    #[must_use]
    pub fn task(&self) -> &str {
        &self.task
    }

    /// Returns the free-form deadline.
    #[must_use]
    pub fn deadline(&self) -> &str {
        &self.deadline
    }
}

fn required(value: String, empty_error: StudentDomainError) -> Result<String, StudentDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(empty_error);
    }
    Ok(trimmed.to_owned())
}

/// Student aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    profile: StudentProfile,
    github: String,
    status: ReviewStatus,
    revision: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted student aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedStudentData {
    /// Persisted student identifier.
    pub id: StudentId,
    /// Persisted creation-time profile.
    pub profile: StudentProfile,
    /// Persisted GitHub link, empty when not yet submitted.
    pub github: String,
    /// Persisted review status.
    pub status: ReviewStatus,
    /// Persisted revision counter.
    pub revision: u64,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Enrolls a new student in the `pending` status.
    ///
    /// A blank `github` is stored as the empty string.
    #[must_use]
    pub fn enroll(profile: StudentProfile, github: Option<String>, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        let submitted = github
            .map(|link| link.trim().to_owned())
            .unwrap_or_default();

        Self {
            id: StudentId::new(),
            profile,
            github: submitted,
            status: ReviewStatus::Pending,
            revision: 0,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a student from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedStudentData) -> Self {
        Self {
            id: data.id,
            profile: data.profile,
            github: data.github,
            status: data.status,
            revision: data.revision,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the student identifier.
    #[must_use]
    pub const fn id(&self) -> StudentId {
        self.id
    }

    /// Returns the creation-time profile.
    #[must_use]
    pub const fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    /// Returns the student name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name()
    }

    /// Returns the assigned task.
    #[must_use]
    pub fn task(&self) -> &str {
        self.profile.task()
    }

    /// Returns the free-form deadline.
    #[must_use]
    pub fn deadline(&self) -> &str {
        self.profile.deadline()
    }

    /// Returns the submitted GitHub link, or an empty string.
    #[must_use]
    pub fn github(&self) -> &str {
        &self.github
    }

    /// Returns the review status.
    #[must_use]
    pub const fn status(&self) -> ReviewStatus {
        self.status
    }

    /// Returns the revision counter, incremented by every accepted change.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Applies a change-set if the transition rules accept it.
    ///
    /// The record is left untouched when the change is rejected.
    ///
    /// # Errors
    ///
    /// Returns the [`TransitionRejection`] reported by [`evaluate`].
    pub fn apply_change(
        &mut self,
        change: &ChangeSet,
        clock: &impl Clock,
    ) -> Result<(), TransitionRejection> {
        let accepted = evaluate(self.status, &self.github, change)?;
        let (github, status) = accepted.into_parts();
        if let Some(link) = github {
            self.github = link;
        }
        if let Some(next_status) = status {
            self.status = next_status;
        }
        self.revision = self.revision.saturating_add(1);
        self.updated_at = clock.utc();
        Ok(())
    }
}
