//! The singleton current-task announcement.

use super::AnnouncementDomainError;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Text reported when no task has been announced yet.
pub const NO_TASK_SET: &str = "No task set";

/// Stored announcement of the task every student is working on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskAnnouncement {
    current_task: String,
    updated_at: DateTime<Utc>,
}

impl TaskAnnouncement {
    /// Creates an announcement stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementDomainError::EmptyTask`] when the text is empty
    /// or whitespace-only.
    pub fn new(
        current_task: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, AnnouncementDomainError> {
        let raw = current_task.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnnouncementDomainError::EmptyTask);
        }
        Ok(Self {
            current_task: trimmed.to_owned(),
            updated_at: clock.utc(),
        })
    }

    /// Reconstructs an announcement from persisted storage.
    #[must_use]
    pub const fn from_persisted(current_task: String, updated_at: DateTime<Utc>) -> Self {
        Self {
            current_task,
            updated_at,
        }
    }

    /// Returns the announced task.
    #[must_use]
    pub fn current_task(&self) -> &str {
        &self.current_task
    }

    /// Returns when the announcement was last set.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

/// Result of reading the announcement store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentTask {
    /// An announcement has been stored.
    Set(TaskAnnouncement),
    /// Nothing has been announced yet.
    Unset,
}

impl CurrentTask {
    /// Returns the announced text, or [`NO_TASK_SET`].
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Set(announcement) => announcement.current_task(),
            Self::Unset => NO_TASK_SET,
        }
    }

    /// Returns the stored announcement, if any.
    #[must_use]
    pub const fn announcement(&self) -> Option<&TaskAnnouncement> {
        match self {
            Self::Set(announcement) => Some(announcement),
            Self::Unset => None,
        }
    }
}

impl From<Option<TaskAnnouncement>> for CurrentTask {
    fn from(stored: Option<TaskAnnouncement>) -> Self {
        stored.map_or(Self::Unset, Self::Set)
    }
}
