//! Service layer for reading and replacing the current-task announcement.

use crate::announcement::{
    domain::{AnnouncementDomainError, CurrentTask, TaskAnnouncement},
    ports::{AnnouncementRepository, AnnouncementRepositoryError},
};
use crate::error::ErrorKind;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for announcement operations.
#[derive(Debug, Error)]
pub enum AnnouncementServiceError {
    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] AnnouncementDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] AnnouncementRepositoryError),
}

impl AnnouncementServiceError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::Repository(_) => ErrorKind::BackendUnavailable,
        }
    }
}

/// Result type for announcement service operations.
pub type AnnouncementServiceResult<T> = Result<T, AnnouncementServiceError>;

/// Current-task announcement service.
#[derive(Clone)]
pub struct AnnouncementService<R, C>
where
    R: AnnouncementRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> AnnouncementService<R, C>
where
    R: AnnouncementRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new announcement service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Returns the current announcement, or [`CurrentTask::Unset`].
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementServiceError::Repository`] when the store cannot
    /// be read.
    pub async fn current(&self) -> AnnouncementServiceResult<CurrentTask> {
        let stored = self
            .repository
            .load()
            .await
            .inspect_err(|err| warn!(error = %err, "failed to load current task"))?;
        Ok(CurrentTask::from(stored))
    }

    /// Replaces the announcement, creating it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AnnouncementServiceError::Validation`] when the text is
    /// blank, or [`AnnouncementServiceError::Repository`] when persistence
    /// fails.
    pub async fn set(
        &self,
        current_task: impl Into<String> + Send,
    ) -> AnnouncementServiceResult<TaskAnnouncement> {
        let announcement = TaskAnnouncement::new(current_task, &*self.clock)?;
        self.repository
            .upsert(&announcement)
            .await
            .inspect_err(|err| warn!(error = %err, "failed to store current task"))?;
        info!(current_task = announcement.current_task(), "current task announced");
        Ok(announcement)
    }
}
