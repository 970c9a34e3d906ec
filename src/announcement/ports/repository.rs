//! Repository port for the singleton announcement.

use crate::announcement::domain::TaskAnnouncement;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for announcement repository operations.
pub type AnnouncementRepositoryResult<T> = Result<T, AnnouncementRepositoryError>;

/// Announcement persistence contract.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// Loads the stored announcement.
    ///
    /// Returns `None` when nothing has been announced yet.
    async fn load(&self) -> AnnouncementRepositoryResult<Option<TaskAnnouncement>>;

    /// Inserts the announcement, or replaces the existing one.
    async fn upsert(&self, announcement: &TaskAnnouncement) -> AnnouncementRepositoryResult<()>;
}

/// Errors returned by announcement repository implementations.
#[derive(Debug, Clone, Error)]
pub enum AnnouncementRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AnnouncementRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
