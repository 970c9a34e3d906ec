//! In-memory repository holding at most one announcement.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::announcement::{
    domain::TaskAnnouncement,
    ports::{AnnouncementRepository, AnnouncementRepositoryError, AnnouncementRepositoryResult},
};

/// Thread-safe in-memory announcement repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAnnouncementRepository {
    slot: Arc<RwLock<Option<TaskAnnouncement>>>,
}

impl InMemoryAnnouncementRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: &impl ToString) -> AnnouncementRepositoryError {
    AnnouncementRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl AnnouncementRepository for InMemoryAnnouncementRepository {
    async fn load(&self) -> AnnouncementRepositoryResult<Option<TaskAnnouncement>> {
        let slot = self.slot.read().map_err(|err| poisoned(&err))?;
        Ok(slot.clone())
    }

    async fn upsert(&self, announcement: &TaskAnnouncement) -> AnnouncementRepositoryResult<()> {
        let mut slot = self.slot.write().map_err(|err| poisoned(&err))?;
        *slot = Some(announcement.clone());
        Ok(())
    }
}
