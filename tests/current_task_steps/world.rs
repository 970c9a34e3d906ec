//! Shared world state for current-task BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use reviewdesk::announcement::{
    adapters::memory::InMemoryAnnouncementRepository,
    domain::{CurrentTask, TaskAnnouncement},
    services::{AnnouncementService, AnnouncementServiceError},
};
use rstest::fixture;

/// Service type used by the BDD world.
pub type TestAnnouncementService =
    AnnouncementService<InMemoryAnnouncementRepository, DefaultClock>;

/// Scenario world for current-task behaviour tests.
pub struct CurrentTaskWorld {
    pub service: TestAnnouncementService,
    pub last_read: Option<CurrentTask>,
    pub last_set_result: Option<Result<TaskAnnouncement, AnnouncementServiceError>>,
}

impl Default for CurrentTaskWorld {
    fn default() -> Self {
        Self {
            service: AnnouncementService::new(
                Arc::new(InMemoryAnnouncementRepository::new()),
                Arc::new(DefaultClock),
            ),
            last_read: None,
            last_set_result: None,
        }
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CurrentTaskWorld {
    CurrentTaskWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
